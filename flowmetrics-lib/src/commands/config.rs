use crate::Result;
use crate::records::ReviewFilter;
use crate::reports::ReportThresholds;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file picked up from the working directory
pub const CONFIG_FILE_NAME: &str = "flowmetrics.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Targets the report colors metrics against
    #[serde(default)]
    pub thresholds: ReportThresholds,

    /// Which reviews are left out of the metrics
    #[serde(default)]
    pub reviews: ReviewFilter,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// An explicit `config_path` must exist. Without one, `flowmetrics.toml` in `base_dir` is
    /// used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading flowmetrics configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    // No config file found, use defaults
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading flowmetrics configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if threshold values are out of range or inconsistent
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        (tmp, path)
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
    }

    #[test]
    fn test_default_config_matches_builtin_defaults() {
        let config = Config::default();
        assert_eq!(config.thresholds, ReportThresholds::default());
        assert_eq!(config.reviews, ReviewFilter::default());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str("[thresholds]\nresponse_target_hours = 8.0\n").unwrap();
        assert!((config.thresholds.response_target_hours - 8.0).abs() < f64::EPSILON);
        assert!((config.thresholds.response_warning_hours - 48.0).abs() < f64::EPSILON);
        assert_eq!(config.reviews, ReviewFilter::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("[thresholds]\nresponse_hours = 8.0\n").is_err());
        assert!(toml::from_str::<Config>("[report]\n").is_err());
    }

    #[test]
    fn test_validate_negative_target() {
        let mut config = Config::default();
        config.thresholds.response_target_hours = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_warning_below_target() {
        let mut config = Config::default();
        config.thresholds.response_warning_hours = 12.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_percentage_out_of_range() {
        let mut config = Config::default();
        config.thresholds.compliance_target_pct = 101.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_completion_warning_above_target() {
        let mut config = Config::default();
        config.thresholds.completion_warning_pct = 95.0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_missing_config_uses_defaults() {
        let (_tmp, dir) = temp_dir();
        let config = Config::load(&dir, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_picks_up_file_in_base_dir() {
        let (_tmp, dir) = temp_dir();
        fs::write(dir.join(CONFIG_FILE_NAME), "[reviews]\nignored_reviewers = [\"ci-bot\"]\n").unwrap();

        let config = Config::load(&dir, None).unwrap();
        assert_eq!(config.reviews.ignored_reviewers, vec!["ci-bot".to_string()]);
        assert_eq!(config.reviews.ignored_associations, vec!["OWNER".to_string()]);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_explicit_missing_file_fails() {
        let (_tmp, dir) = temp_dir();
        let missing = dir.join("nope.toml");
        assert!(Config::load(&dir, Some(&missing)).is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_rejects_invalid_values() {
        let (_tmp, dir) = temp_dir();
        let path = dir.join("custom.toml");
        fs::write(&path, "[thresholds]\ncompletion_target_pct = 150.0\n").unwrap();
        assert!(Config::load(&dir, Some(&path)).is_err());
    }

    #[test]
    fn test_default_config_toml_is_not_empty() {
        assert!(!DEFAULT_CONFIG_TOML.is_empty());
    }
}
