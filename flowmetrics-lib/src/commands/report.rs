use super::Host;
use super::ProgressReporter;
use super::common::{ColorMode, LogLevel, init_logging};
use super::config::Config;
use crate::Result;
use crate::loader::load_snapshot;
use crate::metrics::aggregate;
use crate::reports::{generate_console, generate_json};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "    report";

/// Title printed above the report when none is given
pub const DEFAULT_TITLE: &str = "Weekly Engineering Flow Metrics";

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Title printed above the report
    #[arg(value_name = "TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Directory holding the exported issue, pull request, and review JSON files
    #[arg(long, value_name = "PATH", default_value = "temp")]
    pub data_dir: Utf8PathBuf,

    /// Path to configuration file (default is `flowmetrics.toml` if present)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Also write the metrics summary to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,
}

/// Load a snapshot, compute its flow metrics, and report them
///
/// Nothing is written to the output when the snapshot cannot be loaded.
///
/// # Errors
///
/// Returns an error if the configuration or any snapshot file cannot be loaded, or if a
/// report cannot be written
pub fn process_report<H: Host>(host: &mut H, args: &ReportArgs) -> Result<()> {
    init_logging(args.log_level);

    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;

    let snapshot = {
        let mut progress = ProgressReporter::new(host, args.color.for_stderr());
        let snapshot = match load_snapshot(&args.data_dir, &config.reviews, &mut progress) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                let context = match e.path() {
                    Some(path) if *path != args.data_dir => format!("loading snapshot file '{path}'"),
                    _ => format!("loading snapshot from '{}'", args.data_dir),
                };
                return Err(e).into_app_err_with(|| context);
            }
        };
        log::debug!(target: LOG_TARGET, "Read {} snapshot file(s)", progress.files());
        snapshot
    };

    let summary = aggregate(
        &snapshot.issues,
        &snapshot.pull_requests,
        &snapshot.reviews,
        config.thresholds.response_target_hours,
    );

    let mut console_output = String::new();
    generate_console(&summary, &args.title, &config.thresholds, args.color.for_stdout(), &mut console_output)?;
    write!(host.output(), "{console_output}").into_app_err("writing report")?;

    if let Some(filename) = &args.json {
        let mut json_output = String::new();
        generate_json(&summary, &args.title, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
        log::info!(target: LOG_TARGET, "Wrote JSON report to '{filename}'");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;

    fn args(data_dir: Utf8PathBuf) -> ReportArgs {
        ReportArgs {
            title: DEFAULT_TITLE.to_string(),
            data_dir,
            config: None,
            color: ColorMode::Never,
            log_level: LogLevel::None,
            json: None,
        }
    }

    fn snapshot_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        fs::write(
            root.join("pull_1.json"),
            r#"{
                "number": 1,
                "base": { "repo": { "full_name": "acme/widgets" } },
                "user": { "login": "alice" },
                "created_at": "2026-03-02T09:00:00Z",
                "merged_at": "2026-03-04T09:00:00Z"
            }"#,
        )
        .unwrap();
        fs::write(
            root.join("pull_1_reviews_1.json"),
            r#"[{
                "user": { "login": "bob" },
                "author_association": "MEMBER",
                "state": "APPROVED",
                "submitted_at": "2026-03-02T13:00:00Z",
                "pull_request_url": "https://api.github.com/repos/acme/widgets/pulls/1"
            }]"#,
        )
        .unwrap();
        fs::write(root.join("issue_5.json"), r#"{ "number": 5, "state": "closed", "created_at": "2026-03-01T00:00:00Z", "closed_at": "2026-03-03T00:00:00Z" }"#).unwrap();
        (tmp, root)
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_report_is_written_to_output() {
        let (_tmp, root) = snapshot_dir();
        let mut host = TestHost::new();
        process_report(&mut host, &args(root)).unwrap();

        let output = host.output_text();
        assert!(output.contains(DEFAULT_TITLE));
        assert!(output.contains("4.00 hrs"));
        assert!(output.contains("2 days"));
        assert!(output.contains("100.0%"));
        assert!(output.contains("1/1 (100.0%)"));

        let progress = host.error_text();
        assert!(progress.contains("Pulling data from issue_5.json..."));
        assert!(progress.contains("Pulling data from pull_1.json..."));
        assert!(progress.contains("Pulling data from pull_1_reviews_1.json..."));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_missing_data_dir_writes_no_report() {
        let (_tmp, root) = snapshot_dir();
        let mut host = TestHost::new();
        let result = process_report(&mut host, &args(root.join("missing")));

        assert!(result.is_err());
        assert!(host.output_buf.is_empty());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_error_names_the_failing_file() {
        let (_tmp, root) = snapshot_dir();
        fs::write(root.join("issue_6.json"), r#"{ "title": "no number" }"#).unwrap();
        let mut host = TestHost::new();
        let err = process_report(&mut host, &args(root)).unwrap_err();

        assert!(err.to_string().contains("loading snapshot file"), "{err}");
        assert!(err.to_string().contains("issue_6.json"), "{err}");
        assert!(host.output_buf.is_empty());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_missing_data_dir_names_the_directory() {
        let (_tmp, root) = snapshot_dir();
        let missing = root.join("missing");
        let mut host = TestHost::new();
        let err = process_report(&mut host, &args(missing.clone())).unwrap_err();

        assert!(err.to_string().contains(&format!("loading snapshot from '{missing}'")), "{err}");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_json_report_is_written() {
        let (_tmp, root) = snapshot_dir();
        let json_path = root.join("summary.json");
        let mut host = TestHost::new();
        let mut report_args = args(root);
        report_args.json = Some(json_path.clone());
        process_report(&mut host, &report_args).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(value["title"], DEFAULT_TITLE);
        assert_eq!(value["summary"]["pull_requests"], 1);
        assert_eq!(value["summary"]["merge_samples"], 1);
    }
}
