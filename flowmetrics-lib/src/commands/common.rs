//! Output and diagnostics settings shared by the command pipeline.

use clap::ValueEnum;
use std::env;
use std::io::{IsTerminal, stderr, stdout};

const RUST_LOG: &str = "RUST_LOG";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    /// Whether to color the report written to standard output
    #[must_use]
    pub fn for_stdout(self) -> bool {
        self.resolve(|| stdout().is_terminal())
    }

    /// Whether to color progress lines written to standard error
    #[must_use]
    pub fn for_stderr(self) -> bool {
        self.resolve(|| stderr().is_terminal())
    }

    fn resolve(self, is_terminal: impl FnOnce() -> bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal(),
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Initialize logger based on log level
///
/// `RUST_LOG` takes precedence when set, including over `--log-level none`. Only the first
/// call in a process installs a logger; later calls are ignored.
pub fn init_logging(log_level: LogLevel) {
    let Some(level) = default_filter(log_level, env::var_os(RUST_LOG).is_some()) else {
        return;
    };

    let env = env_logger::Env::default().filter_or(RUST_LOG, level);

    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

/// The filter used when `RUST_LOG` is unset, or `None` when no logger is needed at all
fn default_filter(log_level: LogLevel, rust_log_set: bool) -> Option<&'static str> {
    match log_level {
        LogLevel::None if rust_log_set => Some("off"),
        LogLevel::None => None,
        LogLevel::Error => Some("error"),
        LogLevel::Warn => Some("warn"),
        LogLevel::Info => Some("info"),
        LogLevel::Debug => Some("debug"),
        LogLevel::Trace => Some("trace"),
    }
}
