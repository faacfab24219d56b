//! Command dispatch logic for flowmetrics

use super::{ReportArgs, process_report};
use crate::{Host, Result};
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "flowmetrics", version, author, long_about = None)]
#[command(about = "Report engineering flow metrics from exported issues, pull requests, and reviews")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    report: ReportArgs,
}

/// Parse command-line arguments and produce the report
///
/// This function is designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the report cannot be produced
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    process_report(host, &cli.report)
}
