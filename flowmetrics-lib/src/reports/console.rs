use super::{ReportThresholds, Status};
use crate::Result;
use crate::metrics::MetricsSummary;
use core::fmt::Write;
use owo_colors::OwoColorize;

const LABEL_WIDTH: usize = 42;
const RULE_WIDTH: usize = 52;
const BLOCKER_WINDOW_HOURS: u32 = 48;

pub fn generate<W: Write>(
    summary: &MetricsSummary,
    title: &str,
    thresholds: &ReportThresholds,
    use_colors: bool,
    writer: &mut W,
) -> Result<()> {
    let rule = "─".repeat(RULE_WIDTH);
    let paint = |text: String, status: Status| colorize(text, status, use_colors);
    let target = thresholds.response_target_hours;

    writeln!(writer)?;
    writeln!(writer, "{rule}")?;
    writeln!(writer, "{title}")?;
    writeln!(writer, "{rule}")?;

    // Time to first response
    let median = summary.median_first_response_hours;
    let mean = summary.mean_first_response_hours;
    write_line(
        writer,
        "Median PR time to first response:",
        &paint(format!("{median:.2} hrs"), thresholds.first_response_status(median)),
    )?;
    write_line(
        writer,
        "Average PR time to first response:",
        &paint(format!("{mean:.2} hrs"), thresholds.first_response_status(mean)),
    )?;
    write_line(writer, "Target (first response):", &format!("{:>4} hrs", format!("≤ {target}")))?;
    writeln!(writer)?;

    // Time to merge
    write_line(writer, "Median PR time to merge:", &format!("{:.0} days", summary.median_merge_days))?;
    write_line(writer, "Average PR time to merge:", &format!("{:.0} days", summary.mean_merge_days))?;
    writeln!(writer)?;

    let compliance = summary.review_compliance_pct;
    write_line(
        writer,
        &format!("Review compliance (≤ {target}h):"),
        &paint(format!("{compliance:.1}%"), thresholds.compliance_status(compliance)),
    )?;
    writeln!(writer)?;

    let completion = summary.issues_completed_pct;
    write_line(
        writer,
        "Issues completed this sprint:",
        &format!(
            "{}/{} ({})",
            summary.issues_completed,
            summary.issues_total,
            paint(format!("{completion:.1}%"), thresholds.completion_status(completion))
        ),
    )?;
    writeln!(writer)?;

    let blockers = &summary.blockers;
    let mut blocker_value = format!(
        "{}/{} ({})",
        blockers.resolved,
        blockers.total,
        paint(format!("{:.1}%", blockers.pct), thresholds.blocker_status(blockers))
    );
    if !blockers.tracked {
        blocker_value.push_str(" not tracked");
    }
    write_line(writer, &format!("Blockers resolved within {BLOCKER_WINDOW_HOURS} hrs:"), &blocker_value)?;

    writeln!(writer, "{rule}")?;
    writeln!(writer)?;

    Ok(())
}

/// Write a label padded to the label column, followed by its value
fn write_line<W: Write>(writer: &mut W, label: &str, value: &str) -> Result<()> {
    writeln!(writer, "{label:<LABEL_WIDTH$} {value}")?;
    Ok(())
}

fn colorize(text: String, status: Status, use_colors: bool) -> String {
    if !use_colors {
        return text;
    }

    match status {
        Status::Good => text.bright_green().to_string(),
        Status::Warning => text.bright_yellow().to_string(),
        Status::Poor => text.bright_red().to_string(),
    }
}
