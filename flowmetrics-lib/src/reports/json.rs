use crate::Result;
use crate::metrics::MetricsSummary;
use core::fmt::Write;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    summary: &'a MetricsSummary,
}

pub fn generate<W: Write>(summary: &MetricsSummary, title: &str, writer: &mut W) -> Result<()> {
    let output = JsonReport { title, summary };

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
