use crate::demo::Report;
use crate::error::Result;
use serde::Deserialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One line per computation, values separated by single spaces
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    for line in &report.lines {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

pub fn render_json(report: &Report) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

pub fn render(report: &Report, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(report)),
        Format::Json => render_json(report),
    }
}

/// Render `report` into `out` and flush.
pub fn write_report(out: &mut impl Write, report: &Report, format: Format) -> Result<()> {
    let rendered = render(report, format)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
