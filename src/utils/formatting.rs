//! Formatting utilities used for CLI outputs.

use crate::core::status::StatusReport;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Signed delta with one decimal, e.g. `+5.0` or `-20.0`.
pub fn format_delta(delta: f64) -> String {
    format!("{:+.1}", delta)
}

/// Wrap free text (model answers) to the terminal width.
pub fn wrap_text(text: &str, width: usize) -> String {
    textwrap::fill(text, width.max(20))
}

/// The four "latest situation" metrics, one per line.
pub fn render_status(report: &StatusReport) -> String {
    let r = &report.latest;
    let delta = report
        .pm25_delta
        .map(|d| format!(" ({})", format_delta(d)))
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str(&format!(
        "{} {} @ {}\n",
        bold("Latest situation"),
        r.location,
        r.timestamp_str()
    ));
    out.push_str(&format!(
        "  PM2.5        {:.1} µg/m³{}  {}\n",
        r.pm25,
        delta,
        report.pm25.colour().bold().paint(report.pm25.label())
    ));
    out.push_str(&format!(
        "  Hardness     {:.0} mg/L ({})\n",
        r.hardness,
        report.hardness.colour().bold().paint(report.hardness.label())
    ));
    out.push_str(&format!("  Temperature  {:.1}°C\n", r.temperature));
    out.push_str(&format!("  pH           {:.1}\n", r.ph));
    out
}
