//! Text rendering and file output for the CLI.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use quartercast_forecast::{ComponentRow, ForecastWindow};
use quartercast_io::{CanonicalSeries, PERIOD_COLUMN, SUBSCRIBERS_COLUMN, SeriesSummary};
use quartercast_pipeline::PipelineOutput;

/// Groups the integer part of `value` in threes: `20123456.7` -> `20,123,457`.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// First date, latest date and latest subscriber count, one per line.
pub fn render_summary(summary: &SeriesSummary) -> String {
    format!(
        "First date          {}\nLatest date         {}\nLatest subscribers  {}\n",
        summary.first_date,
        summary.latest_date,
        format_thousands(summary.latest_value.trunc()),
    )
}

/// The forecast window as an aligned text table.
pub fn render_window(window: &ForecastWindow) -> String {
    let cells: Vec<[String; 4]> = window
        .rows()
        .iter()
        .map(|r| {
            [
                r.date.to_string(),
                format_thousands(r.forecast),
                format_thousands(r.lower),
                format_thousands(r.upper),
            ]
        })
        .collect();
    render_table(["Date", "Forecast", "Lower", "Upper"], &cells)
}

/// Trend and seasonal parts as an aligned text table.
pub fn render_components(components: &[ComponentRow]) -> String {
    let cells: Vec<[String; 3]> = components
        .iter()
        .map(|c| {
            [
                c.timestamp.to_string(),
                format_thousands(c.trend),
                format_thousands(c.seasonal),
            ]
        })
        .collect();
    render_table(["Date", "Trend", "Seasonal"], &cells)
}

/// Left-aligns the first column, right-aligns the rest.
fn render_table<const N: usize>(header: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = header.map(str::len);
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let line = |cells: &[&str]| {
        let mut s = String::new();
        for (i, (cell, w)) in cells.iter().zip(widths).enumerate() {
            if i == 0 {
                s.push_str(&format!("{cell:<w$}"));
            } else {
                s.push_str(&format!("  {cell:>w$}"));
            }
        }
        s.push('\n');
        s
    };

    let mut out = line(&header);
    for row in rows {
        let refs: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&line(&refs));
    }
    out
}

/// JSON report for chart rendering.
#[derive(Serialize)]
struct Report<'a> {
    source: &'a str,
    horizon: usize,
    #[serde(flatten)]
    output: &'a PipelineOutput,
}

/// Writes the pipeline output as pretty JSON.
pub fn write_report(path: &Path, source: &str, horizon: usize, output: &PipelineOutput) -> Result<()> {
    let report = Report {
        source,
        horizon,
        output,
    };
    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report: {}", path.display()))
}

/// Writes `series` as `Time period,Subscribers` CSV with `MM/DD/YYYY` dates.
pub fn write_series_csv<W: Write>(writer: W, series: &CanonicalSeries) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record([PERIOD_COLUMN, SUBSCRIBERS_COLUMN])
        .context("failed to write CSV header")?;
    for point in series {
        csv_writer
            .write_record([
                point.timestamp.format("%m/%d/%Y").to_string(),
                format!("{:.0}", point.value),
            ])
            .context("failed to write CSV row")?;
    }
    csv_writer.flush().context("failed to flush CSV output")?;
    Ok(())
}
