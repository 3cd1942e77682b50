//! Rendering assembled charts for people and for other programs.

use anyhow::{Context, Result};
use csv::Writer;
use std::io::Write;

use crate::models::ChartData;

/// Plain-text listing: a header, a dashed underline, one line per entry.
pub fn render_text(chart: &ChartData) -> String {
    let header = match (&chart.date, chart.latest) {
        (Some(date), false) => format!("{} chart from {}", chart.name, date),
        _ => format!("{} chart (current)", chart.name),
    };

    let underline = "-".repeat(header.chars().count());

    let mut lines = vec![header, underline];
    lines.extend(chart.entries.iter().map(|entry| match entry.change {
        Some(change) => format!("{}. {} ({})", entry.rank, entry, change),
        None => format!("{}. {}", entry.rank, entry),
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn to_json(chart: &ChartData) -> crate::error::Result<String> {
    Ok(serde_json::to_string_pretty(chart)?)
}

/// One CSV row per entry. Untracked stats are left empty.
pub fn write_csv<W: Write>(chart: &ChartData, out: W) -> Result<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record([
        "rank", "title", "artist", "image", "peakPos", "lastPos", "weeks", "isNew", "change",
    ])?;

    for e in &chart.entries {
        writer
            .write_record([
                e.rank.to_string(),
                e.title.clone(),
                e.artist.clone(),
                e.image.clone().unwrap_or_default(),
                opt(e.peak_pos),
                opt(e.last_pos),
                opt(e.weeks),
                e.is_new.to_string(),
                e.change.map(|c| c.to_string()).unwrap_or_default(),
            ])
            .with_context(|| format!("writing entry {} of {}", e.rank, chart.name))?;
    }

    writer.flush().context("flushing CSV output")?;
    Ok(())
}

fn opt(v: Option<u32>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}
