use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ledger::{Ledger, LedgerError};

pub(crate) fn csv_file_name(date: NaiveDate) -> String {
    format!("verlauf_{}.csv", date.format("%Y-%m-%d"))
}

pub(crate) fn chart_file_name(date: NaiveDate) -> String {
    format!("diagramm_{}.png", date.format("%Y-%m-%d"))
}

/// Write the history CSV into `dir` and return the file path.
pub(crate) fn write_csv(ledger: &Ledger, dir: &Path, date: NaiveDate) -> Result<PathBuf, LedgerError> {
    let csv = ledger.to_csv()?;
    fs::create_dir_all(dir)?;
    let path = dir.join(csv_file_name(date));
    fs::write(&path, csv)?;
    tracing::info!(path = %path.display(), rows = ledger.transactions().len(), "exported CSV");
    Ok(path)
}

/// Render the category chart into `dir` and return the file path.
pub(crate) fn write_chart_png(
    ledger: &Ledger,
    dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf, LedgerError> {
    let totals = ledger.aggregate_by_category();
    let img = super::chart::render_bar_chart(&totals).ok_or(LedgerError::EmptyExport)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(chart_file_name(date));
    img.save_with_format(&path, image::ImageFormat::Png)?;
    tracing::info!(path = %path.display(), bars = totals.len(), "exported chart");
    Ok(path)
}
