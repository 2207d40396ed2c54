//! File exports: the history as CSV and the category chart as PNG.

mod chart;
mod files;

pub(crate) use chart::bar_color;
pub(crate) use files::{write_chart_png, write_csv};
