use image::{Rgb, RgbImage};
use rust_decimal::prelude::ToPrimitive;

use crate::ledger::CategoryTotal;

pub(crate) const CHART_WIDTH: u32 = 800;
pub(crate) const CHART_HEIGHT: u32 = 400;
const MARGIN: u32 = 40;
const BAR_FILL: f64 = 0.7;
const BACKGROUND: Rgb<u8> = Rgb([250, 250, 252]);
const AXIS: Rgb<u8> = Rgb([160, 160, 170]);

/// Bar colour for the i-th category: hue steps of 60° at 80% saturation, 55% lightness.
pub(crate) fn bar_color(index: usize) -> Rgb<u8> {
    Rgb(hsl_to_rgb(((index * 60) % 360) as f64, 0.8, 0.55))
}

/// `h` in degrees, `s` and `l` in 0..=1.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h % 360.0) / 60.0;
    let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    [channel(r), channel(g), channel(b)]
}

/// One bar per category in the given order, scaled to the largest total.
/// Returns `None` when there is nothing to draw.
pub(crate) fn render_bar_chart(totals: &[CategoryTotal]) -> Option<RgbImage> {
    let values: Vec<f64> = totals
        .iter()
        .map(|t| t.amount.to_f64().unwrap_or(0.0).max(0.0))
        .collect();
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if values.is_empty() || max <= 0.0 {
        return None;
    }

    let mut img = RgbImage::from_pixel(CHART_WIDTH, CHART_HEIGHT, BACKGROUND);
    let plot_width = CHART_WIDTH - 2 * MARGIN;
    let plot_height = CHART_HEIGHT - 2 * MARGIN;
    let baseline = CHART_HEIGHT - MARGIN;
    let count = values.len() as u64;
    let slot = plot_width / values.len() as u32;
    let bar_width = ((slot as f64 * BAR_FILL) as u32).clamp(1, slot.max(1));

    // Slots start on a fractional grid so very many bars share columns instead of
    // running past the plot.
    for (i, value) in values.iter().enumerate() {
        let height = ((value / max) * plot_height as f64).round() as u32;
        let height = if *value > 0.0 { height.max(1) } else { 0 };
        let slot_start = (i as u64 * u64::from(plot_width) / count) as u32;
        let left = MARGIN + slot_start + slot.saturating_sub(bar_width) / 2;
        let color = bar_color(i);
        for x in left..(left + bar_width).min(CHART_WIDTH) {
            for y in (baseline - height)..baseline {
                img.put_pixel(x, y, color);
            }
        }
    }

    for x in MARGIN..(CHART_WIDTH - MARGIN) {
        img.put_pixel(x, baseline, AXIS);
    }

    Some(img)
}
