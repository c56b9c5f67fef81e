//! Result histogram rendering.

use image::Rgba;
use tracing::debug;

use circuitlab_adapter_sim::Counts;

use crate::error::{RenderError, RenderResult};
use crate::font;
use crate::surface::Surface;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const AXIS: Rgba<u8> = Rgba([40, 40, 40, 255]);
const GRID: Rgba<u8> = Rgba([225, 225, 225, 255]);
const BAR: Rgba<u8> = Rgba([99, 110, 250, 255]);

const LEFT_MARGIN: i32 = 48;
const RIGHT_MARGIN: i32 = 24;
const TOP_MARGIN: i32 = 32;
const PLOT_HEIGHT: u32 = 220;
const BOTTOM_MARGIN: i32 = 40;
const MIN_SLOT: u32 = 56;
const GRID_LINES: u32 = 4;
const LABEL_SCALE: u32 = 2;

/// Render `counts` as a PNG bar chart.
///
/// One bar per observed outcome in key order. Bar heights are proportional to
/// the outcome's share of all shots, scaled so the most frequent outcome fills
/// the plot; the raw count is printed above each bar.
pub fn render_histogram(counts: &Counts) -> RenderResult<Vec<u8>> {
    if counts.is_empty() {
        return Err(RenderError::EmptyHistogram);
    }

    let key_len = counts.iter().map(|(k, _)| k.len()).max().unwrap_or(1);
    let slot = MIN_SLOT.max(font::text_width(&"0".repeat(key_len), LABEL_SCALE) + 16);
    let bar_width = slot * 3 / 5;

    let bars = counts.len() as u32;
    let width = LEFT_MARGIN as u32 + slot * bars + RIGHT_MARGIN as u32;
    let height = TOP_MARGIN as u32 + PLOT_HEIGHT + BOTTOM_MARGIN as u32;
    let mut surface = Surface::new(width, height, BACKGROUND);

    let baseline = TOP_MARGIN + PLOT_HEIGHT as i32;
    let right = surface.width() as i32 - RIGHT_MARGIN;

    // Horizontal grid at quarters of the tallest bar.
    for i in 1..=GRID_LINES {
        let y = baseline - (PLOT_HEIGHT * i / GRID_LINES) as i32;
        surface.hline(LEFT_MARGIN, right, y, 1, GRID);
    }

    let total = counts.total().max(1) as f64;
    let max_share = counts.max_count() as f64 / total;

    for (i, (bitstring, count)) in counts.iter().enumerate() {
        let share = count as f64 / total;
        let bar_height = ((share / max_share) * f64::from(PLOT_HEIGHT)).round() as u32;
        let cx = LEFT_MARGIN + (slot * i as u32 + slot / 2) as i32;

        surface.fill_rect(
            cx - (bar_width / 2) as i32,
            baseline - bar_height as i32,
            bar_width,
            bar_height,
            BAR,
        );
        surface.text_centered(
            cx,
            baseline - bar_height as i32 - 10,
            &count.to_string(),
            1,
            AXIS,
        );
        surface.text_centered(
            cx,
            baseline + BOTTOM_MARGIN / 2,
            bitstring,
            LABEL_SCALE,
            AXIS,
        );
    }

    // Axes last so bars never cover them.
    surface.hline(LEFT_MARGIN, right, baseline, 2, AXIS);
    surface.vline(LEFT_MARGIN, TOP_MARGIN, baseline, 2, AXIS);
    surface.text(
        4,
        TOP_MARGIN - font::text_height(1) as i32 / 2,
        &format!("{:.2}", max_share),
        1,
        AXIS,
    );

    debug!(
        "Rendered histogram: {} outcomes over {} shots",
        bars,
        counts.total()
    );
    surface.encode_png()
}
