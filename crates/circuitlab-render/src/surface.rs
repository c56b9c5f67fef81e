//! Drawing surface shared by the diagram and histogram renderers.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_hollow_rect_mut,
    draw_line_segment_mut,
};
use imageproc::rect::Rect;

use crate::error::RenderResult;
use crate::font::{self, ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

/// An RGBA canvas with the handful of primitives the renderers need.
pub(crate) struct Surface {
    img: RgbaImage,
}

impl Surface {
    /// Create a surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            img: RgbaImage::from_pixel(width.max(1), height.max(1), background),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba<u8>) {
        if w == 0 || h == 0 {
            return;
        }
        draw_filled_rect_mut(&mut self.img, Rect::at(x, y).of_size(w, h), color);
    }

    pub fn stroke_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba<u8>) {
        if w == 0 || h == 0 {
            return;
        }
        draw_hollow_rect_mut(&mut self.img, Rect::at(x, y).of_size(w, h), color);
    }

    pub fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgba<u8>) {
        draw_line_segment_mut(
            &mut self.img,
            (from.0 as f32, from.1 as f32),
            (to.0 as f32, to.1 as f32),
            color,
        );
    }

    /// Horizontal line `thickness` pixels tall, centred on `y`.
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, thickness: u32, color: Rgba<u8>) {
        let (lo, hi) = (x0.min(x1), x0.max(x1));
        let half = (thickness / 2) as i32;
        self.fill_rect(lo, y - half, (hi - lo) as u32 + 1, thickness, color);
    }

    /// Vertical line `thickness` pixels wide, centred on `x`.
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, thickness: u32, color: Rgba<u8>) {
        let (lo, hi) = (y0.min(y1), y0.max(y1));
        let half = (thickness / 2) as i32;
        self.fill_rect(x - half, lo, thickness, (hi - lo) as u32 + 1, color);
    }

    pub fn dot(&mut self, center: (i32, i32), radius: i32, color: Rgba<u8>) {
        draw_filled_circle_mut(&mut self.img, center, radius, color);
    }

    pub fn ring(&mut self, center: (i32, i32), radius: i32, color: Rgba<u8>) {
        draw_hollow_circle_mut(&mut self.img, center, radius, color);
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn text(&mut self, x: i32, y: i32, text: &str, scale: u32, color: Rgba<u8>) {
        let mut pen_x = x;
        for c in text.chars() {
            let rows = font::glyph(c);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        self.fill_rect(
                            pen_x + (col * scale) as i32,
                            y + (row as u32 * scale) as i32,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
            pen_x += (ADVANCE * scale) as i32;
        }
    }

    /// Draw `text` centred on `(cx, cy)`.
    pub fn text_centered(&mut self, cx: i32, cy: i32, text: &str, scale: u32, color: Rgba<u8>) {
        let w = font::text_width(text, scale) as i32;
        let h = (GLYPH_HEIGHT * scale) as i32;
        self.text(cx - w / 2, cy - h / 2, text, scale, color);
    }

    /// Encode the surface as PNG bytes.
    pub fn encode_png(&self) -> RenderResult<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.img.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn test_zero_sized_rects_are_ignored() {
        let mut surface = Surface::new(10, 10, WHITE);
        surface.fill_rect(0, 0, 0, 5, BLACK);
        surface.stroke_rect(0, 0, 5, 0, BLACK);
        assert!(surface.img.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn test_text_sets_pixels() {
        let mut surface = Surface::new(20, 20, WHITE);
        surface.text(0, 0, "H", 1, BLACK);
        // Left stroke of 'H'.
        assert_eq!(*surface.img.get_pixel(0, 0), BLACK);
        // Gap in the middle of the top row.
        assert_eq!(*surface.img.get_pixel(2, 0), WHITE);
        // Crossbar.
        assert_eq!(*surface.img.get_pixel(2, 3), BLACK);
    }

    #[test]
    fn test_encode_png_signature() {
        let surface = Surface::new(4, 4, WHITE);
        let bytes = surface.encode_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
