//! Tiny built-in 5×7 pixel glyph set for the tray labels.
//!
//! Covers exactly the characters the throughput labels use: digits,
//! decimal point, slash, the up/down arrows, and the `Mbps` letters.
//! Each glyph row is a bit pattern with bit 4 as the leftmost column.

use image::{Rgba, RgbaImage};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance, including one blank column between glyphs.
pub const GLYPH_ADVANCE: u32 = 6;

/// Pixel width of a rendered text run.
pub fn text_width(text: &str) -> u32 {
    text.chars().count() as u32 * GLYPH_ADVANCE
}

/// Draw `text` with its top-left corner at `(x, y)`, clipping at the
/// image edges.
pub fn draw_text(img: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>) {
    for (i, c) in text.chars().enumerate() {
        let origin_x = x + (i as u32 * GLYPH_ADVANCE) as i32;
        draw_glyph(img, origin_x, y, c, color);
    }
}

fn draw_glyph(img: &mut RgbaImage, x: i32, y: i32, c: char, color: Rgba<u8>) {
    let rows = glyph(c);
    for (dy, row) in rows.iter().enumerate() {
        for dx in 0..GLYPH_WIDTH {
            if row & (1 << (GLYPH_WIDTH - 1 - dx)) == 0 {
                continue;
            }
            let px = x + dx as i32;
            let py = y + dy as i32;
            if px >= 0 && (px as u32) < img.width() && py >= 0 && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

#[rustfmt::skip]
fn glyph(c: char) -> [u8; 7] {
    match c {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        '/' => [0x01, 0x02, 0x02, 0x04, 0x08, 0x08, 0x10],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'b' => [0x10, 0x10, 0x1E, 0x11, 0x11, 0x11, 0x1E],
        'p' => [0x00, 0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10],
        's' => [0x00, 0x0F, 0x10, 0x0E, 0x01, 0x1E, 0x00],
        // Upload / download arrows.
        '▲' => [0x04, 0x0E, 0x15, 0x04, 0x04, 0x04, 0x04],
        '▼' => [0x04, 0x04, 0x04, 0x04, 0x15, 0x0E, 0x04],
        // Anything else (including space) renders as a blank cell.
        _ => [0x00; 7],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FG: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const BG: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn painted(img: &RgbaImage) -> usize {
        img.pixels().filter(|p| p.0[3] != 0).count()
    }

    #[test]
    fn digits_paint_pixels() {
        let mut img = RgbaImage::from_pixel(8, 8, BG);
        draw_text(&mut img, 0, 0, "8", FG);
        assert!(painted(&img) > 0);
    }

    #[test]
    fn space_paints_nothing() {
        let mut img = RgbaImage::from_pixel(8, 8, BG);
        draw_text(&mut img, 0, 0, " ", FG);
        assert_eq!(painted(&img), 0);
    }

    #[test]
    fn clipping_at_edges_does_not_panic() {
        let mut img = RgbaImage::from_pixel(4, 4, BG);
        draw_text(&mut img, -3, -3, "0.5/1.0", FG);
        draw_text(&mut img, 100, 100, "▲▼", FG);
    }

    #[test]
    fn text_width_counts_advances() {
        assert_eq!(text_width("1.0/2.0"), 7 * GLYPH_ADVANCE);
    }
}
