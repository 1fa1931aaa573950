//! Built-in 5x7 bitmap font
//!
//! Glyphs are drawn as runs of filled rectangles, so any `Renderer` can show
//! text without a font file. Lowercase letters render as uppercase.

use super::{Renderer, Rgb};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character, glyph plus one column of spacing
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Row bitmaps, top to bottom. Bit 4 is the leftmost column.
fn glyph(c: char) -> [u8; GLYPH_HEIGHT as usize] {
    match c.to_ascii_uppercase() {
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
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
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        // Anything else shows as '?'
        _ => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
    }
}

/// Width in pixels of `text` drawn at `scale`
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    (chars * GLYPH_ADVANCE - 1) * scale
}

/// Draw `text` with its top-left corner at (x, y), each font pixel
/// becoming a `scale` x `scale` block
pub fn draw_text<R: Renderer + ?Sized>(
    target: &mut R,
    x: i32,
    y: i32,
    text: &str,
    scale: u32,
    color: Rgb,
) {
    let scale = scale.max(1);
    let mut pen_x = x;

    for c in text.chars() {
        for (row, &bits) in glyph(c).iter().enumerate() {
            let py = y + (row as u32 * scale) as i32;
            // Merge horizontal runs into single rects
            let mut col = 0;
            while col < GLYPH_WIDTH {
                if bits & (0x10 >> col) == 0 {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_WIDTH && bits & (0x10 >> col) != 0 {
                    col += 1;
                }
                let px = pen_x + (start * scale) as i32;
                target.fill_rect(px, py, (col - start) * scale, scale, color);
            }
        }
        pen_x += (GLYPH_ADVANCE * scale) as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::PixelBuffer;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 3), 0);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("AB", 1), 11);
        assert_eq!(text_width("AB", 3), 33);
    }

    #[test]
    fn test_draw_single_glyph() {
        let mut buf = PixelBuffer::with_size(8, 8);
        buf.clear(0, 0, 0);
        draw_text(&mut buf, 0, 0, "1", 1, (255, 255, 255));

        // '1' has 1+2+1+1+1+1+3 lit pixels
        assert_eq!(buf.count_color((255, 255, 255)), 10);
        // Top of the stem
        assert_eq!(buf.get_pixel(2, 0), Some((255, 255, 255)));
        assert_eq!(buf.get_pixel(0, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_scale_multiplies_area() {
        let mut small = PixelBuffer::with_size(40, 40);
        let mut big = PixelBuffer::with_size(40, 40);
        small.clear(0, 0, 0);
        big.clear(0, 0, 0);

        draw_text(&mut small, 0, 0, "R", 1, (255, 0, 0));
        draw_text(&mut big, 0, 0, "R", 3, (255, 0, 0));

        let lit = small.count_color((255, 0, 0));
        assert!(lit > 0);
        assert_eq!(big.count_color((255, 0, 0)), lit * 9);
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        let mut lower = PixelBuffer::with_size(20, 10);
        let mut upper = PixelBuffer::with_size(20, 10);
        lower.clear(0, 0, 0);
        upper.clear(0, 0, 0);

        draw_text(&mut lower, 0, 0, "win", 1, (1, 1, 1));
        draw_text(&mut upper, 0, 0, "WIN", 1, (1, 1, 1));
        assert_eq!(lower.as_bytes(), upper.as_bytes());
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut buf = PixelBuffer::with_size(10, 10);
        buf.clear(0, 0, 0);
        draw_text(&mut buf, 0, 0, "  ", 2, (255, 255, 255));
        assert_eq!(buf.count_color((255, 255, 255)), 0);
    }
}
