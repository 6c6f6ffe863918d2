//! Bitmap fonts and the glyph rasterizer.
//!
//! A font is a table of 256 fixed-size glyph blocks indexed by byte value. Each block stores the
//! glyph as 1 bit per pixel rows, MSB leftmost, `ceil(width / 8)` bytes per row. The rasterizer
//! turns a block into the SSD1327's 4 bits per pixel format, two horizontally adjacent pixels per
//! byte, with set bits at full brightness.

mod font8x16;

use crate::command::consts::*;
use crate::error::Error;

/// A monospace bitmap font with one glyph block per byte value.
#[derive(Clone, Copy, Debug)]
pub struct Font<'f> {
    glyph_width: u16,
    glyph_height: u16,
    stride: usize,
    data: &'f [u8],
}

/// The built-in 8x16 font bound by default on every `Display`.
pub const FONT_8X16: Font<'static> = Font {
    glyph_width: 8,
    glyph_height: 16,
    stride: 16,
    data: &font8x16::GLYPHS,
};

impl<'f> Font<'f> {
    /// Describe a font whose glyph for byte value `n` starts at `data[n * stride]`.
    ///
    /// Fails with `Error::UnsupportedFont` unless the width is even (pixels are packed in pairs),
    /// both dimensions fit on the panel, each block holds `height` rows, and `data` has a block
    /// for all 256 byte values.
    pub fn new(
        glyph_width: u16,
        glyph_height: u16,
        stride: usize,
        data: &'f [u8],
    ) -> Result<Self, Error> {
        let font = Font {
            glyph_width,
            glyph_height,
            stride,
            data,
        };
        if false
            || glyph_width == 0
            || glyph_height == 0
            || glyph_width % PIXELS_PER_COL != 0
            || glyph_width > NUM_PIXEL_COLS
            || glyph_height > NUM_PIXEL_ROWS
            || (glyph_height as usize)
                .checked_mul(font.row_bytes())
                .map_or(true, |n| stride < n)
            || stride.checked_mul(256).map_or(true, |n| data.len() < n)
        {
            return Err(Error::UnsupportedFont);
        }
        Ok(font)
    }

    pub fn glyph_width(&self) -> u16 {
        self.glyph_width
    }

    pub fn glyph_height(&self) -> u16 {
        self.glyph_height
    }

    /// Number of source bytes holding one row of a glyph.
    fn row_bytes(&self) -> usize {
        (self.glyph_width as usize + 7) / 8
    }

    /// The bitmap block of the glyph for byte value `ch`.
    pub fn glyph(&self, ch: u8) -> &'f [u8] {
        let start = ch as usize * self.stride;
        &self.data[start..start + self.stride]
    }

    /// Rasterize the glyph for `ch` into pixel-pair bytes.
    pub fn pixels(&self, ch: u8) -> GlyphPixels<'f> {
        GlyphPixels::new(self.glyph(ch), self.glyph_width / 2, self.glyph_height)
    }
}

/// Iterator over the packed pixel bytes of one glyph, left to right within a row and top to
/// bottom across rows. This is exactly the order the controller fills a window of the glyph's
/// size, so the bytes can be streamed straight to the display RAM.
#[derive(Clone, Debug)]
pub struct GlyphPixels<'f> {
    block: &'f [u8],
    pairs_per_row: u16,
    rows: u16,
    row: u16,
    pair: u16,
    next_byte: usize,
    bits: u8,
}

impl<'f> GlyphPixels<'f> {
    fn new(block: &'f [u8], pairs_per_row: u16, rows: u16) -> Self {
        Self {
            block,
            pairs_per_row,
            rows,
            row: 0,
            pair: 0,
            next_byte: 0,
            bits: 0,
        }
    }

    fn fetch(&mut self) {
        self.bits = self.block[self.next_byte];
        self.next_byte += 1;
    }
}

impl<'f> Iterator for GlyphPixels<'f> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.row >= self.rows {
            return None;
        }
        if self.pair == 0 {
            self.fetch();
        }

        let mut pixels = 0;
        if self.bits & 0x80 != 0 {
            pixels |= 0xF0;
        }
        if self.bits & 0x40 != 0 {
            pixels |= 0x0F;
        }
        self.bits <<= 2;

        // A source byte covers 4 pixel pairs. Only move to the next one if this row still needs
        // it, so the last byte of the block is never read past.
        self.pair += 1;
        if self.pair == self.pairs_per_row {
            self.pair = 0;
            self.row += 1;
        } else if self.pair % 4 == 0 {
            self.fetch();
        }
        Some(pixels)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = self.rows as usize * self.pairs_per_row as usize;
        let done = self.row as usize * self.pairs_per_row as usize + self.pair as usize;
        let left = total.saturating_sub(done);
        (left, Some(left))
    }
}

impl<'f> ExactSizeIterator for GlyphPixels<'f> {}
