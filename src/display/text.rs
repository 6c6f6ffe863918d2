//! Text drawing with the bound bitmap font.
//!
//! X coordinates are rounded down to even, since a pixel pair is the smallest unit the controller
//! can address: asking for x = 3 draws at x = 2.

use log::trace;

use super::{Display, PixelCoord};
use crate::display::window::Window;
use crate::error::Error;
use crate::interface;

impl<'f, DI> Display<'f, DI>
where
    DI: interface::DisplayInterface,
{
    /// Draw the glyph for byte `ch` with its top left corner at `at`.
    ///
    /// Sets a window exactly the size of the glyph and streams its pixels into it. Fails with
    /// `Error::InvalidGeometry` if the glyph would not fit on the panel.
    pub fn write_char(&mut self, at: PixelCoord, ch: u8) -> Result<(), Error> {
        self.check_open()?;
        let font = self.font;
        let x = at.0 & !1;
        let lower_right = PixelCoord(
            x.checked_add(font.glyph_width())
                .ok_or(Error::InvalidGeometry)?,
            at.1.checked_add(font.glyph_height())
                .ok_or(Error::InvalidGeometry)?,
        );
        let window = Window::new(PixelCoord(x, at.1), lower_right)?;
        trace!("ssd1327: glyph {:#04x} at ({}, {})", ch, x, at.1);
        window.send(&mut self.iface)?;
        self.send_pixels(font.pixels(ch))
    }

    /// Draw `text` left to right starting at `at`, one glyph per byte, advancing by the glyph
    /// width. There is no wrapping: a glyph that would cross the right edge fails with
    /// `Error::InvalidGeometry`, leaving the glyphs before it drawn.
    pub fn write_text(&mut self, at: PixelCoord, text: &str) -> Result<(), Error> {
        self.check_open()?;
        let step = self.font.glyph_width();
        let mut x = at.0 & !1;
        for ch in text.bytes() {
            self.write_char(PixelCoord(x, at.1), ch)?;
            x = x.saturating_add(step);
        }
        Ok(())
    }
}
