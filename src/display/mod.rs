//! The main API to the display driver. It owns the interface, tracks whether the panel has been
//! opened, and provides the drawing operations: windows, text and the test pattern.
//!
//! There is no frame buffer; every drawing call goes straight to the display RAM.
//!
//! A `Display` is not thread-safe. Command framing depends on the D/C line state, so sharing one
//! panel between threads requires external locking around every call.


mod text;
mod window;

use core::iter;

use log::{debug, trace};

use crate::command::consts::*;
use crate::command::*;
use crate::config::{Batching, Config, CHUNK_LEN};
use crate::display::window::Window;
use crate::error::Error;
use crate::font::{Font, FONT_8X16};
use crate::interface;

/// A pixel coordinate pair of `column` and `row`, with (0, 0) the top left of the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelCoord(pub u16, pub u16);

/// A driver for an SSD1327 display.
pub struct Display<'f, DI>
where
    DI: interface::DisplayInterface,
{
    iface: DI,
    font: Font<'f>,
    batching: Batching,
    open: bool,
}

impl<'f, DI> Display<'f, DI>
where
    DI: interface::DisplayInterface,
{
    /// Construct a new, closed display driver connected to the interface `iface`, with the
    /// built-in 8x16 font bound. Nothing is sent until `open`.
    ///
    /// The panel must have been through a hardware reset before `open`: hold /RESET low for at
    /// least 100us and let it settle high for another 100us. The driver does not own that pin.
    pub fn new(iface: DI) -> Self {
        Display {
            iface,
            font: FONT_8X16,
            batching: Batching::default(),
            open: false,
        }
    }

    /// Send the power-up sequence followed by whatever `config` adds, and mark the display open.
    /// The panel stays switched off until `set_power(true)`.
    ///
    /// Fails with `Error::AlreadyOpen`, without touching the bus, if the display is already open.
    pub fn open(&mut self, config: Config) -> Result<(), Error> {
        if self.open {
            return Err(Error::AlreadyOpen);
        }
        debug!("ssd1327: sending {} byte init sequence", INIT_SEQUENCE.len());
        self.iface.send_commands(&INIT_SEQUENCE)?;
        config.send(&mut self.iface)?;
        self.batching = config.batching;
        self.open = true;
        Ok(())
    }

    /// Switch the panel off and mark the display closed. It may be opened again later, which
    /// repeats the power-up sequence.
    pub fn close(&mut self) -> Result<(), Error> {
        self.check_open()?;
        debug!("ssd1327: closing");
        Command::SetDisplayOn(false).send(&mut self.iface)?;
        self.open = false;
        Ok(())
    }

    /// Consume the driver and give back the interface, whether or not the display is open.
    pub fn release(self) -> DI {
        self.iface
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Panel width in pixels.
    pub fn width(&self) -> u16 {
        NUM_PIXEL_COLS
    }

    /// Panel height in pixels.
    pub fn height(&self) -> u16 {
        NUM_PIXEL_ROWS
    }

    /// The font used by `write_char` and `write_text`.
    pub fn font(&self) -> Font<'f> {
        self.font
    }

    /// Bind `font` for subsequent text drawing. The font data is borrowed for the lifetime of the
    /// display.
    pub fn set_font(&mut self, font: Font<'f>) {
        self.font = font;
    }

    /// Turn the panel on or off. Repeating the current state re-sends the command.
    pub fn set_power(&mut self, on: bool) -> Result<(), Error> {
        self.check_open()?;
        debug!("ssd1327: power {}", if on { "on" } else { "off" });
        Command::SetDisplayOn(on).send(&mut self.iface)
    }

    /// Set the contrast current. The power-up sequence programs 0x80.
    pub fn set_contrast(&mut self, current: u8) -> Result<(), Error> {
        self.check_open()?;
        Command::SetContrastCurrent(current).send(&mut self.iface)
    }

    /// Select normal, inverse or forced all-on/all-off output.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> Result<(), Error> {
        self.check_open()?;
        Command::SetDisplayMode(mode).send(&mut self.iface)
    }

    /// Declare the rectangle from `upper_left` (inclusive) to `lower_right` (exclusive) as the
    /// target of subsequent pixel data. The controller fills it left to right, top to bottom.
    ///
    /// Columns are addressed in pixel pairs, so an odd left edge is rounded down and an odd right
    /// edge drops its last pixel. Fails with `Error::InvalidGeometry` if the rectangle is empty,
    /// inverted, or extends past the panel.
    pub fn set_window(
        &mut self,
        upper_left: PixelCoord,
        lower_right: PixelCoord,
    ) -> Result<(), Error> {
        self.check_open()?;
        Window::new(upper_left, lower_right)?.send(&mut self.iface)
    }

    /// Fill the whole panel with a repeating 16-step gray ramp, one step per pixel pair. No
    /// window is set, so this relies on the address pointer still being at (0, 0) and covering
    /// the full panel, as it is right after `open`.
    pub fn fill_pattern(&mut self) -> Result<(), Error> {
        self.check_open()?;
        let total = NUM_BUF_COLS as usize * NUM_PIXEL_ROWS as usize;
        let ramp = (0..16u8).cycle().map(|level| level << 4 | level).take(total);
        self.send_pixels(ramp)
    }

    /// Set every pixel of the panel to gray `level` (0-15; higher bits are ignored).
    pub fn clear(&mut self, level: u8) -> Result<(), Error> {
        self.check_open()?;
        let window = Window::new(
            PixelCoord(0, 0),
            PixelCoord(NUM_PIXEL_COLS, NUM_PIXEL_ROWS),
        )?;
        window.send(&mut self.iface)?;
        let level = level & 0x0F;
        self.send_pixels(iter::repeat(level << 4 | level).take(window.len()))
    }

    fn check_open(&self) -> Result<(), Error> {
        if self.open {
            Ok(())
        } else {
            Err(Error::NotOpen)
        }
    }

    /// Write pixel-pair bytes as image data, split into transfers according to the configured
    /// `Batching`.
    fn send_pixels<I>(&mut self, mut pixels: I) -> Result<(), Error>
    where
        I: Iterator<Item = u8>,
    {
        match self.batching {
            Batching::PerByte => {
                for px in pixels {
                    self.iface.send_data(&[px])?;
                }
                Ok(())
            }
            Batching::Chunked => {
                // Paint using constant memory by alternately filling a chunk buffer from the
                // iterator and writing it out.
                let mut buf = [0u8; CHUNK_LEN];
                loop {
                    let mut chunk_len = 0;
                    for (slot, px) in buf.iter_mut().zip(&mut pixels) {
                        *slot = px;
                        chunk_len += 1;
                    }
                    if chunk_len > 0 {
                        trace!("ssd1327: {} byte data chunk", chunk_len);
                        self.iface.send_data(&buf[..chunk_len])?;
                    }
                    // A short chunk means the iterator is exhausted.
                    if chunk_len != buf.len() {
                        return Ok(());
                    }
                }
            }
        }
    }
}
