//! Error types returned by the driver.

use core::fmt;

/// Which half of the 4-wire interface failed during a transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// The SPI write itself failed.
    Bus,
    /// Driving the D/C (data/command) GPIO failed.
    ControlLine,
}

/// Errors reported by the display driver. The driver never retries; every error is returned to
/// the immediate caller and aborts the operation in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// `Display::open` was called on a display that is already open.
    AlreadyOpen,
    /// A command or drawing operation was attempted on a display that has not been opened, or has
    /// been closed.
    NotOpen,
    /// A window or glyph rectangle is empty, inverted, or does not fit on the panel.
    InvalidGeometry,
    /// The font descriptor cannot be rasterized by this driver (odd glyph width, short glyph
    /// table, etc).
    UnsupportedFont,
    /// The interface failed to transmit.
    Io(IoError),
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IoError::Bus => f.write_str("SPI bus write failed"),
            IoError::ControlLine => f.write_str("D/C line could not be driven"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::AlreadyOpen => f.write_str("display is already open"),
            Error::NotOpen => f.write_str("display is not open"),
            Error::InvalidGeometry => f.write_str("rectangle is empty or outside the panel"),
            Error::UnsupportedFont => f.write_str("font is not supported by the rasterizer"),
            Error::Io(e) => write!(f, "interface error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for IoError {}
