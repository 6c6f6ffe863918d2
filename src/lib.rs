//! Driver library for the Solomon Systech SSD1327 128x128 16-level grayscale OLED controller,
//! connected over 4-wire SPI.
//!
//! The driver has no frame buffer. Text is rasterized glyph by glyph from a 1 bit per pixel font
//! straight into the controller's display RAM.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod interface;

// Re-exports for primary API.
pub use command::{consts, DisplayMode};
pub use config::{Batching, Config};
pub use display::{Display, PixelCoord};
pub use error::{Error, IoError};
pub use font::{Font, FONT_8X16};
pub use interface::spi::SpiInterface;
pub use interface::DisplayInterface;
