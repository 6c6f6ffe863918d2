//! Settings applied by `Display::open` on top of the fixed power-up sequence.

use crate::command::*;
use crate::error::Error;
use crate::interface;

/// How pixel data is split into bus transfers. The bytes reaching the display, and their order,
/// are the same in every mode; only the number of transfers differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Batching {
    /// One transfer per pixel-pair byte.
    PerByte,
    /// Collect up to `CHUNK_LEN` bytes before each transfer.
    Chunked,
}

impl Default for Batching {
    fn default() -> Self {
        Batching::PerByte
    }
}

/// Largest data transfer issued in `Batching::Chunked` mode. One 8x16 glyph fits exactly.
pub const CHUNK_LEN: usize = 64;

/// A configuration for the display. Builder methods offer a declarative way to either send a
/// configuration command at open time, or to leave the value programmed by the power-up
/// sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    pub(crate) batching: Batching,
    contrast_current_cmd: Option<Command>,
    display_mode_cmd: Option<Command>,
}

impl Config {
    /// Create a configuration which sends nothing beyond the power-up sequence and writes pixel
    /// data one byte per transfer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend this `Config` to explicitly configure display contrast current. See
    /// `Command::SetContrastCurrent`.
    pub fn contrast_current(self, current: u8) -> Self {
        Self {
            contrast_current_cmd: Some(Command::SetContrastCurrent(current)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the display mode. See
    /// `Command::SetDisplayMode`.
    pub fn display_mode(self, mode: DisplayMode) -> Self {
        Self {
            display_mode_cmd: Some(Command::SetDisplayMode(mode)),
            ..self
        }
    }

    /// Select how pixel data is split into bus transfers.
    pub fn batching(self, batching: Batching) -> Self {
        Self { batching, ..self }
    }

    /// Transmit commands to the display at `iface` necessary to put that display into the
    /// configuration encoded in `self`.
    pub(crate) fn send<DI>(&self, iface: &mut DI) -> Result<(), Error>
    where
        DI: interface::DisplayInterface,
    {
        self.contrast_current_cmd
            .map_or(Ok(()), |c| c.send(iface))?;
        self.display_mode_cmd.map_or(Ok(()), |c| c.send(iface))
    }
}
