//! Window abstraction: a validated rectangle of display RAM which receives subsequent pixel data.

use log::trace;

use crate::command::consts::*;
use crate::command::Command;
use crate::display::PixelCoord;
use crate::error::Error;
use crate::interface;

/// A rectangle of display RAM in controller addresses, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Window {
    col_start: u8,
    col_end: u8,
    row_start: u8,
    row_end: u8,
}

impl Window {
    /// Convert the pixel rectangle from `upper_left` (inclusive) to `lower_right` (exclusive) into
    /// column and row addresses. Columns hold two pixels each, so both X edges are halved.
    pub(crate) fn new(upper_left: PixelCoord, lower_right: PixelCoord) -> Result<Self, Error> {
        if false
            || lower_right.0 > NUM_PIXEL_COLS
            || lower_right.1 > NUM_PIXEL_ROWS
            || upper_left.0 / PIXELS_PER_COL >= lower_right.0 / PIXELS_PER_COL
            || upper_left.1 >= lower_right.1
        {
            return Err(Error::InvalidGeometry);
        }
        Ok(Self {
            col_start: (upper_left.0 / PIXELS_PER_COL) as u8,
            col_end: (lower_right.0 / PIXELS_PER_COL - 1) as u8,
            row_start: upper_left.1 as u8,
            row_end: (lower_right.1 - 1) as u8,
        })
    }

    /// Number of pixel-pair bytes that fill the window.
    pub(crate) fn len(&self) -> usize {
        let cols = (self.col_end - self.col_start) as usize + 1;
        let rows = (self.row_end - self.row_start) as usize + 1;
        cols * rows
    }

    /// Set the column and row address ranges in one command transfer:
    /// `[0x15, col_start, col_end, 0x75, row_start, row_end]`.
    pub(crate) fn send<DI>(&self, iface: &mut DI) -> Result<(), Error>
    where
        DI: interface::DisplayInterface,
    {
        trace!(
            "ssd1327: window cols {}-{} rows {}-{}",
            self.col_start,
            self.col_end,
            self.row_start,
            self.row_end
        );
        let mut cols = [0u8; Command::MAX_LEN];
        let mut rows = [0u8; Command::MAX_LEN];
        let cols_len = Command::SetColumnAddress(self.col_start, self.col_end).encode(&mut cols)?;
        let rows_len = Command::SetRowAddress(self.row_start, self.row_end).encode(&mut rows)?;
        let mut block = [0u8; 2 * Command::MAX_LEN];
        block[..cols_len].copy_from_slice(&cols[..cols_len]);
        block[cols_len..cols_len + rows_len].copy_from_slice(&rows[..rows_len]);
        iface.send_commands(&block[..cols_len + rows_len])?;
        Ok(())
    }
}
