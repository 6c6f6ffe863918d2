//! The command set for the SSD1327.
//!
//! Note 1: The display RAM of the SSD1327 is arranged in 128 rows and 64 columns, where each
//! column is one byte driving 2 adjacent pixels (segments) in the row. Each pixel is 4 bits/16
//! levels of intensity; the high nibble is the left pixel. Anywhere there is a "column" address,
//! it refers to one of these 2-pixel bytes.

use crate::error::Error;
use crate::interface::DisplayInterface;

pub mod consts {
    pub const NUM_PIXEL_COLS: u16 = 128;
    pub const NUM_PIXEL_ROWS: u16 = 128;
    pub const PIXELS_PER_COL: u16 = 2;
    pub const NUM_BUF_COLS: u8 = (NUM_PIXEL_COLS / PIXELS_PER_COL) as u8;
    pub const PIXEL_ROW_MAX: u8 = (NUM_PIXEL_ROWS - 1) as u8;
    pub const BUF_COL_MAX: u8 = NUM_BUF_COLS - 1;
}

use self::consts::*;

/// Power-up configuration sent by `Display::open` as one command transfer. The panel is left
/// switched off; `Display::set_power(true)` turns it on.
#[cfg_attr(rustfmt, rustfmt_skip)]
pub const INIT_SEQUENCE: [u8; 34] = [
    0xAE,             // display off while configuring
    0x15, 0x00, 0x7F, // column address 0-127
    0x75, 0x00, 0x7F, // row address 0-127
    0x81, 0x80,       // contrast 50%
    0xA0, 0x51,       // remap: normal orientation
    0xA1, 0x00,       // start line 0
    0xA2, 0x00,       // display offset 0
    0xA4,             // normal display
    0xA8, 0x7F,       // mux ratio 128
    0xB1, 0xF1,       // phase length
    0xB3, 0x00,       // display clock 100Hz
    0xAB, 0x01,       // internal VDD regulator on
    0xB6, 0x0F,       // second pre-charge period
    0xBE, 0x0F,       // VCOMH
    0xBC, 0x08,       // pre-charge voltage
    0xD5, 0x62,       // function selection B
    0xFD, 0x12,       // command lock off
];

/// Setting of the display mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// The display operates normally, showing the image in the display RAM.
    Normal,
    /// Every pixel is driven at grayscale level 15 regardless of RAM contents.
    AllOn,
    /// Every pixel is turned off regardless of RAM contents.
    AllOff,
    /// The display shows the RAM image with grayscale levels inverted (level 0->15, ..., 15->0).
    Inverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Set the column start and end address range when writing to the display RAM. The column
    /// address pointer is reset to the start column such that subsequent data lands there. Range
    /// is 0-63, inclusive on both ends. (Note 1)
    SetColumnAddress(u8, u8),
    /// Set the row start and end address range when writing to the display RAM. Range is 0-127,
    /// inclusive on both ends.
    SetRowAddress(u8, u8),
    /// Set the contrast current. Range 0-255.
    SetContrastCurrent(u8),
    /// Set the display operating mode. See enum for details.
    SetDisplayMode(DisplayMode),
    /// Turn the panel on (`true`) or off into sleep (`false`).
    SetDisplayOn(bool),
}

macro_rules! ok_command {
    ($buf:ident, $cmd:expr, []) => {{
        $buf[0] = $cmd;
        Ok(1)
    }};
    ($buf:ident, $cmd:expr, [$arg0:expr]) => {{
        $buf[0] = $cmd;
        $buf[1] = $arg0;
        Ok(2)
    }};
    ($buf:ident, $cmd:expr, [$arg0:expr, $arg1:expr]) => {{
        $buf[0] = $cmd;
        $buf[1] = $arg0;
        $buf[2] = $arg1;
        Ok(3)
    }};
}

impl Command {
    /// Longest encoding of any single command, opcode included.
    pub const MAX_LEN: usize = 3;

    /// Write the opcode and arguments of this command to the front of `buf`, returning how many
    /// bytes were used. Arguments outside the chip's range give `Error::InvalidGeometry`.
    pub fn encode(self, buf: &mut [u8; Self::MAX_LEN]) -> Result<usize, Error> {
        match self {
            Command::SetColumnAddress(start, end) => match (start, end) {
                (0..=BUF_COL_MAX, 0..=BUF_COL_MAX) if start <= end => {
                    ok_command!(buf, 0x15, [start, end])
                }
                _ => Err(Error::InvalidGeometry),
            },
            Command::SetRowAddress(start, end) => match (start, end) {
                (0..=PIXEL_ROW_MAX, 0..=PIXEL_ROW_MAX) if start <= end => {
                    ok_command!(buf, 0x75, [start, end])
                }
                _ => Err(Error::InvalidGeometry),
            },
            Command::SetContrastCurrent(current) => ok_command!(buf, 0x81, [current]),
            Command::SetDisplayMode(mode) => ok_command!(
                buf,
                match mode {
                    DisplayMode::Normal => 0xA4,
                    DisplayMode::AllOn => 0xA5,
                    DisplayMode::AllOff => 0xA6,
                    DisplayMode::Inverse => 0xA7,
                },
                []
            ),
            Command::SetDisplayOn(on) => ok_command!(
                buf,
                match on {
                    true => 0xAF,
                    false => 0xAE,
                },
                []
            ),
        }
    }

    /// Encode and transmit this command as a single command transfer.
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error>
    where
        DI: DisplayInterface,
    {
        let mut buf = [0u8; Self::MAX_LEN];
        let len = self.encode(&mut buf)?;
        iface.send_commands(&buf[..len])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::{Sent, TestSpyInterface};

    #[test]
    fn init_sequence_shape() {
        assert_eq!(INIT_SEQUENCE.len(), 34);
        assert_eq!(INIT_SEQUENCE[0], 0xAE);
        assert_eq!(&INIT_SEQUENCE[1..7], &[0x15, 0x00, 0x7F, 0x75, 0x00, 0x7F]);
        assert_eq!(&INIT_SEQUENCE[32..], &[0xFD, 0x12]);
        // The panel is switched on separately.
        assert!(!INIT_SEQUENCE.contains(&0xAF));
    }

    #[test]
    fn set_column_address() {
        let di = TestSpyInterface::new();
        Command::SetColumnAddress(23, 42).send(&mut di.split()).unwrap();
        di.check_multi(&[Sent::Cmd(vec![0x15, 23, 42])]);
        assert_eq!(
            Command::SetColumnAddress(64, 64).send(&mut di.split()),
            Err(Error::InvalidGeometry)
        );
        assert_eq!(
            Command::SetColumnAddress(23, 255).send(&mut di.split()),
            Err(Error::InvalidGeometry)
        );
        assert_eq!(
            Command::SetColumnAddress(42, 23).send(&mut di.split()),
            Err(Error::InvalidGeometry)
        );
        // Rejected commands never reach the bus.
        assert_eq!(di.writes(), 1);
    }

    #[test]
    fn set_row_address() {
        let di = TestSpyInterface::new();
        Command::SetRowAddress(0, 127).send(&mut di.split()).unwrap();
        di.check_multi(&[Sent::Cmd(vec![0x75, 0, 127])]);
        assert_eq!(
            Command::SetRowAddress(128, 128).send(&mut di.split()),
            Err(Error::InvalidGeometry)
        );
    }

    #[test]
    fn set_contrast_current() {
        let di = TestSpyInterface::new();
        Command::SetContrastCurrent(0xFF).send(&mut di.split()).unwrap();
        di.check_multi(&[Sent::Cmd(vec![0x81, 0xFF])]);
    }

    #[test]
    fn set_display_mode() {
        let di = TestSpyInterface::new();
        for mode in [
            DisplayMode::Normal,
            DisplayMode::AllOn,
            DisplayMode::AllOff,
            DisplayMode::Inverse,
        ]
        .iter()
        {
            Command::SetDisplayMode(*mode).send(&mut di.split()).unwrap();
        }
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(&[
            Sent::Cmd(vec![0xA4]),
            Sent::Cmd(vec![0xA5]),
            Sent::Cmd(vec![0xA6]),
            Sent::Cmd(vec![0xA7]),
        ]);
    }

    #[test]
    fn display_on_off() {
        let di = TestSpyInterface::new();
        Command::SetDisplayOn(true).send(&mut di.split()).unwrap();
        Command::SetDisplayOn(false).send(&mut di.split()).unwrap();
        di.check_multi(&[Sent::Cmd(vec![0xAF]), Sent::Cmd(vec![0xAE])]);
    }

    #[test]
    fn encode_reports_length() {
        let mut buf = [0u8; Command::MAX_LEN];
        assert_eq!(Command::SetDisplayOn(true).encode(&mut buf), Ok(1));
        assert_eq!(buf[0], 0xAF);
        assert_eq!(Command::SetContrastCurrent(7).encode(&mut buf), Ok(2));
        assert_eq!(&buf[..2], &[0x81, 7]);
        assert_eq!(Command::SetRowAddress(3, 9).encode(&mut buf), Ok(3));
        assert_eq!(buf, [0x75, 3, 9]);
    }
}
