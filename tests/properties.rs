//! Property-based tests for window addressing and glyph rasterization.
//! Drives the public API through a recording interface and checks the exact bytes on the wire.

use proptest::prelude::*;
use ssd1327::{Batching, Config, Display, DisplayInterface, Font, IoError, PixelCoord, FONT_8X16};

#[derive(Clone, Debug, PartialEq)]
enum Sent {
    Cmd(Vec<u8>),
    Data(Vec<u8>),
}

#[derive(Default)]
struct Recorder {
    sent: Vec<Sent>,
}

impl DisplayInterface for Recorder {
    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), IoError> {
        self.sent.push(Sent::Cmd(cmds.to_vec()));
        Ok(())
    }
    fn send_data(&mut self, buf: &[u8]) -> Result<(), IoError> {
        self.sent.push(Sent::Data(buf.to_vec()));
        Ok(())
    }
}

/// Run `draw` on a freshly opened display and return what it sent after the init sequence.
fn record<F>(font: Font, batching: Batching, draw: F) -> Vec<Sent>
where
    F: FnOnce(&mut Display<Recorder>),
{
    let mut disp = Display::new(Recorder::default());
    disp.set_font(font);
    disp.open(Config::new().batching(batching)).unwrap();
    draw(&mut disp);
    let mut sent = disp.release().sent;
    sent.remove(0);
    sent
}

fn data_bytes(sent: &[Sent]) -> Vec<u8> {
    sent.iter()
        .filter_map(|s| match s {
            Sent::Data(d) => Some(d.clone()),
            Sent::Cmd(_) => None,
        })
        .flatten()
        .collect()
}

/// Decode pixel-pair bytes into one bool per pixel.
fn decode(pixels: &[u8]) -> Vec<bool> {
    pixels
        .iter()
        .flat_map(|b| vec![b & 0xF0 == 0xF0, b & 0x0F == 0x0F])
        .collect()
}

fn source_bits(block: &[u8], width: usize, height: usize) -> Vec<bool> {
    let row_bytes = (width + 7) / 8;
    let mut bits = Vec::new();
    for r in 0..height {
        for c in 0..width {
            bits.push(block[r * row_bytes + c / 8] & (0x80 >> (c % 8)) != 0);
        }
    }
    bits
}

proptest! {
    /// A glyph at even X produces the window block for exactly its cell.
    #[test]
    fn glyph_window_bytes(col in 0u16..60, y in 0u16..=112, ch in any::<u8>()) {
        let x = col * 2;
        let sent = record(FONT_8X16, Batching::PerByte, |d| d.write_char(PixelCoord(x, y), ch).unwrap());
        let expect = vec![0x15, (x / 2) as u8, (x / 2 + 3) as u8, 0x75, y as u8, (y + 15) as u8];
        prop_assert_eq!(&sent[0], &Sent::Cmd(expect.clone()));

        // Setting the same window by hand sends the same block.
        let manual = record(FONT_8X16, Batching::PerByte, |d| {
            d.set_window(PixelCoord(x, y), PixelCoord(x + 8, y + 16)).unwrap()
        });
        prop_assert_eq!(manual, vec![Sent::Cmd(expect)]);
    }

    /// Drawing at odd X is indistinguishable from drawing at X - 1.
    #[test]
    fn odd_x_truncates(col in 0u16..60, y in 0u16..=112, ch in any::<u8>()) {
        let even = col * 2;
        let a = record(FONT_8X16, Batching::PerByte, |d| d.write_char(PixelCoord(even + 1, y), ch).unwrap());
        let b = record(FONT_8X16, Batching::PerByte, |d| d.write_char(PixelCoord(even, y), ch).unwrap());
        prop_assert_eq!(a, b);
    }

    /// Text is a sequence of glyph draws stepping right by the glyph width on a fixed row.
    #[test]
    fn text_is_sequence_of_glyphs(text in "[ -~]{1,16}", y in 0u16..=112) {
        let sent = record(FONT_8X16, Batching::PerByte, |d| d.write_text(PixelCoord(0, y), &text).unwrap());
        prop_assert_eq!(sent.len(), text.len() * 65);
        for (i, ch) in text.bytes().enumerate() {
            let glyph = &sent[i * 65..(i + 1) * 65];
            let x = (i * 8) as u8;
            prop_assert_eq!(
                &glyph[0],
                &Sent::Cmd(vec![0x15, x / 2, x / 2 + 3, 0x75, y as u8, (y + 15) as u8])
            );
            let expect: Vec<Sent> = FONT_8X16.pixels(ch).map(|b| Sent::Data(vec![b])).collect();
            prop_assert_eq!(&glyph[1..], &expect[..]);
        }
    }

    /// Rasterizing any 16 byte block and decoding the output gives back the source bits.
    #[test]
    fn rasterizer_round_trip(block in prop::array::uniform16(any::<u8>()), ch in any::<u8>()) {
        let mut table = vec![0u8; 256 * 16];
        let start = ch as usize * 16;
        table[start..start + 16].copy_from_slice(&block);
        let font = Font::new(8, 16, 16, &table).unwrap();
        let pixels: Vec<u8> = font.pixels(ch).collect();
        prop_assert_eq!(pixels.len(), 64);
        prop_assert_eq!(decode(&pixels), source_bits(&block, 8, 16));

        // The same block as a 16x8 glyph.
        let wide = Font::new(16, 8, 16, &table).unwrap();
        let pixels: Vec<u8> = wide.pixels(ch).collect();
        prop_assert_eq!(decode(&pixels), source_bits(&block, 16, 8));
    }

    /// Batching never changes the bytes that reach the panel.
    #[test]
    fn batching_is_transparent(text in "[ -~]{0,15}", col in 0u16..4, y in 0u16..=112) {
        let at = PixelCoord(col * 2, y);
        let per_byte = record(FONT_8X16, Batching::PerByte, |d| d.write_text(at, &text).unwrap());
        let chunked = record(FONT_8X16, Batching::Chunked, |d| d.write_text(at, &text).unwrap());
        prop_assert_eq!(data_bytes(&per_byte), data_bytes(&chunked));
    }

    /// Windows outside the panel or inverted are rejected without bus traffic.
    #[test]
    fn bad_windows_rejected(x1 in 0u16..200, y1 in 0u16..200, x2 in 0u16..200, y2 in 0u16..200) {
        let valid = x2 <= 128 && y2 <= 128 && x1 / 2 < x2 / 2 && y1 < y2;
        let mut result = Ok(());
        let sent = record(FONT_8X16, Batching::PerByte, |d| {
            result = d.set_window(PixelCoord(x1, y1), PixelCoord(x2, y2));
        });
        prop_assert_eq!(result.is_ok(), valid);
        prop_assert_eq!(sent.is_empty(), !valid);
    }
}

#[test]
fn pattern_cycles_every_sixteen_writes() {
    let sent = record(FONT_8X16, Batching::PerByte, |d| d.fill_pattern().unwrap());
    assert_eq!(sent.len(), 8192);
    let first: Vec<Sent> = (0..16u8).map(|l| Sent::Data(vec![l * 0x11])).collect();
    for chunk in sent.chunks(16) {
        assert_eq!(chunk, &first[..]);
    }
}
