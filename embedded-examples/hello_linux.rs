//! Full example code for setting up an SSD1327 display from Linux userspace. This runs on a
//! Raspberry Pi with a 128x128 SSD1327 module connected to SPI0 (CE0), GPIO24 for D/C, and GPIO25
//! for /RESET.

extern crate embedded_hal as hal_api;
extern crate linux_embedded_hal as hal;
extern crate ssd1327;

use std::io::{self, Read};
use std::process;

use hal::spidev::{SpiModeFlags, SpidevOptions};
use hal::sysfs_gpio::Direction;
use hal::{Delay, Spidev, SysfsPin};
use hal_api::blocking::delay::DelayMs;
use hal_api::digital::v2::OutputPin;
use ssd1327 as oled;

fn output_pin(number: u64) -> SysfsPin {
    let pin = SysfsPin::new(number);
    pin.export().unwrap();
    pin.set_direction(Direction::High).unwrap();
    pin
}

fn main() {
    let mut delay = Delay;

    // GPIO25 is the display's /RESET pin and GPIO24 is D/C. The ssd1327 library does not control
    // the reset pin; we will pulse it ourselves.
    let mut disp_rst = output_pin(25);
    let disp_dc = output_pin(24);

    // SPI0 at 2MHz, mode 0.
    let mut disp_spi = Spidev::open("/dev/spidev0.0").unwrap_or_else(|e| {
        eprintln!("SPI device could not open: {}", e);
        process::exit(1);
    });
    let options = SpidevOptions::new()
        .bits_per_word(8)
        .max_speed_hz(2_000_000)
        .mode(SpiModeFlags::SPI_MODE_0)
        .build();
    disp_spi.configure(&options).unwrap();

    let mut disp = oled::Display::new(oled::SpiInterface::new(disp_spi, disp_dc));

    // Reset: high 100ms, low 100ms, high 100ms.
    delay.delay_ms(100u16);
    disp_rst.set_low().unwrap();
    delay.delay_ms(100u16);
    disp_rst.set_high().unwrap();
    delay.delay_ms(100u16);

    if let Err(e) = disp.open(oled::Config::new()) {
        eprintln!("SSD1327 device could not open: {}", e);
        process::exit(1);
    }
    delay.delay_ms(200u16);
    disp.set_power(true).unwrap();

    disp.fill_pattern().unwrap();

    disp.write_text(oled::PixelCoord(0, 0), "Hello World").unwrap();
    disp.write_text(oled::PixelCoord(0, 16), "  SSD1327  ").unwrap();
    disp.write_text(oled::PixelCoord(0, 32), "Should Work").unwrap();

    // Wait for a keypress.
    let _ = io::stdin().read(&mut [0u8]);
}
