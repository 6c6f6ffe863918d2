use crate::error::IoError;

/// A transport able to deliver command and pixel data bytes to the SSD1327.
///
/// Implementations must keep command framing intact: every byte passed to `send_commands` is
/// clocked out with the D/C line low, and every byte passed to `send_data` with it high. Each call
/// is expected to be exactly one bus transaction.
pub trait DisplayInterface {
    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), IoError>;
    fn send_data(&mut self, buf: &[u8]) -> Result<(), IoError>;
}

pub mod spi {
    //! The SPI interface supports the "4-wire" interface of the driver, such that each word on the
    //! SPI bus is 8 bits and a separate GPIO selects between command and data bytes.

    use embedded_hal::blocking::spi::Write;
    use embedded_hal::digital::v2::OutputPin;
    use log::warn;

    use super::DisplayInterface;
    use crate::error::IoError;

    pub struct SpiInterface<SPI, DC> {
        /// The SPI master device connected to the SSD1327.
        spi: SPI,
        /// A GPIO output pin connected to the D/C (data/command) pin of the SSD1327 (the fourth
        /// "wire" of "4-wire" mode).
        dc: DC,
    }

    impl<SPI, DC> SpiInterface<SPI, DC>
    where
        SPI: Write<u8>,
        DC: OutputPin,
    {
        /// Create a new SPI interface to communicate with the display driver. `spi` is the SPI
        /// master device, and `dc` is the GPIO output pin connected to the D/C pin of the SSD1327.
        ///
        /// The SPI device must already be configured for the panel (mode, clock rate and bit
        /// order); this interface only writes.
        pub fn new(spi: SPI, dc: DC) -> Self {
            Self { spi, dc }
        }

        /// Give back the SPI device and D/C pin.
        pub fn release(self) -> (SPI, DC) {
            (self.spi, self.dc)
        }
    }

    impl<SPI, DC> DisplayInterface for SpiInterface<SPI, DC>
    where
        SPI: Write<u8>,
        DC: OutputPin,
    {
        fn send_commands(&mut self, cmds: &[u8]) -> Result<(), IoError> {
            self.dc.set_low().map_err(|_| IoError::ControlLine)?;
            let written = self.spi.write(cmds).map_err(|_| IoError::Bus);
            // Put the line back into data mode even when the write failed, so a half-sent command
            // does not leave the next data transfer being interpreted as commands.
            let restored = self.dc.set_high().map_err(|_| IoError::ControlLine);
            if written.is_err() && restored.is_err() {
                warn!("ssd1327: D/C line could not be restored after a failed command write");
            }
            written?;
            restored
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), IoError> {
            self.dc.set_high().map_err(|_| IoError::ControlLine)?;
            self.spi.write(buf).map_err(|_| IoError::Bus)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::cell::RefCell;
        use std::rc::Rc;
        use std::vec::Vec;

        #[derive(Debug, PartialEq)]
        enum Event {
            Dc(bool),
            Write(Vec<u8>),
        }

        type Log = Rc<RefCell<Vec<Event>>>;

        struct FakeSpi {
            log: Log,
            fail: bool,
        }

        impl Write<u8> for FakeSpi {
            type Error = ();
            fn write(&mut self, words: &[u8]) -> Result<(), ()> {
                if self.fail {
                    return Err(());
                }
                self.log.borrow_mut().push(Event::Write(words.to_vec()));
                Ok(())
            }
        }

        struct FakePin {
            log: Log,
            fail: bool,
        }

        impl OutputPin for FakePin {
            type Error = ();
            fn set_low(&mut self) -> Result<(), ()> {
                self.log.borrow_mut().push(Event::Dc(false));
                if self.fail {
                    Err(())
                } else {
                    Ok(())
                }
            }
            fn set_high(&mut self) -> Result<(), ()> {
                self.log.borrow_mut().push(Event::Dc(true));
                if self.fail {
                    Err(())
                } else {
                    Ok(())
                }
            }
        }

        fn iface(spi_fail: bool, pin_fail: bool) -> (SpiInterface<FakeSpi, FakePin>, Log) {
            let log = Rc::new(RefCell::new(Vec::new()));
            let spi = FakeSpi {
                log: log.clone(),
                fail: spi_fail,
            };
            let dc = FakePin {
                log: log.clone(),
                fail: pin_fail,
            };
            (SpiInterface::new(spi, dc), log)
        }

        #[test]
        fn commands_framed_low_then_high() {
            let (mut di, log) = iface(false, false);
            di.send_commands(&[0xAF]).unwrap();
            assert_eq!(
                *log.borrow(),
                [Event::Dc(false), Event::Write(vec![0xAF]), Event::Dc(true)]
            );
        }

        #[test]
        fn data_sent_with_line_high() {
            let (mut di, log) = iface(false, false);
            di.send_data(&[0x12, 0x34]).unwrap();
            assert_eq!(
                *log.borrow(),
                [Event::Dc(true), Event::Write(vec![0x12, 0x34])]
            );
        }

        #[test]
        fn failed_command_write_restores_data_mode() {
            let (mut di, log) = iface(true, false);
            assert_eq!(di.send_commands(&[0xAE]), Err(IoError::Bus));
            assert_eq!(*log.borrow(), [Event::Dc(false), Event::Dc(true)]);
        }

        #[test]
        fn pin_failure_is_control_line_error() {
            let (mut di, log) = iface(false, true);
            assert_eq!(di.send_commands(&[0xAE]), Err(IoError::ControlLine));
            assert_eq!(di.send_data(&[0x00]), Err(IoError::ControlLine));
            // Nothing reaches the bus if the line could not be set.
            assert!(log.borrow().iter().all(|e| match e {
                Event::Dc(_) => true,
                Event::Write(_) => false,
            }));
        }
    }
}
