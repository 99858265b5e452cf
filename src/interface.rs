//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the SSD1331 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The SSD1331 requires:
//! - SPI bus (MOSI + SCK), driven as a raw [`SpiBus`] because chip-select is
//!   toggled by the driver itself
//! - 3 GPIO pins:
//!   - **CS**: Chip select (output, active low)
//!   - **DC**: Data/Command select (output, low = command)
//!   - **RST**: Reset (output, active low)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use ssd1331::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! // Create interface with SPI bus, CS/DC/RST pins and a delay for CS setup
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin, MockDelay);
//!
//! // Pulse reset
//! let _ = interface.reset(&mut delay, 100);
//!
//! // Send a command byte
//! let _ = interface.send_command(0xAF); // Display on
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware interface to SSD1331 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If your board
/// drives chip-select in hardware, or you need to record traffic in tests,
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send one byte to the controller as a single transaction
    ///
    /// The implementation must:
    /// 1. Produce a falling edge on CS (drive high, wait, drive low)
    /// 2. Set DC pin low (command mode)
    /// 3. Transfer exactly one byte over SPI
    /// 4. Drive CS high again, whether or not the transfer succeeded
    ///
    /// Opcodes and their argument bytes all go through this method.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must drive RST high, low, then high again, waiting
    /// `pulse_ms` after each edge so the controller sees a clean low pulse.
    ///
    /// # Errors
    ///
    /// Returns an error if the reset pin cannot be driven.
    fn reset<D: DelayNs>(
        &mut self,
        delay: &mut D,
        pulse_ms: u32,
    ) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Default chip-select setup time in milliseconds
///
/// CS is held high for this long before being driven low, so controllers
/// that latch on the edge rather than the level always see a falling edge.
pub const DEFAULT_CS_SETUP_MS: u32 = 10;

/// Per-byte transfer budget in microseconds
///
/// `embedded-hal` buses take no timeout argument; the bus implementation
/// handed to [`Interface`] is expected to give up on a single byte after
/// this long.
pub const TRANSFER_TIMEOUT_US: u32 = 1000;

/// Hardware interface implementation for SSD1331
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI bus and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`]
/// * `CS` - Chip select pin implementing [`OutputPin`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `D` - Delay used for the CS setup time
pub struct Interface<SPI, CS, DC, RST, D> {
    /// SPI bus for communication
    spi: SPI,
    /// Chip select pin (active low)
    cs: CS,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Delay for the CS high-to-low edge
    delay: D,
    /// How long CS stays high before each transaction
    cs_setup_ms: u32,
}

impl<SPI, CS, DC, RST, D> Interface<SPI, CS, DC, RST, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus (must implement [`SpiBus`])
    /// * `cs` - Chip select pin (output, active low)
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    /// * `delay` - Delay used between CS high and CS low
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST, delay: D) -> Self {
        Self {
            spi,
            cs,
            dc,
            rst,
            delay,
            cs_setup_ms: DEFAULT_CS_SETUP_MS,
        }
    }

    /// Set the chip-select setup time in milliseconds
    ///
    /// Default is 10ms. Set to 0 to skip the wait entirely.
    pub fn set_cs_setup(&mut self, setup_ms: u32) -> &mut Self {
        self.cs_setup_ms = setup_ms;
        self
    }

    /// Get the current chip-select setup time in milliseconds
    pub fn cs_setup(&self) -> u32 {
        self.cs_setup_ms
    }

    /// Consume the interface and hand back the bus, pins and delay
    pub fn release(self) -> (SPI, CS, DC, RST, D) {
        (self.spi, self.cs, self.dc, self.rst, self.delay)
    }
}

impl<SPI, CS, DC, RST, D, PinErr> Interface<SPI, CS, DC, RST, D>
where
    SPI: SpiBus,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    D: DelayNs,
{
    /// Select the device and clock out one byte, leaving CS asserted
    fn select_and_transfer(&mut self, byte: u8) -> Result<(), InterfaceError<SPI::Error, PinErr>> {
        self.cs.set_high().map_err(InterfaceError::Pin)?;
        self.delay.delay_ms(self.cs_setup_ms);
        self.cs.set_low().map_err(InterfaceError::Pin)?;

        self.dc.set_low().map_err(InterfaceError::Pin)?;

        let mut rx = [0u8; 1];
        self.spi
            .transfer(&mut rx, &[byte])
            .map_err(InterfaceError::Spi)?;
        self.spi.flush().map_err(InterfaceError::Spi)?;
        Ok(())
    }
}

impl<SPI, CS, DC, RST, D, PinErr> DisplayInterface for Interface<SPI, CS, DC, RST, D>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    D: DelayNs,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        let transferred = self.select_and_transfer(command);
        // CS goes high on every path, the transfer error wins if both fail
        let released = self.cs.set_high().map_err(InterfaceError::Pin);
        if let Err(e) = &transferred {
            log::warn!("ssd1331: transfer of {command:#04x} failed: {e:?}");
        }
        transferred.and(released)
    }

    fn reset<DL: DelayNs>(
        &mut self,
        delay: &mut DL,
        pulse_ms: u32,
    ) -> InterfaceResult<(), Self::Error> {
        // Reset sequence: HIGH -> wait -> LOW -> wait -> HIGH -> wait
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(pulse_ms);
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(pulse_ms);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(pulse_ms);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::ErrorType as SpiErrorType;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Event {
        CsHigh,
        CsLow,
        DcLow,
        DcHigh,
        RstHigh,
        RstLow,
        Transfer(u8),
        Flush,
        DelayMs(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    struct MockSpi {
        log: Log,
        fail_on: Option<u8>,
    }

    impl SpiErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiBus for MockSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            for word in words {
                self.log.borrow_mut().push(Event::Transfer(*word));
            }
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
            for word in write {
                if self.fail_on == Some(*word) {
                    return Err(MockError);
                }
                self.log.borrow_mut().push(Event::Transfer(*word));
            }
            Ok(())
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Flush);
            Ok(())
        }
    }

    #[derive(Clone, Copy)]
    enum Role {
        Cs,
        Dc,
        Rst,
    }

    struct MockPin {
        log: Log,
        role: Role,
    }

    impl ErrorType for MockPin {
        type Error = MockError;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            let event = match self.role {
                Role::Cs => Event::CsLow,
                Role::Dc => Event::DcLow,
                Role::Rst => Event::RstLow,
            };
            self.log.borrow_mut().push(event);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            let event = match self.role {
                Role::Cs => Event::CsHigh,
                Role::Dc => Event::DcHigh,
                Role::Rst => Event::RstHigh,
            };
            self.log.borrow_mut().push(event);
            Ok(())
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::DelayMs(ms));
        }
    }

    type TestInterface = Interface<MockSpi, MockPin, MockPin, MockPin, MockDelay>;

    fn test_interface(fail_on: Option<u8>) -> (TestInterface, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let pin = |role| MockPin {
            log: log.clone(),
            role,
        };
        let interface = Interface::new(
            MockSpi {
                log: log.clone(),
                fail_on,
            },
            pin(Role::Cs),
            pin(Role::Dc),
            pin(Role::Rst),
            MockDelay { log: log.clone() },
        );
        (interface, log)
    }

    #[test]
    fn test_default_cs_setup() {
        let (interface, _) = test_interface(None);
        assert_eq!(interface.cs_setup(), DEFAULT_CS_SETUP_MS);
        assert_eq!(DEFAULT_CS_SETUP_MS, 10);
        assert_eq!(TRANSFER_TIMEOUT_US, 1000);
    }

    #[test]
    fn test_send_command_transaction_order() {
        let (mut interface, log) = test_interface(None);
        assert!(interface.send_command(0xAF).is_ok());

        assert_eq!(
            *log.borrow(),
            [
                Event::CsHigh,
                Event::DelayMs(10),
                Event::CsLow,
                Event::DcLow,
                Event::Transfer(0xAF),
                Event::Flush,
                Event::CsHigh,
            ]
        );
    }

    #[test]
    fn test_send_command_releases_cs_on_spi_failure() {
        let (mut interface, log) = test_interface(Some(0x21));
        let result = interface.send_command(0x21);

        assert!(matches!(result, Err(InterfaceError::Spi(MockError))));
        assert_eq!(log.borrow().last(), Some(&Event::CsHigh));
        assert!(!log.borrow().contains(&Event::Transfer(0x21)));
    }

    #[test]
    fn test_back_to_back_commands_transfer_one_byte_per_selection() {
        let (mut interface, log) = test_interface(None);
        for byte in [0xA0, 0x72, 0xA1] {
            assert!(interface.send_command(byte).is_ok());
        }

        let log = log.borrow();
        let mut selected = false;
        let mut transfers_while_selected = 0;
        let mut transactions = 0;
        for event in log.iter() {
            match event {
                Event::CsLow => {
                    selected = true;
                    transfers_while_selected = 0;
                }
                Event::CsHigh if selected => {
                    assert_eq!(transfers_while_selected, 1);
                    selected = false;
                    transactions += 1;
                }
                Event::Transfer(_) => {
                    assert!(selected);
                    transfers_while_selected += 1;
                }
                _ => {}
            }
        }
        assert_eq!(transactions, 3);
        assert!(!selected);
    }

    #[test]
    fn test_set_cs_setup() {
        let (mut interface, log) = test_interface(None);
        interface.set_cs_setup(0);
        assert_eq!(interface.cs_setup(), 0);

        assert!(interface.send_command(0xA4).is_ok());
        assert_eq!(log.borrow()[1], Event::DelayMs(0));
    }

    #[test]
    fn test_reset_pulse() {
        let (mut interface, log) = test_interface(None);
        let mut delay = MockDelay { log: log.clone() };
        assert!(interface.reset(&mut delay, 100).is_ok());

        assert_eq!(
            *log.borrow(),
            [
                Event::RstHigh,
                Event::DelayMs(100),
                Event::RstLow,
                Event::DelayMs(100),
                Event::RstHigh,
                Event::DelayMs(100),
            ]
        );
    }

    #[test]
    fn test_release_returns_parts() {
        let (interface, _) = test_interface(Some(0x00));
        let (spi, _cs, _dc, _rst, _delay) = interface.release();
        assert_eq!(spi.fail_on, Some(0x00));
    }
}
