//! SSD1331 OLED Display Driver
//!
//! A driver for the SSD1331 96x64 RGB OLED controller, plus a register-level
//! driver for the INA219 current monitor found on the same board.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Start-up script kept as a static table
//! - Hardware line, rectangle and clear commands (no framebuffer)
//! - Cancellable alert blinking
//! - Configurable abort/continue behaviour on bus errors
//! - `embedded-graphics` colour and point conversions (with `graphics` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use core::sync::atomic::AtomicBool;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use ssd1331::{Builder, Display, Interface};
//!
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
//! # #[derive(Clone, Copy)]
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let (spi, cs, dc, rst) = (MockSpi, MockPin, MockPin, MockPin);
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, cs, dc, rst, delay);
//! let config = match Builder::new().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! if display.init(&mut delay).is_err() {
//!     return;
//! }
//! let _ = display.draw_tick_mark();
//!
//! // Blink the alert until another context raises the flag
//! static STOP: AtomicBool = AtomicBool::new(false);
//! let _ = display.alert(&mut delay, &STOP);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Colour type for drawing commands
pub mod color;
/// SSD1331 command definitions
pub mod command;
/// Driver configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Controller coordinates and drawing primitives
pub mod geometry;
/// INA219 current monitor
pub mod ina219;
/// Hardware interface abstraction
pub mod interface;
/// Fixed command scripts and glyph tables
pub mod sequence;

pub use color::Color;
pub use config::{Builder, Config, ErrorPolicy};
pub use display::{Display, DisplayMode, Forever, State, StopSignal};
pub use error::{BuilderError, Error};
pub use geometry::{Line, Point, Rect};
pub use ina219::{Ina219, SensorError};
pub use interface::InterfaceError;
pub use interface::{DEFAULT_CS_SETUP_MS, DisplayInterface, Interface, TRANSFER_TIMEOUT_US};
