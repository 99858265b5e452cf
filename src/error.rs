//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//! - [`SensorError`](crate::ina219::SensorError) - INA219 bus errors
//!
//! ## Example
//!
//! ```
//! use ssd1331::{Builder, BuilderError};
//!
//! let result = Builder::new().blink_interval_ms(0).build();
//! assert!(matches!(result, Err(BuilderError::ZeroBlinkInterval)));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the first hardware error from the [`DisplayInterface`]
    /// implementation seen during the operation.
    Interface(I::Error),
    /// Drawing was requested before [`Display::init`](crate::Display::init)
    /// completed
    NotInitialized,
    /// A coordinate lies outside the addressable area
    ///
    /// Columns must be at most [`MAX_COLUMN`](crate::command::MAX_COLUMN),
    /// rows at most [`MAX_ROW`](crate::command::MAX_ROW).
    OutOfBounds {
        /// Column address requested
        col: u8,
        /// Row address requested
        row: u8,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::NotInitialized => write!(f, "Display not initialized"),
            Self::OutOfBounds { col, row } => {
                write!(f, "Coordinate out of bounds: col={col:#04x}, row={row:#04x}")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

#[cfg(feature = "defmt")]
impl<I: DisplayInterface> defmt::Format for Error<I> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Interface(_) => defmt::write!(f, "Interface error"),
            Self::NotInitialized => defmt::write!(f, "Display not initialized"),
            Self::OutOfBounds { col, row } => {
                defmt::write!(f, "Coordinate out of bounds: col={:#x}, row={:#x}", col, row)
            }
        }
    }
}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Blink interval was set to zero
    ZeroBlinkInterval,
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroBlinkInterval => write!(f, "Blink interval must be non-zero"),
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(feature = "defmt")]
impl defmt::Format for BuilderError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::ZeroBlinkInterval => defmt::write!(f, "Blink interval must be non-zero"),
        }
    }
}
