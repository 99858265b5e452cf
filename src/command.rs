//! SSD1331 command definitions
//!
//! This module defines the command bytes used to control the SSD1331
//! RGB OLED controller. Every byte, opcode or argument, is clocked out with
//! the DC pin low: the controller latches arguments in command mode, and this
//! driver never writes raw pixel data.
//!
//! ## Command Structure
//!
//! Each byte is its own transaction:
//! 1. Drive CS high, wait, drive CS low (guaranteed falling edge)
//! 2. Set DC low (command mode)
//! 3. Send one byte
//! 4. Deassert CS
//!
//! An opcode is followed by a fixed number of argument bytes, each sent
//! the same way.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1331::{command, DisplayInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # struct MockInterface;
//! # impl DisplayInterface for MockInterface {
//! #     type Error = Infallible;
//! #     fn send_command(&mut self, _command: u8) -> Result<(), Infallible> { Ok(()) }
//! #     fn reset<D: DelayNs>(&mut self, _delay: &mut D, _pulse_ms: u32) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # let mut interface = MockInterface;
//! // Turn the panel on
//! let _ = interface.send_command(command::DISPLAY_ON);
//!
//! // Enable fill for rectangle drawing
//! let _ = interface.send_command(command::FILL_ENABLE);
//! let _ = interface.send_command(0x01);
//! ```

// Addressable area

/// Highest column address (96 columns, 0x00..=0x5F)
pub const MAX_COLUMN: u8 = 0x5F;

/// Highest row address (64 rows, 0x00..=0x3F)
pub const MAX_ROW: u8 = 0x3F;

// Graphic acceleration commands

/// Draw line command (0x21)
///
/// Requires 7 bytes: [col start, row start, col end, row end, C, B, A]
pub const DRAW_LINE: u8 = 0x21;

/// Draw rectangle command (0x22)
///
/// Requires 10 bytes: [col start, row start, col end, row end,
/// outline C, B, A, fill C, B, A]. The fill colour is only used when
/// fill has been enabled with [`FILL_ENABLE`].
pub const DRAW_RECT: u8 = 0x22;

/// Clear window command (0x25)
///
/// Requires 4 bytes: [col start, row start, col end, row end]
pub const CLEAR_WINDOW: u8 = 0x25;

/// Fill enable/disable command (0x26)
///
/// Requires 1 byte. Bit 0 enables rectangle fill, bit 4 enables reverse
/// copy.
pub const FILL_ENABLE: u8 = 0x26;

// Contrast and current commands

/// Contrast for colour A (0x81)
pub const CONTRAST_A: u8 = 0x81;

/// Contrast for colour B (0x82)
pub const CONTRAST_B: u8 = 0x82;

/// Contrast for colour C (0x83)
pub const CONTRAST_C: u8 = 0x83;

/// Master current control (0x87)
///
/// Requires 1 byte, attenuation factor 0x00..=0x0F.
pub const MASTER_CURRENT: u8 = 0x87;

/// Second pre-charge speed for colour A (0x8A)
pub const PRECHARGE_A: u8 = 0x8A;

/// Second pre-charge speed for colour B (0x8B)
pub const PRECHARGE_B: u8 = 0x8B;

/// Second pre-charge speed for colour C (0x8C)
pub const PRECHARGE_C: u8 = 0x8C;

// Addressing and display mode commands

/// Remap and colour depth setting (0xA0)
///
/// Requires 1 byte. 0x72 selects 65k colour, RGB order, COM split.
pub const SET_REMAP: u8 = 0xA0;

/// Display start line (0xA1)
pub const START_LINE: u8 = 0xA1;

/// Display vertical offset (0xA2)
pub const DISPLAY_OFFSET: u8 = 0xA2;

/// Normal display mode (0xA4)
pub const NORMAL_DISPLAY: u8 = 0xA4;

/// Entire display on, all pixels at GS63 (0xA5)
pub const DISPLAY_ALL_ON: u8 = 0xA5;

/// Entire display off, all pixels at GS0 (0xA6)
pub const DISPLAY_ALL_OFF: u8 = 0xA6;

/// Inverse display mode (0xA7)
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Multiplex ratio (0xA8)
///
/// Requires 1 byte. 0x3F selects 1/64 duty.
pub const SET_MULTIPLEX: u8 = 0xA8;

/// Master configuration (0xAD)
///
/// Requires 1 byte. 0x8E selects the external VCC supply.
pub const SET_MASTER: u8 = 0xAD;

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on, normal mode (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Timing and power commands

/// Power save mode (0xB0)
pub const POWER_MODE: u8 = 0xB0;

/// Phase 1 and 2 period adjustment (0xB1)
pub const PRECHARGE: u8 = 0xB1;

/// Display clock divider and oscillator frequency (0xB3)
///
/// Requires 1 byte: bits 7:4 oscillator frequency, bits 3:0 divide ratio - 1.
pub const CLOCK_DIV: u8 = 0xB3;

/// Pre-charge voltage level (0xBB)
pub const PRECHARGE_LEVEL: u8 = 0xBB;

/// COM deselect voltage level (0xBE)
pub const VCOMH: u8 = 0xBE;
