//! Fixed command scripts and glyph tables
//!
//! The start-up recipe is kept as data so it can be compared byte for byte
//! against what reaches the bus. Values come from the SSD1331 datasheet and
//! the Adafruit SSD1331 bring-up sequence; order matters, since every step is
//! a register write.

use crate::color::Color;
use crate::command::*;
use crate::geometry::{Line, Point, Rect};

/// One opcode and its argument bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Opcode
    pub command: u8,
    /// Argument bytes sent after the opcode
    pub args: &'static [u8],
}

impl Step {
    /// Create a new step
    pub const fn new(command: u8, args: &'static [u8]) -> Self {
        Self { command, args }
    }

    /// Opcode followed by its arguments, in transmission order
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        core::iter::once(self.command).chain(self.args.iter().copied())
    }
}

/// Configuration written after the reset pulse, ending with display on
///
/// The third per-colour pre-charge entry repeats the colour A opcode (0x8A)
/// rather than using [`PRECHARGE_C`]. Panels brought up with this script were
/// tuned with that byte stream, so it is kept as is.
pub const INIT_SEQUENCE: &[Step] = &[
    Step::new(DISPLAY_OFF, &[]),
    // 65k colour, RGB order
    Step::new(SET_REMAP, &[0x72]),
    Step::new(START_LINE, &[0x00]),
    Step::new(DISPLAY_OFFSET, &[0x00]),
    Step::new(NORMAL_DISPLAY, &[]),
    // 1/64 duty
    Step::new(SET_MULTIPLEX, &[0x3F]),
    Step::new(SET_MASTER, &[0x8E]),
    Step::new(POWER_MODE, &[0x0B]),
    Step::new(PRECHARGE, &[0x31]),
    Step::new(CLOCK_DIV, &[0xF0]),
    Step::new(PRECHARGE_A, &[0x64]),
    Step::new(PRECHARGE_B, &[0x78]),
    Step::new(PRECHARGE_A, &[0x64]),
    Step::new(PRECHARGE_LEVEL, &[0x3A]),
    Step::new(VCOMH, &[0x3E]),
    Step::new(MASTER_CURRENT, &[0x06]),
    Step::new(CONTRAST_A, &[0xFF]),
    Step::new(CONTRAST_B, &[0xFF]),
    Step::new(CONTRAST_C, &[0xFF]),
    Step::new(DISPLAY_ON, &[]),
];

/// Enables rectangle fill; must follow [`INIT_SEQUENCE`] before filled
/// rectangles are drawn
pub const ENABLE_FILL: Step = Step::new(FILL_ENABLE, &[0x01]);

/// Clears the whole addressable area
pub const CLEAR_SCREEN: Step = Step::new(CLEAR_WINDOW, &[0x00, 0x00, MAX_COLUMN, MAX_ROW]);

/// Closed polyline forming a green check mark
pub const TICK_MARK: [Line; 6] = [
    Line::new(Point::new(0x19, 0x22), Point::new(0x28, 0x36), Color::GREEN),
    Line::new(Point::new(0x28, 0x36), Point::new(0x54, 0x08), Color::GREEN),
    Line::new(Point::new(0x54, 0x08), Point::new(0x57, 0x0B), Color::GREEN),
    Line::new(Point::new(0x57, 0x0B), Point::new(0x28, 0x3C), Color::GREEN),
    Line::new(Point::new(0x28, 0x3C), Point::new(0x16, 0x24), Color::GREEN),
    Line::new(Point::new(0x16, 0x24), Point::new(0x19, 0x22), Color::GREEN),
];

/// Bar and dot of a red exclamation mark
pub const ALERT_MARK: [Rect; 2] = [
    Rect::filled(Point::new(0x2C, 0x06), Point::new(0x34, 0x28), Color::RED),
    Rect::filled(Point::new(0x2C, 0x30), Point::new(0x34, 0x38), Color::RED),
];
