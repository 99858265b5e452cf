//! Controller coordinates and drawing primitives
//!
//! All coordinates are in the controller's native addressing: columns
//! `0..=MAX_COLUMN`, rows `0..=MAX_ROW`, origin at the top-left. There is no
//! rotation or scaling; what is stored here is what goes on the wire.

use crate::color::Color;
use crate::command::{MAX_COLUMN, MAX_ROW};

/// A column/row address pair
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    /// Column address
    pub col: u8,
    /// Row address
    pub row: u8,
}

impl Point {
    /// Top-left corner of the panel
    pub const ORIGIN: Self = Self::new(0, 0);
    /// Bottom-right corner of the panel
    pub const BOTTOM_RIGHT: Self = Self::new(MAX_COLUMN, MAX_ROW);

    /// Create a new point
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Whether the point lies inside the addressable area
    pub const fn in_bounds(self) -> bool {
        self.col <= MAX_COLUMN && self.row <= MAX_ROW
    }

    /// Argument bytes in transmission order (column, row)
    pub const fn bytes(self) -> [u8; 2] {
        [self.col, self.row]
    }
}

/// A straight line for the draw-line command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Line {
    /// Start point
    pub start: Point,
    /// End point
    pub end: Point,
    /// Line colour
    pub color: Color,
}

impl Line {
    /// Create a new line
    pub const fn new(start: Point, end: Point, color: Color) -> Self {
        Self { start, end, color }
    }

    /// The 7 argument bytes following the opcode
    pub const fn args(&self) -> [u8; 7] {
        let [r, g, b] = self.color.bytes();
        [
            self.start.col,
            self.start.row,
            self.end.col,
            self.end.row,
            r,
            g,
            b,
        ]
    }
}

/// A rectangle for the draw-rectangle command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    /// Top-left corner
    pub start: Point,
    /// Bottom-right corner
    pub end: Point,
    /// Outline colour
    pub outline: Color,
    /// Fill colour, used only while fill is enabled
    pub fill: Color,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(start: Point, end: Point, outline: Color, fill: Color) -> Self {
        Self {
            start,
            end,
            outline,
            fill,
        }
    }

    /// A rectangle with the same outline and fill colour
    pub const fn filled(start: Point, end: Point, color: Color) -> Self {
        Self::new(start, end, color, color)
    }

    /// The 10 argument bytes following the opcode
    pub const fn args(&self) -> [u8; 10] {
        let [or, og, ob] = self.outline.bytes();
        let [fr, fg, fb] = self.fill.bytes();
        [
            self.start.col,
            self.start.row,
            self.end.col,
            self.end.row,
            or,
            og,
            ob,
            fr,
            fg,
            fb,
        ]
    }
}

#[cfg(feature = "graphics")]
impl TryFrom<embedded_graphics_core::geometry::Point> for Point {
    type Error = embedded_graphics_core::geometry::Point;

    /// Converts when the point falls inside the addressable area, returning
    /// the input point otherwise
    fn try_from(point: embedded_graphics_core::geometry::Point) -> Result<Self, Self::Error> {
        let col = u8::try_from(point.x).map_err(|_| point)?;
        let row = u8::try_from(point.y).map_err(|_| point)?;
        let converted = Self::new(col, row);
        if converted.in_bounds() {
            Ok(converted)
        } else {
            Err(point)
        }
    }
}
