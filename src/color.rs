//! Colour type for the SSD1331 drawing commands
//!
//! The draw-line and draw-rectangle commands take their colours as three
//! argument bytes, named C, B and A by the datasheet. With the remap setting
//! the driver programs at start-up (RGB order), C carries red, B green and A
//! blue.
//!
//! ## Example
//!
//! ```
//! use ssd1331::Color;
//!
//! assert_eq!(Color::GREEN.bytes(), [0x00, 0xFF, 0x00]);
//! assert_eq!(Color::new(0x12, 0x34, 0x56).bytes(), [0x12, 0x34, 0x56]);
//! ```

/// An RGB colour as sent in a drawing command
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    /// Red component (colour C)
    pub r: u8,
    /// Green component (colour B)
    pub g: u8,
    /// Blue component (colour A)
    pub b: u8,
}

impl Color {
    /// All components off
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    /// Full red
    pub const RED: Self = Self::new(0xFF, 0x00, 0x00);
    /// Full green
    pub const GREEN: Self = Self::new(0x00, 0xFF, 0x00);
    /// Full blue
    pub const BLUE: Self = Self::new(0x00, 0x00, 0xFF);
    /// All components at full scale
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);

    /// Create a colour from its components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Argument bytes in transmission order (C, B, A)
    pub const fn bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb888> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb888) -> Self {
        use embedded_graphics_core::pixelcolor::RgbColor;
        Self::new(color.r(), color.g(), color.b())
    }
}
