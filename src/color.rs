//! RGB565 color type
//!
//! The HX8357 is configured for 16 bits per pixel (`COLMOD = 0x55`). Each pixel
//! is one RGB565 word sent high byte first:
//!
//! | Bits  | 15..11 | 10..5 | 4..0 |
//! |-------|--------|-------|------|
//! | Field | red    | green | blue |
//!
//! ## Example
//!
//! ```
//! use hx8357::Color;
//!
//! let orange = Color::from_rgb(0xFF, 0x80, 0x00);
//! assert_eq!(orange.raw(), 0xFC00);
//! assert_eq!(Color::RED.to_be_bytes(), [0xF8, 0x00]);
//! ```

/// A 16-bit RGB565 color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u16);

impl Color {
    /// Black (0x0000)
    pub const BLACK: Self = Self(0x0000);
    /// White (0xFFFF)
    pub const WHITE: Self = Self(0xFFFF);
    /// Red (0xF800)
    pub const RED: Self = Self(0xF800);
    /// Green (0x07E0)
    pub const GREEN: Self = Self(0x07E0);
    /// Blue (0x001F)
    pub const BLUE: Self = Self(0x001F);
    /// Cyan (0x07FF)
    pub const CYAN: Self = Self(0x07FF);
    /// Magenta (0xF81F)
    pub const MAGENTA: Self = Self(0xF81F);
    /// Yellow (0xFFE0)
    pub const YELLOW: Self = Self(0xFFE0);

    /// Pack 8-bit red, green and blue channels into RGB565
    ///
    /// The low bits of each channel are dropped.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }

    /// The raw RGB565 word
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Wire representation: high byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::raw::{RawData, RawU16};
        Self(RawU16::from(color).into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_packs_channels() {
        assert_eq!(Color::from_rgb(0xFF, 0x00, 0x00), Color::RED);
        assert_eq!(Color::from_rgb(0x00, 0xFF, 0x00), Color::GREEN);
        assert_eq!(Color::from_rgb(0x00, 0x00, 0xFF), Color::BLUE);
        assert_eq!(Color::from_rgb(0xFF, 0xFF, 0xFF), Color::WHITE);
        // Low bits are dropped
        assert_eq!(Color::from_rgb(0x07, 0x03, 0x07), Color::BLACK);
    }

    #[test]
    fn test_bytes_are_high_first() {
        assert_eq!(Color(0x07E0).to_be_bytes(), [0x07, 0xE0]);
        assert_eq!(Color::YELLOW.to_be_bytes(), [0xFF, 0xE0]);
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn test_from_rgb565() {
        use embedded_graphics_core::pixelcolor::{Rgb565, RgbColor};
        assert_eq!(Color::from(Rgb565::RED), Color::RED);
        assert_eq!(Color::from(Rgb565::new(0, 63, 0)), Color::GREEN);
    }
}
