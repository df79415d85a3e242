//! HX8357 TFT Display Driver
//!
//! A driver for the Himax HX8357-D TFT controller as found on 320x480 SPI
//! panels (Adafruit 3.5" TFT FeatherWing / PiTFT and similar).
//!
//! ## Features
//!
//! - `no_std` compatible, no heap
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - 16-bit RGB565 pixels
//! - Hardware rotation in 90 degree steps
//! - Solid fills streamed from a small stack buffer
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use hx8357::{Builder, Color, Display, Interface, Rotation};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::with_reset(spi, dc, rst);
//! let config = match Builder::new().rotation(Rotation::Rotate90).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! if display.init(&mut delay).is_err() {
//!     return;
//! }
//!
//! let _ = display.fill_screen(Color::BLACK);
//! let _ = display.fill_rect(10, 10, 100, 50, Color::from_rgb(0xFF, 0x80, 0x00));
//! let _ = display.draw_pixel(0, 0, Color::WHITE);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// RGB565 color type
pub mod color;
/// HX8357 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Orientation mapping
pub mod rotation;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use config::{
    Builder, Config, DEFAULT_SPI_CLOCK_HZ, Dimensions, HX8357_TFTHEIGHT, HX8357_TFTWIDTH,
    MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS, Rotation,
};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use interface::{DisplayInterface, FILL_CHUNK_BYTES, Interface, InterfaceError, NoResetPin};
