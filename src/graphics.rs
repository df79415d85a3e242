//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] with [`Rgb565`] pixels, so any
//! embedded-graphics primitive, font or image can be drawn straight to the
//! panel. There is no frame buffer: every call turns into address-window and
//! pixel writes on the bus.
//!
//! Solid fills and clears use the repeated-data path; contiguous fills (images)
//! are streamed through [`Display::draw_raw`]. Everything is clipped to the
//! current rotated dimensions.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # use hx8357::{Builder, Display, Interface};
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
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let mut delay = MockDelay;
//! let mut display = Display::new(Interface::new(MockSpi, MockPin), config);
//! if display.init(&mut delay).is_err() {
//!     return;
//! }
//!
//! let _ = display.clear(Rgb565::BLACK);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::GREEN, 2))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, HX8357!",
//!     Point::new(10, 100),
//!     MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE),
//! )
//! .draw(&mut display);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    prelude::{Pixel, PointsIter},
    primitives::Rectangle,
};

use crate::color::Color;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

/// Corners of `area` clipped to the panel, or `None` if nothing is visible
fn clip<I>(display: &Display<I>, area: &Rectangle) -> Option<(u16, u16, u16, u16)>
where
    I: DisplayInterface,
{
    let visible = area.intersection(&display.bounding_box());
    let bottom_right = visible.bottom_right()?;
    // Both corners lie on the panel, so they fit in u16
    Some((
        visible.top_left.x as u16,
        visible.top_left.y as u16,
        bottom_right.x as u16,
        bottom_right.y as u16,
    ))
}

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                continue;
            };
            self.draw_pixel(x, y, Color::from(color))?;
        }
        Ok(())
    }

    fn fill_contiguous<Iter>(&mut self, area: &Rectangle, colors: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Self::Color>,
    {
        let Some((x0, y0, x1, y1)) = clip(self, area) else {
            return Ok(());
        };
        let (left, top) = (i32::from(x0), i32::from(y0));
        let (right, bottom) = (i32::from(x1), i32::from(y1));

        let pixels = area
            .points()
            .zip(colors)
            .filter(|(p, _)| p.x >= left && p.x <= right && p.y >= top && p.y <= bottom)
            .map(|(_, color)| Color::from(color));
        self.draw_raw(x0, y0, x1, y1, pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let Some((x0, y0, x1, y1)) = clip(self, area) else {
            return Ok(());
        };
        self.fill_rect(x0, y0, x1 - x0 + 1, y1 - y0 + 1, Color::from(color))
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(Color::from(color))
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}
