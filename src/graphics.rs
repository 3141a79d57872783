//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] with [`Rgb565`] colors, so any
//! embedded-graphics drawable can be rendered directly. Pixels go straight
//! to the controller through the pixel buffer; there is no framebuffer.
//!
//! Filled areas are sent as one address window each, so rectangles and
//! images are much cheaper than individually drawn pixels.
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
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # use st7735::{Builder, Display, Interface, PanelVariant};
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
//! # let interface = Interface::new(MockSpi, MockPin, Some(MockPin));
//! # let config = match Builder::new().variant(PanelVariant::BlackTab).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut display = Display::new(interface, config);
//!
//! let _ = display.clear(Rgb565::BLACK);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::BLUE))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(40, 60), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::YELLOW, 2))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, TFT!",
//!     Point::new(10, 120),
//!     MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE),
//! )
//! .draw(&mut display);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    prelude::Pixel,
    primitives::{PointsIter, Rectangle},
};

use crate::color::from_rgb565;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::window::Window;

/// Panel window covering the visible part of `area`, if any
fn visible_window(area: &Rectangle, bounds: &Rectangle) -> Option<(Rectangle, Window)> {
    let drawable = area.intersection(bounds);
    if drawable.size.width == 0 || drawable.size.height == 0 {
        return None;
    }
    let Point { x, y } = drawable.top_left;
    let x0 = x as u16;
    let y0 = y as u16;
    let x1 = (x + drawable.size.width as i32 - 1) as u16;
    let y1 = (y + drawable.size.height as i32 - 1) as u16;
    Some((drawable, Window::new(x0, y0, x1, y1)))
}

impl<I, const N: usize> DrawTarget for Display<I, N>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let sz = self.size();

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }

            let x = x as u32;
            let y = y as u32;

            if x >= sz.width || y >= sz.height {
                continue;
            }

            self.write_pixel(x as u16, y as u16, from_rgb565(color))?;
        }

        Ok(())
    }

    fn fill_contiguous<Iter>(&mut self, area: &Rectangle, colors: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Self::Color>,
    {
        let Some((drawable, window)) = visible_window(area, &self.bounding_box()) else {
            return Ok(());
        };

        self.open_window(&window)?;
        for (_, color) in area
            .points()
            .zip(colors)
            .filter(|(pos, _)| drawable.contains(*pos))
        {
            self.push_color(from_rgb565(color))?;
        }
        self.flush()
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let Some((_, window)) = visible_window(area, &self.bounding_box()) else {
            return Ok(());
        };
        self.fill_rect(
            window.x0,
            window.y0,
            window.width() as u16,
            window.height() as u16,
            from_rgb565(color),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(from_rgb565(color))
    }
}

impl<I, const N: usize> OriginDimensions for Display<I, N>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Geometry, PanelVariant};
    use crate::error::MAX_COLUMNS;
    use crate::mock::MockInterface;
    use alloc::vec::Vec;
    use embedded_graphics::{
        pixelcolor::RgbColor,
        prelude::*,
        primitives::{Line, PrimitiveStyle},
    };

    fn test_display() -> Display<MockInterface> {
        let config = Builder::new()
            .variant(PanelVariant::GreenTab)
            .build()
            .unwrap();
        Display::new(MockInterface::new(), config)
    }

    /// Colors at panel coordinates, read back from the simulated controller
    fn panel_pixel(display: &Display<MockInterface>, x: usize, y: usize) -> Option<u16> {
        let geometry = *display.geometry();
        let col = x + usize::from(geometry.col_offset);
        let row = y + usize::from(geometry.row_offset);
        display.interface.render()[row * usize::from(MAX_COLUMNS) + col]
    }

    #[test]
    fn test_size_matches_variant() {
        let display = test_display();
        assert_eq!(display.size(), Size::new(128, 160));
        assert_eq!(
            display.bounding_box(),
            Rectangle::new(Point::zero(), Size::new(128, 160))
        );
    }

    #[test]
    fn test_draw_iter_skips_out_of_bounds() {
        let mut display = test_display();
        display
            .draw_iter([
                Pixel(Point::new(-1, 0), Rgb565::RED),
                Pixel(Point::new(0, -1), Rgb565::RED),
                Pixel(Point::new(128, 0), Rgb565::RED),
                Pixel(Point::new(0, 160), Rgb565::RED),
                Pixel(Point::new(3, 4), Rgb565::GREEN),
            ])
            .unwrap();
        assert_eq!(display.interface.windows().len(), 1);
        assert_eq!(panel_pixel(&display, 3, 4), Some(0x07E0));
    }

    #[test]
    fn test_fill_solid_is_clipped_to_one_window() {
        let mut display = test_display();
        display
            .fill_solid(
                &Rectangle::new(Point::new(-5, 10), Size::new(20, 4)),
                Rgb565::RED,
            )
            .unwrap();
        // Panel (0,10)-(14,13) plus the green tab offset of 2 columns, 1 row
        assert_eq!(
            display.interface.windows(),
            alloc::vec![([0, 2, 0, 16], [0, 11, 0, 14])]
        );
        assert_eq!(display.interface.pixel_bursts()[0].len(), 2 * 15 * 4);
    }

    #[test]
    fn test_fill_solid_outside_sends_nothing() {
        let mut display = test_display();
        display
            .fill_solid(
                &Rectangle::new(Point::new(-30, -30), Size::new(10, 10)),
                Rgb565::RED,
            )
            .unwrap();
        assert!(display.interface.events.is_empty());
    }

    #[test]
    fn test_fill_contiguous_keeps_visible_colors_in_order() {
        let mut display = test_display();
        let colors: Vec<Rgb565> = (0..6u8).map(|i| Rgb565::new(0, 0, i)).collect();
        // 3x2 area with its left column off the panel
        display
            .fill_contiguous(&Rectangle::new(Point::new(-1, 0), Size::new(3, 2)), colors)
            .unwrap();
        assert_eq!(
            display.interface.pixel_bursts(),
            alloc::vec![alloc::vec![0, 1, 0, 2, 0, 4, 0, 5]]
        );
    }

    #[test]
    fn test_clear_fills_screen() {
        let mut display = test_display();
        display.clear(Rgb565::BLACK).unwrap();
        assert_eq!(display.interface.pixel_bursts()[0].len(), 2 * 128 * 160);
    }

    #[test]
    fn test_line_primitive_lands_on_panel() {
        let mut display = test_display();
        Line::new(Point::new(0, 5), Point::new(3, 5))
            .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 1))
            .draw(&mut display)
            .unwrap();
        for x in 0..4 {
            assert_eq!(panel_pixel(&display, x, 5), Some(0xFFFF));
        }
        assert_eq!(panel_pixel(&display, 4, 5), None);
    }

    #[test]
    fn test_custom_geometry_changes_bounds() {
        let config = Builder::new()
            .variant(PanelVariant::RedTab)
            .geometry(Geometry::new(4, 2, 0, 0).unwrap())
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::new(), config);
        assert_eq!(display.size(), Size::new(4, 2));
        display
            .fill_solid(
                &Rectangle::new(Point::zero(), Size::new(10, 10)),
                Rgb565::BLUE,
            )
            .unwrap();
        assert_eq!(
            display.interface.windows(),
            alloc::vec![([0, 0, 0, 3], [0, 0, 0, 1])]
        );
    }
}
