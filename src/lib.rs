//! ST7735 TFT Display Driver
//!
//! A driver for ST7735R TFT controllers driving 128x160, 128x128 and 80x160
//! RGB565 panels over SPI.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Built-in initialization for the common panel variants
//! - Batched pixel transfers with a configurable buffer size
//! - Bitmaps delivered in arbitrary fragments, resumed mid-row
//! - Scalable 5x7 text
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7735::{color, Builder, Display, Interface, PanelVariant};
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
//! let interface = Interface::new(spi, dc, Some(rst));
//! let config = match Builder::new().variant(PanelVariant::GreenTab).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.init(&mut delay);
//! let _ = display.fill_screen(color::BLACK);
//!
//! display.set_cursor(4, 4);
//! display.set_text_color(color::YELLOW);
//! let _ = display.draw_string("Hello\nST7735");
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Write-behind pixel buffer
pub mod batch;
/// Whole-image and fragmented bitmap drawing
pub mod bitmap;
/// 16-bit RGB565 colors
pub mod color;
/// ST7735 command definitions
pub mod command;
/// Encoded initialization command lists
pub mod command_list;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Glyph tables for the text renderer
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// Text rendering
pub mod text;
/// Address window arithmetic and clipping
pub mod window;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod mock;

pub use batch::{DEFAULT_PIXEL_BUFFER_SIZE, PixelBuffer};
pub use bitmap::StreamCursor;
pub use color::color565;
pub use config::{Builder, Config, Geometry, MAX_COLUMNS, MAX_ROWS, PanelVariant};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use font::{Font, GLCD_5X7, Glcd5x7};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface, RECOMMENDED_SPI_FREQUENCY_HZ};
pub use text::TextState;
pub use window::Window;
