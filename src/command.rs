//! ST7735 command definitions
//!
//! This module defines the command bytes used to control the ST7735 TFT
//! controller. Commands are sent over SPI with the DC pin low for the
//! command byte and high for any parameter or pixel data.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Set DC low (command mode)
//! 2. Send command byte
//! 3. Set DC high (data mode)
//! 4. Send parameter bytes (if any)
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7735::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::without_reset(MockSpi, MockPin);
//! // Invert colors
//! let _ = interface.send_command(command::INVON);
//!
//! // Rotate memory access order
//! let _ = interface.send_command(command::MADCTL);
//! let _ = interface.send_data(&[0xC8]);
//! ```

// System commands

/// Software reset (0x01)
pub const SWRESET: u8 = 0x01;

/// Sleep out (0x11)
///
/// The controller needs up to 120ms before accepting further commands.
pub const SLPOUT: u8 = 0x11;

/// Normal display mode on (0x13)
pub const NORON: u8 = 0x13;

/// Display inversion off (0x20)
pub const INVOFF: u8 = 0x20;

/// Display inversion on (0x21)
pub const INVON: u8 = 0x21;

/// Display on (0x29)
pub const DISPON: u8 = 0x29;

// Memory addressing commands

/// Column address set (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const CASET: u8 = 0x2A;

/// Row address set (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const RASET: u8 = 0x2B;

/// Memory write (0x2C)
///
/// Every data byte that follows lands in the current address window,
/// two bytes per pixel in 16-bit mode.
pub const RAMWR: u8 = 0x2C;

/// Memory data access control (0x36)
///
/// Requires 1 byte: row/column order, RGB/BGR bit.
pub const MADCTL: u8 = 0x36;

/// Interface pixel format (0x3A)
///
/// Requires 1 byte: 0x05 selects 16 bits per pixel.
pub const COLMOD: u8 = 0x3A;

// Panel function commands

/// Frame rate control, normal mode (0xB1)
pub const FRMCTR1: u8 = 0xB1;

/// Frame rate control, idle mode (0xB2)
pub const FRMCTR2: u8 = 0xB2;

/// Frame rate control, partial mode (0xB3)
pub const FRMCTR3: u8 = 0xB3;

/// Display inversion control (0xB4)
pub const INVCTR: u8 = 0xB4;

/// Power control 1 (0xC0)
pub const PWCTR1: u8 = 0xC0;

/// Power control 2 (0xC1)
pub const PWCTR2: u8 = 0xC1;

/// Power control 3, normal mode (0xC2)
pub const PWCTR3: u8 = 0xC2;

/// Power control 4, idle mode (0xC3)
pub const PWCTR4: u8 = 0xC3;

/// Power control 5, partial mode (0xC4)
pub const PWCTR5: u8 = 0xC4;

/// VCOM control 1 (0xC5)
pub const VMCTR1: u8 = 0xC5;

/// Positive gamma correction (0xE0)
///
/// Requires 16 bytes.
pub const GMCTRP1: u8 = 0xE0;

/// Negative gamma correction (0xE1)
///
/// Requires 16 bytes.
pub const GMCTRN1: u8 = 0xE1;

/// MADCTL value used by black-tab panels (row + column order flipped, RGB)
pub const MADCTL_BLACKTAB: u8 = 0xC0;
