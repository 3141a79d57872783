//! 16-bit colors for RGB565 panels
//!
//! The controller is initialized for 16 bits per pixel (COLMOD 0x05): five
//! bits red, six bits green, five bits blue, packed into a `u16` and sent
//! high byte first.
//!
//! | Bits  | 15..11 | 10..5 | 4..0 |
//! |-------|--------|-------|------|
//! | Field | red    | green | blue |
//!
//! ## Example
//!
//! ```
//! use st7735::color::{color565, RED, WHITE};
//!
//! assert_eq!(color565(255, 0, 0), RED);
//! assert_eq!(color565(255, 255, 255), WHITE);
//! ```

/// Black
pub const BLACK: u16 = 0x0000;
/// White
pub const WHITE: u16 = 0xFFFF;
/// Red
pub const RED: u16 = 0xF800;
/// Green
pub const GREEN: u16 = 0x07E0;
/// Blue
pub const BLUE: u16 = 0x001F;
/// Cyan
pub const CYAN: u16 = 0x07FF;
/// Magenta
pub const MAGENTA: u16 = 0xF81F;
/// Yellow
pub const YELLOW: u16 = 0xFFE0;

/// Pack 8-bit channels into RGB565, dropping the low bits of each
pub const fn color565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// Raw value of an embedded-graphics color, as sent to the panel
#[cfg(feature = "graphics")]
pub fn from_rgb565(color: embedded_graphics_core::pixelcolor::Rgb565) -> u16 {
    use embedded_graphics_core::pixelcolor::IntoStorage;
    color.into_storage()
}
