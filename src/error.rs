//! Error types for the driver
//!
//! - [`BuilderError`]: rejected configuration, caught before any bus traffic
//! - [`Error`]: failure of a drawing or init operation
//! - [`InterfaceError`](crate::interface::InterfaceError): what the bundled
//!   interface reports, carried inside [`Error::Interface`]
//!
//! Out-of-bounds drawing is not an error: requests are clipped to the panel
//! or dropped silently.
//!
//! ## Example
//!
//! ```
//! use st7735::{Builder, BuilderError, Geometry};
//!
//! // Missing panel variant
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingVariant)));
//!
//! // Geometry that does not fit controller memory
//! let result = Geometry::new(128, 160, 10, 0);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Number of columns in the controller's native frame memory
///
/// Visible panels are windows into this memory; width plus column offset
/// may not exceed it.
pub const MAX_COLUMNS: u16 = 132;

/// Number of rows in the controller's native frame memory
pub const MAX_ROWS: u16 = 162;

/// Error returned by [`Display`](crate::Display) operations
///
/// Generic over the interface so the transport's own error is kept.
/// Transport errors are never retried by the driver.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Pixel source is shorter than the declared image
    ///
    /// Returned by [`Display::draw_bitmap`](crate::Display::draw_bitmap) when
    /// the slice holds fewer than `width * height` colors.
    BufferTooSmall {
        /// Required number of pixels
        required: usize,
        /// Provided number of pixels
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Bitmap too small: required {required} pixels, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Configuration rejected by [`Builder::build`](crate::config::Builder::build) or [`Geometry::new`](crate::config::Geometry::new)
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Panel variant was not specified
    ///
    /// [`Builder::variant()`](crate::config::Builder::variant) must be called before building.
    MissingVariant,
    /// Geometry does not fit the controller's frame memory
    ///
    /// See [`Geometry::new()`](crate::config::Geometry::new) for constraints.
    InvalidGeometry {
        /// Visible width in pixels
        width: u16,
        /// Visible height in pixels
        height: u16,
        /// Column offset into controller memory
        col_offset: u16,
        /// Row offset into controller memory
        row_offset: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingVariant => write!(f, "Panel variant must be specified"),
            Self::InvalidGeometry {
                width,
                height,
                col_offset,
                row_offset,
            } => write!(
                f,
                "Invalid geometry {width}x{height} at offset ({col_offset}, {row_offset}) (controller memory is {MAX_COLUMNS}x{MAX_ROWS})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
