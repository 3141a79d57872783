//! Address window arithmetic and clipping
//!
//! Every pixel burst is preceded by a column range (CASET), a row range
//! (RASET) and a memory write (RAMWR). Ranges are inclusive and expressed in
//! controller memory coordinates, so the panel offset from [`Geometry`] is
//! added before they are encoded.
//!
//! Drawing requests are clipped here first: an origin outside the panel
//! produces no window at all, and a far edge past the panel is truncated at
//! the boundary.

use crate::config::Geometry;

/// Inclusive rectangle of panel pixels that a pixel burst will fill
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// Left column
    pub x0: u16,
    /// Top row
    pub y0: u16,
    /// Right column (inclusive)
    pub x1: u16,
    /// Bottom row (inclusive)
    pub y1: u16,
}

impl Window {
    /// Create a window from inclusive corners
    pub fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Clip a `w x h` rectangle at `(x, y)` against the panel
    ///
    /// Returns `None` when nothing of the rectangle is visible.
    pub fn clipped(geometry: &Geometry, x: u16, y: u16, w: u16, h: u16) -> Option<Self> {
        if w == 0 || h == 0 || x >= geometry.width || y >= geometry.height {
            return None;
        }
        let x1 = (u32::from(x) + u32::from(w)).min(u32::from(geometry.width)) - 1;
        let y1 = (u32::from(y) + u32::from(h)).min(u32::from(geometry.height)) - 1;
        Some(Self::new(x, y, x1 as u16, y1 as u16))
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        u32::from(self.x1) - u32::from(self.x0) + 1
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        u32::from(self.y1) - u32::from(self.y0) + 1
    }

    /// Number of pixels covered
    pub fn pixel_count(&self) -> u32 {
        self.width() * self.height()
    }

    /// CASET parameters: start and end column, big-endian, offset applied
    pub fn column_range(&self, geometry: &Geometry) -> [u8; 4] {
        encode_range(self.x0, self.x1, geometry.col_offset)
    }

    /// RASET parameters: start and end row, big-endian, offset applied
    pub fn row_range(&self, geometry: &Geometry) -> [u8; 4] {
        encode_range(self.y0, self.y1, geometry.row_offset)
    }
}

fn encode_range(start: u16, end: u16, offset: u16) -> [u8; 4] {
    let [s_hi, s_lo] = start.wrapping_add(offset).to_be_bytes();
    let [e_hi, e_lo] = end.wrapping_add(offset).to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}
