//! Whole-image and fragmented bitmap drawing
//!
//! Images are stored bottom-up: the first row of the source is the bottom
//! row on the panel. [`Display::draw_bitmap`] opens a window whose top row
//! receives the image's last row and walks the source rows backward while
//! the window fills forward.
//!
//! [`Display::draw_bitmap_stream`] accepts a picture as a flat byte run that
//! may arrive in arbitrary fragments. The run holds one source row per panel
//! row, top row first, each `2 * width` bytes long. A source row is read
//! backward: its last byte is the high byte of the leftmost panel pixel, so
//! the row's byte pairs land right to left, low byte first in the source.
//! The driver keeps a [`StreamCursor`] so each fragment continues exactly
//! where the previous one stopped, including in the middle of a row or of a
//! pixel.
//!
//! ```text
//! 4-wide source row:  lo(c3) hi(c3) lo(c2) hi(c2) lo(c1) hi(c1) lo(c0) hi(c0)
//! sent to the panel:  hi(c0) lo(c0) hi(c1) lo(c1) hi(c2) lo(c2) hi(c3) lo(c3)
//! ```
//!
//! ## Caller contract
//!
//! Call [`Display::reset_stream`] before each new image. Streaming past the
//! bottom of the panel is not detected; the controller simply stops
//! accepting data at the end of its window.

use crate::display::{Display, DisplayResult};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::window::Window;

/// Resume point of a fragmented bitmap stream
///
/// `y` is the panel row being filled and `x` the number of its source
/// pixels already received; those occupy the rightmost `x` columns.
/// `pending` holds the first byte of the next pixel when a fragment ended
/// between its two bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamCursor {
    /// Source pixels received for the current row, always below the panel width
    pub x: u16,
    /// Current row
    pub y: u32,
    /// Withheld first byte of the next pixel
    pub pending: Option<u8>,
}

impl StreamCursor {
    /// Position after `pixels` more complete pixels on a `width`-wide panel
    fn advanced(&self, pixels: u32, width: u16) -> (u16, u32) {
        let width = u64::from(width);
        let linear = u64::from(self.y) * width + u64::from(self.x) + u64::from(pixels);
        ((linear % width) as u16, (linear / width) as u32)
    }
}

/// Bytes of one stream call: the withheld byte, if any, then the fragment
struct Fragment<'a> {
    pending: Option<u8>,
    bytes: &'a [u8],
}

impl Fragment<'_> {
    fn len(&self) -> usize {
        usize::from(self.pending.is_some()) + self.bytes.len()
    }

    fn byte(&self, index: usize) -> u8 {
        match self.pending {
            Some(first) if index == 0 => first,
            Some(_) => self.bytes[index - 1],
            None => self.bytes[index],
        }
    }
}

impl<I, const N: usize> Display<I, N>
where
    I: DisplayInterface,
{
    /// Draw a complete bottom-up image
    ///
    /// `(x, y)` is the panel position of the left pixel of the image's first
    /// (bottom) row; the image extends upward from there. `image` holds
    /// `width * height` colors, row-major. Parts outside the panel are
    /// clipped.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `image` is shorter than
    /// `width * height`.
    pub fn draw_bitmap(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        image: &[u16],
    ) -> DisplayResult<I> {
        let required = usize::from(width) * usize::from(height);
        if image.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: image.len(),
            });
        }
        if width == 0 || height == 0 {
            return Ok(());
        }

        // Top edge may lie above the panel; clip in signed space
        let top = i32::from(y) - i32::from(height) + 1;
        let visible_top = top.max(0) as u16;
        let skipped_rows = (i32::from(visible_top) - top) as u16;
        let Some(window) = Window::clipped(
            &self.config.geometry,
            x,
            visible_top,
            width,
            height - skipped_rows,
        ) else {
            return Ok(());
        };

        self.open_window(&window)?;
        let columns = window.width() as usize;
        for row in window.y0..=window.y1 {
            let window_row = usize::from(row - visible_top) + usize::from(skipped_rows);
            let source_row = usize::from(height) - 1 - window_row;
            let start = source_row * usize::from(width);
            for &color in &image[start..start + columns] {
                self.push_color(color)?;
            }
        }
        self.flush()
    }

    /// Draw the next fragment of a streamed bitmap
    ///
    /// `bytes` continues the byte stream from where the previous call ended.
    /// A fragment may end in the middle of a row or between the two bytes of
    /// a pixel; the dangling byte is held back and sent with the next call.
    /// An empty fragment sends nothing.
    ///
    /// Each call opens at most three windows: the rest of a resumed row,
    /// one full-width window for all complete rows, and the right-hand part
    /// of a row left unfinished.
    pub fn draw_bitmap_stream(&mut self, bytes: &[u8]) -> DisplayResult<I> {
        let start = self.stream;
        let width = self.config.geometry.width;
        let fragment = Fragment {
            pending: start.pending,
            bytes,
        };
        let pixels = (fragment.len() / 2) as u32;

        if pixels == 0 {
            if let [byte] = bytes {
                self.stream.pending = Some(*byte);
            }
            return Ok(());
        }

        let (end_x, end_y) = start.advanced(pixels, width);
        log::trace!(
            "stream {} bytes: ({}, {}) -> ({}, {})",
            bytes.len(),
            start.x,
            start.y,
            end_x,
            end_y
        );

        let full_width = u32::from(width);
        let mut sent = 0;
        let mut row = start.y as u16;

        if start.x != 0 {
            let received = u32::from(start.x);
            let count = (full_width - received).min(pixels);
            let right = width - 1 - start.x;
            let window = Window::new(right + 1 - count as u16, row, right, row);
            self.open_window(&window)?;
            self.send_mirrored(&fragment, sent, count)?;
            sent += count;
            row += 1;
        }

        let full_rows = (pixels - sent) / full_width;
        if full_rows > 0 {
            let window = Window::new(0, row, width - 1, row + full_rows as u16 - 1);
            self.open_window(&window)?;
            for _ in 0..full_rows {
                self.send_mirrored(&fragment, sent, full_width)?;
                sent += full_width;
            }
            row += full_rows as u16;
        }

        let rest = pixels - sent;
        if rest > 0 {
            let window = Window::new(width - rest as u16, row, width - 1, row);
            self.open_window(&window)?;
            self.send_mirrored(&fragment, sent, rest)?;
        }

        self.flush()?;
        let leftover = fragment.len() % 2 != 0;
        self.stream = StreamCursor {
            x: end_x,
            y: end_y,
            pending: leftover.then(|| fragment.byte(fragment.len() - 1)),
        };
        Ok(())
    }

    /// Forget the stream position; the next fragment starts at `(0, 0)`
    pub fn reset_stream(&mut self) {
        self.stream = StreamCursor::default();
    }

    /// Current stream position
    pub fn stream_cursor(&self) -> StreamCursor {
        self.stream
    }

    /// Send `count` fragment pixels starting at pixel `first`, last one first
    fn send_mirrored(
        &mut self,
        fragment: &Fragment<'_>,
        first: u32,
        count: u32,
    ) -> DisplayResult<I> {
        for pixel in (first..first + count).rev() {
            let offset = pixel as usize * 2;
            self.push_byte(fragment.byte(offset + 1))?;
            self.push_byte(fragment.byte(offset))?;
        }
        Ok(())
    }
}
