//! Write-behind pixel buffer
//!
//! Each SPI transfer carries a fixed setup cost, so pixel data is collected
//! into a fixed-capacity buffer and sent in as few transfers as possible.
//! A full buffer is sent immediately; whatever is left is sent by
//! [`PixelBuffer::flush`] when the drawing operation ends.
//!
//! Flush boundaries are invisible to the controller: it only sees one
//! contiguous run of data bytes after RAMWR.

use crate::interface::DisplayInterface;

/// Default capacity of the pixel buffer in bytes
pub const DEFAULT_PIXEL_BUFFER_SIZE: usize = 512;

/// Fixed-capacity byte queue in front of [`DisplayInterface::send_data`]
#[derive(Clone, Debug)]
pub struct PixelBuffer<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelBuffer<N> {
    const NON_EMPTY: () = assert!(N > 0, "pixel buffer capacity must be non-zero");

    /// Create an empty buffer
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            data: [0; N],
            len: 0,
        }
    }

    /// Capacity in bytes
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Bytes queued but not yet sent
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing is queued
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Queue one byte, sending the buffer if it becomes full
    pub fn push_byte<I: DisplayInterface>(
        &mut self,
        interface: &mut I,
        byte: u8,
    ) -> Result<(), I::Error> {
        self.data[self.len] = byte;
        self.len += 1;
        if self.len == N {
            self.flush(interface)?;
        }
        Ok(())
    }

    /// Queue one color, high byte first
    pub fn push_color<I: DisplayInterface>(
        &mut self,
        interface: &mut I,
        color: u16,
    ) -> Result<(), I::Error> {
        let [hi, lo] = color.to_be_bytes();
        self.push_byte(interface, hi)?;
        self.push_byte(interface, lo)
    }

    /// Queue the same color `count` times
    pub fn push_repeated<I: DisplayInterface>(
        &mut self,
        interface: &mut I,
        color: u16,
        count: u32,
    ) -> Result<(), I::Error> {
        for _ in 0..count {
            self.push_color(interface, color)?;
        }
        Ok(())
    }

    /// Send whatever is queued and reset the fill count
    ///
    /// An empty buffer sends nothing.
    pub fn flush<I: DisplayInterface>(&mut self, interface: &mut I) -> Result<(), I::Error> {
        if self.len == 0 {
            return Ok(());
        }
        let len = core::mem::take(&mut self.len);
        interface.send_data(&self.data[..len])
    }
}
