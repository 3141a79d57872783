//! Text rendering with a column-wise bitmap font
//!
//! Each character occupies a cell of 6x8 font pixels: five glyph columns and
//! one gap column. Every font pixel is drawn as a `size_x` by `size_y`
//! rectangle through [`Display::fill_rect`], so scaling and clipping follow
//! the same path as any other fill.
//!
//! The background is drawn only when it differs from the text color; equal
//! colors mean transparent text.

use crate::display::{Display, DisplayResult};
use crate::font::{Font, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::interface::DisplayInterface;

/// Horizontal advance per character in font pixels, glyph plus gap
const CELL_WIDTH: u16 = GLYPH_WIDTH as u16 + 1;

/// Vertical advance per line in font pixels
const CELL_HEIGHT: u16 = GLYPH_HEIGHT as u16;

/// Text cursor, colors, scale and wrap flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextState {
    /// Column of the next character's top-left corner
    pub cursor_x: u16,
    /// Row of the next character's top-left corner
    pub cursor_y: u16,
    /// Foreground color
    pub color: u16,
    /// Background color; equal to `color` for transparent text
    pub background: u16,
    /// Horizontal scale factor
    pub size_x: u8,
    /// Vertical scale factor
    pub size_y: u8,
    /// Whether characters that would cross the right edge start a new line
    pub wrap: bool,
}

impl TextState {
    /// White transparent text at the origin, unscaled
    pub fn new(wrap: bool) -> Self {
        Self {
            cursor_x: 0,
            cursor_y: 0,
            color: 0xFFFF,
            background: 0xFFFF,
            size_x: 1,
            size_y: 1,
            wrap,
        }
    }

    fn advance_width(&self) -> u16 {
        CELL_WIDTH * u16::from(self.size_x)
    }

    fn line_height(&self) -> u16 {
        CELL_HEIGHT * u16::from(self.size_y)
    }

    /// Whether a character at the cursor would cross `width`
    fn overflows(&self, width: u16) -> bool {
        self.cursor_x.saturating_add(self.advance_width()) > width
    }

    fn new_line(&mut self) {
        self.cursor_x = 0;
        self.cursor_y = self.cursor_y.saturating_add(self.line_height());
    }
}

impl<I, const N: usize> Display<I, N>
where
    I: DisplayInterface,
{
    /// Draw one character with its top-left corner at `(x, y)`
    ///
    /// Does not touch the text cursor. Characters starting off the panel are
    /// skipped; partially visible ones are clipped.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        c: u8,
        color: u16,
        background: u16,
        size_x: u8,
        size_y: u8,
    ) -> DisplayResult<I> {
        let geometry = self.config.geometry;
        if x >= geometry.width || y >= geometry.height {
            return Ok(());
        }
        let (sx, sy) = (u16::from(size_x.max(1)), u16::from(size_y.max(1)));
        let opaque = background != color;
        let font = self.font;

        for i in 0..GLYPH_WIDTH {
            let mut line = font.glyph_column(c, i);
            let px = x.saturating_add(i as u16 * sx);
            for j in 0..GLYPH_HEIGHT {
                let py = y.saturating_add(j as u16 * sy);
                if line & 1 != 0 {
                    self.fill_rect(px, py, sx, sy, color)?;
                } else if opaque {
                    self.fill_rect(px, py, sx, sy, background)?;
                }
                line >>= 1;
            }
        }

        if opaque {
            let gap_x = x.saturating_add(GLYPH_WIDTH as u16 * sx);
            self.fill_rect(gap_x, y, sx, CELL_HEIGHT * sy, background)?;
        }
        Ok(())
    }

    /// Draw a character at the text cursor and advance it
    ///
    /// `\n` moves to the start of the next line and `\r` is ignored. After
    /// drawing, the cursor moves to the next line as soon as another
    /// character could no longer fit. With wrapping on, a character that
    /// would cross the right edge also starts a new line before it is drawn;
    /// with wrapping off it is drawn clipped.
    pub fn write_char(&mut self, c: u8) -> DisplayResult<I> {
        match c {
            b'\n' => self.text.new_line(),
            b'\r' => {}
            _ => {
                let width = self.config.geometry.width;
                if self.text.wrap && self.text.overflows(width) {
                    self.text.new_line();
                }

                let t = self.text;
                self.draw_char(
                    t.cursor_x,
                    t.cursor_y,
                    c,
                    t.color,
                    t.background,
                    t.size_x,
                    t.size_y,
                )?;

                self.text.cursor_x = self.text.cursor_x.saturating_add(t.advance_width());
                if self.text.overflows(width) {
                    self.text.new_line();
                }
            }
        }
        Ok(())
    }

    /// Write every byte of `s` through [`write_char`](Self::write_char)
    pub fn draw_string(&mut self, s: &str) -> DisplayResult<I> {
        for byte in s.bytes() {
            self.write_char(byte)?;
        }
        Ok(())
    }

    /// Move the text cursor
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.text.cursor_x = x;
        self.text.cursor_y = y;
    }

    /// Current text cursor as `(x, y)`
    pub fn cursor(&self) -> (u16, u16) {
        (self.text.cursor_x, self.text.cursor_y)
    }

    /// Set the text color and make the background transparent
    pub fn set_text_color(&mut self, color: u16) {
        self.text.color = color;
        self.text.background = color;
    }

    /// Set the text background; a value equal to the text color is transparent
    pub fn set_text_background(&mut self, background: u16) {
        self.text.background = background;
    }

    /// Set the scale factors; 0 is treated as 1
    pub fn set_text_size(&mut self, size_x: u8, size_y: u8) {
        self.text.size_x = size_x.max(1);
        self.text.size_y = size_y.max(1);
    }

    /// Enable or disable wrapping at the right edge
    pub fn set_text_wrap(&mut self, wrap: bool) {
        self.text.wrap = wrap;
    }

    /// Replace the font used by the text functions
    pub fn set_font(&mut self, font: &'static dyn Font) {
        self.font = font;
    }

    /// Current text state
    pub fn text_state(&self) -> &TextState {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, PanelVariant};
    use crate::mock::MockInterface;

    fn test_display() -> Display<MockInterface> {
        let config = Builder::new()
            .variant(PanelVariant::RedTab)
            .build()
            .unwrap();
        Display::new(MockInterface::new(), config)
    }

    fn pixel(display: &Display<MockInterface>, x: usize, y: usize) -> Option<u16> {
        display.interface.render()[y * usize::from(crate::error::MAX_COLUMNS) + x]
    }

    struct Solid;

    impl Font for Solid {
        fn glyph_column(&self, _code: u8, _column: usize) -> u8 {
            0xFF
        }
    }

    static SOLID: Solid = Solid;

    #[test]
    fn test_transparent_char_draws_only_lit_pixels() {
        let mut display = test_display();
        display.draw_char(0, 0, b'A', 0xF800, 0xF800, 1, 1).unwrap();
        // 'A' has 16 lit pixels, each its own 1x1 window
        assert_eq!(display.interface.windows().len(), 16);
        assert_eq!(pixel(&display, 0, 2), Some(0xF800));
        assert_eq!(pixel(&display, 0, 0), None);
        assert_eq!(pixel(&display, 5, 0), None);
    }

    #[test]
    fn test_opaque_char_fills_whole_cell() {
        let mut display = test_display();
        display.draw_char(10, 10, b'A', 0xF800, 0x001F, 1, 1).unwrap();
        // 5x8 glyph pixels plus the gap column as one rectangle
        assert_eq!(display.interface.windows().len(), 41);
        assert_eq!(
            display.interface.windows().last(),
            Some(&([0, 15, 0, 15], [0, 10, 0, 17]))
        );
        assert_eq!(pixel(&display, 10, 10), Some(0x001F));
        assert_eq!(pixel(&display, 10, 12), Some(0xF800));
        assert_eq!(pixel(&display, 15, 17), Some(0x001F));
    }

    #[test]
    fn test_scaled_char_uses_rectangles() {
        let mut display = test_display();
        display.draw_char(0, 0, b'A', 0xFFFF, 0xFFFF, 2, 3).unwrap();
        let bursts = display.interface.pixel_bursts();
        assert_eq!(bursts.len(), 16);
        assert!(bursts.iter().all(|b| b.len() == 2 * 2 * 3));
        // First lit pixel of 'A' is column 0, row 2
        assert_eq!(
            display.interface.windows()[0],
            ([0, 0, 0, 1], [0, 6, 0, 8])
        );
    }

    #[test]
    fn test_char_off_panel_sends_nothing() {
        let mut display = test_display();
        display.draw_char(128, 0, b'A', 0xFFFF, 0, 1, 1).unwrap();
        display.draw_char(0, 160, b'A', 0xFFFF, 0, 1, 1).unwrap();
        assert!(display.interface.events.is_empty());
    }

    #[test]
    fn test_char_at_edge_is_clipped() {
        let mut display = test_display();
        display.set_font(&SOLID);
        display.draw_char(126, 0, b'x', 0x07E0, 0x07E0, 1, 1).unwrap();
        // Columns 126 and 127 are on the panel, the other three are dropped
        assert_eq!(display.interface.windows().len(), 2 * 8);
    }

    #[test]
    fn test_newline_and_carriage_return() {
        let mut display = test_display();
        display.set_text_size(2, 2);
        display.set_cursor(30, 4);
        display.write_char(b'\r').unwrap();
        assert_eq!(display.cursor(), (30, 4));
        display.write_char(b'\n').unwrap();
        assert_eq!(display.cursor(), (0, 20));
        assert!(display.interface.events.is_empty());
    }

    #[test]
    fn test_cursor_advances_by_scaled_cell() {
        let mut display = test_display();
        display.set_text_size(3, 1);
        display.draw_string("ab").unwrap();
        assert_eq!(display.cursor(), (36, 0));
    }

    #[test]
    fn test_wrap_after_last_fitting_character() {
        let mut display = test_display();
        // 21 cells of 6 columns fit in 128; the 22nd would not
        for _ in 0..20 {
            display.write_char(b'A').unwrap();
        }
        assert_eq!(display.cursor(), (120, 0));
        display.write_char(b'A').unwrap();
        assert_eq!(display.cursor(), (0, 8));
    }

    #[test]
    fn test_wrap_before_drawing_when_cursor_near_edge() {
        let mut display = test_display();
        display.set_text_size(2, 2);
        display.set_cursor(120, 0);
        display.write_char(b'A').unwrap();
        assert_eq!(display.cursor(), (12, 16));
        // Glyph landed at the start of the new line
        assert_eq!(display.interface.windows()[0], ([0, 0, 0, 1], [0, 20, 0, 21]));
    }

    #[test]
    fn test_line_break_after_last_fitting_character_without_wrap() {
        let mut display = test_display();
        display.set_text_wrap(false);
        for _ in 0..21 {
            display.write_char(b'A').unwrap();
        }
        assert_eq!(display.cursor(), (0, 8));
    }

    #[test]
    fn test_no_wrap_draws_clipped_at_edge_then_breaks_line() {
        let mut display = test_display();
        display.set_text_wrap(false);
        display.set_cursor(125, 0);
        display.write_char(b'A').unwrap();
        assert_eq!(display.cursor(), (0, 8));
        // Left column of 'A' lit at its original position
        assert!(pixel(&display, 125, 2).is_some());
        assert!(display.interface.windows().iter().all(|(caset, _)| caset[3] <= 127));

        let mut wrapping = test_display();
        wrapping.set_cursor(125, 0);
        wrapping.write_char(b'A').unwrap();
        assert_eq!(wrapping.cursor(), (6, 8));
        assert!(pixel(&wrapping, 125, 2).is_none());
    }

    #[test]
    fn test_wrap_flag_from_config() {
        let config = Builder::new()
            .variant(PanelVariant::RedTab)
            .text_wrap(false)
            .build()
            .unwrap();
        let display = Display::new(MockInterface::new(), config);
        assert!(!display.text_state().wrap);
    }

    #[test]
    fn test_set_text_color_is_transparent_until_background_set() {
        let mut display = test_display();
        display.set_text_color(0x1234);
        assert_eq!(display.text_state().background, 0x1234);
        display.set_text_background(0x0000);
        let state = display.text_state();
        assert_eq!((state.color, state.background), (0x1234, 0x0000));
    }
}
