//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::batch::{DEFAULT_PIXEL_BUFFER_SIZE, PixelBuffer};
use crate::bitmap::StreamCursor;
use crate::command::{CASET, MADCTL, MADCTL_BLACKTAB, RAMWR, RASET};
use crate::command_list::{CommandList, INIT_R_PART1, INIT_R_PART3};
use crate::config::{Config, Geometry, PanelVariant};
use crate::error::Error;
use crate::font::{Font, GLCD_5X7};
use crate::interface::DisplayInterface;
use crate::text::TextState;
use crate::window::Window;

pub(crate) type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for ST7735
///
/// Owns the interface, the pixel buffer, and all cursor state. Every
/// operation blocks until its transfers are done; callers sharing a driver
/// between threads must serialize access themselves.
///
/// `N` is the pixel buffer capacity in bytes. Larger buffers mean fewer,
/// longer SPI transfers.
pub struct Display<I, const N: usize = DEFAULT_PIXEL_BUFFER_SIZE>
where
    I: DisplayInterface,
{
    /// Hardware interface
    pub(crate) interface: I,
    /// Display configuration
    pub(crate) config: Config,
    /// Write-behind queue for pixel data
    pub(crate) buffer: PixelBuffer<N>,
    /// Resume point of the fragmented bitmap stream
    pub(crate) stream: StreamCursor,
    /// Cursor, colors and scale for text
    pub(crate) text: TextState,
    /// Glyph table used by the text renderer
    pub(crate) font: &'static dyn Font,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance with the default pixel buffer
    pub fn new(interface: I, config: Config) -> Self {
        Self::with_pixel_buffer(interface, config)
    }
}

impl<I, const N: usize> Display<I, N>
where
    I: DisplayInterface,
{
    /// Create a new Display instance with an `N`-byte pixel buffer
    pub fn with_pixel_buffer(interface: I, config: Config) -> Self {
        let text = TextState::new(config.text_wrap);
        Self {
            interface,
            config,
            buffer: PixelBuffer::new(),
            stream: StreamCursor::default(),
            text,
            font: &GLCD_5X7,
        }
    }

    /// Perform hardware reset and run the variant's initialization lists
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        let variant = self.config.variant;
        log::debug!("initializing {:?} panel", variant);

        self.interface.reset(delay).map_err(Error::Interface)?;
        self.run_command_list(INIT_R_PART1, delay)?;
        self.run_command_list(variant.address_list(), delay)?;
        self.run_command_list(INIT_R_PART3, delay)?;

        if variant == PanelVariant::BlackTab {
            self.send_command(MADCTL)?;
            self.send_data(&[MADCTL_BLACKTAB])?;
        }

        Ok(())
    }

    /// Replay an encoded command list
    ///
    /// See [`command_list`](crate::command_list) for the encoding. Delays
    /// block the caller.
    pub fn run_command_list<D: DelayNs>(&mut self, list: &[u8], delay: &mut D) -> DisplayResult<I> {
        for step in CommandList::new(list) {
            log::trace!(
                "cmd {:#04x} args={} delay={:?}",
                step.opcode,
                step.args.len(),
                step.delay_ms
            );
            self.send_command(step.opcode)?;
            if !step.args.is_empty() {
                self.send_data(step.args)?;
            }
            if let Some(ms) = step.delay_ms {
                delay.delay_ms(u32::from(ms));
            }
        }
        Ok(())
    }

    /// Set the address window and start a memory write
    ///
    /// Coordinates are inclusive panel coordinates; the panel's memory
    /// offset is added here. Pixel data sent afterwards fills the window
    /// left to right, top to bottom.
    pub fn set_address_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> DisplayResult<I> {
        self.open_window(&Window::new(x0, y0, x1, y1))
    }

    /// Fill a rectangle with one color
    ///
    /// The rectangle is clipped to the panel. Nothing is sent if its origin
    /// is off the panel.
    #[allow(clippy::many_single_char_names)]
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: u16) -> DisplayResult<I> {
        let Some(window) = Window::clipped(&self.config.geometry, x, y, w, h) else {
            return Ok(());
        };
        self.open_window(&window)?;
        self.buffer
            .push_repeated(&mut self.interface, color, window.pixel_count())
            .map_err(Error::Interface)?;
        self.flush()
    }

    /// Set a single pixel
    ///
    /// Pixels outside the panel are ignored.
    pub fn write_pixel(&mut self, x: u16, y: u16, color: u16) -> DisplayResult<I> {
        self.fill_rect(x, y, 1, 1, color)
    }

    /// Fill the whole panel with one color
    pub fn fill_screen(&mut self, color: u16) -> DisplayResult<I> {
        let Geometry { width, height, .. } = self.config.geometry;
        self.fill_rect(0, 0, width, height, color)
    }

    /// Get panel geometry
    pub fn geometry(&self) -> &Geometry {
        &self.config.geometry
    }

    /// Visible width in pixels
    pub fn width(&self) -> u16 {
        self.config.geometry.width
    }

    /// Visible height in pixels
    pub fn height(&self) -> u16 {
        self.config.geometry.height
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the hardware interface mutably
    ///
    /// Useful for commands the driver has no method for. Do not send pixel
    /// data this way while a stream is in progress.
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Release the hardware interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Send CASET/RASET for the window followed by RAMWR
    ///
    /// Queued pixel data belongs to the previous window and is sent first.
    pub(crate) fn open_window(&mut self, window: &Window) -> DisplayResult<I> {
        self.flush()?;
        let geometry = self.config.geometry;
        self.send_command(CASET)?;
        self.send_data(&window.column_range(&geometry))?;
        self.send_command(RASET)?;
        self.send_data(&window.row_range(&geometry))?;
        self.send_command(RAMWR)
    }

    /// Queue one color into the pixel buffer
    pub(crate) fn push_color(&mut self, color: u16) -> DisplayResult<I> {
        self.buffer
            .push_color(&mut self.interface, color)
            .map_err(Error::Interface)
    }

    /// Queue one raw data byte into the pixel buffer
    pub(crate) fn push_byte(&mut self, byte: u8) -> DisplayResult<I> {
        self.buffer
            .push_byte(&mut self.interface, byte)
            .map_err(Error::Interface)
    }

    /// Send the rest of the pixel buffer
    pub(crate) fn flush(&mut self) -> DisplayResult<I> {
        self.buffer
            .flush(&mut self.interface)
            .map_err(Error::Interface)
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}
