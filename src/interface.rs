//! Hardware interface abstraction
//!
//! [`DisplayInterface`] is the seam between the driver and the bus; the
//! bundled [`Interface`] implements it for an embedded-hal SPI device plus
//! GPIO lines.
//!
//! ## Wiring
//!
//! The ST7735 requires:
//! - SPI bus (MOSI + SCK, chip select handled by the [`SpiDevice`])
//! - 1 or 2 GPIO pins:
//!   - **DC**: Data/Command select (output, low = command, high = data)
//!   - **RST**: Reset (output, active low, optional)
//!
//! The bus itself is configured by the HAL when the [`SpiDevice`] is built.
//! Panels are normally driven at [`RECOMMENDED_SPI_FREQUENCY_HZ`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7735::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI, DC and reset pins
//! let mut interface = Interface::new(MockSpi, MockPin, Some(MockPin));
//!
//! // Pulse the reset line
//! let _ = interface.reset(&mut delay);
//!
//! // Send command and data
//! let _ = interface.send_command(0x36); // MADCTL
//! let _ = interface.send_data(&[0xC8]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// SPI clock the panels are specified for
pub const RECOMMENDED_SPI_FREQUENCY_HZ: u32 = 32_000_000;

/// Settling time after each edge of the hardware reset pulse
///
/// Part of the controller's power-on contract; not tunable.
pub const RESET_SETTLE_MS: u32 = 500;

/// Byte transport to the ST7735 controller
///
/// [`Display`](crate::display::Display) only ever talks to the panel
/// through this trait. Implement it yourself for a parallel bus, a shared
/// DC line or a recording test double; otherwise use [`Interface`].
pub trait DisplayInterface {
    /// Transport error, surfaced to callers unchanged
    type Error: Debug;

    /// Send one command byte with DC low
    ///
    /// # Errors
    ///
    /// Returns the transport error; nothing is retried.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send parameter or pixel bytes with DC high, as one transfer
    ///
    /// # Errors
    ///
    /// Returns the transport error; nothing is retried.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Pulse the reset line high, low, high, settling [`RESET_SETTLE_MS`] after each edge
    ///
    /// Implementations without a reset line do nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if driving the reset line fails.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Failure of the bundled [`Interface`]
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI transfer failed
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// [`DisplayInterface`] over an embedded-hal [`SpiDevice`] and [`OutputPin`]s
///
/// DC and RST must share an error type, which is the case for pins from one
/// HAL.
pub struct Interface<SPI, DC, RST> {
    spi: SPI,
    /// Low for commands, high for data
    dc: DC,
    /// Reset pin (active low), absent on boards that tie RST to the MCU reset
    rst: Option<RST>,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Wrap a SPI device, the DC pin and an optional reset pin
    pub fn new(spi: SPI, dc: DC, rst: Option<RST>) -> Self {
        Self { spi, dc, rst }
    }

    /// Whether a hardware reset line is wired
    pub fn has_reset_pin(&self) -> bool {
        self.rst.is_some()
    }

    /// Release the SPI device and pins
    pub fn release(self) -> (SPI, DC, Option<RST>) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC> Interface<SPI, DC, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create an Interface for a board without a reset line
    pub fn without_reset(spi: SPI, dc: DC) -> Self {
        Self { spi, dc, rst: None }
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        let Some(rst) = self.rst.as_mut() else {
            return Ok(());
        };
        rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }
}
