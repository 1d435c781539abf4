//! GC9A01 round LCD wrapper.

use display_interface_spi::SPIInterface;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;
use mipidsi::models::GC9A01;
use mipidsi::options::ColorInversion;
use mipidsi::{Builder, Display};

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::error::Error;

/// Type alias for the concrete display driver.
///
/// Generic over the SPI device and control pins so callers pass in
/// their HAL's peripherals.
pub type Lcd<SPI, DC, RST> = Display<SPIInterface<SPI, DC>, GC9A01, RST>;

/// Initialise the GC9A01 panel.
pub fn init<SPI, DC, RST>(
    spi: SPI,
    dc: DC,
    rst: RST,
    delay: &mut impl DelayNs,
) -> Result<Lcd<SPI, DC, RST>, Error>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    let di = SPIInterface::new(spi, dc);
    Builder::new(GC9A01, di)
        .display_size(DISPLAY_WIDTH, DISPLAY_HEIGHT)
        .invert_colors(ColorInversion::Inverted)
        .reset_pin(rst)
        .init(delay)
        .map_err(|_| Error::Display)
}

// Palette (RGB565). The named colors the stock screens use; the rest
// come from `RgbColor`'s constants.

pub const GREY: Rgb565 = Rgb565::new(22, 45, 22);
pub const BLUE: Rgb565 = Rgb565::new(0, 37, 31);
pub const DARK_BLUE: Rgb565 = Rgb565::new(0, 12, 12);

pub fn text_style(color: Rgb565) -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyleBuilder::new()
        .font(&FONT_10X20)
        .text_color(color)
        .build()
}
