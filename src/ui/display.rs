//! SSD1306 OLED display wrapper.

use crate::error::Error;
use defmt::warn;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use prodtimer::config::DISPLAY_I2C_ADDR;
use prodtimer::ui::status::{status_lines, StatusLine};
use prodtimer::StatusSnapshot;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
///
/// A display that fails to come up is logged and returned anyway; the
/// timer keeps working without it.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDR);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if display.init().is_err() {
        warn!("Display: init failed");
    }
    display.clear_buffer();
    if display.flush().is_err() {
        warn!("Display: initial flush failed");
    }
    display
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn draw_line<I2C>(display: &mut Display<I2C>, line: &StatusLine) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    Text::with_baseline(
        line.text.as_str(),
        Point::new(line.x, line.y),
        text_style(),
        Baseline::Top,
    )
    .draw(display)
    .map(|_| ())
    .map_err(|_| Error::Display)
}

/// Render the status screen: clear, draw every line, flush.
pub fn draw_status<I2C>(display: &mut Display<I2C>, status: &StatusSnapshot) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    for line in status_lines(status).iter() {
        draw_line(display, line)?;
    }

    display.flush().map_err(|_| Error::Display)
}
