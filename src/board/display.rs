//! SSD1306 OLED display wrapper.

use core::fmt::Write;

use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::config;
use crate::error::Error;
use crate::sensor::SensorReadings;

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// I²C bus to the OLED on SDA = P0.26, SCL = P0.27.
pub fn bus(
    twi: peripherals::TWISPI0,
    sda: peripherals::P0_26,
    scl: peripherals::P0_27,
) -> Twim<'static, peripherals::TWISPI0> {
    Twim::new(twi, Irqs, sda, scl, twim::Config::default())
}

/// Initialise the SSD1306 display and clear the screen.
///
/// Fails when the panel does not acknowledge on the bus.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, config::DISPLAY_I2C_ADDR);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

fn text_style(font: &'static MonoFont<'static>) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::On)
        .build()
}

/// Render `Mode: <label>` in the small font.
pub fn draw_mode<I2C>(display: &mut Display<I2C>, label: &str) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let mut line: heapless::String<32> = heapless::String::new();
    let _ = write!(line, "Mode: {}", label);
    let _ = Text::with_baseline(
        line.as_str(),
        Point::new(0, 25),
        text_style(&FONT_6X10),
        Baseline::Top,
    )
    .draw(display);

    display.flush().map_err(|_| Error::Display)
}

/// Render a short message in the large font at the top left.
pub fn draw_message<I2C>(display: &mut Display<I2C>, message: &str) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let _ = Text::with_baseline(
        message,
        Point::zero(),
        text_style(&FONT_10X20),
        Baseline::Top,
    )
    .draw(display);

    display.flush().map_err(|_| Error::Display)
}

/// Render the sensor monitor screen.
pub fn draw_readings<I2C>(display: &mut Display<I2C>, readings: &SensorReadings) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let [title, rule, temp, hum] = readings.lines();
    let style = text_style(&FONT_6X10);
    for (text, y) in [(&title, 0), (&rule, 10), (&temp, 20), (&hum, 35)] {
        let _ = Text::with_baseline(text.as_str(), Point::new(0, y), style, Baseline::Top)
            .draw(display);
    }

    display.flush().map_err(|_| Error::Display)
}
