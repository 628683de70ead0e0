//! LED mode cycler firmware.
//!
//! MODE (P0.11) steps the three LEDs through off / alternate / all on /
//! fade; RESET (P0.12) returns to off.  The OLED shows the mode label.

#![no_std]
#![no_main]

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pin, Pull};
use embassy_time::{Duration, Instant, Ticker};
use tactile::board::outputs::LedBank;
use tactile::board::{display, halt};
use tactile::config;
use tactile::leds::controller::ModeController;
use tactile::leds::LedMode;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("tactile led-modes starting");

    let mut leds = LedBank::new(p.P0_13.degrade(), p.P0_14.degrade(), p.P0_15.degrade());
    leds.off();

    let mut oled = match display::init(display::bus(p.TWISPI0, p.P0_26, p.P0_27)) {
        Ok(oled) => oled,
        Err(e) => {
            error!("Display init failed: {}", e);
            halt();
        }
    };

    let mode_button = Input::new(p.P0_11, Pull::Up);
    let reset_button = Input::new(p.P0_12, Pull::Up);

    let mut controller = ModeController::default();
    if let Err(e) = display::draw_mode(&mut oled, LedMode::Off.label()) {
        warn!("Display update failed: {}", e);
    }

    let mut ticker = Ticker::every(Duration::from_millis(config::TICK_MS));
    loop {
        let now = Instant::now().as_millis();
        let frame = controller.tick(mode_button.is_low(), reset_button.is_low(), now);
        leds.apply(frame.leds);

        if let Some(label) = frame.label {
            info!("Mode: {} ({})", label, controller.mode());
            if let Err(e) = display::draw_mode(&mut oled, label) {
                warn!("Display update failed: {}", e);
            }
        }

        ticker.next().await;
    }
}
