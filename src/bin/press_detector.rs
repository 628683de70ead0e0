//! Press-type detector firmware.
//!
//! One button (P0.11): a short press toggles the LED (P0.13), a long
//! press sounds the buzzer (P0.16) until release.

#![no_std]
#![no_main]

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pin, Pull};
use embassy_nrf::pwm::SimplePwm;
use embassy_time::{Duration, Instant, Ticker};
use tactile::board::outputs::{Buzzer, Led};
use tactile::board::{display, halt};
use tactile::config;
use tactile::indicator::{IndicatorState, PressIndicator};
use tactile::input::PressEvent;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("tactile press-detector starting");

    let mut led = Led::new(p.P0_13.degrade());
    let mut buzzer = Buzzer::new(SimplePwm::new_1ch(p.PWM0, p.P0_16));

    let mut oled = match display::init(display::bus(p.TWISPI0, p.P0_26, p.P0_27)) {
        Ok(oled) => oled,
        Err(e) => {
            error!("Display init failed: {}", e);
            halt();
        }
    };

    let button = Input::new(p.P0_11, Pull::Up);
    let mut indicator = PressIndicator::default();

    if let Err(e) = display::draw_message(&mut oled, IndicatorState::Idle.label()) {
        warn!("Display update failed: {}", e);
    }
    info!("Waiting for button input");

    let mut ticker = Ticker::every(Duration::from_millis(config::TICK_MS));
    loop {
        let frame = indicator.tick(button.is_low(), Instant::now().as_millis());
        led.set(frame.led);
        buzzer.set_tone(frame.tone_hz);

        match frame.event {
            Some(PressEvent::Pressed { at_ms }) => info!("Button press detected at {} ms", at_ms),
            Some(PressEvent::Released { kind, held_ms }) => {
                info!("Released after {} ms: {}", held_ms, kind)
            }
            _ => {}
        }

        if let Some(label) = frame.label {
            info!("State: {}", indicator.state());
            if let Err(e) = display::draw_message(&mut oled, label) {
                warn!("Display update failed: {}", e);
            }
        }

        ticker.next().await;
    }
}
