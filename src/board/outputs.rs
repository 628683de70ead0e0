//! LED and buzzer output drivers.
//!
//! The logic layer hands over plain levels and an optional tone; this
//! module is the only place that touches the output pins.

use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive};
use embassy_nrf::pwm::{self, Prescaler, SimplePwm};

use crate::leds::{LedLevels, ALL_OFF};

/// PWM counter clock after the /16 prescaler (Hz).
const PWM_CLOCK_HZ: u32 = 1_000_000;

/// Largest COUNTERTOP the nRF PWM accepts.
const PWM_MAX_TOP: u32 = 0x7FFF;

fn level(on: bool) -> Level {
    if on {
        Level::High
    } else {
        Level::Low
    }
}

/// Three LEDs driven high-active: red, green, blue.
pub struct LedBank {
    pins: [Output<'static>; 3],
}

impl LedBank {
    pub fn new(red: AnyPin, green: AnyPin, blue: AnyPin) -> Self {
        Self {
            pins: [red, green, blue].map(|pin| Output::new(pin, Level::Low, OutputDrive::Standard)),
        }
    }

    pub fn apply(&mut self, levels: LedLevels) {
        for (pin, on) in self.pins.iter_mut().zip(levels) {
            pin.set_level(level(on));
        }
    }

    pub fn off(&mut self) {
        self.apply(ALL_OFF);
    }
}

/// Single status LED.
pub struct Led {
    pin: Output<'static>,
}

impl Led {
    pub fn new(pin: AnyPin) -> Self {
        Self {
            pin: Output::new(pin, Level::Low, OutputDrive::Standard),
        }
    }

    pub fn set(&mut self, on: bool) {
        self.pin.set_level(level(on));
    }
}

/// Piezo buzzer on a hardware PWM channel, square wave at 50% duty.
pub struct Buzzer<T: pwm::Instance> {
    pwm: SimplePwm<'static, T>,
    tone_hz: Option<u32>,
}

impl<T: pwm::Instance> Buzzer<T> {
    pub fn new(mut pwm: SimplePwm<'static, T>) -> Self {
        pwm.set_prescaler(Prescaler::Div16);
        pwm.disable();
        Self { pwm, tone_hz: None }
    }

    /// Start, retune or stop the tone. Repeated calls with the same
    /// value leave the peripheral alone.
    pub fn set_tone(&mut self, tone_hz: Option<u32>) {
        if tone_hz == self.tone_hz {
            return;
        }
        match tone_hz {
            Some(hz) if hz > 0 => {
                let top = (PWM_CLOCK_HZ / hz).clamp(2, PWM_MAX_TOP) as u16;
                self.pwm.set_max_duty(top);
                self.pwm.set_duty(0, top / 2);
                self.pwm.enable();
            }
            _ => self.pwm.disable(),
        }
        self.tone_hz = tone_hz;
    }
}
