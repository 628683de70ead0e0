//! Per-tick LED mode controller.
//!
//! Each tick runs, in order: the RESET check, the MODE check, then the
//! output driver for the active mode.  A RESET press ends the tick
//! early so nothing else can override it.

use super::fade::{pwm_level, FadeRamp};
use super::{cycle_next, LedLevels, LedMode, ALL_OFF, ALL_ON};
use crate::config;
use crate::input::{Button, PressEvent};

/// Label shown after the RESET button.
pub const RESET_LABEL: &str = "All OFF (Reset)";

/// Timing knobs, defaulting to the values in [`crate::config`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerTiming {
    pub mode_debounce_ms: u64,
    pub reset_debounce_ms: u64,
    pub blink_interval_ms: u64,
    pub fade_interval_ms: u64,
    pub fade_step: i16,
    pub pwm_period_ms: u64,
}

impl Default for ControllerTiming {
    fn default() -> Self {
        Self {
            mode_debounce_ms: config::MODE_DEBOUNCE_MS,
            reset_debounce_ms: config::RESET_DEBOUNCE_MS,
            blink_interval_ms: config::BLINK_INTERVAL_MS,
            fade_interval_ms: config::FADE_INTERVAL_MS,
            fade_step: config::FADE_STEP,
            pwm_period_ms: config::PWM_PERIOD_MS,
        }
    }
}

/// What one tick wants written to the hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub leds: LedLevels,
    /// Set only on the tick a mode is entered.
    pub label: Option<&'static str>,
}

/// LED mode state machine with its per-mode working state.
#[derive(Clone, Debug)]
pub struct ModeController {
    timing: ControllerTiming,
    mode_button: Button,
    reset_button: Button,
    mode: LedMode,
    blink_index: usize,
    ramp: FadeRamp,
    last_blink_ms: u64,
    last_fade_ms: u64,
    leds: LedLevels,
}

impl ModeController {
    pub fn new(timing: ControllerTiming) -> Self {
        Self {
            timing,
            mode_button: Button::new(timing.mode_debounce_ms, config::LONG_PRESS_MS),
            reset_button: Button::new(timing.reset_debounce_ms, config::LONG_PRESS_MS),
            mode: LedMode::Off,
            blink_index: 0,
            ramp: FadeRamp::new(timing.fade_step),
            last_blink_ms: 0,
            last_fade_ms: 0,
            leds: ALL_OFF,
        }
    }

    pub fn mode(&self) -> LedMode {
        self.mode
    }

    /// Next LED the alternate sequence will light.
    pub fn blink_index(&self) -> usize {
        self.blink_index
    }

    pub fn ramp(&self) -> FadeRamp {
        self.ramp
    }

    /// Run one polling iteration. `*_active` is `pin.is_low()`.
    pub fn tick(&mut self, mode_active: bool, reset_active: bool, now_ms: u64) -> Frame {
        let reset = self.reset_button.update(reset_active, now_ms);
        let advance = self.mode_button.update(mode_active, now_ms);

        if matches!(reset, Some(PressEvent::Pressed { .. })) {
            self.enter(LedMode::Off, now_ms);
            return Frame {
                leds: ALL_OFF,
                label: Some(RESET_LABEL),
            };
        }

        let mut label = None;
        if matches!(advance, Some(PressEvent::Pressed { .. })) {
            let next = self.mode.next();
            self.enter(next, now_ms);
            label = Some(next.label());
        }

        Frame {
            leds: self.drive(now_ms),
            label,
        }
    }

    /// Switch mode and restart every per-mode timer.
    fn enter(&mut self, mode: LedMode, now_ms: u64) {
        self.mode = mode;
        self.blink_index = 0;
        self.ramp = FadeRamp::new(self.timing.fade_step);
        self.last_blink_ms = now_ms;
        self.last_fade_ms = now_ms;
        self.leds = ALL_OFF;
    }

    fn drive(&mut self, now_ms: u64) -> LedLevels {
        self.leds = match self.mode {
            LedMode::Off => ALL_OFF,
            LedMode::Alternate => {
                if now_ms.saturating_sub(self.last_blink_ms) >= self.timing.blink_interval_ms {
                    self.last_blink_ms = now_ms;
                    let mut leds = ALL_OFF;
                    leds[self.blink_index] = true;
                    self.blink_index = cycle_next(self.blink_index, leds.len());
                    leds
                } else {
                    self.leds
                }
            }
            LedMode::AllOn => ALL_ON,
            LedMode::Fade => {
                if now_ms.saturating_sub(self.last_fade_ms) >= self.timing.fade_interval_ms {
                    self.last_fade_ms = now_ms;
                    self.ramp.advance();
                }
                // Phase comes from the wall clock, not the ramp timer.
                [pwm_level(self.ramp.brightness(), now_ms, self.timing.pwm_period_ms); 3]
            }
        };
        self.leds
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(ControllerTiming::default())
    }
}
