//! Triangle-wave brightness ramp and software PWM.

/// Brightness ramp for the FADE mode.
///
/// Brightness walks between 0 and 255 by `step`.  Overshooting a bound
/// clamps to it and flips the step direction, so both extremes are
/// always visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadeRamp {
    brightness: u8,
    step: i16,
}

impl FadeRamp {
    /// Dark ramp heading up. Only the magnitude of `step` is used.
    pub const fn new(step: i16) -> Self {
        Self {
            brightness: 0,
            step: step.saturating_abs(),
        }
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn step(&self) -> i16 {
        self.step
    }

    /// Advance one step, clamping and reversing at the bounds.
    pub fn advance(&mut self) {
        let next = i16::from(self.brightness).saturating_add(self.step);
        if next <= 0 {
            self.brightness = 0;
            self.step = self.step.saturating_abs();
        } else if next >= i16::from(u8::MAX) {
            self.brightness = u8::MAX;
            self.step = -self.step.saturating_abs();
        } else {
            self.brightness = next as u8;
        }
    }
}

/// Software PWM: is the output on at `now_ms` for this brightness?
///
/// The output is on for the first `brightness / 255` of every
/// `period_ms` window.
pub fn pwm_level(brightness: u8, now_ms: u64, period_ms: u64) -> bool {
    let Some(phase) = now_ms.checked_rem(period_ms) else {
        return false;
    };
    let on_time = u64::from(brightness) * period_ms / u64::from(u8::MAX);
    phase < on_time
}
