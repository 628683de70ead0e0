//! Single-button press-type indicator.
//!
//! A short press toggles the LED.  Holding the button past the
//! long-press threshold sounds the buzzer until it is let go.

use crate::config;
use crate::input::{Button, PressEvent, PressKind};

/// Label shown when a long press is released.
pub const STOPPED_LABEL: &str = "Stopped";

/// States the indicator can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorState {
    /// Nothing happening; also entered after a long press ends.
    Idle,
    LedOn,
    LedOff,
    /// Long press held, tone playing.
    Buzzing,
}

impl IndicatorState {
    pub fn label(self) -> &'static str {
        match self {
            IndicatorState::Idle => "Ready",
            IndicatorState::LedOn => "LED ON",
            IndicatorState::LedOff => "LED OFF",
            IndicatorState::Buzzing => "BUZZER",
        }
    }
}

/// Timing knobs, defaulting to the values in [`crate::config`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorTiming {
    pub debounce_ms: u64,
    pub long_press_ms: u64,
    pub tone_hz: u32,
}

impl Default for IndicatorTiming {
    fn default() -> Self {
        Self {
            debounce_ms: config::BUTTON_DEBOUNCE_MS,
            long_press_ms: config::LONG_PRESS_MS,
            tone_hz: config::BUZZER_FREQ_HZ,
        }
    }
}

/// Output of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorFrame {
    pub led: bool,
    /// `Some(hz)` while the buzzer should sound.
    pub tone_hz: Option<u32>,
    /// Set only on the tick a state is entered.
    pub label: Option<&'static str>,
    /// Raw button event seen this tick.
    pub event: Option<PressEvent>,
}

#[derive(Clone, Debug)]
pub struct PressIndicator {
    timing: IndicatorTiming,
    button: Button,
    state: IndicatorState,
    led_on: bool,
}

impl PressIndicator {
    pub fn new(timing: IndicatorTiming) -> Self {
        Self {
            timing,
            button: Button::new(timing.debounce_ms, timing.long_press_ms),
            state: IndicatorState::Idle,
            led_on: false,
        }
    }

    pub fn state(&self) -> IndicatorState {
        self.state
    }

    pub fn led_on(&self) -> bool {
        self.led_on
    }

    /// Run one polling iteration. `active` is `pin.is_low()`.
    pub fn tick(&mut self, active: bool, now_ms: u64) -> IndicatorFrame {
        let event = self.button.update(active, now_ms);

        let label = match event {
            Some(PressEvent::LongPress { .. }) => {
                self.state = IndicatorState::Buzzing;
                Some(self.state.label())
            }
            Some(PressEvent::Released {
                kind: PressKind::Short,
                ..
            }) => {
                self.led_on = !self.led_on;
                self.state = if self.led_on {
                    IndicatorState::LedOn
                } else {
                    IndicatorState::LedOff
                };
                Some(self.state.label())
            }
            Some(PressEvent::Released {
                kind: PressKind::Long,
                ..
            }) => {
                self.state = IndicatorState::Idle;
                Some(STOPPED_LABEL)
            }
            Some(PressEvent::Pressed { .. }) | None => None,
        };

        IndicatorFrame {
            led: self.led_on,
            tone_hz: (self.state == IndicatorState::Buzzing).then_some(self.timing.tone_hz),
            label,
            event,
        }
    }
}

impl Default for PressIndicator {
    fn default() -> Self {
        Self::new(IndicatorTiming::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hold for `held` ms from `start`, then idle 500 ms; collect frames with
    /// a label or an event.
    fn press(
        ind: &mut PressIndicator,
        start: u64,
        held: u64,
    ) -> heapless::Vec<(u64, IndicatorFrame), 8> {
        let mut out = heapless::Vec::new();
        for t in start..start + held + 500 {
            let frame = ind.tick(t < start + held, t);
            if frame.label.is_some() || frame.event.is_some() {
                out.push((t, frame)).unwrap();
            }
        }
        out
    }

    fn releases(frames: &[(u64, IndicatorFrame)]) -> heapless::Vec<PressKind, 4> {
        frames
            .iter()
            .filter_map(|(_, f)| match f.event {
                Some(PressEvent::Released { kind, .. }) => Some(kind),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn starts_idle_with_everything_off() {
        let mut ind = PressIndicator::default();
        let frame = ind.tick(false, 0);
        assert_eq!(ind.state(), IndicatorState::Idle);
        assert_eq!(ind.state().label(), "Ready");
        assert!(!frame.led);
        assert_eq!(frame.tone_hz, None);
    }

    #[test]
    fn short_press_toggles_led_once() {
        let mut ind = PressIndicator::default();
        let frames = press(&mut ind, 0, 100);
        assert_eq!(releases(&frames).as_slice(), &[PressKind::Short]);

        let labels: heapless::Vec<&str, 4> = frames.iter().filter_map(|(_, f)| f.label).collect();
        assert_eq!(labels.as_slice(), &["LED ON"]);
        assert!(ind.led_on());
        assert_eq!(ind.state(), IndicatorState::LedOn);

        press(&mut ind, 1000, 100);
        assert!(!ind.led_on());
        assert_eq!(ind.state(), IndicatorState::LedOff);
    }

    #[test]
    fn long_press_buzzes_until_release() {
        let mut ind = PressIndicator::default();
        let mut tone_on = None;
        let mut tone_off = None;
        let mut labels: heapless::Vec<&str, 4> = heapless::Vec::new();
        let mut prev_tone = None;

        for t in 0..2600 {
            let frame = ind.tick(t < 2000, t);
            if frame.tone_hz != prev_tone {
                if frame.tone_hz.is_some() {
                    tone_on = Some(t);
                } else {
                    tone_off = Some(t);
                }
                prev_tone = frame.tone_hz;
            }
            if let Some(label) = frame.label {
                labels.push(label).unwrap();
            }
            if let Some(PressEvent::Released { kind, .. }) = frame.event {
                assert_eq!(kind, PressKind::Long);
            }
        }

        // Threshold completes on the sample at 1499.
        assert_eq!(tone_on, Some(1499));
        // Release confirmed once the line has been high for a debounce window.
        assert_eq!(tone_off, Some(2049));
        assert_eq!(labels.as_slice(), &["BUZZER", STOPPED_LABEL]);
        assert_eq!(ind.state(), IndicatorState::Idle);
        // LED untouched by a long press.
        assert!(!ind.led_on());
    }

    #[test]
    fn long_press_plays_configured_tone() {
        let mut ind = PressIndicator::default();
        let mut tones: heapless::Vec<u32, 1> = heapless::Vec::new();
        for t in 0..1600 {
            if let Some(hz) = ind.tick(true, t).tone_hz {
                if tones.is_empty() {
                    tones.push(hz).unwrap();
                }
            }
        }
        assert_eq!(tones.as_slice(), &[1000]);
    }

    #[test]
    fn bounce_is_ignored() {
        let mut ind = PressIndicator::default();
        let frames = press(&mut ind, 0, 30);
        assert!(frames.is_empty());
        assert!(!ind.led_on());
    }

    #[test]
    fn led_state_survives_a_long_press() {
        let mut ind = PressIndicator::default();
        press(&mut ind, 0, 100);
        assert!(ind.led_on());
        let frames = press(&mut ind, 1000, 2000);
        assert_eq!(releases(&frames).as_slice(), &[PressKind::Long]);
        assert!(ind.led_on());
        assert!(frames.iter().all(|(_, f)| f.led));
    }

    #[test]
    fn snapshot_mid_hold_continues_independently() {
        let mut ind = PressIndicator::default();
        for t in 0..1000 {
            ind.tick(true, t);
        }
        let mut snapshot = ind.clone();

        // Original lets go before the threshold, the copy keeps holding.
        press(&mut ind, 1000, 0);
        assert!(ind.led_on());
        let frames = press(&mut snapshot, 1000, 1000);
        assert_eq!(releases(&frames).as_slice(), &[PressKind::Long]);
        assert!(!snapshot.led_on());
        assert_eq!(snapshot.state(), IndicatorState::Idle);
    }
}
