//! Integration tests for tactile host-testable logic.
//!
//! Each test plays out a full scenario through the public API, one
//! millisecond tick at a time.

use tactile::indicator::{IndicatorState, PressIndicator};
use tactile::input::{PressEvent, PressKind};
use tactile::leds::controller::{ModeController, RESET_LABEL};
use tactile::leds::LedMode;
use tactile::sensor::SensorReadings;
use tactile::transport::{parse_update, LineBuffer};

#[test]
fn short_press_toggles_led_and_labels_it() {
    let mut ind = PressIndicator::default();
    let mut shorts = 0;
    let mut longs = 0;
    let mut led_changes = 0;
    let mut led = false;

    // Held 100 ms with W = 50, T = 1500.
    for t in 0..1000 {
        let frame = ind.tick(t < 100, t);
        match frame.event {
            Some(PressEvent::Released { kind: PressKind::Short, .. }) => shorts += 1,
            Some(PressEvent::Released { kind: PressKind::Long, .. }) => longs += 1,
            _ => {}
        }
        if frame.led != led {
            led_changes += 1;
            led = frame.led;
        }
        assert_eq!(frame.tone_hz, None);
    }

    assert_eq!((shorts, longs), (1, 0));
    assert_eq!(led_changes, 1);
    assert_eq!(ind.state(), IndicatorState::LedOn);
}

#[test]
fn long_press_sounds_buzzer_until_release() {
    let mut ind = PressIndicator::default();
    let mut long_at = None;
    let mut release = None;
    let mut shorts = 0;

    for t in 0..3000 {
        let frame = ind.tick(t < 2000, t);
        match frame.event {
            Some(PressEvent::LongPress { at_ms }) => {
                assert!(long_at.is_none(), "long press fired twice");
                long_at = Some(at_ms);
                assert_eq!(frame.tone_hz, Some(1000));
            }
            Some(PressEvent::Released { kind, held_ms }) => {
                if kind == PressKind::Short {
                    shorts += 1;
                }
                release = Some((t, held_ms));
                assert_eq!(frame.tone_hz, None);
            }
            _ => {}
        }
    }

    assert_eq!(long_at, Some(1500));
    let (confirmed_at, held_ms) = release.expect("release event");
    assert_eq!(held_ms, 2000);
    assert!((2000..2100).contains(&confirmed_at));
    assert_eq!(shorts, 0);
}

#[test]
fn mode_sequence_wraps_after_five_presses() {
    let mut c = ModeController::default();
    let mut labels = Vec::new();
    for press in 0..5u64 {
        let start = press * 1000;
        for t in start..start + 1000 {
            if let Some(label) = c.tick(t < start + 500, false, t).label {
                labels.push(label);
            }
        }
    }
    assert_eq!(c.mode(), LedMode::Alternate);
    assert_eq!(
        labels,
        ["Alternate Blink", "All ON", "PWM Fade", "All OFF", "Alternate Blink"]
    );
}

#[test]
fn reset_interrupts_fade() {
    let mut c = ModeController::default();
    for press in 0..3u64 {
        let start = press * 1000;
        for t in start..start + 1000 {
            c.tick(t < start + 500, false, t);
        }
    }
    assert_eq!(c.mode(), LedMode::Fade);

    let mut reset_label = None;
    for t in 3000..4000 {
        let frame = c.tick(false, t < 3300, t);
        if frame.label.is_some() {
            reset_label = frame.label;
        }
        if t > 3300 {
            assert_eq!(frame.leds, [false; 3]);
        }
    }
    assert_eq!(reset_label, Some(RESET_LABEL));
    assert_eq!(c.mode(), LedMode::Off);
}

#[test]
fn bridge_stream_updates_readings() {
    let mut lines = LineBuffer::<96>::new();
    let mut readings = SensorReadings::new();
    let stream = b"home/lab2/mariha/temp 24.5\r\nhome/lab2/mariha/hum 51\nhome/other/co2 700\n";

    let mut applied = 0;
    for &byte in stream.iter() {
        if let Some(Ok(line)) = lines.push(byte) {
            let update = parse_update(line).expect("topic line");
            if let Some(delivery) = update.delivery() {
                readings.store(delivery);
                applied += 1;
            }
        }
    }

    assert_eq!(applied, 2);
    assert_eq!(readings.temperature(), "24.5");
    assert_eq!(readings.humidity(), "51");
    let rendered = readings.lines();
    assert_eq!(rendered[2].as_str(), "Temp: 24.5 C");
    assert_eq!(rendered[3].as_str(), "Hum : 51 %");
}
