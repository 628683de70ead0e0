//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and transport
//! constants live here so they can be tuned in one place.

// Polling loop

/// Period of the cooperative polling loop (ms).
pub const TICK_MS: u64 = 1;

// LED mode cycler

/// MODE button debounce time (ms).
pub const MODE_DEBOUNCE_MS: u64 = 300;

/// RESET button debounce time (ms).
pub const RESET_DEBOUNCE_MS: u64 = 200;

/// Interval between steps of the alternate blink sequence (ms).
pub const BLINK_INTERVAL_MS: u64 = 200;

/// Interval between fade ramp steps (ms).
pub const FADE_INTERVAL_MS: u64 = 15;

/// Brightness change per fade ramp step.
pub const FADE_STEP: i16 = 5;

/// Software PWM period (ms). 10 ms ≈ 100 Hz.
pub const PWM_PERIOD_MS: u64 = 10;

// Press-type detector

/// Single button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Hold time after which a press counts as long (ms).
pub const LONG_PRESS_MS: u64 = 1500;

/// Buzzer tone while a long press is held (Hz).
pub const BUZZER_FREQ_HZ: u32 = 1000;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*`
// pins are picked in each binary.  Adjust for your custom PCB.
//
//   Button MODE / single button → P0.11
//   Button RESET                → P0.12
//   LED red                     → P0.13
//   LED green                   → P0.14
//   LED blue                    → P0.15
//   Buzzer                      → P0.16
//   I²C SDA                     → P0.26
//   I²C SCL                     → P0.27

// Display

/// I²C address of the SSD1306 module.
pub const DISPLAY_I2C_ADDR: u8 = 0x3C;

// Sensor monitor

/// Topic carrying the temperature reading.
pub const TOPIC_TEMP: &str = "home/lab2/mariha/temp";

/// Topic carrying the humidity reading.
pub const TOPIC_HUM: &str = "home/lab2/mariha/hum";

/// Placeholder shown before the first reading arrives.
pub const READING_PLACEHOLDER: &str = "--";

/// Longest transport line accepted from the serial bridge (bytes).
pub const MAX_LINE_LEN: usize = 96;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "tactile";
pub const USB_PRODUCT: &str = "Sensor Monitor Bridge";
pub const USB_SERIAL_NUMBER: &str = "000001";
