//! Last-value store for the sensor monitor.
//!
//! Readings arrive as strings on named topics.  Only the most recent
//! value per quantity is kept; the display shows whatever is stored
//! the next time it renders.

use core::fmt::Write;

use heapless::String;

use crate::config::READING_PLACEHOLDER;

/// Longest reading kept, in bytes.
pub const READING_CAPACITY: usize = 16;

/// Longest rendered display line, in bytes.
pub const LINE_CAPACITY: usize = 32;

pub type Reading = String<READING_CAPACITY>;
pub type DisplayLine = String<LINE_CAPACITY>;

/// Quantities the monitor tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quantity {
    Temperature,
    Humidity,
}

impl Quantity {
    /// Pick the quantity from the last topic level (`.../temp`, `.../hum`).
    pub fn from_topic(topic: &str) -> Option<Self> {
        if topic.ends_with("/temp") {
            Some(Quantity::Temperature)
        } else if topic.ends_with("/hum") {
            Some(Quantity::Humidity)
        } else {
            None
        }
    }
}

/// One reading ready to be stored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Delivery {
    pub quantity: Quantity,
    pub value: Reading,
}

impl Delivery {
    /// Build from a raw topic/payload pair. Unknown topics give `None`.
    pub fn new(topic: &str, payload: &str) -> Option<Self> {
        let quantity = Quantity::from_topic(topic)?;
        Some(Self {
            quantity,
            value: truncated(payload.trim()),
        })
    }
}

/// Latest temperature and humidity strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SensorReadings {
    temperature: Reading,
    humidity: Reading,
}

impl SensorReadings {
    pub fn new() -> Self {
        Self {
            temperature: truncated(READING_PLACEHOLDER),
            humidity: truncated(READING_PLACEHOLDER),
        }
    }

    pub fn temperature(&self) -> &str {
        self.temperature.as_str()
    }

    pub fn humidity(&self) -> &str {
        self.humidity.as_str()
    }

    /// Overwrite the stored value for the delivery's quantity.
    pub fn store(&mut self, delivery: Delivery) {
        match delivery.quantity {
            Quantity::Temperature => self.temperature = delivery.value,
            Quantity::Humidity => self.humidity = delivery.value,
        }
    }

    /// Store a topic/payload pair. Returns which quantity changed, if any.
    pub fn apply(&mut self, topic: &str, payload: &str) -> Option<Quantity> {
        let delivery = Delivery::new(topic, payload)?;
        let quantity = delivery.quantity;
        self.store(delivery);
        Some(quantity)
    }

    /// Text lines for the OLED, top to bottom.
    pub fn lines(&self) -> [DisplayLine; 4] {
        let mut temp = DisplayLine::new();
        let _ = write!(temp, "Temp: {} C", self.temperature);
        let mut hum = DisplayLine::new();
        let _ = write!(hum, "Hum : {} %", self.humidity);
        [
            truncated_line("MQTT Sensor Monitor"),
            truncated_line("------------------"),
            temp,
            hum,
        ]
    }
}

impl Default for SensorReadings {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy as many whole characters as fit.
fn truncated(text: &str) -> Reading {
    let mut out = Reading::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

fn truncated_line(text: &str) -> DisplayLine {
    let mut out = DisplayLine::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
