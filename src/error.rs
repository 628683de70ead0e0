//! Unified error type for tactile.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The SSD1306 did not answer during init or a flush failed.
    Display,

    /// USB stack returned an error or the endpoint went away.
    Usb,

    /// Incoming data did not fit the fixed-size buffer.
    BufferOverflow,

    /// Incoming data was not valid UTF-8 text.
    Malformed,
}
