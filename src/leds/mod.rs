//! Three-LED mode cycler.
//!
//! Two buttons drive the LEDs: MODE steps through [`LedMode`] in order,
//! RESET jumps straight back to [`LedMode::Off`].
//!
//! ## Components
//!
//! - **Mode**: the closed set of LED patterns and their OLED labels
//! - **Fade**: triangle brightness ramp + software PWM
//! - **Controller**: per-tick state machine tying buttons to outputs

pub mod controller;
pub mod fade;


/// Output levels for the red, green and blue LEDs (`true` = lit).
pub type LedLevels = [bool; 3];

pub const ALL_OFF: LedLevels = [false; 3];
pub const ALL_ON: LedLevels = [true; 3];

/// LED patterns, in MODE-button order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedMode {
    /// Everything dark.
    Off,
    /// One LED at a time, red → green → blue.
    Alternate,
    /// All three lit.
    AllOn,
    /// All three breathing together.
    Fade,
}

impl LedMode {
    pub const ALL: [LedMode; 4] = [
        LedMode::Off,
        LedMode::Alternate,
        LedMode::AllOn,
        LedMode::Fade,
    ];

    /// Position in [`LedMode::ALL`].
    pub fn index(self) -> usize {
        match self {
            LedMode::Off => 0,
            LedMode::Alternate => 1,
            LedMode::AllOn => 2,
            LedMode::Fade => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The mode a MODE press moves to.
    pub fn next(self) -> Self {
        let next = cycle_next(self.index(), Self::ALL.len());
        Self::from_index(next).unwrap_or(LedMode::Off)
    }

    /// Text shown on the OLED when the mode is entered.
    pub fn label(self) -> &'static str {
        match self {
            LedMode::Off => "All OFF",
            LedMode::Alternate => "Alternate Blink",
            LedMode::AllOn => "All ON",
            LedMode::Fade => "PWM Fade",
        }
    }
}

/// Step a cyclic index forward. An empty cycle leaves the index alone.
pub fn cycle_next(index: usize, count: usize) -> usize {
    if count == 0 {
        index
    } else {
        (index + 1) % count
    }
}
