//! Button input: debouncing and press classification.
//!
//! All buttons are active-low with an internal pull-up.  The board
//! code samples each pin once per tick and hands `pin.is_low()` to a
//! [`Button`]; everything past that point is pure logic.

pub mod debounce;
pub mod press;

pub use debounce::{Debouncer, Edge, Transition};
pub use press::{Button, PressClassifier, PressEvent, PressKind};
