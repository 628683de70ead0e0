//! tactile: button-driven controllers for a small nRF52840 panel.
//!
//! The pure logic (debouncing, press classification, LED modes, the
//! sensor value store and the bridge line protocol) is `no_std` and
//! runs on the host for testing.  The `board` module and the three
//! firmware binaries under `src/bin/` need the `embedded` feature.
//!
//! Usage: `cargo test --lib` on the host, or
//! `cargo build --release --features embedded --target thumbv7em-none-eabihf`
//! for the board.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod indicator;
pub mod input;
pub mod leds;
pub mod sensor;
pub mod transport;

#[cfg(feature = "embedded")]
pub mod board;

pub use error::Error;
