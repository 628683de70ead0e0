//! Board support for the nRF52840 firmware binaries.
//!
//! Only built with the `embedded` feature.  Everything here is a thin
//! layer between Embassy peripherals and the pure logic in the rest of
//! the crate.

pub mod display;
pub mod outputs;
pub mod serial;

/// Stop for good after a fatal init error. The debug probe still sees
/// the log output that preceded this.
pub fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
