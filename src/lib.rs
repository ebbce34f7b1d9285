#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Arduino-style example sketches: a blinking LED and a button mirrored onto
//! an LED, written against a small blocking hardware interface.
//!
//! The sketches only see [`Board`] and [`Console`]. Board support for the
//! RP2040 and SAMD21 lives behind the `rp2040` and `samd21` features, and a
//! recording simulated board behind `sim`.

#[cfg(all(feature = "rp2040", feature = "samd21"))]
compile_error!("features `rp2040` and `samd21` are mutually exclusive");

pub mod gpio;
pub use gpio::{Level, Pin, PinMode};

mod hal;
pub use hal::{Board, Console};

mod sketch;
pub use sketch::{run, run_for, Sketch};

pub mod blink;
pub use blink::Blink;

pub mod button;
pub use button::ButtonMirror;

pub mod time;
pub use time::Instant;

pub mod pl011;

#[cfg(any(test, feature = "sim"))]
pub mod sim;

#[cfg(feature = "defmt")]
pub mod rtt;

/// Rate the logging channel is opened at by both sketches.
pub const SERIAL_BAUD: u32 = 9600;

#[cfg(feature = "cortex-m")]
pub mod cortex_m;

#[cfg(feature = "rp2040")]
pub mod rp;
#[cfg(feature = "rp2040")]
pub use rp::{Hardware, BUTTON_PIN, LED_PIN};

#[cfg(feature = "samd21")]
pub mod samd;
#[cfg(feature = "samd21")]
pub use samd::{Hardware, BUTTON_PIN, LED_PIN};

#[cfg(feature = "cortex-m")]
pub use sketchbook_macros::main_cortex_m as main;

#[cfg(feature = "cortex-m")]
#[doc(hidden)]
pub mod internal {
    pub use cortex_m_rt;

    #[inline(always)]
    pub unsafe fn pre_init() {
        ::cortex_m::interrupt::disable();
    }

    /// Bring up clocks and peripherals for the selected board.
    ///
    /// SAFETY: must be called exactly once, before any other hardware access.
    #[inline(always)]
    pub unsafe fn init() -> crate::Hardware {
        crate::Hardware::init()
    }
}
