#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use sketchbook::{ButtonMirror, Hardware, BUTTON_PIN, LED_PIN};

#[sketchbook::main]
fn main(hw: Hardware) -> ! {
    defmt::info!("button on pin {=u8}, led on pin {=u8}", BUTTON_PIN.num(), LED_PIN.num());
    sketchbook::run(&ButtonMirror::new(BUTTON_PIN, LED_PIN), hw.board, hw.console)
}
