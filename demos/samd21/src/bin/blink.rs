#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use sketchbook::{Blink, Hardware, LED_PIN};

#[sketchbook::main]
fn main(hw: Hardware) -> ! {
    defmt::info!("blink on pin {=u8}", LED_PIN.num());
    sketchbook::run(&Blink::new(LED_PIN), hw.board, hw.console)
}
