pub use atsamd21j as pac;

pub mod gpio;
pub use gpio::Port;

use crate::{cortex_m::SysTick, rtt::RttConsole, Pin};

/// D13 on the Arduino Zero, wired to the on-board LED.
pub const LED_PIN: Pin = gpio::pa(17);

/// D2 on the Arduino Zero.
pub const BUTTON_PIN: Pin = gpio::pa(14);

/// OSC8M with its prescaler set to 1, feeding GCLK0.
pub const CORE_HZ: u32 = 8_000_000;

pub struct Hardware {
    pub board: Port,
    pub console: RttConsole,
}

impl Hardware {
    /// SAFETY: must be called once, before any other peripheral access.
    pub(crate) unsafe fn init() -> Hardware {
        init();
        defmt::debug!("samd21 up: core {=u32} Hz", CORE_HZ);

        Hardware {
            board: Port::new(unsafe { SysTick::init(CORE_HZ) }),
            console: RttConsole::new(),
        }
    }
}

fn init() {
    // Reset leaves OSC8M divided by 8
    let sysctrl = unsafe { pac::SYSCTRL::steal() };
    sysctrl.osc8m.modify(|_, w| unsafe { w.presc().bits(0) });
}
