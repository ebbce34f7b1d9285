use crate::samd::pac::{PORT, PORT_IOBUS};
use crate::samd::pac::port::{
    CTRL, DIR, DIRCLR, DIRSET, DIRTGL, IN, OUT, OUTCLR, OUTSET, OUTTGL, PINCFG0_ as PINCFG,
    PMUX0_ as PMUX, WRCONFIG,
};
use crate::{cortex_m::SysTick, Board, Level, Pin, PinMode};

/// Pin `n` of port group A.
pub const fn pa(n: u8) -> Pin {
    Pin(n)
}

/// The [`PORT`] register block
#[repr(C)]
#[allow(clippy::upper_case_acronyms, unused)]
struct GROUP {
    dir: DIR,
    dirclr: DIRCLR,
    dirset: DIRSET,
    dirtgl: DIRTGL,
    out: OUT,
    outclr: OUTCLR,
    outset: OUTSET,
    outtgl: OUTTGL,
    in_: IN,
    ctrl: CTRL,
    wrconfig: WRCONFIG,
    _padding1: [u8; 4],
    pmux: [PMUX; 16],
    pincfg: [PINCFG; 32],
    _padding2: [u8; 32],
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct IoPin {
    pub group: u8,
    pub pin: u8,
}

impl IoPin {
    #[inline]
    fn group(&self) -> &'static GROUP {
        const GROUPS: *const GROUP = PORT::ptr() as *const _;
        unsafe { &*GROUPS.add(self.group as usize) }
    }

    #[inline]
    fn group_iobus(&self) -> &'static GROUP {
        const GROUPS: *const GROUP = PORT_IOBUS::ptr() as *const _;
        unsafe { &*GROUPS.add(self.group as usize) }
    }

    #[inline]
    fn mask_32(&self) -> u32 {
        1 << self.pin as u32
    }

    #[inline]
    fn mask_16(&self) -> u16 {
        1 << (self.pin & 0xF)
    }

    #[inline]
    fn hwsel(&self) -> bool {
        self.pin & 0x10 != 0
    }

    /// Sample inputs continuously so IOBUS reads are current.
    #[inline]
    pub fn enable_sampling(&self) {
        unsafe {
            self.group().ctrl.write(|w| w.bits(self.group().ctrl.read().bits() | self.mask_32()))
        }
    }

    /// Hand the pin to PORT (peripheral mux off) and set its input buffer
    /// and pull resistor in one WRCONFIG write.
    #[inline]
    pub fn set_io(&self, input: bool, pull: bool) {
        self.group().wrconfig.write(|w| {
            w.hwsel().bit(self.hwsel());
            w.wrpincfg().set_bit();
            w.wrpmux().set_bit();
            w.pmux().variant(0);
            w.pmuxen().bit(false);
            w.inen().bit(input);
            w.pullen().bit(pull);
            w.pinmask().variant(self.mask_16())
        });
    }

    #[inline]
    pub fn read_iobus(&self) -> bool {
        let mask = self.mask_32();
        self.group_iobus().in_.read().bits() & mask != 0
    }

    #[inline]
    pub fn outset(&self) {
        unsafe {
            self.group_iobus().outset.write(|w| w.bits(self.mask_32()));
        }
    }

    #[inline]
    pub fn outclr(&self) {
        unsafe {
            self.group_iobus().outclr.write(|w| w.bits(self.mask_32()));
        }
    }

    #[inline]
    pub fn dirset(&self) {
        unsafe {
            self.group_iobus().dirset.write(|w| w.bits(self.mask_32()));
        }
    }

    #[inline]
    pub fn dirclr(&self) {
        unsafe {
            self.group_iobus().dirclr.write(|w| w.bits(self.mask_32()));
        }
    }
}

impl From<Pin> for IoPin {
    fn from(pin: Pin) -> Self {
        IoPin { group: pin.num() / 32, pin: pin.num() % 32 }
    }
}

/// PORT pins accessed over the single-cycle IOBUS, paused with SysTick.
pub struct Port {
    systick: SysTick,
}

impl Port {
    pub(crate) fn new(systick: SysTick) -> Self {
        Port { systick }
    }
}

impl Board for Port {
    fn configure_pin(&mut self, pin: Pin, mode: PinMode) {
        let io = IoPin::from(pin);
        defmt::trace!("configure P{=u8}{=u8} as {}", io.group, io.pin, mode);

        match mode {
            PinMode::Output => {
                io.set_io(false, false);
                io.outclr();
                io.dirset();
            }
            PinMode::InputPullUp => {
                io.dirclr();
                // With PULLEN, OUT selects the pull direction
                io.outset();
                io.set_io(true, true);
                io.enable_sampling();
            }
        }
    }

    #[inline]
    fn write_pin(&mut self, pin: Pin, level: Level) {
        let io = IoPin::from(pin);
        match level {
            Level::High => io.outset(),
            Level::Low => io.outclr(),
        }
    }

    #[inline]
    fn read_pin(&mut self, pin: Pin) -> Level {
        IoPin::from(pin).read_iobus().into()
    }

    fn pause_ms(&mut self, ms: u32) {
        self.systick.delay_ms(ms)
    }
}
