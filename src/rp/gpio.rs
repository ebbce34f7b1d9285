use rp_pac::{common::{Reg, RW}, io::Io, SIO};

use super::RpReg;
use crate::{cortex_m::SysTick, Board, Level, Pin, PinMode};

/// IO_BANK0 function select values.
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum Function {
    Spi = 1,
    Uart = 2,
    I2c = 3,
    Pwm = 4,
    Sio = 5,
    Pio0 = 6,
    Pio1 = 7,
    Clock = 8,
    Usb = 9,
    Null = 31,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct IoPin {
    pub pin: u8,
}

impl IoPin {
    fn bank(&self) -> usize {
        (self.pin >> 5) as usize
    }

    fn pin_in_bank(&self) -> usize {
        (self.pin & 0x1f) as usize
    }

    fn mask(&self) -> u32 {
        1 << self.pin_in_bank()
    }

    #[inline]
    fn pads(&self) -> Reg<rp_pac::pads::regs::GpioCtrl, RW> {
        if self.pin <= 31 {
            crate::rp::pac::PADS_BANK0.gpio(self.pin_in_bank())
        } else {
            crate::rp::pac::PADS_QSPI.gpio(self.pin_in_bank())
        }
    }

    #[inline]
    fn io(&self) -> Io {
        if self.pin <= 31 {
            crate::rp::pac::IO_BANK0
        } else {
            crate::rp::pac::IO_QSPI
        }
    }

    #[inline]
    pub fn set_function(&self, func: Function) {
        self.io().gpio(self.pin_in_bank()).ctrl().write(|w| {
            w.set_funcsel(func as u8);
        });
    }

    /// Input buffer on, with the pull-up enabled or not. Pull-down is always
    /// turned off.
    #[inline]
    pub fn set_input_pad(&self, pull_up: bool) {
        self.pads().write(|w| {
            w.set_ie(true);
            w.set_schmitt(true);
            w.set_pue(pull_up);
            w.set_pde(false);
        });
    }

    /// Output driver enabled, input buffer kept on so the pin reads back.
    #[inline]
    pub fn set_output_pad(&self) {
        self.pads().write_clear(|w| w.set_od(true));
        self.pads().write_set(|w| w.set_ie(true));
    }

    #[inline]
    pub fn read(&self) -> bool {
        SIO.gpio_in(self.bank()).read() & self.mask() != 0
    }

    #[inline]
    pub fn oe_set(&self) {
        SIO.gpio_oe(self.bank()).value_set().write_value(self.mask())
    }

    #[inline]
    pub fn oe_clr(&self) {
        SIO.gpio_oe(self.bank()).value_clr().write_value(self.mask())
    }

    #[inline]
    pub fn out_set(&self) {
        SIO.gpio_out(self.bank()).value_set().write_value(self.mask())
    }

    #[inline]
    pub fn out_clr(&self) {
        SIO.gpio_out(self.bank()).value_clr().write_value(self.mask())
    }
}

impl From<Pin> for IoPin {
    fn from(pin: Pin) -> Self {
        IoPin { pin: pin.num() }
    }
}

/// Bank 0 pins driven through SIO, paused with SysTick.
pub struct Gpio {
    systick: SysTick,
}

impl Gpio {
    pub(crate) fn new(systick: SysTick) -> Self {
        Gpio { systick }
    }
}

impl Board for Gpio {
    fn configure_pin(&mut self, pin: Pin, mode: PinMode) {
        defmt::trace!("configure GPIO{=u8} as {}", pin.num(), mode);
        let io = IoPin::from(pin);

        match mode {
            PinMode::Output => {
                io.out_clr();
                io.oe_set();
                io.set_output_pad();
            }
            PinMode::InputPullUp => {
                io.oe_clr();
                io.set_input_pad(true);
            }
        }

        io.set_function(Function::Sio);
    }

    #[inline]
    fn write_pin(&mut self, pin: Pin, level: Level) {
        let io = IoPin::from(pin);
        match level {
            Level::High => io.out_set(),
            Level::Low => io.out_clr(),
        }
    }

    #[inline]
    fn read_pin(&mut self, pin: Pin) -> Level {
        IoPin::from(pin).read().into()
    }

    fn pause_ms(&mut self, ms: u32) {
        self.systick.delay_ms(ms)
    }
}
