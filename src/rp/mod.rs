use rp_pac::{clocks::vals::{ClkPeriCtrlAuxsrc, ClkRefCtrlSrc, ClkSysCtrlAuxsrc, ClkSysCtrlSrc}, pll, resets::regs::Peripherals};
pub use rp_pac as pac;

mod rp_reg;
pub use rp_reg::RpReg;

pub mod gpio;
pub use gpio::Gpio;

pub mod uart;
pub use uart::Uart;

use crate::{cortex_m::SysTick, Pin};

/// On-board LED of the Raspberry Pi Pico.
pub const LED_PIN: Pin = Pin(25);

/// Push button to ground.
pub const BUTTON_PIN: Pin = Pin(2);

const XOSC_HZ: u32 = 12_000_000;
const XOSC_STARTUP_DELAY_MS: u32 = 1;

const PLL_SYS_HZ: u32 = 125_000_000;
const PLL_USB_HZ: u32 = 48_000_000;

pub const CLK_REF_HZ: u32 = XOSC_HZ;
pub const CLK_SYS_HZ: u32 = PLL_SYS_HZ;
pub const CLK_PERI_HZ: u32 = PLL_USB_HZ;

/// Everything a sketch gets to touch.
pub struct Hardware {
    pub board: Gpio,
    pub console: Uart,
}

impl Hardware {
    /// SAFETY: must be called once, before any other peripheral access.
    pub(crate) unsafe fn init() -> Hardware {
        init();
        defmt::debug!("rp2040 up: clk_sys {=u32} Hz, clk_peri {=u32} Hz", CLK_SYS_HZ, CLK_PERI_HZ);

        Hardware {
            board: Gpio::new(unsafe { SysTick::init(CLK_SYS_HZ) }),
            console: Uart::uart0(),
        }
    }
}

fn init() {
    // Set clock to ROSC in case we're running from PLL before resetting it
    pac::CLOCKS.clk_sys_resus_ctrl().write_value(pac::clocks::regs::ClkSysResusCtrl(0));
    pac::CLOCKS.clk_sys_ctrl().modify(|w| w.set_src(ClkSysCtrlSrc::CLK_REF));
    while pac::CLOCKS.clk_sys_selected().read() != 1 << ClkSysCtrlSrc::CLK_REF as u32 {}
    pac::CLOCKS.clk_ref_ctrl().modify(|w| w.set_src(ClkRefCtrlSrc::ROSC_CLKSRC_PH));
    while pac::CLOCKS.clk_ref_selected().read() != 1 << ClkRefCtrlSrc::ROSC_CLKSRC_PH as u32 {}

    // Reset all peripherals (except those we need to keep executing code)
    let mut to_reset = Peripherals(0x01ff_ffff);
    to_reset.set_io_qspi(false);
    to_reset.set_pads_qspi(false);
    pac::RESETS.reset().write_value_set(to_reset);

    let mut plls = Peripherals::default();
    plls.set_pll_sys(true);
    plls.set_pll_usb(true);
    unreset(plls);

    start_xosc();

    pac::CLOCKS.clk_ref_ctrl().modify(|w| w.set_src(ClkRefCtrlSrc::XOSC_CLKSRC));
    while pac::CLOCKS.clk_ref_selected().read() != 1 << ClkRefCtrlSrc::XOSC_CLKSRC as u32 {}

    configure_pll(pac::PLL_SYS, const { PllConfig::validate(1, 125, 6, 2, PLL_SYS_HZ) });
    configure_pll(pac::PLL_USB, const { PllConfig::validate(1, 100, 5, 5, PLL_USB_HZ) });

    pac::CLOCKS.clk_sys_ctrl().write(|w| {
        w.set_auxsrc(ClkSysCtrlAuxsrc::CLKSRC_PLL_SYS);
        w.set_src(ClkSysCtrlSrc::CLKSRC_CLK_SYS_AUX);
    });
    while pac::CLOCKS.clk_sys_selected().read() != 1 << ClkSysCtrlSrc::CLKSRC_CLK_SYS_AUX as u32 {}

    // UART baud divisors assume clk_peri runs from pll_usb
    pac::CLOCKS.clk_peri_ctrl().write(|w| {
        w.set_enable(true);
        w.set_auxsrc(ClkPeriCtrlAuxsrc::CLKSRC_PLL_USB);
    });

    let mut io = Peripherals::default();
    io.set_io_bank0(true);
    io.set_pads_bank0(true);
    io.set_uart0(true);
    unreset(io);
}

fn unreset(peripherals: Peripherals) {
    pac::RESETS.reset().write_value_clear(peripherals);
    while ((!pac::RESETS.reset_done().read().0) & peripherals.0) != 0 {}
}

fn start_xosc() {
    let startup_delay = (((XOSC_HZ / 1000) * XOSC_STARTUP_DELAY_MS) + 128) / 256;
    pac::XOSC.startup().write(|w| w.set_delay(startup_delay as u16));
    pac::XOSC.ctrl().write(|w| {
        w.set_freq_range(pac::xosc::vals::CtrlFreqRange::_1_15MHZ);
        w.set_enable(pac::xosc::vals::Enable::ENABLE);
    });
    while !pac::XOSC.status().read().stable() {}
}

struct PllConfig {
    refdiv: u8,
    fbdiv: u16,
    post_div_1: u8,
    post_div_2: u8,
}

impl PllConfig {
    const fn validate(refdiv: u8, fbdiv: u16, post_div_1: u8, post_div_2: u8, out_hz: u32) -> PllConfig {
        let ref_freq = XOSC_HZ / refdiv as u32;
        assert!(fbdiv >= 16 && fbdiv <= 320);
        assert!(post_div_1 >= 1 && post_div_1 <= 7);
        assert!(post_div_2 >= 1 && post_div_2 <= 7);
        assert!(refdiv >= 1 && refdiv <= 63);
        assert!(ref_freq >= 5_000_000 && ref_freq <= 800_000_000);
        let vco_freq = ref_freq.saturating_mul(fbdiv as u32);
        assert!(vco_freq >= 750_000_000 && vco_freq <= 1_800_000_000);
        assert!(vco_freq / post_div_1 as u32 / post_div_2 as u32 == out_hz);
        PllConfig { refdiv, fbdiv, post_div_1, post_div_2 }
    }
}

fn configure_pll(p: pac::pll::Pll, config: PllConfig) {
    // Load VCO-related dividers before starting VCO
    p.cs().write(|w| w.set_refdiv(config.refdiv));
    p.fbdiv_int().write(|w| w.set_fbdiv_int(config.fbdiv));

    let mut pwr = pll::regs::Pwr::default();
    pwr.set_dsmpd(true);
    pwr.set_pd(false);
    pwr.set_vcopd(false);
    pwr.set_postdivpd(true);
    p.pwr().write_value(pwr);

    while !p.cs().read().lock() {}

    p.prim().write(|w| {
        w.set_postdiv1(config.post_div_1);
        w.set_postdiv2(config.post_div_2);
    });

    pwr.set_postdivpd(false);
    p.pwr().write_value(pwr);
}

#[cfg(feature = "rp2040-boot2-w25q080")]
#[link_section = ".boot2"]
#[used]
static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;
