use cortex_m::peripheral::{syst, SYST};

const SYST_CSR_ENABLE: u32 = 1 << 0;
const SYST_CSR_CLKSOURCE: u32 = 1 << 2;
const SYST_CSR_COUNTFLAG: u32 = 1 << 16;

/// The reload register is 24 bits wide.
const SYST_RVR_MAX: u32 = 0x00ff_ffff;

/// Blocking delays counted on the core clock.
///
/// No interrupt is used: the caller spins on COUNTFLAG, so nothing else runs
/// while a delay is in progress.
pub struct SysTick {
    ticks_per_ms: u32,
}

impl SysTick {
    /// SAFETY: takes over the SysTick peripheral; nothing else may use it.
    pub(crate) unsafe fn init(core_hz: u32) -> SysTick {
        let ticks_per_ms = core_hz / 1000;
        assert!(ticks_per_ms >= 1 && ticks_per_ms <= SYST_RVR_MAX + 1);

        let s = SysTick { ticks_per_ms };
        unsafe { s.registers().csr.write(0); }
        s
    }

    pub fn registers(&self) -> &syst::RegisterBlock {
        unsafe { &*SYST::PTR }
    }

    /// Spin for `ticks` core clock cycles, at most 2^24.
    pub fn delay_ticks(&mut self, ticks: u32) {
        if ticks == 0 {
            return;
        }

        unsafe {
            self.registers().rvr.write((ticks - 1).min(SYST_RVR_MAX));
            self.registers().cvr.write(0);
            self.registers().csr.write(SYST_CSR_ENABLE | SYST_CSR_CLKSOURCE);
        }

        // Writing CVR cleared COUNTFLAG; the first wrap sets it.
        while self.registers().csr.read() & SYST_CSR_COUNTFLAG == 0 {}

        unsafe { self.registers().csr.write(0); }
    }

    pub fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_ticks(self.ticks_per_ms);
        }
    }
}
