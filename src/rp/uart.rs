//! Blocking, transmit-mostly PL011 UART used as the sketch console.

use rp_pac::uart::{regs, Uart as Regs};

use super::gpio::{Function, IoPin};
use super::{pac, CLK_PERI_HZ};
use crate::{pl011::Divisors, Console};

/// 8 data bits in UARTLCR_H.WLEN.
const WLEN_8: u8 = 0b11;

pub struct Uart {
    regs: Regs,
    tx: IoPin,
    rx: IoPin,
    enabled: bool,
}

impl Uart {
    /// UART0 on GPIO0 (TX) and GPIO1 (RX).
    pub fn uart0() -> Self {
        Uart {
            regs: pac::UART0,
            tx: IoPin { pin: 0 },
            rx: IoPin { pin: 1 },
            enabled: false,
        }
    }

    /// Configure 8N1 at `baud` with FIFOs on, and route the pins.
    pub fn enable(&mut self, baud: u32) {
        let div = Divisors::new(CLK_PERI_HZ, baud);
        defmt::debug!(
            "uart: {=u32} baud requested, divisors {}, actual {=u32}",
            baud,
            div,
            div.actual_baud(CLK_PERI_HZ)
        );

        self.regs.uartcr().write(|w| w.set_uarten(false));

        self.regs.uartibrd().write_value(regs::Uartibrd(div.integer as u32));
        self.regs.uartfbrd().write_value(regs::Uartfbrd(div.fraction as u32));

        // The divisor registers only latch on a UARTLCR_H write.
        self.regs.uartlcr_h().write(|w| {
            w.set_wlen(WLEN_8);
            w.set_fen(true);
        });

        self.regs.uartcr().write(|w| {
            w.set_uarten(true);
            w.set_txe(true);
            w.set_rxe(true);
        });

        self.tx.set_output_pad();
        self.rx.set_input_pad(true);
        self.tx.set_function(Function::Uart);
        self.rx.set_function(Function::Uart);

        self.enabled = true;
    }

    pub fn write_byte(&mut self, b: u8) {
        while self.regs.uartfr().read().txff() {}
        self.regs.uartdr().write(|w| w.set_data(b));
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_byte(b);
        }
    }
}

impl Console for Uart {
    fn begin(&mut self, baud: u32) {
        self.enable(baud);
    }

    fn log_line(&mut self, line: &str) {
        if !self.enabled {
            defmt::warn!("uart: dropping line, console not started");
            return;
        }
        self.write_bytes(line.as_bytes());
        self.write_bytes(b"\r\n");
    }
}
