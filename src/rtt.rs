//! Console over the defmt RTT channel, for boards without a wired UART.

use crate::Console;

/// Forwards each log line as a defmt `info` record.
///
/// RTT has no line rate; `begin` only notes the requested one.
#[derive(Default)]
pub struct RttConsole {
    opened: bool,
}

impl RttConsole {
    pub const fn new() -> Self {
        RttConsole { opened: false }
    }
}

impl Console for RttConsole {
    fn begin(&mut self, baud: u32) {
        defmt::debug!("console opened (nominal {=u32} baud)", baud);
        self.opened = true;
    }

    fn log_line(&mut self, line: &str) {
        if !self.opened {
            defmt::warn!("log line before console was opened");
        }
        defmt::info!("{=str}", line);
    }
}
