//! Reading lines from a board over a serial port.

use std::io::{self, Read};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::NaiveTime;
use log::{debug, trace};

use crate::{line::LineAssembler, session::Printer, Error, Result};

pub fn open(port: &str, baud: u32, timeout: Duration) -> Result<Box<dyn serialport::SerialPort>> {
    let serial = serialport::new(port, baud)
        .timeout(timeout)
        .open()
        .map_err(|source| Error::OpenPort { port: port.to_owned(), source })?;
    debug!("opened {port}: {baud} baud, timeout {timeout:?}");
    Ok(serial)
}

/// Read from `reader` until `stop` is set, printing each line with the time
/// `clock` gives when it was printed.
///
/// Lines end at `\n`, or where a read times out: text the board sent without
/// a line break is printed once the port goes quiet. Text still pending when
/// `stop` is seen is printed too. Interrupted reads just loop around. Returns
/// the number of lines printed.
pub fn pump<R, O, L>(
    reader: &mut R,
    printer: &mut Printer<O, L>,
    stop: &AtomicBool,
    mut clock: impl FnMut() -> NaiveTime,
) -> Result<usize>
where
    R: Read + ?Sized,
    O: io::Write,
    L: io::Write,
{
    let mut buf = [0u8; 256];
    let mut lines = LineAssembler::new();
    let mut count = 0;

    while !stop.load(Ordering::Relaxed) {
        let n = match reader.read(&mut buf) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::TimedOut => {
                if let Some(line) = lines.take_pending() {
                    trace!("read timed out, printing unterminated line");
                    printer.emit(clock(), &line)?;
                    count += 1;
                }
                continue;
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        trace!("read {n} bytes");

        for line in lines.push(&buf[..n]) {
            printer.emit(clock(), &line)?;
            count += 1;
        }
    }

    if let Some(line) = lines.take_pending() {
        debug!("printing unterminated line left at stop");
        printer.emit(clock(), &line)?;
        count += 1;
    }

    Ok(count)
}

/// Shutdown notice, written once the port and log file have been released.
pub fn write_closing<W: io::Write>(out: &mut W, log: Option<&Path>) -> io::Result<()> {
    writeln!(out, "\n\nStopping monitor...")?;
    writeln!(out, "Serial port closed")?;
    if let Some(path) = log {
        writeln!(out, "Log file closed: {}", path.display())?;
    }
    Ok(())
}
