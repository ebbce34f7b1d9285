//! Run a sketch on the simulated board and print its log the way the serial
//! monitor would, stamped with virtual time since power-up.

use std::io::Write;

use chrono::{NaiveTime, TimeDelta};
use clap::ValueEnum;
use log::info;
use sketchbook::sim::{Event, Sim};
use sketchbook::{run_for, Blink, ButtonMirror, Level, Pin};

use crate::{session::Printer, Result};

/// Arduino pin numbers the sketches are wired to.
pub const LED: Pin = Pin(13);
pub const BUTTON: Pin = Pin(2);

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SketchKind {
    Blink,
    Button,
}

/// Simulate `iterations` loop passes of `kind`, printing each log line.
///
/// `presses` is the button input, one sample per poll; the last sample
/// holds once it runs out. Blink ignores it. Returns the number of lines
/// printed, startup banner included.
pub fn replay<O: Write, L: Write>(
    kind: SketchKind,
    iterations: usize,
    presses: &[Level],
    printer: &mut Printer<O, L>,
) -> Result<usize> {
    let sim = Sim::new();
    let mut board = sim.board();
    let mut console = sim.console();

    match kind {
        SketchKind::Blink => run_for(&Blink::new(LED), &mut board, &mut console, iterations),
        SketchKind::Button => {
            board.script(BUTTON, presses.iter().copied());
            run_for(&ButtonMirror::new(BUTTON, LED), &mut board, &mut console, iterations)
        }
    }

    // Summed from the pauses rather than read from the records, so runs
    // longer than the 32-bit microsecond clock still stamp correctly.
    let mut elapsed_ms: i64 = 0;
    let mut count = 0;
    for record in sim.records() {
        match record.event {
            Event::Pause(ms) => elapsed_ms += i64::from(ms),
            Event::Log(line) => {
                let (time, _) = NaiveTime::MIN.overflowing_add_signed(TimeDelta::milliseconds(elapsed_ms));
                printer.emit(time, &line)?;
                count += 1;
            }
            _ => {}
        }
    }

    info!("{kind:?}: {iterations} iterations, {count} lines, {elapsed_ms} ms simulated");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(kind: SketchKind, iterations: usize, presses: &[Level]) -> String {
        let mut printer: Printer<Vec<u8>, Vec<u8>> = Printer::new(Vec::new(), None);
        replay(kind, iterations, presses, &mut printer).unwrap();
        String::from_utf8(printer.into_parts().0).unwrap()
    }

    #[test]
    fn blink_timeline() {
        assert_eq!(
            run(SketchKind::Blink, 2, &[]),
            "[00:00:00.000] Blink Example Started\n\
             [00:00:00.000] LED: ON\n\
             [00:00:01.000] LED: OFF\n\
             [00:00:02.000] LED: ON\n\
             [00:00:03.000] LED: OFF\n"
        );
    }

    #[test]
    fn button_logs_presses_only() {
        use Level::{High, Low};
        assert_eq!(
            run(SketchKind::Button, 4, &[Low, High, Low, High]),
            "[00:00:00.000] Button Example Started\n\
             [00:00:00.000] Button pressed - LED ON\n\
             [00:00:00.020] Button pressed - LED ON\n"
        );
    }

    #[test]
    fn long_runs_do_not_wrap() {
        // 2400 periods of 2 s is 80 minutes, past the 71 minute Instant wrap.
        let out = run(SketchKind::Blink, 2400, &[]);
        assert_eq!(out.lines().last(), Some("[01:19:59.000] LED: OFF"));
    }
}
