//! Digital output: blink one LED with a fixed half-period.

use crate::{Board, Console, Level, Pin, PinMode, Sketch, SERIAL_BAUD};

/// Time the LED spends in each state, in milliseconds.
pub const BLINK_INTERVAL_MS: u32 = 1000;

pub const STARTED: &str = "Blink Example Started";
pub const LED_ON: &str = "LED: ON";
pub const LED_OFF: &str = "LED: OFF";

/// Toggles `led` every `interval_ms`, logging each transition.
///
/// One `step` is a full period: on, wait, off, wait.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Blink {
    pub led: Pin,
    pub interval_ms: u32,
}

impl Blink {
    pub const fn new(led: Pin) -> Self {
        Blink { led, interval_ms: BLINK_INTERVAL_MS }
    }

    pub const fn with_interval(self, interval_ms: u32) -> Self {
        Blink { interval_ms, ..self }
    }
}

impl Sketch for Blink {
    fn setup<B: Board, C: Console>(&self, board: &mut B, console: &mut C) {
        console.begin(SERIAL_BAUD);
        console.log_line(STARTED);

        board.configure_pin(self.led, PinMode::Output);
        board.write_pin(self.led, Level::Low);
    }

    fn step<B: Board, C: Console>(&self, board: &mut B, console: &mut C) {
        board.write_pin(self.led, Level::High);
        console.log_line(LED_ON);
        board.pause_ms(self.interval_ms);

        board.write_pin(self.led, Level::Low);
        console.log_line(LED_OFF);
        board.pause_ms(self.interval_ms);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::run_for;
    use crate::sim::{Event, Record, Sim};
    use crate::Instant;

    const LED: Pin = Pin(13);

    #[test]
    fn setup_opens_console_then_drives_led_low() {
        let sim = Sim::new();
        Blink::new(LED).setup(&mut sim.board(), &mut sim.console());

        assert_eq!(
            sim.events(),
            vec![
                Event::Begin(9600),
                Event::Log(STARTED.into()),
                Event::Configure(LED, PinMode::Output),
                Event::Write(LED, Level::Low),
            ]
        );
    }

    #[test]
    fn first_period_timeline() {
        let sim = Sim::new();
        run_for(&Blink::new(LED), &mut sim.board(), &mut sim.console(), 2);

        let at = Instant::from_ms;
        let loop_records: Vec<Record> = sim.records().into_iter().skip(4).collect();
        assert_eq!(
            loop_records,
            vec![
                Record { at: at(0), event: Event::Write(LED, Level::High) },
                Record { at: at(0), event: Event::Log(LED_ON.into()) },
                Record { at: at(0), event: Event::Pause(1000) },
                Record { at: at(1000), event: Event::Write(LED, Level::Low) },
                Record { at: at(1000), event: Event::Log(LED_OFF.into()) },
                Record { at: at(1000), event: Event::Pause(1000) },
                Record { at: at(2000), event: Event::Write(LED, Level::High) },
                Record { at: at(2000), event: Event::Log(LED_ON.into()) },
                Record { at: at(2000), event: Event::Pause(1000) },
                Record { at: at(3000), event: Event::Write(LED, Level::Low) },
                Record { at: at(3000), event: Event::Log(LED_OFF.into()) },
                Record { at: at(3000), event: Event::Pause(1000) },
            ]
        );
    }

    #[test]
    fn levels_alternate_and_hold_for_interval() {
        let sim = Sim::new();
        run_for(&Blink::new(LED), &mut sim.board(), &mut sim.console(), 25);

        // Skip the initial low written during setup.
        let all = sim.writes(LED);
        let writes = &all[1..];
        assert_eq!(writes.len(), 50);

        for (i, (at, level)) in writes.iter().enumerate() {
            let expected = if i % 2 == 0 { Level::High } else { Level::Low };
            assert_eq!(*level, expected, "write {i}");
            assert_eq!(at.as_ms(), i as u32 * BLINK_INTERVAL_MS, "write {i}");
        }
    }

    #[test]
    fn one_log_line_per_transition() {
        let sim = Sim::new();
        run_for(&Blink::new(LED), &mut sim.board(), &mut sim.console(), 3);

        assert_eq!(
            sim.log_lines(),
            vec![STARTED, LED_ON, LED_OFF, LED_ON, LED_OFF, LED_ON, LED_OFF]
        );
    }

    #[test]
    fn custom_interval_sets_period() {
        let sim = Sim::new();
        let sketch = Blink::new(LED).with_interval(250);
        run_for(&sketch, &mut sim.board(), &mut sim.console(), 4);

        assert_eq!(sim.now(), Instant::from_ms(2000));
    }
}
