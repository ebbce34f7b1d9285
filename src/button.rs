//! Digital input: mirror an active-low button onto an LED.

use crate::{Board, Console, Level, Pin, PinMode, Sketch, SERIAL_BAUD};

/// Pause between polls, in milliseconds. Bounds the polling rate; it does not
/// filter bounces.
pub const POLL_INTERVAL_MS: u32 = 10;

pub const STARTED: &str = "Button Example Started";
pub const PRESSED: &str = "Button pressed - LED ON";

/// Drives `led` high while `button` reads low.
///
/// The button is wired to ground with the internal pull-up enabled, so it
/// reads low while pressed. Only presses are logged; releases are silent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ButtonMirror {
    pub button: Pin,
    pub led: Pin,
    pub poll_ms: u32,
}

impl ButtonMirror {
    pub const fn new(button: Pin, led: Pin) -> Self {
        ButtonMirror { button, led, poll_ms: POLL_INTERVAL_MS }
    }

    pub const fn is_pressed(level: Level) -> bool {
        level.is_low()
    }
}

impl Sketch for ButtonMirror {
    fn setup<B: Board, C: Console>(&self, board: &mut B, console: &mut C) {
        board.configure_pin(self.button, PinMode::InputPullUp);
        board.configure_pin(self.led, PinMode::Output);

        console.begin(SERIAL_BAUD);
        console.log_line(STARTED);
    }

    fn step<B: Board, C: Console>(&self, board: &mut B, console: &mut C) {
        if Self::is_pressed(board.read_pin(self.button)) {
            board.write_pin(self.led, Level::High);
            console.log_line(PRESSED);
        } else {
            board.write_pin(self.led, Level::Low);
        }

        board.pause_ms(self.poll_ms);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::run_for;
    use crate::sim::{Event, Sim};
    use crate::Instant;

    const BUTTON: Pin = Pin(2);
    const LED: Pin = Pin(13);
    const SKETCH: ButtonMirror = ButtonMirror::new(BUTTON, LED);

    use Level::{High, Low};

    fn led_levels(sim: &Sim) -> Vec<Level> {
        sim.writes(LED).into_iter().map(|(_, level)| level).collect()
    }

    /// Log lines emitted after the startup banner.
    fn loop_lines(sim: &Sim) -> Vec<String> {
        sim.log_lines().into_iter().skip(1).collect()
    }

    #[test]
    fn setup_configures_pins_before_console() {
        let sim = Sim::new();
        SKETCH.setup(&mut sim.board(), &mut sim.console());

        assert_eq!(
            sim.events(),
            vec![
                Event::Configure(BUTTON, PinMode::InputPullUp),
                Event::Configure(LED, PinMode::Output),
                Event::Begin(9600),
                Event::Log(STARTED.into()),
            ]
        );
    }

    #[test]
    fn pressed_poll_order() {
        let sim = Sim::new();
        let mut board = sim.board();
        board.script(BUTTON, [Low]);
        SKETCH.setup(&mut board, &mut sim.console());
        SKETCH.step(&mut board, &mut sim.console());

        assert_eq!(
            sim.events()[4..].to_vec(),
            vec![
                Event::Read(BUTTON, Low),
                Event::Write(LED, High),
                Event::Log(PRESSED.into()),
                Event::Pause(POLL_INTERVAL_MS),
            ]
        );
    }

    #[test]
    fn held_pressed_logs_every_poll() {
        let sim = Sim::new();
        let mut board = sim.board();
        board.script(BUTTON, [Low; 5]);
        run_for(&SKETCH, &mut board, &mut sim.console(), 5);

        assert_eq!(led_levels(&sim), vec![High; 5]);
        assert_eq!(loop_lines(&sim), vec![PRESSED; 5]);
    }

    #[test]
    fn held_released_stays_dark_and_silent() {
        let sim = Sim::new();
        let mut board = sim.board();
        board.script(BUTTON, [High; 5]);
        run_for(&SKETCH, &mut board, &mut sim.console(), 5);

        assert_eq!(led_levels(&sim), vec![Low; 5]);
        assert!(loop_lines(&sim).is_empty());
    }

    #[test]
    fn unscripted_button_idles_released() {
        let sim = Sim::new();
        run_for(&SKETCH, &mut sim.board(), &mut sim.console(), 3);

        assert_eq!(led_levels(&sim), vec![Low; 3]);
        assert!(loop_lines(&sim).is_empty());
    }

    #[test]
    fn toggling_input_mirrors_each_poll() {
        let sim = Sim::new();
        let mut board = sim.board();
        board.script(BUTTON, [Low, High, Low]);
        run_for(&SKETCH, &mut board, &mut sim.console(), 3);

        assert_eq!(led_levels(&sim), vec![High, Low, High]);

        let logged_at: Vec<Instant> = sim
            .records()
            .into_iter()
            .filter(|r| r.event == Event::Log(PRESSED.into()))
            .map(|r| r.at)
            .collect();
        // Polls 1 and 3 start at t=0 and t=20.
        assert_eq!(logged_at, vec![Instant::from_ms(0), Instant::from_ms(20)]);
    }

    #[test]
    fn constant_input_gives_constant_output() {
        for input in [Low, High] {
            let sim = Sim::new();
            let mut board = sim.board();
            board.script(BUTTON, [input]);
            run_for(&SKETCH, &mut board, &mut sim.console(), 50);

            let levels = led_levels(&sim);
            assert_eq!(levels.len(), 50);
            assert!(levels.iter().all(|l| *l == !input));
        }
    }

    #[test]
    fn polls_every_interval() {
        let sim = Sim::new();
        run_for(&SKETCH, &mut sim.board(), &mut sim.console(), 100);

        assert_eq!(sim.now(), Instant::from_ms(100 * POLL_INTERVAL_MS));
    }
}
