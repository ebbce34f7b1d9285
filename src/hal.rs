use crate::{Level, Pin, PinMode};

/// Pin I/O and timing, as provided by a board.
///
/// All operations are infallible from the caller's point of view: a board
/// deals with its own faults. Using a pin that was never configured is up to
/// the board.
pub trait Board {
    fn configure_pin(&mut self, pin: Pin, mode: PinMode);

    fn write_pin(&mut self, pin: Pin, level: Level);

    fn read_pin(&mut self, pin: Pin) -> Level;

    /// Block the calling thread for at least `ms` milliseconds.
    fn pause_ms(&mut self, ms: u32);
}

/// Line-oriented logging channel.
pub trait Console {
    /// Open the channel. Called once, before any `log_line`.
    fn begin(&mut self, baud: u32);

    /// Emit `line` followed by a line terminator.
    fn log_line(&mut self, line: &str);
}
