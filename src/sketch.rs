use crate::{Board, Console};

/// A program in the `setup` / `loop` shape.
///
/// A sketch holds only configuration (pins, intervals). Anything observed in
/// one `step` is re-read from the hardware in the next.
pub trait Sketch {
    /// Runs once: pin directions, logging channel, initial outputs.
    fn setup<B: Board, C: Console>(&self, board: &mut B, console: &mut C);

    /// One iteration of the poll loop, including its pause.
    fn step<B: Board, C: Console>(&self, board: &mut B, console: &mut C);
}

/// Run `sketch` forever.
pub fn run<S: Sketch, B: Board, C: Console>(sketch: &S, mut board: B, mut console: C) -> ! {
    sketch.setup(&mut board, &mut console);
    loop {
        sketch.step(&mut board, &mut console);
    }
}

/// Run `setup` and then exactly `iterations` steps.
pub fn run_for<S: Sketch, B: Board, C: Console>(
    sketch: &S,
    board: &mut B,
    console: &mut C,
    iterations: usize,
) {
    sketch.setup(board, console);
    for _ in 0..iterations {
        sketch.step(board, console);
    }
}
