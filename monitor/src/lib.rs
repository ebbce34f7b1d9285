//! Host side of the sketchbook: read what a board prints over serial, or
//! replay a sketch against the simulated board, with every line stamped.

mod error;
pub use error::Error;

pub mod line;
pub mod listen;
pub mod pattern;
pub mod replay;
pub mod session;

pub type Result<T, E = Error> = std::result::Result<T, E>;
