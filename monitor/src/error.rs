use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not open serial port {port}")]
    OpenPort {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("could not open log file {}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("press pattern is empty")]
    EmptyPattern,

    #[error("invalid character {ch:?} at position {pos} in press pattern (expected P or R)")]
    InvalidPattern { ch: char, pos: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}
