//! Where stamped lines go: the terminal, and optionally a log file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::{NaiveDateTime, NaiveTime};
use log::debug;

use crate::{line::stamp, Error, Result};

/// Appends stamped lines to a log, after a header naming when the session
/// started. Each line is flushed as it is written.
pub struct SessionLog<W: Write> {
    out: W,
}

impl SessionLog<File> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path, started: NaiveDateTime) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::LogFile { path: path.to_owned(), source })?;
        debug!("appending to {}", path.display());
        Self::start(file, started)
    }
}

impl<W: Write> SessionLog<W> {
    pub fn start(mut out: W, started: NaiveDateTime) -> Result<Self> {
        write!(out, "{}", header(started))?;
        out.flush()?;
        Ok(SessionLog { out })
    }

    pub fn write_line(&mut self, stamped: &str) -> Result<()> {
        writeln!(self.out, "{stamped}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn header(started: NaiveDateTime) -> String {
    format!("\n--- Session started at {} ---\n", started.format("%Y-%m-%d %H:%M:%S"))
}

/// Stamps each line and sends it to the terminal and the session log.
pub struct Printer<O: Write, L: Write = File> {
    out: O,
    log: Option<SessionLog<L>>,
}

impl<O: Write, L: Write> Printer<O, L> {
    pub fn new(out: O, log: Option<SessionLog<L>>) -> Self {
        Printer { out, log }
    }

    pub fn emit(&mut self, time: NaiveTime, line: &str) -> Result<()> {
        let stamped = stamp(time, line);
        writeln!(self.out, "{stamped}")?;
        if let Some(log) = &mut self.log {
            log.write_line(&stamped)?;
        }
        Ok(())
    }

    pub fn into_parts(self) -> (O, Option<SessionLog<L>>) {
        (self.out, self.log)
    }
}
