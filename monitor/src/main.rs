use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use log::warn;
use sketchbook_monitor::{
    listen, pattern,
    replay::{replay, SketchKind},
    session::{Printer, SessionLog},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print lines arriving on a serial port, stamped with the time they arrived
    Listen {
        /// Serial port, e.g. /dev/ttyUSB0 or COM3
        port: String,

        /// Baud rate
        #[arg(default_value_t = sketchbook::SERIAL_BAUD)]
        baud: u32,

        /// Also append lines to this file
        #[arg(short, long)]
        log: Option<PathBuf>,

        #[arg(short, long, default_value_t = 1000)]
        timeout_ms: u64,
    },

    /// Run a sketch on the simulated board and print its output
    Simulate {
        #[arg(value_enum)]
        sketch: SketchKind,

        #[arg(short, long, default_value_t = 5)]
        iterations: usize,

        /// Button samples, one per poll: P for pressed, R for released
        #[arg(short, long, default_value = "R")]
        presses: String,

        /// Also append lines to this file
        #[arg(short, long)]
        log: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Listen { port, baud, log, timeout_ms } => {
            listen_cmd(&port, baud, log.as_deref(), Duration::from_millis(timeout_ms))
        }
        Command::Simulate { sketch, iterations, presses, log } => {
            simulate_cmd(sketch, iterations, &presses, log.as_deref())
        }
    }
}

fn session_log(path: Option<&Path>) -> Result<Option<SessionLog<File>>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let log = SessionLog::open(path, Local::now().naive_local())?;
    println!("Logging to {}\n", path.display());
    Ok(Some(log))
}

fn listen_cmd(port: &str, baud: u32, log: Option<&Path>, timeout: Duration) -> Result<()> {
    let mut serial = listen::open(port, baud, timeout)?;
    println!("Connected to {port} at {baud} baud");
    println!("Press Ctrl+C to stop\n");

    let mut printer = Printer::new(io::stdout().lock(), session_log(log)?);

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        ctrlc::set_handler(move || stop.store(true, Ordering::Relaxed))
            .context("installing Ctrl+C handler")?;
    }

    let lines = listen::pump(serial.as_mut(), &mut printer, &stop, || Local::now().time())?;

    let (mut out, session) = printer.into_parts();
    drop(serial);
    drop(session);
    listen::write_closing(&mut out, log)?;
    if lines == 0 {
        warn!("no lines received from {port}");
    }
    Ok(())
}

fn simulate_cmd(sketch: SketchKind, iterations: usize, presses: &str, log: Option<&Path>) -> Result<()> {
    let presses = pattern::parse(presses).with_context(|| format!("parsing --presses {presses:?}"))?;
    let mut printer = Printer::new(io::stdout().lock(), session_log(log)?);
    replay(sketch, iterations, &presses, &mut printer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn listen_baud_is_positional() {
        let args = Args::try_parse_from(["sketchbook-monitor", "listen", "/dev/ttyACM0", "115200"]).unwrap();
        assert!(matches!(args.command, Command::Listen { baud: 115_200, .. }));

        let args = Args::try_parse_from(["sketchbook-monitor", "listen", "COM3", "--log", "data.txt"]).unwrap();
        match args.command {
            Command::Listen { port, baud, log, .. } => {
                assert_eq!(port, "COM3");
                assert_eq!(baud, sketchbook::SERIAL_BAUD);
                assert_eq!(log.as_deref(), Some(Path::new("data.txt")));
            }
            other => panic!("parsed as {other:?}"),
        }
    }
}
