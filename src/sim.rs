//! A board that runs on the host and records every hardware call.
//!
//! [`Sim`] owns a trace and a virtual clock. The [`SimBoard`] and
//! [`SimConsole`] handed out by it share both, so the trace interleaves pin
//! activity and log lines in call order. Only [`Board::pause_ms`] advances the
//! clock.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use log::{trace, warn};

use crate::{Board, Console, Instant, Level, Pin, PinMode};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Configure(Pin, PinMode),
    Write(Pin, Level),
    Read(Pin, Level),
    Pause(u32),
    Begin(u32),
    Log(String),
}

/// An [`Event`] and the virtual time it happened at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub at: Instant,
    pub event: Event,
}

#[derive(Default)]
struct Shared {
    now: Cell<Instant>,
    records: RefCell<Vec<Record>>,
}

impl Shared {
    fn push(&self, event: Event) {
        let at = self.now.get();
        trace!("{:>8} us  {:?}", at.as_us(), event);
        self.records.borrow_mut().push(Record { at, event });
    }
}

#[derive(Clone, Default)]
pub struct Sim {
    shared: Rc<Shared>,
}

impl Sim {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> SimBoard {
        SimBoard {
            shared: self.shared.clone(),
            modes: BTreeMap::new(),
            inputs: BTreeMap::new(),
        }
    }

    pub fn console(&self) -> SimConsole {
        SimConsole {
            shared: self.shared.clone(),
            baud: None,
        }
    }

    pub fn now(&self) -> Instant {
        self.shared.now.get()
    }

    pub fn records(&self) -> Vec<Record> {
        self.shared.records.borrow().clone()
    }

    pub fn events(&self) -> Vec<Event> {
        self.shared.records.borrow().iter().map(|r| r.event.clone()).collect()
    }

    /// Every level written to `pin`, with the time of the write.
    pub fn writes(&self, pin: Pin) -> Vec<(Instant, Level)> {
        self.shared
            .records
            .borrow()
            .iter()
            .filter_map(|r| match r.event {
                Event::Write(p, level) if p == pin => Some((r.at, level)),
                _ => None,
            })
            .collect()
    }

    pub fn log_lines(&self) -> Vec<String> {
        self.shared
            .records
            .borrow()
            .iter()
            .filter_map(|r| match &r.event {
                Event::Log(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Samples returned by successive reads of one input pin.
#[derive(Default)]
struct InputScript {
    pending: VecDeque<Level>,
    last: Option<Level>,
}

impl InputScript {
    fn next(&mut self) -> Option<Level> {
        if let Some(level) = self.pending.pop_front() {
            self.last = Some(level);
        }
        self.last
    }
}

pub struct SimBoard {
    shared: Rc<Shared>,
    modes: BTreeMap<Pin, PinMode>,
    inputs: BTreeMap<Pin, InputScript>,
}

impl SimBoard {
    /// Queue levels for `pin` to return from upcoming reads. Once they run
    /// out, the last one keeps being returned.
    pub fn script(&mut self, pin: Pin, levels: impl IntoIterator<Item = Level>) {
        self.inputs.entry(pin).or_default().pending.extend(levels);
    }

    fn mode(&self, pin: Pin) -> Option<PinMode> {
        self.modes.get(&pin).copied()
    }
}

impl Board for SimBoard {
    fn configure_pin(&mut self, pin: Pin, mode: PinMode) {
        if let Some(prev) = self.modes.insert(pin, mode) {
            warn!("pin {} reconfigured from {:?} to {:?}", pin.num(), prev, mode);
        }
        self.shared.push(Event::Configure(pin, mode));
    }

    fn write_pin(&mut self, pin: Pin, level: Level) {
        if self.mode(pin) != Some(PinMode::Output) {
            warn!("write to pin {} which is not an output", pin.num());
        }
        self.shared.push(Event::Write(pin, level));
    }

    fn read_pin(&mut self, pin: Pin) -> Level {
        let mode = self.mode(pin);
        if mode.is_none() {
            warn!("read from unconfigured pin {}", pin.num());
        }

        let scripted = self.inputs.get_mut(&pin).and_then(InputScript::next);
        let level = scripted.unwrap_or_else(|| mode.map_or(Level::Low, |m| m.idle_level()));

        self.shared.push(Event::Read(pin, level));
        level
    }

    fn pause_ms(&mut self, ms: u32) {
        self.shared.push(Event::Pause(ms));
        let now = self.shared.now.get();
        self.shared.now.set(now.add_ms(ms));
    }
}

pub struct SimConsole {
    shared: Rc<Shared>,
    baud: Option<u32>,
}

impl SimConsole {
    pub fn baud(&self) -> Option<u32> {
        self.baud
    }
}

impl Console for SimConsole {
    fn begin(&mut self, baud: u32) {
        self.baud = Some(baud);
        self.shared.push(Event::Begin(baud));
    }

    fn log_line(&mut self, line: &str) {
        if self.baud.is_none() {
            warn!("log line before console was opened: {line:?}");
        }
        self.shared.push(Event::Log(line.into()));
    }
}
