use core::ops::Not;

/// A physical digital I/O line, numbered the way the board support numbers it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin(pub u8);

impl Pin {
    pub const fn new(num: u8) -> Self {
        Pin(num)
    }

    pub const fn num(&self) -> u8 {
        self.0
    }
}

/// Direction of a pin, assigned once during setup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Input with the internal pull-up enabled: idles high, reads low when
    /// pulled to ground.
    InputPullUp,
    Output,
}

impl PinMode {
    /// Level an undriven pin in this mode settles at.
    pub const fn idle_level(&self) -> Level {
        match self {
            PinMode::InputPullUp => Level::High,
            PinMode::Output => Level::Low,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    #[inline]
    pub const fn is_high(&self) -> bool {
        matches!(self, Level::High)
    }

    #[inline]
    pub const fn is_low(&self) -> bool {
        matches!(self, Level::Low)
    }
}

impl From<bool> for Level {
    #[inline]
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl From<Level> for bool {
    #[inline]
    fn from(level: Level) -> bool {
        level.is_high()
    }
}

impl Not for Level {
    type Output = Level;

    #[inline]
    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_bool_conversions() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(bool::from(Level::High));
        assert!(!bool::from(Level::Low));
    }

    #[test]
    fn level_negation() {
        assert_eq!(!Level::High, Level::Low);
        assert_eq!(!!Level::Low, Level::Low);
    }

    #[test]
    fn pull_up_idles_high() {
        assert_eq!(PinMode::InputPullUp.idle_level(), Level::High);
        assert_eq!(PinMode::Output.idle_level(), Level::Low);
    }
}
