/// Timestamp in microseconds since boot.
///
/// This wraps after 2^32 microseconds, or about 71 minutes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(pub u32);

impl Instant {
    pub const ZERO: Instant = Instant(0);

    pub const fn from_ms(ms: u32) -> Self {
        Instant(ms.wrapping_mul(1000))
    }

    /// True if `self` is at or before `other`, assuming the two are less
    /// than half the wrap period apart.
    pub const fn is_before(&self, other: Self) -> bool {
        !(other.0.wrapping_sub(self.0) > 0x8000_0000)
    }

    pub const fn add_us(&self, us: u32) -> Self {
        Instant(self.0.wrapping_add(us))
    }

    pub const fn add_ms(&self, ms: u32) -> Self {
        self.add_us(ms.wrapping_mul(1000))
    }

    pub const fn as_us(&self) -> u32 {
        self.0
    }

    pub const fn as_ms(&self) -> u32 {
        self.0 / 1000
    }
}

#[cfg(test)]
mod tests {
    use super::Instant;

    #[test]
    fn ordering_across_wrap() {
        let before = Instant(u32::MAX - 10);
        let after = before.add_us(20);
        assert_eq!(after, Instant(9));
        assert!(before.is_before(after));
        assert!(!after.is_before(before));
    }

    #[test]
    fn equal_instants_are_before_each_other() {
        let t = Instant::from_ms(5);
        assert!(t.is_before(t));
    }

    #[test]
    fn millisecond_helpers() {
        let t = Instant::ZERO.add_ms(1000).add_ms(1000);
        assert_eq!(t.as_ms(), 2000);
        assert_eq!(t.as_us(), 2_000_000);
        assert_eq!(t, Instant::from_ms(2000));
    }
}
