//! Baud rate divisors for the ARM PL011 UART used on the RP2040.

/// Integer and 1/64 fractional parts of `clk / (16 * baud)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Divisors {
    pub integer: u16,
    pub fraction: u8,
}

impl Divisors {
    /// Divisors for `baud` from a `clk_hz` reference, rounded to the nearest
    /// 1/64 and clamped to what the registers can hold.
    pub const fn new(clk_hz: u32, baud: u32) -> Divisors {
        // In units of 1/128 of the integer divisor, so rounding is one add.
        let div = (8 * clk_hz as u64) / baud as u64;
        let integer = div >> 7;

        if integer == 0 {
            Divisors { integer: 1, fraction: 0 }
        } else if integer >= 0xffff {
            Divisors { integer: 0xffff, fraction: 0 }
        } else {
            let fraction = ((div & 0x7f) + 1) / 2;
            Divisors { integer: integer as u16, fraction: fraction as u8 }
        }
    }

    /// Baud rate these divisors actually produce from `clk_hz`.
    pub const fn actual_baud(&self, clk_hz: u32) -> u32 {
        let div64 = self.integer as u64 * 64 + self.fraction as u64;
        ((4 * clk_hz as u64) / div64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::Divisors;

    const CLK_PERI_HZ: u32 = 48_000_000;

    #[test]
    fn sketch_rate_from_clk_peri() {
        let d = Divisors::new(CLK_PERI_HZ, 9600);
        assert_eq!(d, Divisors { integer: 312, fraction: 32 });
        assert_eq!(d.actual_baud(CLK_PERI_HZ), 9600);
    }

    #[test]
    fn fast_rate_within_tolerance() {
        let d = Divisors::new(CLK_PERI_HZ, 115_200);
        assert_eq!(d, Divisors { integer: 26, fraction: 3 });
        let err = d.actual_baud(CLK_PERI_HZ).abs_diff(115_200);
        assert!(err < 115_200 / 100, "error {err}");
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(Divisors::new(1_000_000, 1_000_000), Divisors { integer: 1, fraction: 0 });
        assert_eq!(Divisors::new(125_000_000, 50), Divisors { integer: 0xffff, fraction: 0 });
    }
}
