// Based on Embassy, under MIT OR Apache-2.0

/// Atomic set/clear aliases of RP2040 peripheral registers.
///
/// Every peripheral register has write-only aliases at +0x2000 (bits written
/// as 1 are set) and +0x3000 (bits written as 1 are cleared), so single bits
/// can change without a read-modify-write.
pub trait RpReg<T: Copy> {
    fn write_value_set(&self, v: T);
    fn write_value_clear(&self, v: T);

    /// Build a value with `f` starting from all zeroes and set its one bits.
    fn write_set<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;

    /// Build a value with `f` starting from all zeroes and clear its one bits.
    fn write_clear<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;
}

const SET_ALIAS: usize = 0x2000;
const CLEAR_ALIAS: usize = 0x3000;

impl<T: Default + Copy, A: super::pac::common::Write> RpReg<T> for super::pac::common::Reg<T, A> {
    fn write_value_set(&self, v: T) {
        unsafe { alias(self.as_ptr(), SET_ALIAS).write_volatile(v) }
    }

    fn write_value_clear(&self, v: T) {
        unsafe { alias(self.as_ptr(), CLEAR_ALIAS).write_volatile(v) }
    }

    fn write_set<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut val = Default::default();
        let res = f(&mut val);
        self.write_value_set(val);
        res
    }

    fn write_clear<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut val = Default::default();
        let res = f(&mut val);
        self.write_value_clear(val);
        res
    }
}

unsafe fn alias<T>(reg: *mut T, offset: usize) -> *mut T {
    unsafe { (reg as *mut u8).add(offset) as *mut T }
}
