//! Generic 64-bit mask primitives
//!
//! No game semantics here: plain get/set/clear/toggle on a `u64` by bit
//! index. Callers guarantee `bit < 64`; only debug builds assert it.

/// Set bit `bit`.
#[inline]
pub fn set(mask: &mut u64, bit: u8) {
    debug_assert!(bit < 64, "bit index out of range: {bit}");
    *mask |= 1u64 << bit;
}

/// Clear bit `bit`.
#[inline]
pub fn clear(mask: &mut u64, bit: u8) {
    debug_assert!(bit < 64, "bit index out of range: {bit}");
    *mask &= !(1u64 << bit);
}

/// Flip bit `bit`.
#[inline]
pub fn toggle(mask: &mut u64, bit: u8) {
    debug_assert!(bit < 64, "bit index out of range: {bit}");
    *mask ^= 1u64 << bit;
}

/// Read bit `bit`.
#[inline]
pub fn get(mask: u64, bit: u8) -> bool {
    debug_assert!(bit < 64, "bit index out of range: {bit}");
    (mask >> bit) & 1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut mask = 0u64;
        set(&mut mask, 0);
        set(&mut mask, 63);
        assert!(get(mask, 0));
        assert!(get(mask, 63));
        assert!(!get(mask, 32));
        assert_eq!(mask, 0x8000_0000_0000_0001);
    }

    #[test]
    fn test_clear() {
        let mut mask = u64::MAX;
        clear(&mut mask, 7);
        assert!(!get(mask, 7));
        assert!(get(mask, 6));
        assert!(get(mask, 8));
        // Clearing an already-clear bit is a no-op
        clear(&mut mask, 7);
        assert!(!get(mask, 7));
    }

    #[test]
    fn test_toggle() {
        let mut mask = 0u64;
        toggle(&mut mask, 12);
        assert!(get(mask, 12));
        toggle(&mut mask, 12);
        assert!(!get(mask, 12));
        assert_eq!(mask, 0);
    }
}
