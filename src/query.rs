//! Whole-value bit queries: parity, population count, power-of-two test,
//! lowest and highest set bit.

/// True iff the least significant bit of `x` is 0.
pub fn is_even(x: u8) -> bool {
    x & 1 == 0
}

/// Population count by repeated shift-and-mask. Returns 0..=8.
pub fn count_set_bits(mut x: u8) -> u8 {
    let mut count = 0;
    while x != 0 {
        count += x & 1;
        x >>= 1;
    }

    count
}

/// True iff exactly one bit of `x` is set. 0 is not a power of two.
pub fn is_power_of_2(x: u8) -> bool {
    x != 0 && x & x.wrapping_sub(1) == 0
}

/// Clears the lowest set bit of `x`. Returns 0 for input 0.
pub fn clear_lsb(x: u8) -> u8 {
    x & x.wrapping_sub(1)
}

/// Position of the highest set bit, counted from the LSB at 0. Returns
/// `None` for input 0.
pub fn find_msb(x: u8) -> Option<u8> {
    if x == 0 {
        return None;
    }

    let mut x = x;
    let mut pos = 0;
    while x > 1 {
        x >>= 1;
        pos += 1;
    }

    Some(pos)
}
