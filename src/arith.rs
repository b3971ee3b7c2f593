//! Operator-emulation arithmetic: addition, subtraction, and multiplication
//! built from shifts and masks, plus XOR expressed through OR/AND/NOT.
//!
//! Every result wraps modulo 256, bit-for-bit identical to the native
//! wrapping operators on 8-bit integers.

/// Sum of `x` and `y` via a carry-propagation loop instead of `+`.
///
/// The loop XORs the partial sum and re-feeds the carried bits shifted left
/// until no carry remains. Terminates within 8 iterations.
pub fn add(x: i8, y: i8) -> i8 {
    let mut x = x as u8;
    let mut y = y as u8;

    while y != 0 {
        let carry = x & y;
        x ^= y;
        y = carry << 1;
    }

    x as i8
}

/// Difference `x - y` via a borrow-propagation loop instead of `-`.
pub fn subtract(x: i8, y: i8) -> i8 {
    let mut x = x as u8;
    let mut y = y as u8;

    while y != 0 {
        let borrow = !x & y;
        x ^= y;
        y = borrow << 1;
    }

    x as i8
}

/// Product `x * n` by binary long multiplication: for each set bit `i` of
/// the multiplier, accumulate `x << i`.
pub fn multiply_by_n(x: u8, n: u8) -> u8 {
    let mut result: u8 = 0;
    let mut addend = x;

    for i in 0..8 {
        if n & (1 << i) != 0 {
            result = result.wrapping_add(addend);
        }
        addend <<= 1;
    }

    result
}

/// `x ^ y` using only OR, AND, and NOT: `(x | y) & (!x | !y)`.
pub fn xor_without_operator(x: u8, y: u8) -> u8 {
    (x | y) & (!x | !y)
}

/// Byte width of a `u8` discovered by counting left-shifts until the value
/// overflows to zero. Always 1; kept as a demonstration of the technique.
pub fn size_of_using_bitwise() -> u8 {
    let mut size = 0;
    let mut x: u8 = 1;

    while x != 0 {
        x <<= 1;
        size += 1;
    }

    size / 8
}
