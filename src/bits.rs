//! Positional single-bit operations on bytes and 32-bit words.
//!
//! Bits are addressed LSB-first: position 0 is the least significant bit.
//! Positions at or beyond the width of the value are rejected with
//! [BitError::PositionOutOfRange] rather than masked.

use crate::errors::BitError;

/// Returns `x` with bit `pos` forced to 1. `pos` must be below 8.
pub fn set_bit(x: u8, pos: u8) -> Result<u8, BitError> {
    if pos >= 8 {
        return Err(BitError::PositionOutOfRange);
    }

    Ok(x | (1 << pos))
}

/// Returns `x` with bit `pos` forced to 0. `pos` must be below 8.
pub fn clear_bit(x: u8, pos: u8) -> Result<u8, BitError> {
    if pos >= 8 {
        return Err(BitError::PositionOutOfRange);
    }

    Ok(x & !(1 << pos))
}

/// Returns `x` with bit `pos` flipped. `pos` must be below 8.
pub fn toggle_bit(x: u8, pos: u8) -> Result<u8, BitError> {
    if pos >= 8 {
        return Err(BitError::PositionOutOfRange);
    }

    Ok(x ^ (1 << pos))
}

/// Returns the value of bit `pos` of `x` (0 or 1). `pos` must be below 8.
pub fn get_bit_status(x: u8, pos: u8) -> Result<u8, BitError> {
    if pos >= 8 {
        return Err(BitError::PositionOutOfRange);
    }

    Ok((x >> pos) & 1)
}

/// Returns the value of bit `pos` of a 32-bit word (0 or 1). `pos` must be
/// below 32; positions 8..32 are valid here, unlike the byte operations.
pub fn is_nth_bit_on(x: u32, pos: u8) -> Result<u8, BitError> {
    if pos >= 32 {
        return Err(BitError::PositionOutOfRange);
    }

    Ok(((x >> pos) & 1) as u8)
}

/// Replaces bits `p` down to `p - n + 1` of `x` with the low `n` bits of
/// `y`; every bit outside that window is preserved.
///
/// Rejects `p >= 8` and windows that are empty (`n == 0`) or extend below
/// bit 0 (`n > p + 1`).
pub fn set_bits(x: u8, p: u8, n: u8, y: u8) -> Result<u8, BitError> {
    if p >= 8 {
        return Err(BitError::PositionOutOfRange);
    }

    if n == 0 || n > p + 1 {
        return Err(BitError::InvalidWindow);
    }

    let shift = p + 1 - n;
    // u16 intermediate so an 8-bit-wide mask does not overflow the shift.
    let mask = ((1u16 << n) - 1) as u8;

    Ok((x & !(mask << shift)) | ((y & mask) << shift))
}

/// Exchanges `bytes[i]` and `bytes[j]` in place via XOR-swap.
///
/// Identical indices are a no-op: a naive XOR-swap of a cell with itself
/// zeroes it.
pub fn swap(bytes: &mut [u8], i: usize, j: usize) -> Result<(), BitError> {
    if i >= bytes.len() || j >= bytes.len() {
        return Err(BitError::IndexOutOfBounds);
    }

    if i == j {
        return Ok(());
    }

    bytes[i] ^= bytes[j];
    bytes[j] ^= bytes[i];
    bytes[i] ^= bytes[j];

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_bit() {
        assert_eq!(set_bit(0b00000000, 2).unwrap(), 0b00000100);
        assert_eq!(set_bit(0b00001100, 3).unwrap(), 0b00001100);
    }

    #[test]
    fn test_set_bit_out_of_range() {
        assert_eq!(set_bit(0, 8).unwrap_err(), BitError::PositionOutOfRange);
    }

    #[test]
    fn test_clear_bit() {
        assert_eq!(clear_bit(0b00001100, 2).unwrap(), 0b00001000);
        assert_eq!(clear_bit(0b00001100, 3).unwrap(), 0b00000100);
    }

    #[test]
    fn test_toggle_bit() {
        assert_eq!(toggle_bit(0b00001100, 2).unwrap(), 0b00001000);
        assert_eq!(toggle_bit(0b00001100, 1).unwrap(), 0b00001110);
    }

    #[test]
    fn test_get_bit_status() {
        assert_eq!(get_bit_status(0b00001100, 2).unwrap(), 1);
        assert_eq!(get_bit_status(0b00001100, 1).unwrap(), 0);
    }

    #[test]
    fn test_is_nth_bit_on() {
        assert_eq!(is_nth_bit_on(1 << 19, 19).unwrap(), 1);
        assert_eq!(is_nth_bit_on(1 << 19, 20).unwrap(), 0);
        assert_eq!(is_nth_bit_on(0, 31).unwrap(), 0);
    }

    #[test]
    fn test_is_nth_bit_on_out_of_range() {
        assert_eq!(
            is_nth_bit_on(0, 32).unwrap_err(),
            BitError::PositionOutOfRange
        );
    }

    #[test]
    fn test_set_bits_preserves_outside_window() {
        // Window covers bits 6..=4; bits 7 and 3..=0 must survive.
        assert_eq!(set_bits(0b10101010, 6, 3, 0b111).unwrap(), 0b11111010);
        assert_eq!(set_bits(0b11111111, 3, 4, 0b0000).unwrap(), 0b11110000);
    }

    #[test]
    fn test_set_bits_full_width() {
        assert_eq!(set_bits(0b10101010, 7, 8, 0b01010101).unwrap(), 0b01010101);
    }

    #[test]
    fn test_set_bits_rejects_bad_window() {
        assert_eq!(set_bits(0, 8, 1, 0).unwrap_err(), BitError::PositionOutOfRange);
        assert_eq!(set_bits(0, 3, 0, 0).unwrap_err(), BitError::InvalidWindow);
        assert_eq!(set_bits(0, 3, 5, 0).unwrap_err(), BitError::InvalidWindow);
    }

    #[test]
    fn test_swap() {
        let mut bytes = [5, 3];
        swap(&mut bytes, 0, 1).unwrap();
        assert_eq!(bytes, [3, 5]);
    }

    #[test]
    fn test_swap_same_index_is_noop() {
        let mut bytes = [5];
        swap(&mut bytes, 0, 0).unwrap();
        assert_eq!(bytes, [5]);
    }

    #[test]
    fn test_swap_out_of_bounds() {
        let mut bytes = [5, 3];
        assert_eq!(
            swap(&mut bytes, 0, 2).unwrap_err(),
            BitError::IndexOutOfBounds
        );
    }
}
