//! Byte-order and nibble rearrangement.

/// Reverses the byte order of a 32-bit value (byte 0 <-> 3, byte 1 <-> 2).
/// Self-inverse.
pub fn little_to_big_endian(x: u32) -> u32 {
    ((x & 0xFF00_0000) >> 24)
        | ((x & 0x00FF_0000) >> 8)
        | ((x & 0x0000_FF00) << 8)
        | ((x & 0x0000_00FF) << 24)
}

/// Exchanges the high and low nibbles of a byte. Self-inverse.
pub fn swap_nibbles(x: u8) -> u8 {
    (x << 4) | (x >> 4)
}
