//! # bitprim
//!
//! A teaching-oriented library of bit-twiddling primitives over 8-bit and
//! 32-bit integers: single-bit set/clear/toggle, population count,
//! power-of-two test, carry-free addition and subtraction, endianness swap,
//! bit-field insertion, nibble swap, and friends.
//!
//! Every function is a pure, constant-time transformation of one or two
//! scalars. Bit positions are LSB-first (position 0 is the least
//! significant bit); out-of-range positions are rejected with
//! [errors::BitError] instead of being silently masked.
//!
//! ## Example
//!
//! ```
//! use bitprim::bits::set_bit;
//! use bitprim::format::format_binary;
//! use bitprim::query::count_set_bits;
//!
//! let x = set_bit(0b0000_0000, 2).unwrap();
//! assert_eq!(x, 4);
//! assert_eq!(format_binary(x), "00000100");
//! assert_eq!(count_set_bits(0b0000_1111), 4);
//! ```

pub mod arith;
pub mod bits;
pub mod convert;
pub mod errors;
pub mod format;
pub mod query;
