//! Error type for out-of-range bit positions and windows.

/// Errors produced when a bit position, bit window, or swap index falls
/// outside the width of the value it addresses. Operations without a
/// position parameter are total and return plain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitError {
    /// Bit position is at or beyond the bit width of the value.
    PositionOutOfRange,
    /// Bit window is empty or wider than the anchor position allows.
    InvalidWindow,
    /// Swap index is beyond the end of the slice.
    IndexOutOfBounds,
}
