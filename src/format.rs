//! Human-readable binary rendering.

/// Renders a byte as exactly 8 characters of `'0'`/`'1'`, most significant
/// bit first, no separators.
///
/// Each call returns a freshly owned `String`, so two results held at once
/// (or concurrent callers) never observe each other's output.
pub fn format_binary(x: u8) -> String {
    let mut out = String::with_capacity(8);

    for i in (0..8).rev() {
        out.push(if x & (1 << i) != 0 { '1' } else { '0' });
    }

    out
}
