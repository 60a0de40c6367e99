//! 32-bit polynomial string hash.
//!
//! Cheap, non-cryptographic fingerprint used for bucketing and display ids.
//! Values are persisted by callers, so the arithmetic must never change:
//! base 31 over UTF-16 code units with two's-complement wraparound.

/// Hash a string into an `i32`.
///
/// Characters outside the BMP contribute both surrogate code units.
pub fn hash_code(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, step)
}

/// Same accumulator over raw UTF-16 code units
pub fn hash_code_utf16(units: &[u16]) -> i32 {
    units.iter().copied().fold(0i32, step)
}

// (acc << 5) - acc == acc * 31
fn step(acc: i32, unit: u16) -> i32 {
    acc.wrapping_shl(5)
        .wrapping_sub(acc)
        .wrapping_add(i32::from(unit))
}
