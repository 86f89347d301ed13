//! Canonical big-endian form for integers carried as bytes.
//!
//! A value is canonical when it has no leading zero byte, except zero itself
//! which is the single byte `0x00`.

const ZERO: &[u8] = &[0x00];

/// Strips redundant leading zero bytes. Empty input is zero.
pub fn canonical(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b != 0) {
        Some(start) => &bytes[start..],
        None => ZERO,
    }
}

pub fn is_canonical(bytes: &[u8]) -> bool {
    match bytes {
        [] => false,
        [_] => true,
        [first, ..] => *first != 0,
    }
}

/// Byte length of the canonical form of `bytes`.
pub fn canonical_len(bytes: &[u8]) -> usize {
    canonical(bytes).len()
}
