//! Uniqueness heuristic
//!
//! Derives a bounded sub-score deterministically from the object identifier
//! and title via a rolling hash. Collisions are acceptable; this is a
//! heuristic, not a cryptographic digest.

/// Lower bound of the uniqueness sub-score
pub const UNIQUENESS_MIN: i64 = 70;

/// Upper bound of the uniqueness sub-score
pub const UNIQUENESS_MAX: i64 = 95;

/// Score uniqueness from the identifier and title
///
/// Folds the UTF-16 code units of `object_id` followed by `title` through a
/// 31-multiplier rolling hash in wrapping 32-bit signed arithmetic, then maps
/// the absolute value onto [70, 95].
pub fn score(object_id: &str, title: &str) -> i64 {
    let mut hash: i32 = 0;

    for unit in object_id.encode_utf16().chain(title.encode_utf16()) {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }

    UNIQUENESS_MIN + i64::from(hash.unsigned_abs() % 26)
}
