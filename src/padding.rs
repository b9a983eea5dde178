//! Zero-pad width computation
//!
//! The width is derived from the number of frames alone: a sequence of `n`
//! frames numbered contiguously from zero needs as many digits as `n - 1`
//! has. The actual suffixes present on disk are not inspected.

/// Number of decimal digits needed to write `value`
///
/// Zero is written with one digit.
pub fn digit_count(value: u64) -> usize {
    let mut digits = 1;
    let mut rest = value / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}

/// Zero-pad width for a sequence of `file_count` frames
///
/// A count of zero has no frames to rename; it yields a width of 1.
pub fn pad_width(file_count: usize) -> usize {
    digit_count(file_count.saturating_sub(1) as u64)
}
