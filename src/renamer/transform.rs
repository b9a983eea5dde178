//! Filename transformation
//!
//! Pure string work: nothing in here touches the filesystem.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Result, invalid_sequence_number_error};

/// Returns the text left between the base filename and the extension
///
/// A prefix or suffix that is not present leaves the name untouched.
pub fn sequence_residue<'a>(filename: &'a str, base_name: &str, extension: &str) -> &'a str {
    let without_base = filename.strip_prefix(base_name).unwrap_or(filename);
    without_base
        .strip_suffix(extension)
        .unwrap_or(without_base)
}

/// Reads a residue as a base-10 frame number of any size
///
/// Only ASCII digits are accepted, so signs, whitespace and an empty
/// residue are rejected. The number comes back in canonical form, without
/// leading zeros (`"0"` for zero).
pub fn parse_sequence_number<'a>(filename: &str, residue: &'a str) -> Result<&'a str> {
    static DIGITS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[0-9]+$").expect("Failed to compile regex pattern for DIGITS")
    });

    if !DIGITS.is_match(residue) {
        return Err(invalid_sequence_number_error(filename, residue));
    }

    let number = residue.trim_start_matches('0');
    Ok(if number.is_empty() { "0" } else { number })
}

/// Computes the new name of a frame with its number padded to `width` digits
///
/// Numbers that need more than `width` digits keep their natural width.
///
/// # Examples
/// ```
/// use frame_pad::renamer::fix_zero_padded_file;
///
/// let renamed = fix_zero_padded_file("myMovie002.tga", "myMovie", 4, ".tga").unwrap();
/// assert_eq!(renamed, "myMovie0002.tga");
/// ```
///
/// # Errors
/// Returns an error naming the file and the residue if the residue is not a number
pub fn fix_zero_padded_file(
    filename: &str,
    base_name: &str,
    width: usize,
    extension: &str,
) -> Result<String> {
    let residue = sequence_residue(filename, base_name, extension);
    let number = parse_sequence_number(filename, residue)?;

    Ok(format!("{base_name}{number:0>width$}{extension}"))
}
