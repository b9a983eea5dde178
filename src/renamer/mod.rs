//! Frame renaming module
//!
//! This module computes padded frame names and applies them on disk.

mod executor;
mod transform;

pub use executor::{RenameOutcome, rename_frame};
pub use transform::{fix_zero_padded_file, parse_sequence_number, sequence_residue};
