//! File discovery module
//!
//! This module contains components for scanning a directory and finding
//! the frames of a sequence.

mod matcher;
mod scanner;

pub use matcher::{discover, filter_sequence_files, is_sequence_member};
pub use scanner::{FileInfo, scan_directory};
