//! File matching functionality
//!
//! Frames are recognised by a literal, case-sensitive prefix and suffix.
//! The base filename is never interpreted as a pattern.

use std::path::Path;

use log::{debug, info};

use crate::errors::{Result, no_matching_files_error};

use super::scanner::{FileInfo, scan_directory};

/// Checks whether a filename belongs to the sequence
pub fn is_sequence_member(filename: &str, base_name: &str, extension: &str) -> bool {
    filename.starts_with(base_name) && filename.ends_with(extension)
}

/// Keeps only the files that start with `base_name` and end with `extension`
pub fn filter_sequence_files(files: Vec<FileInfo>, base_name: &str, extension: &str) -> Vec<FileInfo> {
    files
        .into_iter()
        .filter(|file| is_sequence_member(&file.filename, base_name, extension))
        .collect()
}

/// Finds every frame of a sequence in `directory`
///
/// The result is sorted by filename so that reporting is stable across
/// platforms. The filesystem is only read.
///
/// # Errors
/// * Returns an error if the directory cannot be listed
/// * Returns an error naming the base filename and directory if no file matches
pub fn discover(directory: &Path, base_name: &str, extension: &str) -> Result<Vec<FileInfo>> {
    let files = scan_directory(directory)?;
    let mut matches = filter_sequence_files(files, base_name, extension);

    if matches.is_empty() {
        return Err(no_matching_files_error(
            base_name,
            extension,
            directory.to_path_buf(),
        ));
    }

    matches.sort_by(|a, b| a.filename.cmp(&b.filename));

    debug!(
        "Matched {} files for basename '{}' with extension '{}'",
        matches.len(),
        base_name,
        extension
    );
    info!("Found {} files!", matches.len());

    Ok(matches)
}
