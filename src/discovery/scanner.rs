//! Directory scanning functionality
//!
//! This module lists the regular files directly inside one directory.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::errors::{Result, file_operation_error, invalid_filename_error};

/// Information about a file found during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// The path to the file
    pub path: PathBuf,
    /// The filename of the file
    pub filename: String,
}

impl FileInfo {
    /// Creates a new FileInfo from a path
    ///
    /// # Errors
    /// Returns an error if the filename cannot be extracted or is not valid Unicode
    pub fn new(path: PathBuf) -> Result<Self> {
        let filename = path
            .file_name()
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_str()
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_string();

        Ok(FileInfo { path, filename })
    }
}

/// Scans a directory for regular files
///
/// Subdirectories, symlinks to directories and special files are skipped;
/// symlinks to regular files are kept. Entries whose names are not valid
/// Unicode cannot carry a sequence number we could rewrite, so they are
/// skipped as well. The listing is not recursive.
///
/// # Errors
/// Returns an error if the directory cannot be read
pub fn scan_directory(directory: &Path) -> Result<Vec<FileInfo>> {
    debug!("Scanning directory: {}", directory.display());

    let entries = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "list"))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| file_operation_error(e, directory.to_path_buf(), "list"))?
            .path();

        if !path.is_file() {
            trace!("Skipping non-file entry: {}", path.display());
            continue;
        }

        match FileInfo::new(path) {
            Ok(info) => files.push(info),
            Err(e) => trace!("Skipping entry: {e}"),
        }
    }

    debug!("Found {} files in directory", files.len());

    Ok(files)
}
