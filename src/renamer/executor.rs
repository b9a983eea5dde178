//! Rename execution
//!
//! Renames happen in place: source and target always live in the same
//! directory, which is passed in explicitly.

use std::fs::{rename, symlink_metadata};
use std::path::Path;

use log::trace;

use crate::discovery::FileInfo;
use crate::errors::{Result, file_operation_error, name_collision_error};

/// What happened to a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The frame was renamed on disk
    Renamed,
    /// The frame already had the correct name
    Unchanged,
}

/// Renames a scanned frame to `target_name` inside `directory`
///
/// The frame's own path is the rename source. Identical names are a no-op.
/// An existing entry under the target name is never overwritten.
///
/// # Errors
/// * Returns an error if the target name is already taken
/// * Returns an error if the underlying rename fails
pub fn rename_frame(
    directory: &Path,
    frame: &FileInfo,
    target_name: &str,
) -> Result<RenameOutcome> {
    if frame.filename == target_name {
        trace!("{} already has the correct padding", frame.filename);
        return Ok(RenameOutcome::Unchanged);
    }

    let target = directory.join(target_name);

    if symlink_metadata(&target).is_ok() {
        return Err(name_collision_error(
            &frame.filename,
            target_name,
            directory.to_path_buf(),
        ));
    }

    rename(&frame.path, &target)
        .map_err(|e| file_operation_error(e, frame.path.clone(), "rename"))?;

    Ok(RenameOutcome::Renamed)
}
