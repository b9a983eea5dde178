use std::env::current_dir;
use std::path::{Path, PathBuf, absolute};

use shellexpand::tilde;

use crate::constants::DEFAULT_EXTENSION;
use crate::errors::{
    Result, directory_not_found_error, file_operation_error, not_a_directory_error,
};
use crate::logging::LogLevel;

/// Settings for a single renaming run
///
/// Built once from the command line and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Literal prefix shared by every frame
    pub base_name: String,
    /// Absolute path of the folder holding the frames
    pub directory: PathBuf,
    /// Literal suffix shared by every frame, usually including the dot
    pub extension: String,
    /// Logging verbosity; Debug and above print every rename
    pub verbosity: LogLevel,
}

impl RunConfig {
    /// Creates a run configuration, resolving and validating the folder
    ///
    /// `folder` defaults to the current working directory. A leading `~` is
    /// expanded and relative paths are made absolute without resolving
    /// symlinks.
    ///
    /// # Errors
    /// * Returns an error if the current directory cannot be determined
    /// * Returns an error if the folder does not exist or is not a directory
    pub fn new(
        base_name: &str,
        folder: Option<&str>,
        extension: Option<&str>,
        verbosity: LogLevel,
    ) -> Result<Self> {
        let directory = resolve_directory(folder)?;

        Ok(RunConfig {
            base_name: base_name.to_string(),
            directory,
            extension: extension.unwrap_or(DEFAULT_EXTENSION).to_string(),
            verbosity,
        })
    }
}

/// Resolves the target folder to an existing absolute directory
pub fn resolve_directory(folder: Option<&str>) -> Result<PathBuf> {
    let directory = match folder {
        Some(folder) => {
            let expanded = PathBuf::from(tilde(folder).into_owned());
            absolute(&expanded).map_err(|e| file_operation_error(e, expanded, "resolve"))?
        }
        None => current_dir()
            .map_err(|e| file_operation_error(e, PathBuf::from("."), "resolve"))?,
    };

    validate_directory(&directory)?;

    Ok(directory)
}

fn validate_directory(directory: &Path) -> Result<()> {
    if !directory.exists() {
        return Err(directory_not_found_error(directory.to_path_buf()));
    }
    if !directory.is_dir() {
        return Err(not_a_directory_error(directory.to_path_buf()));
    }
    Ok(())
}
