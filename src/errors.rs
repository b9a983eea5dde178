use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the frame renamer
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// No file in the directory matched the base filename and extension
    NoMatchingFiles {
        base_name: String,
        extension: String,
        directory: PathBuf,
    },
    /// The text between base filename and extension is not a decimal number
    InvalidSequenceNumber { filename: String, residue: String },
    /// A rename target already exists as a different file
    NameCollision {
        source_name: String,
        target_name: String,
        directory: PathBuf,
    },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Error when a directory is not found
    DirectoryNotFound { path: PathBuf },
    /// Error when a path exists but is not a directory
    NotADirectory { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::NoMatchingFiles {
                base_name,
                extension,
                directory,
            } => {
                write!(
                    f,
                    "No files found with basename '{base_name}' and extension '{extension}' in {}",
                    directory.display()
                )
            }
            Error::InvalidSequenceNumber { filename, residue } => {
                write!(
                    f,
                    "Could not find a number sequence in file \"{filename}\", got \"{residue}\" instead. \
                     Did you specify the entire base filename?"
                )
            }
            Error::NameCollision {
                source_name,
                target_name,
                directory,
            } => {
                write!(
                    f,
                    "Cannot rename {source_name} to {target_name}: target already exists in {}",
                    directory.display()
                )
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::DirectoryNotFound { path } => {
                write!(f, "Directory not found: {}", path.display())
            }
            Error::NotADirectory { path } => {
                write!(f, "Not a directory: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Custom Result type for the frame renamer
///
/// # Examples
/// ```
/// use frame_pad::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an empty sequence error
pub fn no_matching_files_error(base_name: &str, extension: &str, directory: PathBuf) -> Error {
    Error::NoMatchingFiles {
        base_name: base_name.to_string(),
        extension: extension.to_string(),
        directory,
    }
}

/// Helper function to create a sequence number parsing error
pub fn invalid_sequence_number_error(filename: &str, residue: &str) -> Error {
    Error::InvalidSequenceNumber {
        filename: filename.to_string(),
        residue: residue.to_string(),
    }
}

/// Helper function to create a name collision error
pub fn name_collision_error(source_name: &str, target_name: &str, directory: PathBuf) -> Error {
    Error::NameCollision {
        source_name: source_name.to_string(),
        target_name: target_name.to_string(),
        directory,
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a directory not found error
pub fn directory_not_found_error(path: PathBuf) -> Error {
    Error::DirectoryNotFound { path }
}

/// Helper function to create a not-a-directory error
pub fn not_a_directory_error(path: PathBuf) -> Error {
    Error::NotADirectory { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_operation_error() {
        let path = PathBuf::from("/test/path");
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let error = file_operation_error(io_error, path.clone(), "rename");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("rename"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("/test/path"),
            "Error message should contain the path"
        );
        assert!(error.source().is_some(), "Source io error should be kept");
    }

    #[test]
    fn test_no_matching_files_error() {
        let error = no_matching_files_error("movie", ".tga", PathBuf::from("/renders/demo"));

        let error_string = format!("{error}");
        assert!(
            error_string.contains("movie"),
            "Error message should contain the base filename"
        );
        assert!(
            error_string.contains("/renders/demo"),
            "Error message should contain the searched directory"
        );
    }

    #[test]
    fn test_invalid_sequence_number_error() {
        let error = invalid_sequence_number_error("movieAB.tga", "AB");

        let error_string = format!("{error}");
        assert!(error_string.contains("\"movieAB.tga\""));
        assert!(error_string.contains("\"AB\""));
        assert!(
            error_string.contains("entire base filename"),
            "Error message should hint at an incomplete base filename"
        );
    }

    #[test]
    fn test_name_collision_error() {
        let error = name_collision_error("clip1.tga", "clip01.tga", PathBuf::from("/frames"));

        let error_string = format!("{error}");
        assert!(error_string.contains("clip1.tga"));
        assert!(error_string.contains("clip01.tga"));
        assert!(error_string.contains("/frames"));
    }

    #[test]
    fn test_directory_errors() {
        let missing = directory_not_found_error(PathBuf::from("/test/nonexistent"));
        assert!(format!("{missing}").contains("/test/nonexistent"));

        let file = not_a_directory_error(PathBuf::from("/test/file.tga"));
        assert_eq!(format!("{file}"), "Not a directory: /test/file.tga");
    }

    #[test]
    fn test_generic_error() {
        let error = generic_error("Something went wrong");
        assert_eq!(format!("{error}"), "Something went wrong");
    }
}
