/// Constants used throughout the application
///
/// This module centralises the command-line texts and defaults so they
/// are easy to manage and update.

/// Name of the installed binary, used in usage messages
pub const BINARY_NAME: &str = "framepad";

/// Extension used when none is given on the command line
///
/// Source engine demo exports write Targa frames.
pub const DEFAULT_EXTENSION: &str = ".tga";

/// Help text for the base filename positional argument
pub const BASE_FILENAME_HELP: &str = "The base filename of the frames: for mymovie0001.tga the base filename is mymovie";

/// Help text for the folder command-line option
pub const FOLDER_HELP: &str = "Folder containing the frames, defaults to the current directory";

/// Help text for the extension command-line option
pub const EXTENSION_HELP: &str = "File extension including the leading dot";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str =
    "Print each rename operation (use twice for trace output)";

/// Separator printed between the old and new name of a renamed frame
pub const RENAME_ARROW: &str = "->";
