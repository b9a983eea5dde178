//! Fixes inconsistent zero padding in exported image sequences.
//!
//! Demo-to-image exports name frames `movie0000.tga` up to `movie9999.tga`
//! and then carry on as `movie10000.tga`. Encoders expecting one fixed
//! width stumble over that. This crate finds every frame of a sequence
//! and renames them all to a single width.

pub mod cli;
pub mod configuration;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod padding;
pub mod renamer;
pub mod workflow;

pub use configuration::RunConfig;
pub use errors::{Error, Result};
pub use workflow::{RenameStats, WorkflowContext, process_sequence};

pub mod prelude {
    pub use crate::cli::{get_matches, get_run_config, get_verbosity};
    pub use crate::configuration::RunConfig;
    pub use crate::errors::{
        directory_not_found_error, file_operation_error, generic_error, invalid_filename_error,
        invalid_sequence_number_error, name_collision_error, no_matching_files_error,
        not_a_directory_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::padding::pad_width;
    pub use crate::renamer::fix_zero_padded_file;
    pub use crate::workflow::process_sequence;
}
