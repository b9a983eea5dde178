//! Workflow engine
//!
//! This module contains the engine that orchestrates the workflow steps.

use colored::Colorize;
use log::{debug, info};

use crate::configuration::RunConfig;
use crate::constants::RENAME_ARROW;
use crate::discovery::discover;
use crate::errors::Result;
use crate::logging::format_message;
use crate::padding::pad_width;
use crate::renamer::{RenameOutcome, fix_zero_padded_file, rename_frame};

use super::context::WorkflowContext;

/// Fixes the zero padding of one frame sequence
///
/// This function orchestrates the workflow steps:
/// 1. Find the frames matching the base filename and extension
/// 2. Compute the pad width from the number of frames
/// 3. Rename every frame in place to the computed width
///
/// Every error aborts the run. Frames renamed before the failure keep
/// their new names.
///
/// # Errors
/// * Returns an error if no frame matches
/// * Returns an error if a frame number cannot be parsed
/// * Returns an error if a rename fails or would overwrite another file
pub fn process_sequence(config: RunConfig) -> Result<WorkflowContext> {
    let mut context = WorkflowContext::new(config);
    let directory = context.config.directory.clone();
    let base_name = context.config.base_name.clone();
    let extension = context.config.extension.clone();

    // Step 1: Find the frames
    let files = discover(&directory, &base_name, &extension)?;
    context.stats.files_found = files.len();

    // Step 2: Pick the width
    context.pad_width = pad_width(files.len());
    info!("Zero pad length set to {}", context.pad_width);

    // Step 3: Rename
    for file_info in &files {
        let new_name =
            fix_zero_padded_file(&file_info.filename, &base_name, context.pad_width, &extension)?;

        if context.config.verbosity.is_verbose() {
            let message = format!("Moving {}\t{RENAME_ARROW} {}", file_info.filename, new_name);
            let colored_message = format!(
                "Moving {}\t{RENAME_ARROW} {}",
                file_info.filename.yellow(),
                new_name.green()
            );
            debug!("{}", format_message(&message, &colored_message));
        }

        match rename_frame(&directory, file_info, &new_name)? {
            RenameOutcome::Renamed => context.record_rename(&file_info.filename, &new_name),
            RenameOutcome::Unchanged => context.record_unchanged(),
        }
    }

    if context.stats.files_unchanged > 0 {
        info!(
            "{} files already had the correct padding",
            context.stats.files_unchanged
        );
    }
    info!("Done! Renamed {} files!", context.files_processed());

    Ok(context)
}
