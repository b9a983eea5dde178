//! Workflow module
//!
//! This module ties discovery, padding and renaming into a single run.

mod context;
mod engine;

pub use context::{RenameOperation, RenameStats, WorkflowContext};
pub use engine::process_sequence;
