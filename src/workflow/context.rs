//! Workflow context
//!
//! This module defines the state carried through a renaming run.

use crate::configuration::RunConfig;

/// A rename that was applied to a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOperation {
    /// The filename before the run
    pub source: String,
    /// The filename after the run
    pub destination: String,
}

/// Statistics about the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameStats {
    /// Number of frames matching the base filename and extension
    pub files_found: usize,
    /// Number of frames renamed on disk
    pub files_renamed: usize,
    /// Number of frames that already had the correct name
    pub files_unchanged: usize,
}

/// Context for the workflow
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// The run configuration
    pub config: RunConfig,
    /// Zero-pad width chosen for the sequence
    pub pad_width: usize,
    /// Statistics about the processing
    pub stats: RenameStats,
    /// Renames applied so far, in order
    pub operations: Vec<RenameOperation>,
}

impl WorkflowContext {
    pub fn new(config: RunConfig) -> Self {
        WorkflowContext {
            config,
            pad_width: 0,
            stats: RenameStats::default(),
            operations: Vec::new(),
        }
    }

    /// Records a frame that was renamed on disk
    pub fn record_rename(&mut self, source: &str, destination: &str) {
        self.stats.files_renamed += 1;
        self.operations.push(RenameOperation {
            source: source.to_string(),
            destination: destination.to_string(),
        });
    }

    /// Records a frame that kept its name
    pub fn record_unchanged(&mut self) {
        self.stats.files_unchanged += 1;
    }

    /// Number of frames visited, renamed or not
    pub fn files_processed(&self) -> usize {
        self.stats.files_renamed + self.stats.files_unchanged
    }
}
