//! Run configuration
//!
//! Built once from CLI flags and passed down explicitly.

use clap::ValueEnum;
use std::num::NonZeroUsize;

/// What a degeneracy computation reports for a graph without vertices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EmptyGraphPolicy {
    /// Fail with [`crate::StatsError::EmptyGraph`]
    #[default]
    Fail,
    /// Report a degeneracy of 0
    Zero,
}

/// Knobs shared by every aggregation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Emit per-file progress events
    pub trace: bool,
    /// Maximum files loaded and peeled concurrently
    pub jobs: NonZeroUsize,
    /// Empty-graph handling
    pub empty_graph: EmptyGraphPolicy,
}

impl Config {
    /// Override the concurrency limit (0 keeps the current value)
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        if let Some(jobs) = NonZeroUsize::new(jobs) {
            self.jobs = jobs;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace: false,
            jobs: std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
            empty_graph: EmptyGraphPolicy::default(),
        }
    }
}
