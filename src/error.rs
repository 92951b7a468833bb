//! Typed failures for loading, keying and summarising graphs
//!
//! Library functions return `anyhow::Result`; these variants sit at the root
//! of the chain so callers (and tests) can `downcast_ref::<StatsError>()`.

use thiserror::Error;

/// Errors raised by the statistics pipeline
#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    /// An edge line did not hold exactly two integer labels
    #[error("malformed edge on line {line}: {reason} (`{content}`)")]
    MalformedEdge {
        /// 1-based line number in the source file
        line: usize,
        /// Offending line, without its terminator
        content: String,
        /// What was wrong with it
        reason: String,
    },

    /// A file name did not follow `prefix-V-E-L-D-seed-A.txt`
    #[error("invalid instance key `{name}`: {reason}")]
    InvalidKey {
        /// File name as given
        name: String,
        /// What was wrong with it
        reason: String,
    },

    /// Degeneracy is undefined for a graph without vertices
    #[error("graph has no vertices; degeneracy is undefined")]
    EmptyGraph,

    /// Summary statistics need at least one sample
    #[error("no samples to summarise")]
    InsufficientData,

    /// Node index past the end of the graph
    #[error("node {0} out of bounds")]
    NodeOutOfBounds(u32),

    /// More distinct labels than a `u32` index can address
    #[error("graph exceeds {max} nodes", max = u32::MAX)]
    TooManyNodes,
}
