//! kcore-stats: degeneracy statistics over edge-list graph datasets
//!
//! # Overview
//!
//! Loads graphs from edge-list text files, computes their k-core
//! decomposition, and reduces per-file degeneracy values into CSV summaries
//! grouped by file list, permutation base name, or generator configuration.
//!
//! # Quick Start
//!
//! ```no_run
//! use kcore_stats::{degeneracy, CsrGraph};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = CsrGraph::read_edge_list("graphs/run-10-20-0.5-1.0-3-2.txt").await?;
//! println!("V={} E={}", loaded.num_vertices, loaded.edge_lines);
//! println!("degeneracy {}", degeneracy(&loaded.graph)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Storage**: undirected CSR graph over interned integer labels
//! - **Algorithms**: O(V+E) bucket-queue core decomposition
//! - **Pipeline**: bounded concurrent per-file analysis on tokio
//! - **Report**: list / permutation / group aggregation to CSV

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod config;
pub mod error;
pub mod key;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod storage;

// Re-export core types
pub use algorithms::{core_numbers, degeneracy, degeneracy_with_policy, k_core};
pub use config::{Config, EmptyGraphPolicy};
pub use error::StatsError;
pub use key::{instance_name, permutation_base, InstanceKey};
pub use pipeline::{analyze_file, analyze_files, read_list, GraphReport};
pub use report::{Accumulator, Mode};
pub use stats::Summary;
pub use storage::{parse_edge_line, parse_edge_list, CsrGraph, GraphBuilder, LoadedGraph, NodeId};

// Error type
pub use anyhow::{Error, Result};
