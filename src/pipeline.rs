//! Batch executor: per-file degeneracy over many edge lists
//!
//! Files are independent, so each gets its own task. A semaphore bounds how
//! many are in flight; reading goes through `tokio::fs`, while parsing and
//! peeling run together on the blocking pool. Results come back in input order regardless of which
//! task finishes first.

use crate::algorithms::degeneracy_with_policy;
use crate::config::Config;
use crate::storage::parse_edge_list;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info};

/// Degeneracy and size of one edge-list file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphReport {
    /// File the graph was read from
    pub path: PathBuf,
    /// Distinct vertex labels
    pub num_vertices: usize,
    /// Edge lines consumed
    pub edge_lines: usize,
    /// Maximum core number
    pub degeneracy: u32,
}

/// Load one edge list and compute its degeneracy
///
/// # Errors
///
/// Returns error if the file cannot be read or parsed, or if the graph is
/// empty under [`crate::EmptyGraphPolicy::Fail`]
pub async fn analyze_file(path: &Path, config: &Config) -> Result<GraphReport> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read edge list {}", path.display()))?;
    let policy = config.empty_graph;

    // Interning, CSR build and peeling are all CPU-bound; keep them off the
    // runtime workers.
    let (num_vertices, edge_lines, degeneracy) = tokio::task::spawn_blocking(move || {
        let loaded = parse_edge_list(&text).context("failed to parse edge list")?;
        let degeneracy = degeneracy_with_policy(&loaded.graph, policy)?;
        Ok::<_, anyhow::Error>((loaded.num_vertices, loaded.edge_lines, degeneracy))
    })
    .await
    .context("graph task panicked")?
    .with_context(|| format!("failed to analyze {}", path.display()))?;

    if config.trace {
        info!(path = %path.display(), num_vertices, edge_lines, degeneracy, "processed graph");
    } else {
        debug!(path = %path.display(), degeneracy, "processed graph");
    }

    Ok(GraphReport {
        path: path.to_path_buf(),
        num_vertices,
        edge_lines,
        degeneracy,
    })
}

/// Analyze many files concurrently, at most `config.jobs` at a time
///
/// The first failure aborts the batch; tasks still running are cancelled.
///
/// # Errors
///
/// Returns the first error any file produced
pub async fn analyze_files(paths: Vec<PathBuf>, config: &Config) -> Result<Vec<GraphReport>> {
    let total = paths.len();
    let semaphore = Arc::new(Semaphore::new(config.jobs.get()));
    let mut tasks = JoinSet::new();

    for (idx, path) in paths.into_iter().enumerate() {
        let semaphore = Arc::clone(&semaphore);
        let config = *config;
        tasks.spawn(async move {
            let _permit = semaphore.acquire_owned().await?;
            let report = analyze_file(&path, &config).await?;
            Ok::<_, anyhow::Error>((idx, report))
        });
    }

    let mut reports: Vec<Option<GraphReport>> = (0..total).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (idx, report) = joined.context("graph task panicked")??;
        reports[idx] = Some(report);
    }

    debug!(files = total, "batch complete");
    Ok(reports.into_iter().flatten().collect())
}

/// Read a list file: one entry per line, blank lines ignored
///
/// # Errors
///
/// Returns error if the list cannot be read
pub async fn read_list(path: &Path) -> Result<Vec<String>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read list {}", path.display()))?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
