//! undirect-edges: reduce an edge list to distinct undirected edges
//!
//! Prints a commented statistics header followed by each kept edge line.

use anyhow::{Context, Result};
use clap::Parser;
use kcore_stats::storage::simplify_edge_list;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "undirect-edges")]
#[command(about = "Drop self-loops and repeated edges from an edge list", long_about = None)]
#[command(version)]
struct Cli {
    /// Input edge-list file
    input_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let path = &cli.input_file;
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read edge list {}", path.display()))?;
    let simple = simplify_edge_list(&text)
        .with_context(|| format!("failed to parse edge list {}", path.display()))?;
    tracing::debug!(
        vertices = simple.num_vertices,
        edges = simple.num_edges(),
        "simplified edge list"
    );

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    simple.write_to(path, &mut out)?;
    out.flush()?;
    Ok(())
}
