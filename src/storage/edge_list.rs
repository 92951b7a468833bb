//! Edge-list text loader
//!
//! # Format
//!
//! One edge per line, two whitespace-separated integer labels:
//!
//! ```text
//! # generated by ...      <- skipped (contains '#')
//! 1 2
//! 2 3
//!                         <- skipped (blank)
//! 3 1
//! ```
//!
//! A `#` anywhere on a line marks it as a comment. Any other non-blank line
//! that is not exactly two integers aborts the load.

use super::{CsrGraph, GraphBuilder};
use crate::error::StatsError;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// A parsed edge-list file
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    /// The undirected simple graph
    pub graph: CsrGraph,
    /// Distinct vertex labels
    pub num_vertices: usize,
    /// Edge lines consumed, duplicates and self-loops included
    pub edge_lines: usize,
}

/// Parse one line of an edge list
///
/// Returns `Ok(None)` for comment and blank lines.
///
/// # Errors
///
/// Returns [`StatsError::MalformedEdge`] when the line is not exactly two
/// integers.
///
/// # Example
///
/// ```
/// use kcore_stats::parse_edge_line;
///
/// assert_eq!(parse_edge_line(1, "3 4").unwrap(), Some((3, 4)));
/// assert_eq!(parse_edge_line(2, "# header").unwrap(), None);
/// assert!(parse_edge_line(3, "3 x").is_err());
/// ```
pub fn parse_edge_line(line_no: usize, line: &str) -> Result<Option<(i64, i64)>, StatsError> {
    if line.contains('#') || line.trim().is_empty() {
        return Ok(None);
    }

    let malformed = |reason: String| StatsError::MalformedEdge {
        line: line_no,
        content: line.to_string(),
        reason,
    };

    let mut tokens = line.split_whitespace();
    let (Some(src), Some(dst), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        let count = line.split_whitespace().count();
        return Err(malformed(format!("expected 2 labels, found {count}")));
    };

    let parse = |token: &str| {
        token
            .parse::<i64>()
            .map_err(|e| malformed(format!("label `{token}`: {e}")))
    };

    Ok(Some((parse(src)?, parse(dst)?)))
}

/// Parse a whole edge-list document
///
/// # Errors
///
/// Returns the first [`StatsError::MalformedEdge`] encountered, or
/// [`StatsError::TooManyNodes`].
///
/// # Example
///
/// ```
/// use kcore_stats::parse_edge_list;
///
/// let loaded = parse_edge_list("# triangle\n1 2\n2 3\n3 1\n1 2\n").unwrap();
/// assert_eq!(loaded.num_vertices, 3);
/// assert_eq!(loaded.edge_lines, 4); // the repeated 1-2 line still counts
/// assert_eq!(loaded.graph.num_edges(), 3);
/// ```
pub fn parse_edge_list(text: &str) -> Result<LoadedGraph> {
    let mut builder = GraphBuilder::new();
    let mut edge_lines = 0;

    for (idx, line) in text.lines().enumerate() {
        if let Some((src, dst)) = parse_edge_line(idx + 1, line)? {
            builder.add_edge(src, dst)?;
            edge_lines += 1;
        }
    }

    let num_vertices = builder.num_nodes();
    Ok(LoadedGraph {
        graph: builder.build(),
        num_vertices,
        edge_lines,
    })
}

/// An edge list reduced to distinct undirected, loop-free edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleEdgeList {
    /// Distinct labels seen, including ones that only appear in self-loops
    pub num_vertices: usize,
    /// Original text of each kept edge line, in first-seen order
    pub lines: Vec<String>,
}

impl SimpleEdgeList {
    /// Number of distinct undirected edges kept
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.lines.len()
    }

    /// Write the list under a commented statistics header
    ///
    /// Every header line starts with `#`, so the output loads back as an
    /// edge list.
    ///
    /// # Errors
    ///
    /// Returns error if writing to `out` fails
    pub fn write_to<W: Write>(&self, source: &Path, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "# directed version of {}", source.display())?;
        writeln!(out)?;
        writeln!(out, "# undirected stats:")?;
        writeln!(out, "# n = {}, m = {}", self.num_vertices, self.num_edges())?;
        writeln!(out)?;
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

/// Drop comments, self-loops and repeated edges (in either orientation)
///
/// # Errors
///
/// Returns the first [`StatsError::MalformedEdge`] encountered
///
/// # Example
///
/// ```
/// use kcore_stats::storage::edge_list::simplify_edge_list;
///
/// let simple = simplify_edge_list("# raw\n1 2\n2 1\n3 3\n2 3\n").unwrap();
/// assert_eq!(simple.num_vertices, 3);
/// assert_eq!(simple.lines, vec!["1 2", "2 3"]);
/// ```
pub fn simplify_edge_list(text: &str) -> Result<SimpleEdgeList> {
    let mut vertices = HashSet::new();
    let mut seen = HashSet::new();
    let mut lines = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let Some((src, dst)) = parse_edge_line(idx + 1, line)? else {
            continue;
        };
        vertices.insert(src);
        vertices.insert(dst);
        if src != dst && seen.insert((src.min(dst), src.max(dst))) {
            lines.push(line.to_string());
        }
    }

    Ok(SimpleEdgeList {
        num_vertices: vertices.len(),
        lines,
    })
}

impl CsrGraph {
    /// Read an edge-list file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or a line is malformed; the
    /// path is attached as context.
    pub async fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<LoadedGraph> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read edge list {}", path.display()))?;

        let loaded = parse_edge_list(&text)
            .with_context(|| format!("failed to parse edge list {}", path.display()))?;
        debug!(
            path = %path.display(),
            vertices = loaded.num_vertices,
            edge_lines = loaded.edge_lines,
            "loaded edge list"
        );
        Ok(loaded)
    }

    /// Blocking variant of [`CsrGraph::read_edge_list`]
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or a line is malformed
    pub fn read_edge_list_blocking<P: AsRef<Path>>(path: P) -> Result<LoadedGraph> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read edge list {}", path.display()))?;
        parse_edge_list(&text).with_context(|| format!("failed to parse edge list {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_comments_and_blanks() {
        let loaded = parse_edge_list("# n = 3\n\n1 2 # trailing\n   \n2 3\n").unwrap();
        assert_eq!(loaded.edge_lines, 1);
        assert_eq!(loaded.num_vertices, 2);
    }

    #[test]
    fn test_counts_duplicate_and_loop_lines() {
        let loaded = parse_edge_list("1 2\n2 1\n3 3\n1 2\n").unwrap();
        assert_eq!(loaded.edge_lines, 4);
        assert_eq!(loaded.num_vertices, 3);
        assert_eq!(loaded.graph.num_edges(), 2);
        assert_eq!(loaded.graph.num_self_loops(), 1);
    }

    #[test]
    fn test_tabs_and_crlf() {
        let loaded = parse_edge_list("1\t2\r\n2    3\r\n").unwrap();
        assert_eq!(loaded.edge_lines, 2);
        assert_eq!(loaded.num_vertices, 3);
    }

    #[test]
    fn test_negative_labels() {
        let loaded = parse_edge_list("-1 0\n").unwrap();
        assert_eq!(loaded.graph.node(-1).map(|n| n.0), Some(0));
    }

    #[test]
    fn test_single_token_rejected() {
        let err = parse_edge_list("1 2\n5\n").unwrap_err();
        match err.downcast_ref::<StatsError>() {
            Some(StatsError::MalformedEdge { line, content, .. }) => {
                assert_eq!(*line, 2);
                assert_eq!(content, "5");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extra_token_rejected() {
        let err = parse_edge_line(7, "1 2 3").unwrap_err();
        assert!(err.to_string().contains("found 3"));
    }

    #[test]
    fn test_non_integer_rejected() {
        let err = parse_edge_line(1, "1 2.5").unwrap_err();
        assert!(matches!(err, StatsError::MalformedEdge { line: 1, .. }));
        assert!(err.to_string().contains("`2.5`"));
    }

    #[test]
    fn test_simplify_drops_loops_and_repeats() {
        let simple = simplify_edge_list("1 2\n# note\n2 1\n1 2\n4 4\n2\t3\n").unwrap();
        assert_eq!(simple.num_vertices, 4);
        assert_eq!(simple.num_edges(), 2);
        assert_eq!(simple.lines, vec!["1 2", "2\t3"]);
    }

    #[test]
    fn test_simplified_output_loads_back() {
        let simple = simplify_edge_list("1 2\n2 1\n2 3\n3 3\n").unwrap();
        let mut out = Vec::new();
        simple.write_to(Path::new("raw.txt"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# directed version of raw.txt\n\n# undirected stats:\n# n = 3, m = 2\n\n"));
        let loaded = parse_edge_list(&text).unwrap();
        assert_eq!(loaded.edge_lines, 2);
        assert_eq!(loaded.num_vertices, 3);
    }

    #[test]
    fn test_simplify_rejects_malformed() {
        assert!(simplify_edge_list("1 2\n1 two\n").is_err());
    }

    #[test]
    fn test_blocking_missing_file_has_path_context() {
        let err = CsrGraph::read_edge_list_blocking("/nonexistent/graph.txt").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/graph.txt"));
    }
}
