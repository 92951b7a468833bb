//! CSR (Compressed Sparse Row) representation of an undirected simple graph
//!
//! Edge-list files name vertices with arbitrary integer labels. Labels are
//! interned into dense indices in first-seen order, and every undirected edge
//! is stored in both endpoint rows.
//!
//! # CSR Format
//!
//! ```text
//! Edges: 10-20, 10-30, 20-30, 30-30
//!
//! labels:      [10, 20, 30]          // NodeId(i) ↔ labels[i]
//! row_offsets: [0, 2, 4, 7]
//! col_indices: [1, 2, 0, 2, 0, 1, 2] // row 2 holds its own self-loop once
//! ```

use crate::error::StatsError;
use anyhow::Result;
use std::collections::HashMap;
use std::fmt;

/// Node identifier (dense, zero-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Incremental edge collector that produces a [`CsrGraph`]
///
/// Insertion follows simple-graph semantics once built: a repeated edge (in
/// either orientation) collapses into one, and a self-loop is kept once.
///
/// # Example
///
/// ```
/// use kcore_stats::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_edge(1, 2).unwrap();
/// builder.add_edge(2, 1).unwrap(); // same undirected edge
/// builder.add_edge(3, 3).unwrap(); // self-loop
///
/// let graph = builder.build();
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.num_edges(), 2);
/// assert_eq!(graph.num_self_loops(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    index: HashMap<i64, u32>,
    labels: Vec<i64>,
    edges: Vec<(u32, u32)>,
}

impl GraphBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a vertex label, returning its dense id
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::TooManyNodes`] once `u32` indices are exhausted
    pub fn add_node(&mut self, label: i64) -> Result<NodeId> {
        if let Some(&id) = self.index.get(&label) {
            return Ok(NodeId(id));
        }
        let id = u32::try_from(self.labels.len()).map_err(|_| StatsError::TooManyNodes)?;
        self.index.insert(label, id);
        self.labels.push(label);
        Ok(NodeId(id))
    }

    /// Add an undirected edge between two labels
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::TooManyNodes`] once `u32` indices are exhausted
    pub fn add_edge(&mut self, u: i64, v: i64) -> Result<()> {
        let u = self.add_node(u)?;
        let v = self.add_node(v)?;
        self.edges.push((u.0, v.0));
        Ok(())
    }

    /// Number of distinct labels seen so far
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    /// Finalise into CSR, sorting and deduplicating every row
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn build(self) -> CsrGraph {
        let num_nodes = self.labels.len();
        let mut adj_list: Vec<Vec<u32>> = vec![Vec::new(); num_nodes];

        for &(u, v) in &self.edges {
            adj_list[u as usize].push(v);
            if u != v {
                adj_list[v as usize].push(u);
            }
        }

        let mut row_offsets = Vec::with_capacity(num_nodes + 1);
        let mut col_indices = Vec::new();
        let mut num_self_loops = 0;

        row_offsets.push(0);
        for (node, neighbors) in adj_list.iter_mut().enumerate() {
            neighbors.sort_unstable();
            neighbors.dedup();
            if neighbors.binary_search(&(node as u32)).is_ok() {
                num_self_loops += 1;
            }
            col_indices.extend_from_slice(neighbors);
            row_offsets.push(col_indices.len());
        }

        // Non-loop edges appear in two rows, loops in one.
        let num_edges = (col_indices.len() - num_self_loops) / 2 + num_self_loops;

        CsrGraph {
            row_offsets,
            col_indices,
            labels: self.labels,
            index: self.index,
            num_edges,
            num_self_loops,
        }
    }
}

/// Undirected simple graph in CSR form
///
/// Optimized for:
/// - O(1) access to a vertex's neighbour slice
/// - O(V+E) peeling passes (see [`crate::algorithms::kcore`])
///
/// # Example
///
/// ```
/// use kcore_stats::{CsrGraph, NodeId};
///
/// let graph = CsrGraph::from_edge_list(&[(1, 2), (1, 3)]).unwrap();
///
/// let neighbors = graph.neighbors(NodeId(0)).unwrap();
/// assert_eq!(neighbors.len(), 2);
/// assert_eq!(graph.label(NodeId(0)), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// node i's neighbours live in `col_indices[row_offsets[i]..row_offsets[i + 1]]`
    /// Length: `num_nodes` + 1
    row_offsets: Vec<usize>,

    /// Sorted, deduplicated neighbour ids per row
    col_indices: Vec<u32>,

    /// Original label for each dense id
    labels: Vec<i64>,

    /// Label → dense id
    index: HashMap<i64, u32>,

    /// Distinct undirected edges, self-loops included
    num_edges: usize,

    /// Distinct self-loops
    num_self_loops: usize,
}

impl CsrGraph {
    /// Create new empty graph
    #[must_use]
    pub fn new() -> Self {
        GraphBuilder::new().build()
    }

    /// Create graph from a list of labelled edges
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::TooManyNodes`] if the labels overflow `u32` ids
    pub fn from_edge_list(edges: &[(i64, i64)]) -> Result<Self> {
        let mut builder = GraphBuilder::new();
        for &(u, v) in edges {
            builder.add_edge(u, v)?;
        }
        Ok(builder.build())
    }

    /// Neighbours of a node (a self-loop lists the node itself)
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::NodeOutOfBounds`] for an unknown id
    pub fn neighbors(&self, node: NodeId) -> Result<&[u32]> {
        let idx = node.0 as usize;
        if idx >= self.num_nodes() {
            return Err(StatsError::NodeOutOfBounds(node.0).into());
        }
        Ok(&self.col_indices[self.row_offsets[idx]..self.row_offsets[idx + 1]])
    }

    /// Number of distinct neighbours other than the node itself
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::NodeOutOfBounds`] for an unknown id
    pub fn degree(&self, node: NodeId) -> Result<usize> {
        let neighbors = self.neighbors(node)?;
        let has_loop = neighbors.binary_search(&node.0).is_ok();
        Ok(neighbors.len() - usize::from(has_loop))
    }

    /// Largest loop-free degree (0 for an empty graph)
    #[must_use]
    pub fn max_degree(&self) -> usize {
        (0..self.num_nodes())
            .map(|idx| self.degree_unchecked(idx))
            .max()
            .unwrap_or(0)
    }

    pub(crate) fn degree_unchecked(&self, idx: usize) -> usize {
        let row = &self.col_indices[self.row_offsets[idx]..self.row_offsets[idx + 1]];
        #[allow(clippy::cast_possible_truncation)]
        let has_loop = row.binary_search(&(idx as u32)).is_ok();
        row.len() - usize::from(has_loop)
    }

    pub(crate) fn row_unchecked(&self, idx: usize) -> &[u32] {
        &self.col_indices[self.row_offsets[idx]..self.row_offsets[idx + 1]]
    }

    /// Label a dense id was interned from
    #[must_use]
    pub fn label(&self, node: NodeId) -> Option<i64> {
        self.labels.get(node.0 as usize).copied()
    }

    /// Dense id of a label, if present
    #[must_use]
    pub fn node(&self, label: i64) -> Option<NodeId> {
        self.index.get(&label).map(|&id| NodeId(id))
    }

    /// Get number of nodes
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    /// Get number of distinct undirected edges (self-loops included)
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Get number of distinct self-loops
    #[must_use]
    pub const fn num_self_loops(&self) -> usize {
        self.num_self_loops
    }

    /// Iterate each undirected edge once as `(u, v)` with `u <= v`
    pub fn iter_edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        (0..self.num_nodes()).flat_map(move |idx| {
            #[allow(clippy::cast_possible_truncation)] // ids fit u32 by construction
            let u = idx as u32;
            self.row_unchecked(idx)
                .iter()
                .filter(move |&&v| v >= u)
                .map(move |&v| (NodeId(u), NodeId(v)))
        })
    }

    /// Get CSR components (row offsets, column indices)
    #[must_use]
    pub fn csr_components(&self) -> (&[usize], &[u32]) {
        (&self.row_offsets, &self.col_indices)
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CsrGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph with {} nodes and {} edges",
            self.num_nodes(),
            self.num_edges()
        )
    }
}
