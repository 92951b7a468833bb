//! k-core decomposition and degeneracy
//!
//! Based on Batagelj & Zaversnik (2003) "An O(m) Algorithm for Cores
//! Decomposition of Networks": vertices are kept in an array sorted by
//! current degree with per-degree bucket starts, and peeled in order.
//!
//! # Example
//!
//! ```
//! use kcore_stats::{core_numbers, degeneracy, CsrGraph};
//!
//! // Triangle 1-2-3 with a pendant vertex 4
//! let graph = CsrGraph::from_edge_list(&[(1, 2), (2, 3), (3, 1), (3, 4)]).unwrap();
//!
//! assert_eq!(core_numbers(&graph), vec![2, 2, 2, 1]);
//! assert_eq!(degeneracy(&graph).unwrap(), 2);
//! ```

use crate::config::EmptyGraphPolicy;
use crate::error::StatsError;
use crate::storage::{CsrGraph, NodeId};
use anyhow::Result;

/// Compute the coreness of every vertex
///
/// Self-loops are skipped rather than rejected: a looped vertex gets the
/// same coreness it would have without the loop. Runs in O(V + E).
///
/// # Returns
///
/// Core numbers indexed by dense [`NodeId`]
#[must_use]
#[allow(clippy::cast_possible_truncation)] // ids and degrees fit u32 by construction
pub fn core_numbers(graph: &CsrGraph) -> Vec<u32> {
    let n = graph.num_nodes();
    if n == 0 {
        return Vec::new();
    }

    let mut deg: Vec<usize> = (0..n).map(|v| graph.degree_unchecked(v)).collect();
    let max_deg = deg.iter().copied().max().unwrap_or(0);

    // bin[d] = start of the degree-d bucket in `vert`
    let mut bin = vec![0_usize; max_deg + 1];
    for &d in &deg {
        bin[d] += 1;
    }
    let mut start = 0;
    for slot in &mut bin {
        let count = *slot;
        *slot = start;
        start += count;
    }

    let mut pos = vec![0_usize; n];
    let mut vert = vec![0_usize; n];
    for v in 0..n {
        pos[v] = bin[deg[v]];
        vert[pos[v]] = v;
        bin[deg[v]] += 1;
    }
    for d in (1..=max_deg).rev() {
        bin[d] = bin[d - 1];
    }
    bin[0] = 0;

    for i in 0..n {
        let v = vert[i];
        for &u in graph.row_unchecked(v) {
            let u = u as usize;
            if u == v || deg[u] <= deg[v] {
                continue;
            }

            // Swap u to the front of its bucket, then shrink the bucket.
            let du = deg[u];
            let pu = pos[u];
            let pw = bin[du];
            let w = vert[pw];
            if u != w {
                pos[u] = pw;
                vert[pu] = w;
                pos[w] = pu;
                vert[pw] = u;
            }
            bin[du] += 1;
            deg[u] -= 1;
        }
    }

    deg.into_iter().map(|d| d as u32).collect()
}

/// Degeneracy of the graph: the maximum core number
///
/// # Errors
///
/// Returns [`StatsError::EmptyGraph`] when the graph has no vertices
pub fn degeneracy(graph: &CsrGraph) -> Result<u32> {
    degeneracy_with_policy(graph, EmptyGraphPolicy::Fail)
}

/// Degeneracy with an explicit policy for empty graphs
///
/// # Errors
///
/// Returns [`StatsError::EmptyGraph`] for an empty graph under
/// [`EmptyGraphPolicy::Fail`]
pub fn degeneracy_with_policy(graph: &CsrGraph, policy: EmptyGraphPolicy) -> Result<u32> {
    match (core_numbers(graph).into_iter().max(), policy) {
        (Some(k), _) => Ok(k),
        (None, EmptyGraphPolicy::Zero) => Ok(0),
        (None, EmptyGraphPolicy::Fail) => Err(StatsError::EmptyGraph.into()),
    }
}

/// Vertices of the k-core (coreness at least `k`)
///
/// # Example
///
/// ```
/// use kcore_stats::{k_core, CsrGraph, NodeId};
///
/// let graph = CsrGraph::from_edge_list(&[(1, 2), (2, 3), (3, 1), (3, 4)]).unwrap();
/// assert_eq!(k_core(&graph, 2), vec![NodeId(0), NodeId(1), NodeId(2)]);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn k_core(graph: &CsrGraph, k: u32) -> Vec<NodeId> {
    core_numbers(graph)
        .into_iter()
        .enumerate()
        .filter(|&(_, core)| core >= k)
        .map(|(idx, _)| NodeId(idx as u32))
        .collect()
}
