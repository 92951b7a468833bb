//! Graph storage layer
//!
//! Provides the undirected CSR graph representation and the edge-list text loader.

pub mod csr;
pub mod edge_list;

pub use csr::{CsrGraph, GraphBuilder, NodeId};
pub use edge_list::{parse_edge_line, parse_edge_list, simplify_edge_list, LoadedGraph, SimpleEdgeList};
