//! Graph algorithms (core decomposition, degeneracy)

pub mod kcore;

pub use kcore::{core_numbers, degeneracy, degeneracy_with_policy, k_core};
