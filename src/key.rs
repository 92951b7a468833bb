//! Instance keys encoded in generated graph file names
//!
//! # Format
//!
//! ```text
//! <prefix>-<V>-<E>-<L>-<D>-<seed>-<A>.txt
//!
//! run-10-20-0.5-1.0-3-2.txt → V=10, E=20, L=0.5, D=1.0, seed=3, A=2
//! ```
//!
//! The seed distinguishes repetitions of one configuration. It is never
//! parsed and is dropped from the key, so all seeds of a configuration group
//! together.
//!
//! `L` and `D` render through `{:?}`, so exponent forms print as `1e-5`
//! (no zero-padded exponent).

use crate::error::StatsError;
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const EXTENSION: &str = ".txt";
const FIELD_COUNT: usize = 7;

/// Generator configuration parsed from a file name
///
/// Field order follows the group-mode CSV columns `V,B,A,L,D`.
#[derive(Debug, Clone, Copy)]
pub struct InstanceKey {
    /// Vertex count `V`
    pub vertices: u64,
    /// Edge count `E` (the `B` column)
    pub edges: u64,
    /// Added count `A`
    pub added: u64,
    /// Layering parameter `L`
    pub layer: f64,
    /// Degree parameter `D`
    pub degree: f64,
}

impl InstanceKey {
    /// Parse a key from a file name (directories are ignored)
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidKey`] unless the name has exactly seven
    /// dash-separated fields with numeric `V`, `E`, `L`, `D` and `A`. The
    /// seed field may hold anything.
    ///
    /// # Example
    ///
    /// ```
    /// use kcore_stats::InstanceKey;
    ///
    /// let key = InstanceKey::from_file_name("run-10-20-0.5-1.0-3-2.txt").unwrap();
    /// assert_eq!((key.vertices, key.edges, key.added), (10, 20, 2));
    /// assert_eq!((key.layer, key.degree), (0.5, 1.0));
    /// ```
    pub fn from_file_name(name: &str) -> Result<Self, StatsError> {
        let invalid = |reason: String| StatsError::InvalidKey {
            name: name.to_string(),
            reason,
        };

        let trimmed = name.trim_end_matches(['\n', '\r']);
        let file_name = Path::new(trimmed)
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(trimmed);
        let stem = file_name.strip_suffix(EXTENSION).unwrap_or(file_name);

        let fields: Vec<&str> = stem.split('-').collect();
        let [_prefix, v, e, l, d, _seed, a] = fields.as_slice() else {
            return Err(invalid(format!(
                "expected {FIELD_COUNT} dash-separated fields, found {}",
                fields.len()
            )));
        };

        Ok(Self {
            vertices: field(v, "vertex count").map_err(&invalid)?,
            edges: field(e, "edge count").map_err(&invalid)?,
            added: field(a, "added count").map_err(&invalid)?,
            layer: field(l, "layer parameter").map_err(&invalid)?,
            degree: field(d, "degree parameter").map_err(&invalid)?,
        })
    }
}

fn field<T: FromStr>(raw: &str, what: &str) -> Result<T, String>
where
    T::Err: fmt::Display,
{
    raw.parse().map_err(|e| format!("{what} `{raw}`: {e}"))
}

impl PartialEq for InstanceKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for InstanceKey {}

impl PartialOrd for InstanceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for InstanceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.vertices
            .cmp(&other.vertices)
            .then(self.edges.cmp(&other.edges))
            .then(self.added.cmp(&other.added))
            .then(self.layer.total_cmp(&other.layer))
            .then(self.degree.total_cmp(&other.degree))
    }
}

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{:?},{:?}",
            self.vertices, self.edges, self.added, self.layer, self.degree
        )
    }
}

/// Strip `.txt`, if present
#[must_use]
pub fn instance_name(name: &str) -> &str {
    name.strip_suffix(EXTENSION).unwrap_or(name)
}

/// Base name shared by the permutations of one graph
///
/// Permutation files differ only in a three-character suffix before the
/// extension (`g-1-a.txt`, `g-1-b.txt` → `g-`). Names shorter than the
/// suffix yield an empty base.
///
/// # Example
///
/// ```
/// use kcore_stats::permutation_base;
///
/// assert_eq!(permutation_base("graph-07_p1.txt"), "graph-07");
/// assert_eq!(permutation_base("ab"), "");
/// ```
#[must_use]
pub fn permutation_base(name: &str) -> &str {
    let stem = instance_name(name);
    match stem.char_indices().rev().nth(2) {
        Some((idx, _)) => &stem[..idx],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key() {
        let key = InstanceKey::from_file_name("run-10-20-0.5-1.0-3-2.txt").unwrap();
        assert_eq!(key.vertices, 10);
        assert_eq!(key.edges, 20);
        assert_eq!(key.added, 2);
        assert!((key.layer - 0.5).abs() < f64::EPSILON);
        assert!((key.degree - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_seed_not_part_of_key() {
        let a = InstanceKey::from_file_name("run-10-20-0.5-1.0-3-2.txt").unwrap();
        let b = InstanceKey::from_file_name("run-10-20-0.5-1.0-99-2.txt").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_is_opaque() {
        let key = InstanceKey::from_file_name("run-10-20-0.5-1.0-s3-2.txt").unwrap();
        assert_eq!(key, InstanceKey::from_file_name("run-10-20-0.5-1.0-3-2.txt").unwrap());

        let key = InstanceKey::from_file_name("run-10-20-0.5-1.0--2.txt").unwrap();
        assert_eq!(key.added, 2);
    }

    #[test]
    fn test_exponent_parameters_display() {
        let key = InstanceKey::from_file_name("run-10-20-1e-5-0.00001-0-2.txt");
        // `1e-5` itself contains a dash, so it splits into an extra field
        assert!(key.is_err());

        let key = InstanceKey::from_file_name("run-10-20-0.00001-1e20-0-2.txt").unwrap();
        assert_eq!(key.to_string(), "10,20,2,1e-5,1e20");
    }

    #[test]
    fn test_directory_and_newline_ignored() {
        let key = InstanceKey::from_file_name("out/set-a/run-5-8-1-2-0-1.txt\n").unwrap();
        assert_eq!(key.vertices, 5);
        assert_eq!(key.to_string(), "5,8,1,1.0,2.0");
    }

    #[test]
    fn test_wrong_field_count() {
        let err = InstanceKey::from_file_name("run-10-20.txt").unwrap_err();
        assert!(err.to_string().contains("found 3"));
    }

    #[test]
    fn test_non_numeric_field() {
        let err = InstanceKey::from_file_name("run-ten-20-0.5-1.0-3-2.txt").unwrap_err();
        assert!(matches!(err, StatsError::InvalidKey { .. }));
        assert!(err.to_string().contains("vertex count `ten`"));
    }

    #[test]
    fn test_key_ordering() {
        let mut keys = [
            InstanceKey::from_file_name("x-20-5-0.1-0.1-0-0.txt").unwrap(),
            InstanceKey::from_file_name("x-10-5-0.9-0.1-0-0.txt").unwrap(),
            InstanceKey::from_file_name("x-10-5-0.2-0.1-0-0.txt").unwrap(),
        ];
        keys.sort();
        let names: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["10,5,0,0.2,0.1", "10,5,0,0.9,0.1", "20,5,0,0.1,0.1"]);
    }

    #[test]
    fn test_permutation_base() {
        assert_eq!(permutation_base("g-1-a.txt"), "g-");
        assert_eq!(permutation_base("g-1-b.txt"), "g-");
        assert_eq!(permutation_base("net_p07"), "net_");
    }

    #[test]
    fn test_instance_name() {
        assert_eq!(instance_name("graph.txt"), "graph");
        assert_eq!(instance_name("graph.edges"), "graph.edges");
    }
}
