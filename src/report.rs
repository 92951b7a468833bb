//! Aggregation modes and their CSV reports
//!
//! Each [`Mode`] is a batch job: read every input, accumulate degeneracy
//! values per group, then print. Permutation and group rows are sorted by
//! their key; list rows follow the input list.

use crate::algorithms::degeneracy_with_policy;
use crate::config::Config;
use crate::key::{instance_name, permutation_base, InstanceKey};
use crate::pipeline::{analyze_files, read_list};
use crate::stats::{format_float, format_optional, Summary};
use crate::storage::CsrGraph;
use anyhow::Result;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Header printed by [`Mode::List`]
pub const LIST_HEADER: &str = "Instance, V, E, degen";
/// Header printed by [`Mode::Permutation`]
pub const PERMUTATION_HEADER: &str = "Instance, mean degen, std degen, median, max, min";
/// Header printed by [`Mode::Group`]
pub const GROUP_HEADER: &str = "V,B,A,L,D,Mean degen,Std degen,Median degen";

/// One batch job, carrying exactly the inputs it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Report on a single edge-list file
    Single {
        /// Edge-list file
        input: PathBuf,
    },
    /// One row per file named in `input`
    List {
        /// List of edge-list file names
        input: PathBuf,
        /// Directory the names resolve against
        dir: PathBuf,
    },
    /// One row per permutation base name
    Permutation {
        /// List of permutation file names
        input: PathBuf,
        /// Directory the names resolve against
        dir: PathBuf,
    },
    /// One row per instance key across several group lists
    Group {
        /// List of group-list file names
        input: PathBuf,
        /// Directory the group lists live in
        group_dir: PathBuf,
        /// Directory the graph files live in
        list_dir: PathBuf,
    },
}

impl Mode {
    /// Run the job, writing its report to `out`
    ///
    /// # Errors
    ///
    /// Any read, parse or write failure aborts the run
    pub async fn run<W: Write>(&self, config: &Config, out: &mut W) -> Result<()> {
        debug!(mode = ?self, "starting run");
        match self {
            Self::Single { input } => run_single(input, config, out).await,
            Self::List { input, dir } => run_list(input, dir, config, out).await,
            Self::Permutation { input, dir } => run_permutation(input, dir, config, out).await,
            Self::Group {
                input,
                group_dir,
                list_dir,
            } => run_group(input, group_dir, list_dir, config, out).await,
        }
    }
}

/// Degeneracy samples grouped by key
///
/// # Example
///
/// ```
/// use kcore_stats::Accumulator;
///
/// let mut acc = Accumulator::new();
/// acc.push("g-", 2);
/// acc.push("g-", 3);
/// acc.push("h-", 1);
///
/// assert_eq!(acc.get(&"g-"), Some(&[2, 3][..]));
/// assert_eq!(acc.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Accumulator<K: Ord> {
    groups: BTreeMap<K, Vec<u32>>,
}

impl<K: Ord> Accumulator<K> {
    /// Create an empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// Append one sample to a group
    pub fn push(&mut self, key: K, value: u32) {
        self.groups.entry(key).or_default().push(value);
    }

    /// Samples collected for a group
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&[u32]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Number of groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no sample has been pushed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Consume the accumulator into per-group summaries, in key order
    ///
    /// # Errors
    ///
    /// Propagates [`Summary::from_degeneracies`] failures
    pub fn summaries(self) -> Result<Vec<(K, Summary)>> {
        self.groups
            .into_iter()
            .map(|(key, values)| -> Result<(K, Summary)> {
                Ok((key, Summary::from_degeneracies(&values)?))
            })
            .collect()
    }
}

impl<K: Ord> Default for Accumulator<K> {
    fn default() -> Self {
        Self::new()
    }
}

async fn run_single<W: Write>(input: &Path, config: &Config, out: &mut W) -> Result<()> {
    let loaded = CsrGraph::read_edge_list(input).await?;
    writeln!(out, "{}", loaded.graph)?;
    writeln!(out, "{}", loaded.num_vertices)?;
    writeln!(out, "{}", loaded.edge_lines)?;
    writeln!(out, "Data for {}", input.display())?;

    let degeneracy = degeneracy_with_policy(&loaded.graph, config.empty_graph)?;
    writeln!(out, "Degeneracy {degeneracy}")?;
    Ok(())
}

async fn run_list<W: Write>(input: &Path, dir: &Path, config: &Config, out: &mut W) -> Result<()> {
    writeln!(out, "{LIST_HEADER}")?;

    let names = read_list(input).await?;
    let paths = names.iter().map(|name| dir.join(name)).collect();
    let reports = analyze_files(paths, config).await?;

    for (name, report) in names.iter().zip(&reports) {
        writeln!(
            out,
            "{},{},{},{}",
            instance_name(name),
            report.num_vertices,
            report.edge_lines,
            report.degeneracy
        )?;
    }
    Ok(())
}

async fn run_permutation<W: Write>(
    input: &Path,
    dir: &Path,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{PERMUTATION_HEADER}")?;

    let names = read_list(input).await?;
    let paths = names.iter().map(|name| dir.join(name)).collect();
    let reports = analyze_files(paths, config).await?;

    let mut acc = Accumulator::new();
    for (name, report) in names.iter().zip(&reports) {
        acc.push(permutation_base(name).to_string(), report.degeneracy);
    }

    for (base, s) in acc.summaries()? {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            base,
            format_float(s.mean),
            format_optional(s.std_dev),
            format_float(s.median),
            s.max,
            s.min
        )?;
    }
    Ok(())
}

async fn run_group<W: Write>(
    input: &Path,
    group_dir: &Path,
    list_dir: &Path,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let mut names = Vec::new();
    for group in read_list(input).await? {
        names.extend(read_list(&group_dir.join(group)).await?);
    }

    let keys = names
        .iter()
        .map(|name| InstanceKey::from_file_name(name))
        .collect::<Result<Vec<_>, _>>()?;
    let paths = names.iter().map(|name| list_dir.join(name)).collect();
    let reports = analyze_files(paths, config).await?;

    let mut acc = Accumulator::new();
    for (key, report) in keys.into_iter().zip(&reports) {
        acc.push(key, report.degeneracy);
    }

    writeln!(out, "{GROUP_HEADER}")?;
    for (key, s) in acc.summaries()? {
        writeln!(
            out,
            "{},{},{},{}",
            key,
            format_float(s.mean),
            format_optional(s.std_dev),
            format_float(s.median)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulator_groups_and_orders() {
        let mut acc = Accumulator::new();
        acc.push("b".to_string(), 4);
        acc.push("a".to_string(), 1);
        acc.push("b".to_string(), 2);

        assert_eq!(acc.get(&"b".to_string()), Some(&[4, 2][..]));
        let summaries = acc.summaries().unwrap();
        let keys: Vec<&str> = summaries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(summaries[1].1.count, 2);
    }

    #[test]
    fn test_empty_accumulator() {
        let acc: Accumulator<String> = Accumulator::default();
        assert!(acc.is_empty());
        assert!(acc.summaries().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_single_mode_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("k4.txt");
        std::fs::write(&path, "# K4\n1 2\n1 3\n1 4\n2 3\n2 4\n3 4\n").unwrap();

        let mut out = Vec::new();
        Mode::Single { input: path.clone() }
            .run(&Config::default(), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Graph with 4 nodes and 6 edges");
        assert_eq!(lines[1], "4");
        assert_eq!(lines[2], "6");
        assert_eq!(lines[3], format!("Data for {}", path.display()));
        assert_eq!(lines[4], "Degeneracy 3");
    }
}
