//! compute-degen: degeneracy statistics for edge-list graphs
//!
//! ```text
//! compute-degen graph.txt                          # single graph
//! compute-degen -l list.txt -d graphs/             # one row per graph
//! compute-degen -p perms.txt -d graphs/            # stats per permutation base
//! compute-degen -gl groups.txt -gd lists/ -d graphs/   # stats per instance key
//! ```

use anyhow::{bail, Result};
use clap::{ArgGroup, Parser};
use kcore_stats::{Config, EmptyGraphPolicy, Mode};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "compute-degen")]
#[command(about = "Degeneracy (k-core) statistics for edge-list graphs", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("mode").args(["list", "permutation", "group"])))]
struct Cli {
    /// Input graph, or the list file in list/permutation/group mode
    input_file: PathBuf,

    /// Input file is a list of graphs
    #[arg(short = 'l', requires = "list_dir")]
    list: bool,

    /// Input file is a list of permutations
    #[arg(short = 'p', requires = "list_dir")]
    permutation: bool,

    /// Input file is a list of groups
    #[arg(long = "gl", requires_all = ["group_dir", "list_dir"])]
    group: bool,

    /// Directory containing the files in the list
    #[arg(short = 'd', value_name = "DIR")]
    list_dir: Option<PathBuf>,

    /// Directory containing the group lists
    #[arg(long = "gd", value_name = "DIR")]
    group_dir: Option<PathBuf>,

    /// Log every processed graph to stderr
    #[arg(long)]
    trace: bool,

    /// Maximum graphs processed concurrently (0 = available parallelism)
    #[arg(short, long, default_value_t = 0)]
    jobs: usize,

    /// How to report a graph with no vertices
    #[arg(long, value_enum, default_value_t = EmptyGraphPolicy::Fail)]
    empty_graph: EmptyGraphPolicy,
}

impl Cli {
    fn mode(&self) -> Result<Mode> {
        let input = self.input_file.clone();
        let mode = match (self.list, self.permutation, self.group) {
            (false, false, false) => Mode::Single { input },
            (true, false, false) => Mode::List {
                input,
                dir: self.require_list_dir()?,
            },
            (false, true, false) => Mode::Permutation {
                input,
                dir: self.require_list_dir()?,
            },
            (false, false, true) => {
                let Some(group_dir) = self.group_dir.clone() else {
                    bail!("group mode requires -gd <DIR>");
                };
                Mode::Group {
                    input,
                    group_dir,
                    list_dir: self.require_list_dir()?,
                }
            }
            _ => bail!("-l, -p and -gl are mutually exclusive"),
        };
        Ok(mode)
    }

    fn require_list_dir(&self) -> Result<PathBuf> {
        match &self.list_dir {
            Some(dir) => Ok(dir.clone()),
            None => bail!("this mode requires -d <DIR>"),
        }
    }

    fn config(&self) -> Config {
        Config {
            trace: self.trace,
            empty_graph: self.empty_graph,
            ..Config::default()
        }
        .with_jobs(self.jobs)
    }
}

/// Accept the historical single-dash spellings `-gl` and `-gd`
fn legacy_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-gl") => OsString::from("--gl"),
            Some("-gd") => OsString::from("--gd"),
            _ => arg,
        })
        .collect()
}

fn init_tracing(trace: bool) {
    let default = if trace { "kcore_stats=trace,compute_degen=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stderr only: stdout carries the CSV report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_from(legacy_args(std::env::args_os()));
    init_tracing(cli.trace);

    let config = cli.config();
    let mode = cli.mode()?;
    tracing::debug!(?config, "configured");

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    mode.run(&config, &mut out).await?;
    out.flush()?;
    Ok(())
}
