//! cli component of the huffpack project.
//!
//! every subcommand starts the same way: read the input file, count byte
//! occurrences into a frequency table, and run the merge loop to get a code
//! tree with assigned weights. what happens after differs per command:
//!
//! > `$exename codes <input> [--json <path>]`
//!
//! prints each symbol's code, one per line, and optionally exports the
//! symbol -> code table as json for whatever tool packs the actual bits.
//!
//! > `$exename tree <input>`
//!
//! prints the shape of the code tree, one node per line, indented by depth.
//!
//! > `$exename stats <input>`
//!
//! reports the analytic size estimate: distinct symbols, input bits,
//! encoded bits, and the resulting ratio. no output file is produced; this
//! is computed from counts and code lengths alone.
//!
//! > `$exename test <input>`
//!
//! encodes the input's own bytes against the freshly built table, decodes
//! the bit sequence back by walking the tree, and reports PASSED/FAILED
//! with timings. a mismatch is a bug in this crate, not in the input.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::HuffmanError;
use crate::freq::FrequencyTable;
use crate::tree::CodeTree;

pub mod codes;
pub mod stats;
pub mod tree;

/// Error types for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("code construction error: {0}")]
    Huffman(#[from] HuffmanError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input {0} is empty; there is nothing to build a tree from")]
    EmptyInput(PathBuf),

    #[error("round-trip mismatch: decoded data differs from the original")]
    RoundTripMismatch,
}

pub type Result<T> = std::result::Result<T, CliError>;

/// CLI arguments for the huffpack application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands for huffpack
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the code tree for a file and print each symbol's code
    #[command(alias = "weights")]
    Codes(CodesArgs),

    /// Print the shape of the code tree built from a file
    Tree(TreeArgs),

    /// Report analytic size statistics for a file
    Stats(StatsArgs),

    /// Round-trip a file through encode and decode in memory
    Test(TestArgs),
}

/// Arguments specific to the codes command
#[derive(Args, Debug)]
pub struct CodesArgs {
    /// Path to the input file
    pub input: PathBuf,

    /// Also export the code table as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Arguments specific to the tree command
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Path to the input file
    pub input: PathBuf,
}

/// Arguments specific to the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Path to the input file
    pub input: PathBuf,
}

/// Arguments specific to the test command
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Path to the input file
    pub input: PathBuf,
}

/// Reads `path`, counts its bytes, and builds the weighted code tree every
/// subcommand works from. An empty file has no tree and is reported as such
/// rather than treated as a one-leaf edge case.
pub(crate) fn load(path: &Path) -> Result<(Vec<u8>, FrequencyTable, CodeTree)> {
    let data = fs::read(path)?;
    let table = FrequencyTable::count(&data);
    let Some(tree) = CodeTree::from_table(&table) else {
        return Err(CliError::EmptyInput(path.to_path_buf()));
    };
    Ok((data, table, tree))
}
