//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Prefix the className literals of JSX and TSX sources.
#[derive(Debug, Parser)]
#[command(name = "classname-prefixer")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Files or directories to transform
    #[arg(default_value = ".")]
    pub paths: Vec<Utf8PathBuf>,

    /// Namespace prepended to every class token
    #[arg(long)]
    pub prefix: Option<String>,

    /// Attribute whose value is rewritten
    #[arg(long = "attribute-name")]
    pub attribute_name: Option<String>,

    /// Name of the class-list join helper
    #[arg(long = "join-call-name")]
    pub join_call_name: Option<String>,

    /// Loader options (JSON), e.g. '{"prefix":"ui"}'
    #[arg(long)]
    pub options: Option<String>,

    /// Loader resource query, e.g. '?prefix=ui&enableDebugging'
    #[arg(long)]
    pub query: Option<String>,

    /// Append every rewrite to the debug log
    #[arg(long = "enable-debugging")]
    pub enable_debugging: bool,

    /// Debug log location
    #[arg(long = "debug-log", default_value = "classnames.log")]
    pub debug_log: Utf8PathBuf,

    /// Rewrite strategy
    #[arg(long, value_enum, default_value = "structural")]
    pub strategy: Strategy,

    /// Overwrite files in place
    #[arg(long, conflicts_with = "out_dir")]
    pub write: bool,

    /// Write transformed files into this directory, mirroring the input tree
    #[arg(long = "out-dir")]
    pub out_dir: Option<Utf8PathBuf>,

    /// Glob patterns to ignore
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Report format
    #[arg(long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Log every rewrite and skipped value
    #[arg(short, long)]
    pub verbose: bool,
}

/// How class values are found.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Parse the source and rewrite attribute values (default)
    #[default]
    Structural,
    /// Regex substitution without parsing
    Regex,
}

/// Report format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output
    Json,
}

/// Where transformed sources go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    InPlace,
    Directory(Utf8PathBuf),
}

impl Args {
    pub fn destination(&self) -> Destination {
        match (&self.out_dir, self.write) {
            (Some(dir), _) => Destination::Directory(dir.clone()),
            (None, true) => Destination::InPlace,
            (None, false) => Destination::Stdout,
        }
    }
}
