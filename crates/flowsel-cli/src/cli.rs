//! CLI argument definitions and usage validation.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use thiserror::Error;

use flowsel_catalog::Catalog;

#[derive(Parser)]
#[command(
    name = "flowsel",
    version,
    about = "Extract feature subsets aligned with published research.",
    long_about = "Extract feature subsets aligned with published research.\n\n\
                  Selects the columns a published study used from a network-flow\n\
                  dataset CSV (CIC-IDS-2017, UNSW-NB15, ISCX VPN-nonVPN) and writes\n\
                  them out in the study's column order."
)]
pub struct Cli {
    /// Dataset key to use.
    #[arg(long, value_name = "KEY", value_parser = dataset_parser())]
    pub dataset: Option<String>,

    /// Study key defining the feature subset.
    #[arg(long, value_name = "KEY")]
    pub study: Option<String>,

    /// Project root (defaults to current directory).
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub root: PathBuf,

    /// Optional path to save the selected features as CSV.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory to save all study outputs when --all is set.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Extract all study presets associated with the chosen dataset.
    #[arg(long)]
    pub all: bool,

    /// List available dataset/study combinations.
    #[arg(long)]
    pub list: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

fn dataset_parser() -> PossibleValuesParser {
    let mut ids: Vec<&'static str> = Catalog::builtin().dataset_ids().collect();
    ids.sort_unstable();
    PossibleValuesParser::new(ids)
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Invalid flag combination, reported before any file is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("--dataset is required.")]
    DatasetRequired,
    #[error("--study cannot be combined with --all.")]
    StudyWithAll,
    #[error("--output cannot be combined with --all; use --output-dir instead.")]
    OutputWithAll,
    #[error("Provide --study for a single extraction or use --all.")]
    StudyOrAll,
}

/// What a validated command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the catalog.
    List,
    /// One study; to `output` when set, otherwise to the console.
    Single {
        dataset: String,
        study: String,
        root: PathBuf,
        output: Option<PathBuf>,
    },
    /// Every study of `dataset`, one file each.
    Batch {
        dataset: String,
        root: PathBuf,
        output_dir: Option<PathBuf>,
    },
}

impl Cli {
    /// Check flag combinations. `--list` wins over everything else.
    pub fn invocation(&self) -> Result<Invocation, UsageError> {
        if self.list {
            return Ok(Invocation::List);
        }
        let Some(dataset) = self.dataset.clone() else {
            return Err(UsageError::DatasetRequired);
        };
        if self.all && self.study.is_some() {
            return Err(UsageError::StudyWithAll);
        }
        if self.all && self.output.is_some() {
            return Err(UsageError::OutputWithAll);
        }
        if self.all {
            return Ok(Invocation::Batch {
                dataset,
                root: self.root.clone(),
                output_dir: self.output_dir.clone(),
            });
        }
        let Some(study) = self.study.clone() else {
            return Err(UsageError::StudyOrAll);
        };
        Ok(Invocation::Single {
            dataset,
            study,
            root: self.root.clone(),
            output: self.output.clone(),
        })
    }
}
