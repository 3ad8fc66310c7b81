//! CLI argument definitions for ugrid-check.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use ugrid_check::formatters::OutputFormat;
use ugrid_check::report::Criteria;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_SHA"),
    " ",
    env!("BUILD_DATE"),
    ")"
);

#[derive(Parser)]
#[command(name = "ugrid-check")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "UGRID mesh topology compliance checker for netCDF", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    ugrid-check check mesh.nc                  Check one file\n    ugrid-check check 'output/*.nc' --criteria strict\n    ugrid-check dump mesh.nc                   Print the header as CDL"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use this config file instead of the global and project configs
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Format of diagnostic log lines on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check datasets against the UGRID conventions
    ///
    /// Exit status is 0 when every file passes, 1 when any file fails, and
    /// 2 when a file cannot be read.
    Check {
        /// Files to check (glob patterns are expanded)
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
        /// Output format (text, json)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Which failures count (lenient: high only, normal: high and medium, strict: all)
        #[arg(long, value_enum)]
        criteria: Option<CriteriaArg>,
        /// Leave a check out of the report (can be specified multiple times)
        #[arg(long = "skip", value_name = "CHECK")]
        skip: Vec<String>,
        /// Fail when the score percentage is below this value
        #[arg(long, value_name = "PCT")]
        fail_below: Option<f64>,
        /// cf_role value marking mesh variables (can be specified multiple times)
        #[arg(long = "mesh-role", value_name = "ROLE")]
        mesh_roles: Vec<String>,
        /// Show all messages (-v) and check descriptions (-vv)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    },
    /// Print a dataset header
    Dump {
        /// File to read
        path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = DumpFormat::Cdl)]
        format: DumpFormat,
        /// Output file (required for --format cdf)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// List the checks and their priorities
    ListChecks,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CriteriaArg {
    Lenient,
    Normal,
    Strict,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl From<CriteriaArg> for Criteria {
    fn from(arg: CriteriaArg) -> Self {
        match arg {
            CriteriaArg::Lenient => Criteria::Lenient,
            CriteriaArg::Normal => Criteria::Normal,
            CriteriaArg::Strict => Criteria::Strict,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    /// ncdump -h style text
    Cdl,
    /// JSON description, readable by `check`
    Json,
    /// Header-only netCDF classic binary
    Cdf,
}
