use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;
use crate::report::CounterKind;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Counter type used for the coverage tree
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum CounterChoice {
    /// Method counters
    Method,
    /// Branch counters
    Branch,
    /// Line counters (default)
    #[default]
    Line,
}

impl CounterChoice {
    #[must_use]
    pub const fn to_kind(self) -> CounterKind {
        match self {
            Self::Method => CounterKind::Method,
            Self::Branch => CounterKind::Branch,
            Self::Line => CounterKind::Line,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "submit-guard")]
#[command(author, version, about = "Pre-submission checker for Java projects")]
#[command(long_about = "Checks Java sources against a submission rule profile and renders\n\
    JUnit/JaCoCo reports as pass/fail trees.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Violations or failing checks found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check Java sources against a rule profile
    Check(CheckArgs),

    /// Render JUnit/JaCoCo XML reports as pass/fail trees
    Report(ReportArgs),

    /// List built-in rule profiles
    Profiles,

    /// Write a default rule profile for editing
    Init(InitArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Built-in rule profile name
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Path to a rule profile JSON file (takes precedence over --profile)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Read a single Java buffer from stdin instead of walking paths
    #[arg(long)]
    pub stdin: bool,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Override max line length (-1 disables the rule)
    #[arg(long, allow_negative_numbers = true)]
    pub max_line_length: Option<i64>,

    /// Disable Javadoc checks
    #[arg(long)]
    pub no_javadoc: bool,

    /// Disable the @author tag check
    #[arg(long)]
    pub no_author: bool,

    /// Disable the @version tag check
    #[arg(long)]
    pub no_version: bool,

    /// Allow static fields
    #[arg(long)]
    pub allow_globals: bool,

    /// Allow empty method bodies
    #[arg(long)]
    pub allow_empty: bool,

    /// Allow unused private methods
    #[arg(long)]
    pub allow_unused: bool,

    /// Disable @Override enforcement
    #[arg(long)]
    pub no_override: bool,

    /// Disable @Test annotation checks
    #[arg(long)]
    pub no_annotations: bool,

    /// Disable assertEquals-delta checks
    #[arg(long)]
    pub no_delta: bool,

    /// Report violations but always exit 0
    #[arg(long)]
    pub warn_only: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// JUnit XML reports (files or directories, can be repeated)
    #[arg(long)]
    pub junit: Vec<PathBuf>,

    /// JaCoCo coverage XML report
    #[arg(long)]
    pub coverage: Option<PathBuf>,

    /// Built-in rule profile name (for coverage requirements)
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Path to a rule profile JSON file (takes precedence over --profile)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the coverage gap threshold percentage
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Counter type used for the coverage tree
    #[arg(long, value_enum, default_value = "line")]
    pub counter: CounterChoice,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the profile JSON
    #[arg(short, long, default_value = ".submit-guard.rules.json")]
    pub output: PathBuf,

    /// Overwrite an existing profile
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
