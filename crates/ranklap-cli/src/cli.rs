use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "KUMC Bioinformatics Core",
    version,
    about = "ranklap - Tests how strongly two importance rankings of the same network agree, \
             against a random-permutation null model.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the first ranked node list (one identifier per line; only the
    /// first tab/whitespace-delimited field is used).
    #[arg(value_name = "RANKING1")]
    pub ranking1: PathBuf,

    /// Path to the second ranked node list.
    #[arg(value_name = "RANKING2")]
    pub ranking2: PathBuf,

    /// Number of random-permutation trials for the null model.
    #[arg(short = 't', long, value_name = "INT")]
    pub trials: Option<usize>,

    /// Seed for the permutation RNG. Omit to draw one at random; the drawn
    /// seed is logged so the run can be reproduced.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Refuse rankings longer than this many entries.
    #[arg(long, value_name = "INT")]
    pub max_list_len: Option<usize>,

    /// Path to a configuration file in TOML format. Command-line flags
    /// override values from the file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the report to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format for the report table.
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel trial execution.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Space-separated columns: `index observedJ nullMean nullVariance zScore maxJ`.
    Plain,
    /// Tab-delimited table with a header row.
    Delimited,
}
