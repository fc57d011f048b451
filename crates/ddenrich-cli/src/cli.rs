use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "DDEnrich CLI - Measures how strongly protein domain pairs co-occur across protein-protein interactions, relative to randomly paired proteins.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score domain co-occurrence against shuffled X and Y sides and write both result files.
    Analyze(AnalyzeArgs),
    /// Validate an interaction table and print its combination statistics.
    Check(CheckArgs),
}

/// Layout of the input interaction table.
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Field delimiter of the input table: a single character, or 'tab'.
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Name of the column holding the X-side domain lists.
    #[arg(long, value_name = "NAME")]
    pub x_column: Option<String>,

    /// Name of the column holding the Y-side domain lists.
    #[arg(long, value_name = "NAME")]
    pub y_column: Option<String>,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    // --- Core Arguments ---
    /// Path to the interaction table (e.g., ecoli_pairs.csv).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Species label used to name the result files (<SPECIES>_Xresults.csv, ...).
    #[arg(short, long, required = true, value_name = "NAME")]
    pub species: String,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Path Overrides ---
    /// Override the 3did reference file.
    #[arg(short, long, value_name = "PATH")]
    pub reference: Option<PathBuf>,

    /// Override the directory the result files are written to.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub table: TableArgs,

    // --- Randomization Overrides ---
    /// Override the number of randomization trials per shuffled side.
    #[arg(short = 'n', long, value_name = "INT")]
    pub trials: Option<usize>,

    /// Seed the row shuffles for a reproducible run.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S randomization.trials=500
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the interaction table to validate.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Also load a 3did reference file and count the observed pairs it lists.
    #[arg(short, long, value_name = "PATH")]
    pub reference: Option<PathBuf>,

    #[command(flatten)]
    pub table: TableArgs,
}
