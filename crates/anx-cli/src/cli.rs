//! CLI argument definitions for the survey dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "anx",
    version,
    about = "Anxiety attack survey dashboard",
    long_about = "Analyze anxiety attack survey data: summary metrics, charts,\n\
                  a heuristic severity estimate, and a searchable CSV report.\n\n\
                  Each subcommand is one dashboard view; all of them read the\n\
                  CSV given with --data and warn instead of failing when no\n\
                  valid dataset is available."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Survey CSV file with the nine required columns.
    #[arg(long = "data", value_name = "CSV", global = true)]
    pub data: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Overview metrics: dataset means as labeled summary cards.
    Home(HomeArgs),

    /// Render the four charts (bar, scatter, distributions, heatmap) to PNG.
    Visualize(VisualizeArgs),

    /// Estimate anxiety severity for a manually entered case.
    Predict(PredictArgs),

    /// Search the dataset and export the full CSV report.
    Report(ReportArgs),
}

#[derive(Args)]
pub struct HomeArgs {
    /// Print metrics as JSON instead of summary cards.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct VisualizeArgs {
    /// Directory for the generated chart images.
    #[arg(long = "out-dir", value_name = "DIR", default_value = "charts")]
    pub out_dir: PathBuf,
}

#[derive(Args)]
pub struct PredictArgs {
    /// Gender (one of the values observed in the dataset; default: first observed).
    #[arg(long)]
    pub gender: Option<String>,

    /// Occupation (one of the values observed in the dataset; default: first observed).
    #[arg(long)]
    pub occupation: Option<String>,

    /// Stress level.
    #[arg(long = "stress-level", default_value_t = 5, value_parser = clap::value_parser!(i64).range(1..=10))]
    pub stress_level: i64,

    /// Heart rate during attack (bpm).
    #[arg(long = "heart-rate", default_value_t = 80, value_parser = clap::value_parser!(i64).range(50..=200))]
    pub heart_rate: i64,

    /// Breathing rate (breaths/min).
    #[arg(long = "breathing-rate", default_value_t = 20, value_parser = clap::value_parser!(i64).range(10..=40))]
    pub breathing_rate: i64,

    /// Caffeine intake (mg/day).
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(i64).range(0..=500))]
    pub caffeine: i64,

    /// Alcohol consumption (drinks/week).
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(i64).range(0..=10))]
    pub alcohol: i64,

    /// Sleep hours per night.
    #[arg(long = "sleep-hours", default_value_t = 7, value_parser = clap::value_parser!(i64).range(0..=12))]
    pub sleep_hours: i64,

    /// Print the scenario and score as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Case-insensitive substring matched against Gender or Occupation;
    /// empty matches every row.
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub search: String,

    /// Directory for the exported Anxiety_Report.csv.
    #[arg(long = "out-dir", value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Print the filtered view as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
