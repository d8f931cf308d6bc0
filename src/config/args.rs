use crate::core::report::ExportFormat;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "tag-extractor", version)]
#[command(about = "Extract tag frequencies from a text file, skipping stop words")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Stop-word list, one word per line
    #[arg(short, long, global = true)]
    pub stop_words: Option<String>,

    /// Export format used when saving tags
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<ExportFormat>,

    /// Directory that relative paths are resolved against
    #[arg(long, global = true)]
    pub base_dir: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Mode,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Mode {
    /// Process one file, print the report and optionally save the tags
    Run(RunArgs),
    /// Interactive session: open files, load stop words, save tags
    Shell,
    /// Validate the configuration and print the resolved settings
    CheckConfig,
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Text file to extract tags from
    #[arg(short, long)]
    pub input: String,

    /// Where to save the tags
    #[arg(short, long)]
    pub output: Option<String>,

    /// Do not print the report
    #[arg(short, long)]
    pub quiet: bool,
}
