use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "small-roster")]
#[command(about = "Keep a roster of departments and employees in a JSON file")]
pub struct CliArgs {
    /// Path to the roster data file (overrides the settings file)
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
