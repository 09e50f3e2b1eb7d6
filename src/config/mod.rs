pub mod packages;

#[cfg(feature = "cli")]
use crate::core::summary::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "workout-tracker")]
#[command(about = "Compute distance, speed and calories from workout sensor packages")]
pub struct CliConfig {
    /// TOML file with [[packages]] entries; the built-in samples are used when omitted
    #[arg(short, long)]
    pub packages: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
