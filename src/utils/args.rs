//! Command line arguments for the `tierbox` binary
use clap::Parser;
use std::path::PathBuf;

/// Render the container tier gallery, or resolve a single class string.
///
/// Width tiers: sm md lg xl 2xl 3xl 4xl full (default full).
/// Padding tiers: none sm md lg xl (default md).
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tierbox", version, about)]
pub struct CliArgs {
    /// Print the container class string instead of rendering the gallery
    #[arg(long)]
    pub resolve: bool,

    /// Preview config file, instead of the one in the platform config directory
    #[arg(long, value_name = "PATH", conflicts_with = "resolve")]
    pub config: Option<PathBuf>,

    /// Write the gallery here instead of stdout
    #[arg(long, value_name = "PATH", conflicts_with = "resolve")]
    pub out: Option<PathBuf>,

    /// Maximum width tier token
    #[arg(long, value_name = "TIER", requires = "resolve")]
    pub max_width: Option<String>,

    /// Padding tier token
    #[arg(long, value_name = "TIER", requires = "resolve")]
    pub padding: Option<String>,

    /// Extra classes appended after the tier classes
    #[arg(long, value_name = "CLASSES", requires = "resolve", allow_hyphen_values = true)]
    pub class: Option<String>,

    /// Log at debug level (RUST_LOG still wins)
    #[arg(short, long)]
    pub verbose: bool,
}
