use clap::Parser;
use resolved_components::application::dto::OutputFormat;
use std::path::PathBuf;

/// Default resolution result file, relative to the working directory
pub const DEFAULT_INPUT: &str = "resolution.toml";

/// Report the components and artifacts of a dependency resolution result
#[derive(Parser, Debug)]
#[command(name = "resolved-components")]
#[command(version)]
#[command(
    about = "Report the components and artifacts of a dependency resolution result",
    long_about = None
)]
pub struct Args {
    /// Resolution result file to read
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Exclude components matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "org.junit*" -e "project :test*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Configuration file (defaults to resolved-components.config.yml next to the input)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when any artifact could not be resolved
    #[arg(long)]
    pub fail_on_unresolved: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
