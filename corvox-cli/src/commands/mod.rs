//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod extract;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full extraction pipeline over input files
    Extract(extract::ExtractArgs),

    /// Run only the acceptance filters over a file of sentences
    Validate(validate::ValidateArgs),

    /// Print a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Dispatch to the selected command
    pub fn execute(self) -> CliResult<()> {
        match self {
            Commands::Extract(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize env_logger from a verbosity count, unless quiet
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level),
    )
    .try_init();
}
