//! Command implementations for qy-config.

mod check_endpoint;
mod init;
mod path;
mod show;

use crate::args::{Cli, Commands};
use crate::logging::LogLevelHandle;
use crate::resolve::resolve;

/// Execute the parsed command.
///
/// Only `show` resolves a full configuration; the other commands work
/// without reading any config file.
pub(crate) fn run_command(cli: Cli, log_level: &LogLevelHandle) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Show {
            format,
            reveal_secrets,
        } => {
            let config = resolve(&cli)?;
            log_level.apply(config.log_level())?;
            show::run(&config, *format, *reveal_secrets)
        }
        Commands::Init => init::run(),
        Commands::Path => path::run(),
        Commands::CheckEndpoint { url } => check_endpoint::run(url),
    }
}
