//! qy-config: resolve and inspect QingCloud SDK configuration.

mod args;
mod commands;
mod error;
mod logging;
mod resolve;

use args::Cli;
use clap::Parser;
use commands::run_command;
use error::ExitCodeExt;

fn main() {
    let cli = Cli::parse();
    let log_level = logging::init();

    if let Err(e) = run_command(cli, &log_level) {
        eprintln!("Error: {e:#}");
        std::process::exit(e.exit_code().as_i32());
    }
}
