//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not resolve configuration (see `resolve` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qy-config")]
#[command(about = "Resolve and inspect QingCloud SDK configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  qy-config init\n  qy-config show --format json\n  qy-config --config ~/work/qy.yaml show\n  qy-config --endpoint https://api.example.com:443/iaas show\n  qy-config check-endpoint http://10.0.0.1:7777/iaas\n"
)]
pub struct Cli {
    /// Path to a config file to load instead of ~/.qingcloud/config.yaml.
    ///
    /// A leading `~/` is expanded to the home directory.
    #[arg(short, long, global = true, env = "QY_CONFIG_PATH", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Ignore config files and use only the built-in defaults
    #[arg(long, global = true, conflicts_with = "config")]
    pub defaults_only: bool,

    /// Endpoint URL overriding host, port, protocol and uri (port is required)
    #[arg(short, long, global = true, env = "QY_ENDPOINT", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Access key ID
    #[arg(long, global = true, env = "QY_ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key_id: Option<String>,

    /// Secret access key
    #[arg(long, global = true, env = "QY_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,

    /// Zone identifier (e.g. pek3a)
    #[arg(short, long, global = true, env = "QY_ZONE")]
    pub zone: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,

        /// Print credentials instead of masking them
        #[arg(long)]
        reveal_secrets: bool,
    },

    /// Install the default config file at ~/.qingcloud/config.yaml if it is missing
    Init,

    /// Print the path of the user config file
    Path,

    /// Validate an endpoint URL and print its components
    CheckEndpoint {
        /// Endpoint URL of the form scheme://host:port[/path]
        url: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}
