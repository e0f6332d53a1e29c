//! Configuration resolution for command execution.
//!
//! Responsibilities:
//! - Layer the built-in defaults, a config file and CLI/env overrides into one `Config`.
//!
//! Does NOT handle:
//! - Installing the user config file (see `commands::init`).
//! - CLI argument definitions (see `args` module).
//!
//! Invariants:
//! - Layer order: built-in defaults, then `--config` or the user file, then
//!   credentials, endpoint and zone overrides.
//! - A missing user config file is not an error; an explicit `--config` that
//!   cannot be read is.

use anyhow::Context;
use qingcloud_config::{Config, user_config_path};
use secrecy::ExposeSecret;

use crate::args::Cli;

pub(crate) fn resolve(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::new_default().context("Failed to load built-in configuration")?;

    if cli.defaults_only {
        tracing::debug!("Using built-in defaults only");
    } else if let Some(path) = &cli.config {
        config
            .load_from_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;
    } else {
        let path = user_config_path()?;
        if path.exists() {
            config
                .load_user_config()
                .with_context(|| format!("Failed to load user config file {}", path.display()))?;
        } else {
            tracing::warn!(
                path = %path.display(),
                "No user config file found; using built-in defaults (run `qy-config init` to create one)"
            );
        }
    }

    if cli.access_key_id.is_some() || cli.secret_access_key.is_some() {
        let access_key_id = cli
            .access_key_id
            .clone()
            .unwrap_or_else(|| config.access_key_id.expose_secret().to_string());
        let secret_access_key = cli
            .secret_access_key
            .clone()
            .unwrap_or_else(|| config.secret_access_key.expose_secret().to_string());
        config.set_credentials(access_key_id, secret_access_key);
    }

    if let Some(endpoint) = &cli.endpoint {
        config.set_endpoint(endpoint).context("Invalid --endpoint")?;
    }

    if let Some(zone) = &cli.zone {
        config.set_zone(zone.as_str());
    }

    Ok(config)
}
