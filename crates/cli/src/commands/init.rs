//! `init` command: install the default user config file.

use anyhow::Context;
use qingcloud_config::{ensure_user_config_exists, user_config_path};

pub(super) fn run() -> anyhow::Result<()> {
    let path = user_config_path()?;
    let installed = ensure_user_config_exists().context("Failed to install user config file")?;

    if installed {
        println!("Installed default config file at {}", path.display());
    } else {
        println!("Config file already exists at {}", path.display());
    }
    Ok(())
}
