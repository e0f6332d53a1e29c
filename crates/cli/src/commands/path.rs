//! `path` command: print the user config file location.

use qingcloud_config::user_config_path;

pub(super) fn run() -> anyhow::Result<()> {
    println!("{}", user_config_path()?.display());
    Ok(())
}
