//! `show` command: print the resolved configuration.

use anyhow::Context;
use qingcloud_config::Config;

use crate::args::OutputFormat;

pub(super) fn run(config: &Config, format: OutputFormat, reveal_secrets: bool) -> anyhow::Result<()> {
    let document = config.to_document(reveal_secrets);

    let rendered = match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(&document).context("Failed to render configuration as YAML")?
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&document)
                .context("Failed to render configuration as JSON")?;
            json.push('\n');
            json
        }
    };

    tracing::debug!(base_url = %config.base_url(), "Rendering resolved configuration");
    print!("{rendered}");
    Ok(())
}
