//! `check-endpoint` command: validate an endpoint URL.

use anyhow::Context;
use qingcloud_config::Endpoint;

pub(super) fn run(url: &str) -> anyhow::Result<()> {
    let endpoint = Endpoint::parse(url).context("Invalid endpoint")?;

    println!("protocol: {}", endpoint.protocol);
    println!("host: {}", endpoint.host);
    println!("port: {}", endpoint.port);
    println!("uri: {}", endpoint.uri);
    Ok(())
}
