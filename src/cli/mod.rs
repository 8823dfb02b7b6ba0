pub mod args;
pub mod output;

use crate::config::Config;
use crate::domain::models::ListOrigin;
use crate::domain::selector;
use crate::domain::source_resolver::SourceResolver;
use anyhow::Context;
use args::Cli;
use std::io::Write;

/// Resolve the list, pick `cli.count` entries and write them to `out`
pub async fn run<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> anyhow::Result<ListOrigin> {
    let resolver = SourceResolver::from_config(config);

    let list = resolver
        .resolve(cli.refresh)
        .await
        .context("Failed to get user agents")?;

    let selected = selector::select_random(&list.user_agents, cli.count as usize)
        .context("Failed to select random user agents")?;

    output::write_user_agents(out, &selected, cli.format)
        .context("Failed to output user agents")?;

    Ok(list.origin)
}
