use anyhow::Context;
use std::io::{self, IsTerminal};
use useragent_cli::cli::{self, args::Cli};
use useragent_cli::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr, stdout carries only user agents
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "useragent_cli=warn".into()),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let args = Cli::parse_normalized();

    let config = Config::from_env().context("Invalid configuration")?;
    tracing::debug!(
        "Source {} cached at {:?}",
        config.source_url,
        config.cache_path
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let origin = cli::run(&args, &config, &mut out).await?;
    tracing::debug!("Served {} user agents from {}", args.count, origin);

    Ok(())
}
