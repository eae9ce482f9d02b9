mod commands;
mod view;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portal_core::{load_config, validate_config, GameDraft, Outcome, Portal, SanitizedConfig};

use commands::{parse_line, Input, HELP};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Logs go to stderr so stdout only carries the rendered portal
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = std::env::var("PORTAL_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("portal.toml"));

    info!("Starting portal v{}", VERSION);
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    validate_config(&config).context("Configuration validation failed")?;
    debug!("Configuration: {:?}", SanitizedConfig::from(&config));

    let mut portal = Portal::connect(&config)
        .await
        .context("Failed to create backend client")?;

    let mut stdout = tokio::io::stdout();
    write_out(&mut stdout, &view::catalog(&portal)).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let text = match parse_line(&line) {
            Ok(Input::Blank) => continue,
            Ok(Input::Quit) => break,
            Ok(Input::Help) => HELP.to_string(),
            Ok(Input::List) => view::catalog(&portal),
            Ok(Input::Categories) => view::categories(portal.state()),
            Ok(Input::ShowSite) => view::site(&portal.site_config()),
            Ok(Input::ShowGame(id)) => match portal.state().game(id) {
                Some(game) => view::draft(&GameDraft::from(game)),
                None => format!("No game with id {}", id),
            },
            Ok(Input::Command(command)) => match portal.dispatch(command).await {
                Ok(Outcome::Refiltered) => view::grid(&portal.state().grid()),
                Ok(outcome) => view::outcome(&portal, &outcome).unwrap_or_default(),
                Err(e) => e.to_string(),
            },
            Err(e) => format!("{:#}", e),
        };
        write_out(&mut stdout, &text).await?;
    }

    info!("Bye");
    Ok(())
}

async fn write_out(stdout: &mut tokio::io::Stdout, text: &str) -> Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}
