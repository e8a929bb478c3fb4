use std::io::{self, Write};

use ai_assistant_config::StoreConfig;
use ai_assistant_store::initial_state;
use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod logger;
mod replay;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbosity.log_level_filter());

    log::info!("Starting ai-assistant-replay");

    let config = match &cli.config {
        Some(path) => StoreConfig::load_from(path)?,
        None => StoreConfig::load(),
    };

    let bootstrap = cli
        .bootstrap
        .as_deref()
        .map(replay::read_bootstrap)
        .transpose()?;
    let actions = replay::read_actions(&cli.actions)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let steps = cli.steps;
    let state = replay::replay(
        initial_state(bootstrap.as_ref(), &config),
        actions,
        &config,
        |_, state| {
            if steps {
                serde_json::to_writer(&mut out, state).context("Failed to write state")?;
                writeln!(out)?;
            }
            Ok(())
        },
    )?;

    if !steps {
        if cli.pretty {
            serde_json::to_writer_pretty(&mut out, &state)
        } else {
            serde_json::to_writer(&mut out, &state)
        }
        .context("Failed to write state")?;
        writeln!(out)?;
    }

    log::info!("Exiting ai-assistant-replay");
    Ok(())
}
