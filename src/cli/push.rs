use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::{Cli, confirm};
use crate::container::ContainerTool;
use crate::resolve;
use crate::store::ConfigStore;

pub fn run(cli: Cli) -> Result<()> {
    let store = ConfigStore::open(cli.config.as_deref()).context("failed to load config")?;
    debug!(path = %store.path().display(), "loaded config");

    let destination = resolve::plan(
        &cli.image,
        &cli.destination,
        store.config(),
        cli.override_tag.as_deref().filter(|t| !t.is_empty()),
    )
    .context("failed to generate destination image")?;

    if cli.dry_run {
        println!("{destination}");
        return Ok(());
    }

    if !cli.force {
        confirm::destination(&destination)?;
    }

    let tool = ContainerTool::new(cli.container_tool);

    info!(tool = tool.program(), image = %cli.image, "pulling image");
    let output = tool.pull(&cli.image)?;
    log_output(&output);

    info!(source = %cli.image, destination = %destination, "tagging image");
    let output = tool.tag(&cli.image, &destination)?;
    log_output(&output);

    info!(image = %destination, "pushing image");
    let output = tool.push(&destination)?;
    log_output(&output);

    println!("Pushed {destination}");
    Ok(())
}

fn log_output(output: &str) {
    if !output.is_empty() {
        info!("{output}");
    }
}
