//! Folio
//!
//! Builds the demo portfolio document, wires up every page subsystem
//! and replays a scripted visitor session against a virtual clock.
//! Pass a JSON config path as the first argument to override defaults.

mod config;
mod demo;
mod page;
mod session;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::RuntimeConfig;
use crate::page::Page;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => RuntimeConfig::load(Path::new(&path))
            .with_context(|| format!("loading config from {path}"))?,
        None => RuntimeConfig::default(),
    };

    info!("Folio v{} - scripted portfolio session", folio_core::VERSION);
    info!(
        "viewport {}x{}, seed {}",
        config.viewport.width, config.viewport.height, config.seed
    );

    let mut page = Page::new(demo::build_portfolio(), &config);
    let report = session::run(&mut page, &config);
    report.log();

    Ok(())
}
