//! CLI for the NetworkAlerts plugin installer.

use anyhow::{Context, Result};
use clap::Parser;
use sbplug_core::{config, install, paths, Installed, NETWORK_ALERTS};
use std::io::{self, Write};

/// Downloads NetworkAlerts.jar into ~/Shuffleboard/plugins.
#[derive(Debug, Parser)]
#[command(name = "sbplug", version)]
#[command(about = "Install the NetworkAlerts Shuffleboard plugin", long_about = None)]
pub struct Cli {}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let _cli = Cli::parse();
        let cfg = config::load_or_default().context("loading config")?;
        tracing::debug!("loaded config: {:?}", cfg);

        let home = paths::home_dir()?;
        let installed = install(&NETWORK_ALERTS, &home, &cfg.transfer_options())?;
        report(&mut io::stdout().lock(), &installed)?;
        Ok(())
    }
}

/// Writes the single success line.
fn report(out: &mut impl Write, installed: &Installed) -> io::Result<()> {
    writeln!(out, "{}", installed.confirmation())
}
