// src/bin/cli.rs
use color_eyre::eyre::eyre;
use qr_kiosk::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(qr_kiosk::config::consts::DEFAULT_LOG_FILE);
    cli::run().map_err(|e| eyre!("{e}"))
}
