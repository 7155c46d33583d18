// SPDX-FileCopyrightText: 2026 ade-available contributors
//
// SPDX-License-Identifier: GPL-3.0-only

use anyhow::Context;
use log::info;
use std::{
    env,
    io::{self, Write},
    process,
};

use crate::{
    config::{Config, API_KEY_VAR, API_SUBDOMAIN_VAR},
    filter, report,
};

fn usage() -> String {
    format!(
        "Usage: ade-available [--help|--version]\n\n\
         Lists ADE-enrolled Macs that have no assigned user.\n\n\
         Environment:\n  \
         {}        Kandji API token\n  \
         {}  Kandji tenant subdomain",
        API_KEY_VAR, API_SUBDOMAIN_VAR
    )
}

/// Fetch, filter and report against an already resolved configuration.
pub fn run_with<W: Write>(config: &Config, out: W) -> anyhow::Result<()> {
    info!("Fetching ADE devices from {}", config.endpoint_url);
    let devices = kandji_client::fetch_devices(&config.api_key, &config.endpoint_url)
        .context("failed to fetch ADE device list")?;
    info!("Received {} device records", devices.results.len());

    let unassigned = filter::unassigned_macs(&devices);
    report::write_report(&unassigned, out).context("failed to write report")
}

pub fn run() -> anyhow::Result<()> {
    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        None => {}
        Some("-h" | "--help") => {
            println!("{}", usage());
            return Ok(());
        }
        Some("-V" | "--version") => {
            println!("ade-available {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Some(_) => {
            eprintln!("{}", usage());
            process::exit(1);
        }
    }

    let config = Config::from_env()?;
    run_with(&config, io::stdout().lock())
}
