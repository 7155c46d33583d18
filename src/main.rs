// SPDX-FileCopyrightText: 2026 ade-available contributors
//
// SPDX-License-Identifier: GPL-3.0-only

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = ade_available::cli::run() {
        eprintln!("ade-available: {:#}", err);
        process::exit(1);
    }
}
