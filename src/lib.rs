// SPDX-FileCopyrightText: 2026 ade-available contributors
//
// SPDX-License-Identifier: GPL-3.0-only

pub mod cli;
pub mod config;
pub mod filter;
pub mod report;

pub use config::{Config, ConfigError};
