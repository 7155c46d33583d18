// SPDX-FileCopyrightText: 2026 ade-available contributors
//
// SPDX-License-Identifier: GPL-3.0-only

use std::{env, fmt};

pub const API_KEY_VAR: &str = "KANDJI_API_KEY";
pub const API_SUBDOMAIN_VAR: &str = "KANDJI_API_SUBDOMAIN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Named variable is unset or empty
    Missing(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Missing(API_KEY_VAR) => write!(
                f,
                "no valid Kandji API key obtained; set it in the environment variable '{}'",
                API_KEY_VAR
            ),
            Self::Missing(API_SUBDOMAIN_VAR) => write!(
                f,
                "no valid Kandji API subdomain obtained; set it in the environment variable '{}'",
                API_SUBDOMAIN_VAR
            ),
            Self::Missing(var) => write!(f, "environment variable '{}' is not set", var),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything needed to reach one tenant's device list.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub endpoint_url: String,
}

// Keeps the bearer token out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(var: F) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            var(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let api_key = required(API_KEY_VAR)?;
        let subdomain = required(API_SUBDOMAIN_VAR)?;
        Ok(Self {
            api_key,
            endpoint_url: kandji_client::devices_url(&subdomain),
        })
    }
}
