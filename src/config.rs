// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::env;

/// Planner configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Inline JSON parameter object (MUST_GATHER_PARAMS)
    pub params: Option<String>,
    /// Path to a file containing the JSON parameter object (MUST_GATHER_PARAMS_FILE)
    pub params_file: Option<String>,
}

impl Config {
    /// Load configuration from environment variables. Both sources are
    /// optional; a command-line argument takes precedence over either.
    pub fn from_env() -> Self {
        Config {
            params: env::var("MUST_GATHER_PARAMS").ok(),
            params_file: env::var("MUST_GATHER_PARAMS_FILE").ok(),
        }
    }
}
