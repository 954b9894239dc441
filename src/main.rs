// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::Client;
use std::io::Read;
use tracing::info;

use gatherplan::config::Config;
use gatherplan::plan::{build_must_gather_plan, PlanParams};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting must-gather planner");

    // Load configuration
    let config = Config::from_env();
    let raw = read_params(&config)?;
    let params = match PlanParams::from_json(&raw) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    match build_must_gather_plan(&client, params).await {
        Ok(plan) => println!("{}", plan),
        Err(e) if e.is_user_error() => {
            // User-correctable input error; the message is the whole result
            eprintln!("{}", e);
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Read the JSON parameter object: a command-line argument naming a file
/// (`-` for stdin) wins, then the inline/file environment variables, then
/// an empty object meaning all-defaults.
fn read_params(config: &Config) -> Result<String> {
    if let Some(arg) = std::env::args().nth(1) {
        if arg == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return std::fs::read_to_string(&arg)
            .with_context(|| format!("failed to read plan parameters from {}", arg));
    }

    if let Some(params) = &config.params {
        return Ok(params.clone());
    }

    if let Some(path) = &config.params_file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read plan parameters from {}", path));
    }

    Ok("{}".to_string())
}
