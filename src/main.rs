// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::info;

use manifest_cleaner::config::Config;
use manifest_cleaner::logging;
use manifest_cleaner::manifest;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize structured logging
    logging::init(&config.log_level)?;

    info!("Starting manifest cleaner");

    let report = manifest::run(&config)
        .with_context(|| format!("Failed to clean {}", config.input.display()))?;

    info!(
        kept = report.kept_count(),
        removed = report.removed_count(),
        "Manifest cleaning finished"
    );

    Ok(())
}
