// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! arkiv - configuration-driven content archiver CLI

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "arkiv",
    version,
    about = "Configuration-driven content archiver"
)]
struct Cli {
    /// Path to the archive configuration file
    #[arg(long, global = true, default_value = "arkiv.toml")]
    config: PathBuf,

    /// Path to the JSON content store
    #[arg(long, global = true, default_value = "store.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and run every job
    Run,
    /// Validate the configuration without mutating anything
    Check,
    /// Print the validated job definitions
    Jobs,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run => commands::run::run(&cli.config, &cli.store),
        Commands::Check => commands::check::check(&cli.config, &cli.store),
        Commands::Jobs => commands::jobs::jobs(&cli.config, &cli.store),
    }
}
