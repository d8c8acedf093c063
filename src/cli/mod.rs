//! CLI module for steamlens
//!
//! Argument parsing with clap; each subcommand keeps its `Args` struct and
//! `execute` function in its own file under `commands/`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};
use commands::browse::BrowseArgs;
use commands::items::ItemsArgs;

#[derive(Parser)]
#[command(name = "steamlens")]
#[command(version)]
#[command(about = "Terminal browser for LZT Market Steam listings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory path (default: ./data)
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch listings and print the derived table
    Items(ItemsArgs),

    /// Browse listings in the interactive TUI
    Browse(BrowseArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let data_paths = DataPaths::new(&self.data_dir);
        data_paths.ensure_directories()?;

        let verbose = self.verbose > 0;
        match self.command {
            Commands::Items(args) => commands::items::execute(args, data_paths, verbose).await,
            Commands::Browse(args) => commands::browse::execute(args, data_paths, verbose).await,
        }
    }
}
