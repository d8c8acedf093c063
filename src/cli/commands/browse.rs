use anyhow::Result;
use clap::Args;
use std::time::Duration;

use crate::config::Config;
use crate::data_paths::DataPaths;
use crate::logging::{self, LogMode, LoggingConfig};
use crate::market::MarketClient;
use crate::tui;

#[derive(Args)]
pub struct BrowseArgs {
    /// UI tick rate in milliseconds
    #[arg(long, default_value = "100")]
    pub tick_ms: u64,
}

pub async fn execute(args: BrowseArgs, data_paths: DataPaths, verbose: bool) -> Result<()> {
    // The TUI owns the terminal, so logs go to the session file only.
    logging::init_logging(LoggingConfig::new(LogMode::FileOnly, data_paths), verbose)?;

    let config = Config::from_env()?;
    let client = MarketClient::new(&config)?;

    tui::run(
        client,
        config.tracked_game,
        Duration::from_millis(args.tick_ms),
    )
    .await
}
