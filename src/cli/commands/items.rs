use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::config::Config;
use crate::data_paths::DataPaths;
use crate::logging::{self, LogMode, LoggingConfig};
use crate::market::view::{derive_view, SortDirection, SortField, SortState};
use crate::market::{display, MarketClient};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKey {
    Link,
    Title,
    Price,
    Origin,
    Country,
    Published,
    Activity,
    Guarantee,
    Hours,
}

impl SortKey {
    fn field(self) -> SortField {
        match self {
            SortKey::Link => SortField::Link,
            SortKey::Title => SortField::Title,
            SortKey::Price => SortField::Price,
            SortKey::Origin => SortField::Origin,
            SortKey::Country => SortField::Country,
            SortKey::Published => SortField::Published,
            SortKey::Activity => SortField::LastActivity,
            SortKey::Guarantee => SortField::Guarantee,
            SortKey::Hours => SortField::Hours,
        }
    }
}

#[derive(Args)]
pub struct ItemsArgs {
    /// Column to sort by
    #[arg(long, short = 's', value_enum)]
    pub sort: Option<SortKey>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Case-insensitive substring filter over title, origin and country
    #[arg(long, short = 'f', default_value = "")]
    pub filter: String,

    /// Maximum number of listings to display
    #[arg(long, short = 'n', default_value = "20")]
    pub limit: usize,

    /// Show publish/activity dates and the listing URL
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

pub async fn execute(args: ItemsArgs, data_paths: DataPaths, verbose: bool) -> Result<()> {
    logging::init_logging(
        LoggingConfig::new(LogMode::ConsoleAndFile, data_paths),
        verbose,
    )?;

    let config = Config::from_env()?;
    let client = MarketClient::new(&config)?;
    let listings = client.fetch_listings().await?;

    let mut sort = SortState::default();
    if let Some(key) = args.sort {
        sort.field = Some(key.field());
        if args.desc {
            sort.direction = SortDirection::Descending;
        }
    }

    let rows = derive_view(&listings, &sort, &args.filter, &config.tracked_game);
    display::print_listings(&rows, args.limit, args.detailed);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sort_key_maps_to_a_distinct_field() {
        let fields: Vec<SortField> = [
            SortKey::Link,
            SortKey::Title,
            SortKey::Price,
            SortKey::Origin,
            SortKey::Country,
            SortKey::Published,
            SortKey::Activity,
            SortKey::Guarantee,
            SortKey::Hours,
        ]
        .into_iter()
        .map(SortKey::field)
        .collect();

        assert_eq!(fields.len(), SortField::all().len());
        assert_eq!(fields, SortField::all());
    }
}
