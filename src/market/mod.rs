//! Listing catalog: upstream API client, data model and the sort/filter
//! view model shared by the CLI and the TUI.

pub mod client;
pub mod display;
pub mod types;
pub mod view;

pub use client::MarketClient;
pub use types::{Listing, MarketError};
pub use view::{derive_view, ListingRow, SortDirection, SortField, SortState};
