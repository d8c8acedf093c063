//! Client-side view model for the listings table
//!
//! Pure sort -> filter -> format pipeline over an immutable listings
//! snapshot. Nothing in here touches the terminal or the network, so the
//! whole table behavior is testable without a UI harness.

use chrono::DateTime;
use std::cmp::Ordering;

use super::types::Listing;

/// Web front URL a listing ID resolves to
const LISTING_URL_BASE: &str = "https://lzt.market";

/// Placeholder for values the catalog does not carry
const NOT_AVAILABLE: &str = "N/A";

/// Sortable table columns, one comparator each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Link,
    Title,
    Price,
    Origin,
    Country,
    Published,
    LastActivity,
    Guarantee,
    Hours,
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        &[
            SortField::Link,
            SortField::Title,
            SortField::Price,
            SortField::Origin,
            SortField::Country,
            SortField::Published,
            SortField::LastActivity,
            SortField::Guarantee,
            SortField::Hours,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            SortField::Link => "Link",
            SortField::Title => "Title",
            SortField::Price => "Price",
            SortField::Origin => "Origin",
            SortField::Country => "Country",
            SortField::Published => "Published Date",
            SortField::LastActivity => "Last Activity",
            SortField::Guarantee => "Guarantee",
            SortField::Hours => "Hours",
        }
    }

    /// Natural ordering of the raw field values. Guarantee compares on the
    /// raw code, not its label. A listing without playtime for the tracked
    /// game compares equal to everything on `Hours`.
    fn compare(&self, a: &Listing, b: &Listing, game_id: &str) -> Ordering {
        match self {
            SortField::Link => a.item_id.cmp(&b.item_id),
            SortField::Title => a.title_en.cmp(&b.title_en),
            SortField::Price => a.price.cmp(&b.price),
            SortField::Origin => a.item_origin.cmp(&b.item_origin),
            SortField::Country => a.account_country.cmp(&b.account_country),
            SortField::Published => a.published_date.cmp(&b.published_date),
            SortField::LastActivity => a.account_last_activity.cmp(&b.account_last_activity),
            SortField::Guarantee => a.extended_guarantee.cmp(&b.extended_guarantee),
            SortField::Hours => match (a.playtime(game_id), b.playtime(game_id)) {
                (Some(a_hours), Some(b_hours)) => a_hours.cmp(&b_hours),
                _ => Ordering::Equal,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction; direction is meaningful only while a
/// column is active.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortState {
    /// Header-click semantics: the active column flips direction, a new
    /// column starts ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.direction = self.direction.flip();
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Display-ready projection of one listing; recomputed on every derivation
/// and keyed by `item_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub item_id: u64,
    pub url: String,
    pub title: String,
    pub price: String,
    pub origin: String,
    pub country: String,
    pub published: String,
    pub last_activity: String,
    pub guarantee: String,
    pub hours: String,
}

impl ListingRow {
    fn from_listing(listing: &Listing, game_id: &str) -> Self {
        Self {
            item_id: listing.item_id,
            url: format!("{}/{}", LISTING_URL_BASE, listing.item_id),
            title: listing.title_en.clone(),
            price: format!("{:.2}", listing.price),
            origin: listing.item_origin.clone(),
            country: listing.account_country.clone(),
            published: format_epoch_date(listing.published_date),
            last_activity: format_epoch_date(listing.account_last_activity),
            guarantee: guarantee_period(listing.extended_guarantee).to_string(),
            hours: listing
                .playtime(game_id)
                .map(|hours| format!("{:.2}", hours))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

/// Guarantee code to its period label
pub fn guarantee_period(value: i64) -> &'static str {
    match value {
        -1 => "12 hours",
        0 => "24 hours",
        1 => "3 days",
        _ => "Unknown",
    }
}

fn format_epoch_date(secs: i64) -> String {
    match DateTime::from_timestamp(secs, 0) {
        Some(date) => date.format("%b %d, %Y").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Derive the rows to render: sort a copy of the snapshot, then drop
/// non-matches (filtering after sorting keeps sort order among survivors),
/// then format. Never mutates `listings` and never fails on data content.
pub fn derive_view(
    listings: &[Listing],
    sort: &SortState,
    filter: &str,
    game_id: &str,
) -> Vec<ListingRow> {
    let mut ordered: Vec<&Listing> = listings.iter().collect();
    if let Some(field) = sort.field {
        let direction = sort.direction;
        stable_merge_sort(&mut ordered, &|a, b| {
            let ordering = field.compare(a, b, game_id);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    ordered
        .into_iter()
        .filter(|listing| matches_filter(listing, filter))
        .map(|listing| ListingRow::from_listing(listing, game_id))
        .collect()
}

/// Case-insensitive substring match over title, origin and country; the
/// empty string matches everything.
fn matches_filter(listing: &Listing, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    listing.title_en.to_lowercase().contains(&needle)
        || listing.item_origin.to_lowercase().contains(&needle)
        || listing.account_country.to_lowercase().contains(&needle)
}

/// Bottom-up stable merge sort. The `Hours` comparator is not a total order
/// (a missing playtime ties with everything), which `slice::sort_by` is
/// allowed to reject; this merge accepts any comparator and keeps ties in
/// their original relative order.
fn stable_merge_sort<T: Copy>(items: &mut [T], compare: &dyn Fn(T, T) -> Ordering) {
    let len = items.len();
    let mut merged: Vec<T> = Vec::with_capacity(len);
    let mut width = 1;
    while width < len {
        merged.clear();
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);
            while left < mid && right < end {
                if compare(items[right], items[left]) == Ordering::Less {
                    merged.push(items[right]);
                    right += 1;
                } else {
                    merged.push(items[left]);
                    left += 1;
                }
            }
            merged.extend_from_slice(&items[left..mid]);
            merged.extend_from_slice(&items[right..end]);
            start = end;
        }
        items.copy_from_slice(&merged);
        width *= 2;
    }
}
