use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::TableState;
use tokio::sync::mpsc;
use tracing::debug;

use crate::market::types::{Listing, MarketError};
use crate::market::view::{derive_view, ListingRow, SortField, SortState};
use crate::market::MarketClient;
use crate::tui::navigation::{Navigation, Page};

type FetchResult = Result<Vec<Listing>, MarketError>;

/// The three mutually exclusive display states of the items page. Exactly
/// one is ever rendered; transitions are driven by the fetch outcome only.
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready(Vec<Listing>),
}

pub struct App {
    pub load_state: LoadState,
    pub sort: SortState,
    pub filter: String,
    pub filter_mode: bool,
    /// Index into `SortField::all()` of the highlighted header column
    pub active_column: usize,
    pub table_state: TableState,
    pub navigation: Navigation,
    pub tick_count: usize,
    pub should_quit: bool,
    tracked_game: String,
    client: Arc<MarketClient>,
    fetch_tx: mpsc::UnboundedSender<FetchResult>,
    fetch_rx: mpsc::UnboundedReceiver<FetchResult>,
}

impl App {
    pub fn new(client: MarketClient, tracked_game: String) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        Self {
            load_state: LoadState::Loading,
            sort: SortState::default(),
            filter: String::new(),
            filter_mode: false,
            active_column: 0,
            table_state: TableState::default(),
            navigation: Navigation::new(),
            tick_count: 0,
            should_quit: false,
            tracked_game,
            client: Arc::new(client),
            fetch_tx,
            fetch_rx,
        }
    }

    /// Start one fetch on a background task. The result comes back through
    /// the channel; if the app is gone by then, the send fails and the
    /// result is dropped instead of landing on a dead view.
    pub fn spawn_fetch(&mut self) {
        self.load_state = LoadState::Loading;
        self.table_state.select(None);

        let client = Arc::clone(&self.client);
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_listings().await;
            if tx.send(result).is_err() {
                debug!("View torn down before the fetch resolved, discarding result");
            }
        });
    }

    /// Advance the spinner and apply any fetch result that arrived.
    pub fn on_tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        while let Ok(result) = self.fetch_rx.try_recv() {
            match result {
                Ok(listings) => {
                    if !listings.is_empty() {
                        self.table_state.select(Some(0));
                    }
                    self.load_state = LoadState::Ready(listings);
                }
                Err(e) => self.load_state = LoadState::Failed(e.to_string()),
            }
        }
    }

    /// Rows as currently derived; empty unless listings are loaded.
    pub fn derived_rows(&self) -> Vec<ListingRow> {
        match &self.load_state {
            LoadState::Ready(listings) => {
                derive_view(listings, &self.sort, &self.filter, &self.tracked_game)
            }
            _ => Vec::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.filter_mode {
            self.handle_filter_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.navigation.next_page(),
            KeyCode::BackTab => self.navigation.previous_page(),
            _ if self.navigation.current_page == Page::SteamItems => self.handle_items_key(key),
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.filter_mode = false,
            KeyCode::Esc => {
                self.filter_mode = false;
                self.filter.clear();
            }
            KeyCode::Backspace => {
                self.filter.pop();
            }
            KeyCode::Char(c) => self.filter.push(c),
            _ => {}
        }
    }

    fn handle_items_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('/') => self.filter_mode = true,
            KeyCode::Left => {
                self.active_column = if self.active_column == 0 {
                    SortField::all().len() - 1
                } else {
                    self.active_column - 1
                };
            }
            KeyCode::Right => {
                self.active_column = (self.active_column + 1) % SortField::all().len();
            }
            KeyCode::Enter | KeyCode::Char('s') => {
                self.sort.toggle(SortField::all()[self.active_column]);
            }
            KeyCode::Up | KeyCode::Char('k') => self.select_previous_row(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_row(),
            KeyCode::Char('r') => self.spawn_fetch(),
            _ => {}
        }
    }

    fn select_previous_row(&mut self) {
        let count = self.derived_rows().len();
        if count == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    count - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn select_next_row(&mut self) {
        let count = self.derived_rows().len();
        if count == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= count - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyModifiers;
    use rust_decimal_macros::dec;

    fn test_app() -> App {
        let config = Config {
            api_url: "http://localhost:9".to_string(),
            api_token: "test-token".to_string(),
            tracked_game: "252490".to_string(),
        };
        let client = MarketClient::new(&config).unwrap();
        App::new(client, config.tracked_game)
    }

    fn listing(item_id: u64, title: &str) -> Listing {
        Listing {
            item_id,
            title_en: title.to_string(),
            price: dec!(1),
            item_origin: "brute".to_string(),
            account_country: "US".to_string(),
            published_date: 1_714_180_008,
            account_last_activity: 1_714_000_000,
            extended_guarantee: 0,
            account_full_games: None,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn fetch_success_moves_loading_to_ready() {
        let mut app = test_app();
        assert!(matches!(app.load_state, LoadState::Loading));

        app.fetch_tx.send(Ok(vec![listing(1, "Alpha")])).unwrap();
        app.on_tick();

        assert!(matches!(app.load_state, LoadState::Ready(ref l) if l.len() == 1));
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn fetch_failure_moves_loading_to_failed_with_the_message() {
        let mut app = test_app();
        app.fetch_tx
            .send(Err(MarketError::Api {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            }))
            .unwrap();
        app.on_tick();

        match &app.load_state {
            LoadState::Failed(message) => {
                assert!(message.contains("Failed to fetch Steam items"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
        assert!(app.derived_rows().is_empty());
    }

    #[test]
    fn result_is_discarded_after_teardown() {
        let app = test_app();
        let tx = app.fetch_tx.clone();
        drop(app);

        assert!(tx.send(Ok(Vec::new())).is_err());
    }

    #[test]
    fn header_keys_toggle_sort_on_the_highlighted_column() {
        let mut app = test_app();
        app.fetch_tx
            .send(Ok(vec![listing(1, "Alpha"), listing(2, "Beta")]))
            .unwrap();
        app.on_tick();

        // Price is the third header
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.sort.field, Some(SortField::Price));
        assert_eq!(app.sort.direction, crate::market::SortDirection::Ascending);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.sort.direction, crate::market::SortDirection::Descending);
    }

    #[test]
    fn filter_mode_captures_typed_text() {
        let mut app = test_app();

        app.handle_key(key(KeyCode::Char('/')));
        assert!(app.filter_mode);

        for c in "usa".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.filter, "usa");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.filter, "us");

        app.handle_key(key(KeyCode::Enter));
        assert!(!app.filter_mode);
        assert_eq!(app.filter, "us");

        app.handle_key(key(KeyCode::Char('/')));
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.filter_mode);
        assert_eq!(app.filter, "");
    }

    #[test]
    fn quit_keys_set_the_flag() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
