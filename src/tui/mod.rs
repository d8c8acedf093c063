//! Terminal UI for browsing the Steam listing catalog
//!
//! Key components:
//! - Application state with the loading / error / table display states
//! - Keyboard-driven sort, substring filter and row navigation
//! - A render function free of business logic, fed by the view model

pub mod app;
pub mod events;
pub mod navigation;
pub mod ui;

pub use app::{App, LoadState};
pub use events::{Event, EventHandler};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{info, warn};

use crate::market::MarketClient;

/// Run the browser until the user quits. Restores the terminal on the way
/// out even when the app loop errors.
pub async fn run(client: MarketClient, tracked_game: String, tick_rate: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(client, tracked_game), tick_rate).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut events = EventHandler::new(tick_rate);
    app.spawn_fetch();
    info!("Steam items browser started");

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        match events.next().await {
            Some(Event::Tick) => app.on_tick(),
            Some(Event::Key(key)) => app.handle_key(key),
            Some(Event::Error(message)) => warn!("Terminal event error: {}", message),
            None => break,
        }
    }

    info!("Steam items browser closed");
    Ok(())
}
