use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::market::view::{SortDirection, SortField};
use crate::tui::app::{App, LoadState};
use crate::tui::navigation::Page;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Top-level render: navigation tabs, the current page, key hints. Reads
/// app state and derived rows only; no state changes happen in here.
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation tabs
            Constraint::Min(10),   // Page content
            Constraint::Length(3), // Key hints
        ])
        .split(frame.area());

    app.navigation.render(frame, chunks[0]);

    match app.navigation.current_page {
        Page::Home => render_home(frame, chunks[1]),
        Page::SteamItems => render_items(frame, chunks[1], app),
    }

    render_hints(frame, chunks[2], app);
}

fn render_home(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "steamlens",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Steam account listings from the LZT Market API."),
        Line::from("Press Tab to open the Steam Items page."),
    ];

    let home = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Home"));
    frame.render_widget(home, area);
}

fn render_items(frame: &mut Frame, area: Rect, app: &mut App) {
    match app.load_state {
        LoadState::Loading => render_loading(frame, area, app.tick_count),
        LoadState::Failed(ref message) => render_error(frame, area, message),
        LoadState::Ready(_) => render_table(frame, area, app),
    }
}

fn render_loading(frame: &mut Frame, area: Rect, tick_count: usize) {
    let spinner = SPINNER_FRAMES[tick_count % SPINNER_FRAMES.len()];
    let loading = Paragraph::new(format!("{} Loading Steam items...", spinner))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Steam Items"));
    frame.render_widget(loading, area);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let alert = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title("Error"),
        );
    frame.render_widget(alert, area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter input
            Constraint::Min(5),    // Table
        ])
        .split(area);

    render_filter(frame, chunks[0], app);

    let rows_data = app.derived_rows();
    let total = match &app.load_state {
        LoadState::Ready(listings) => listings.len(),
        _ => 0,
    };

    let header_cells: Vec<Cell> = SortField::all()
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let mut label = field.title().to_string();
            if app.sort.field == Some(*field) {
                label.push_str(match app.sort.direction {
                    SortDirection::Ascending => " ▲",
                    SortDirection::Descending => " ▼",
                });
            }
            let mut style = Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
            if idx == app.active_column {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Cell::from(label).style(style)
        })
        .collect();
    let header = Row::new(header_cells);

    let rows: Vec<Row> = rows_data
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.url.clone()),
                Cell::from(row.title.clone()),
                Cell::from(row.price.clone()),
                Cell::from(row.origin.clone()),
                Cell::from(row.country.clone()),
                Cell::from(row.published.clone()),
                Cell::from(row.last_activity.clone()),
                Cell::from(row.guarantee.clone()),
                Cell::from(row.hours.clone()),
            ])
            .style(Style::default().fg(Color::White))
        })
        .collect();

    let table = Table::new(
        rows,
        &[
            Constraint::Length(26), // Link
            Constraint::Min(20),    // Title
            Constraint::Length(9),  // Price
            Constraint::Length(10), // Origin
            Constraint::Length(8),  // Country
            Constraint::Length(13), // Published Date
            Constraint::Length(13), // Last Activity
            Constraint::Length(10), // Guarantee
            Constraint::Length(9),  // Hours
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(format!(
        "Steam Items ({} of {})",
        rows_data.len(),
        total
    )))
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("► ");

    frame.render_stateful_widget(table, chunks[1], &mut app.table_state);
}

fn render_filter(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if app.filter_mode {
        (
            format!("Filter: {}_", app.filter),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else if !app.filter.is_empty() {
        (
            format!("Filter: {}", app.filter),
            Style::default().fg(Color::White),
        )
    } else {
        (
            "Filter: (press / to type)".to_string(),
            Style::default().fg(Color::Gray),
        )
    };

    let filter = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Filter items"));
    frame.render_widget(filter, area);
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.filter_mode {
        "Type to filter, Enter to confirm, Esc to clear"
    } else {
        "Tab: Switch page  ←/→: Column  Enter/s: Sort  /: Filter  ↑/↓: Rows  r: Refresh  q: Quit"
    };

    let hints_widget = Paragraph::new(hints)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(hints_widget, area);
}
