use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    SteamItems,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[Page::Home, Page::SteamItems]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::SteamItems => "Steam Items",
        }
    }

    pub fn next(&self) -> Page {
        let pages = Self::all();
        let current_index = pages.iter().position(|p| p == self).unwrap_or(0);
        pages[(current_index + 1) % pages.len()]
    }

    pub fn previous(&self) -> Page {
        let pages = Self::all();
        let current_index = pages.iter().position(|p| p == self).unwrap_or(0);
        let prev_index = if current_index == 0 {
            pages.len() - 1
        } else {
            current_index - 1
        };
        pages[prev_index]
    }
}

pub struct Navigation {
    pub current_page: Page,
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            current_page: Page::SteamItems,
        }
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = Page::all().iter().map(|page| Line::from(page.title())).collect();

        let current_index = Page::all()
            .iter()
            .position(|p| p == &self.current_page)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title("Navigation"))
            .style(Style::default().fg(Color::White))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .select(current_index);

        frame.render_widget(tabs, area);
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_cycle_in_both_directions() {
        assert_eq!(Page::Home.next(), Page::SteamItems);
        assert_eq!(Page::SteamItems.next(), Page::Home);
        assert_eq!(Page::Home.previous(), Page::SteamItems);
        assert_eq!(Page::SteamItems.previous(), Page::Home);
    }

    #[test]
    fn navigation_starts_on_the_items_page() {
        let mut nav = Navigation::new();
        assert_eq!(nav.current_page, Page::SteamItems);

        nav.next_page();
        assert_eq!(nav.current_page, Page::Home);
        nav.previous_page();
        assert_eq!(nav.current_page, Page::SteamItems);
    }
}
