//! Help overlay listing all keybindings.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::component::Component;
use crate::tui::{centered_rect, Theme};

/// Events emitted by the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpOverlayEvent {
    /// Overlay dismissed
    Closed,
}

/// Static help overlay component.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpOverlay;

impl HelpOverlay {
    /// Creates the overlay.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn entries() -> [(&'static str, &'static str); 10] {
        [
            ("r / Space", "Generate a random palette"),
            ("1 / 2 / 3", "Apply a mood preset (calm, energetic, soft)"),
            ("← / → or h / l", "Select a tile"),
            ("Home / End", "Jump to first / last tile"),
            ("Enter / c / y", "Copy the selected color"),
            ("p", "Toggle the webpage preview"),
            ("t", "Open the theme picker"),
            ("?", "Toggle this help"),
            ("Esc", "Close a popup"),
            ("q", "Quit"),
        ]
    }
}

impl Component for HelpOverlay {
    type Event = HelpOverlayEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::Enter => {
                Some(HelpOverlayEvent::Closed)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, _area: Rect, theme: &Theme) {
        let area = centered_rect(60, 60, f.area());

        f.render_widget(Clear, area);
        let background = Block::default().style(Style::default().bg(theme.background));
        f.render_widget(background, area);

        let mut lines = vec![Line::raw("")];
        for (keys, action) in Self::entries() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{keys:<16}"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(action, Style::default().fg(theme.text)),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "  Press Esc to close",
            Style::default().fg(theme.text_muted),
        ));

        let help = Paragraph::new(lines).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(help, area);
    }
}
