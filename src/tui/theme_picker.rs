//! Theme picker dialog for switching the UI theme.
//!
//! Lists every theme mode with exactly one entry marked active (the mode
//! currently persisted in config). Selecting an entry applies and persists
//! it; cancelling leaves the active mode untouched.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::ThemeMode;
use crate::tui::component::Component;
use crate::tui::{centered_rect, Theme};

/// Events emitted by the theme picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePickerEvent {
    /// User picked a theme mode
    Selected(ThemeMode),
    /// User cancelled without changing the theme
    Cancelled,
}

/// Theme picker component.
#[derive(Debug, Clone)]
pub struct ThemePicker {
    /// Cursor position in the mode list
    selected: usize,
    /// The mode that is currently active (and persisted)
    active: ThemeMode,
}

impl ThemePicker {
    /// Creates a picker with the cursor on the active mode.
    #[must_use]
    pub fn new(active: ThemeMode) -> Self {
        let selected = ThemeMode::ALL
            .iter()
            .position(|mode| *mode == active)
            .unwrap_or(0);
        Self { selected, active }
    }

    /// The mode under the cursor.
    #[must_use]
    pub fn highlighted(&self) -> ThemeMode {
        ThemeMode::ALL[self.selected]
    }

    /// The currently active (persisted) mode.
    #[must_use]
    pub const fn active(&self) -> ThemeMode {
        self.active
    }

    fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = ThemeMode::ALL.len() - 1;
        }
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % ThemeMode::ALL.len();
    }
}

impl Component for ThemePicker {
    type Event = ThemePickerEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Enter => Some(ThemePickerEvent::Selected(self.highlighted())),
            KeyCode::Esc | KeyCode::Char('q') => Some(ThemePickerEvent::Cancelled),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, _area: Rect, theme: &Theme) {
        let area = centered_rect(40, 40, f.area());

        // Clear the background area first
        f.render_widget(Clear, area);
        let background = Block::default().style(Style::default().bg(theme.background));
        f.render_widget(background, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Min(3),    // Mode list
                Constraint::Length(2), // Help text
            ])
            .split(area);

        let title = Paragraph::new(" Select Theme ")
            .style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(title, chunks[0]);

        let mut lines = Vec::with_capacity(ThemeMode::ALL.len());
        for (index, mode) in ThemeMode::ALL.iter().enumerate() {
            let marker = if *mode == self.active { "● " } else { "○ " };
            let marker_color = if *mode == self.active {
                theme.active
            } else {
                theme.inactive
            };

            let mut label_style = Style::default().fg(theme.text);
            let mut line_style = Style::default();
            if index == self.selected {
                line_style = line_style.bg(theme.highlight_bg);
                label_style = label_style.add_modifier(Modifier::BOLD);
            }

            lines.push(
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(marker, Style::default().fg(marker_color)),
                    Span::styled(mode.label(), label_style),
                ])
                .style(line_style),
            );
        }
        f.render_widget(Paragraph::new(lines), chunks[1]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("↑/↓", Style::default().fg(theme.accent)),
            Span::raw(" move  "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" apply  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" cancel"),
        ]))
        .style(Style::default().fg(theme.text_muted))
        .block(Block::default().borders(Borders::TOP));
        f.render_widget(help, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_starts_on_active_mode() {
        let picker = ThemePicker::new(ThemeMode::Light);
        assert_eq!(picker.highlighted(), ThemeMode::Light);
        assert_eq!(picker.active(), ThemeMode::Light);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut picker = ThemePicker::new(ThemeMode::Auto);

        picker.handle_input(key(KeyCode::Up));
        assert_eq!(picker.highlighted(), ThemeMode::Light);

        picker.handle_input(key(KeyCode::Down));
        picker.handle_input(key(KeyCode::Down));
        assert_eq!(picker.highlighted(), ThemeMode::Dark);
    }

    #[test]
    fn test_enter_emits_selected() {
        let mut picker = ThemePicker::new(ThemeMode::Auto);
        picker.handle_input(key(KeyCode::Down));

        let event = picker.handle_input(key(KeyCode::Enter));
        assert_eq!(event, Some(ThemePickerEvent::Selected(ThemeMode::Dark)));
    }

    #[test]
    fn test_esc_emits_cancelled() {
        let mut picker = ThemePicker::new(ThemeMode::Dark);
        let event = picker.handle_input(key(KeyCode::Esc));
        assert_eq!(event, Some(ThemePickerEvent::Cancelled));
    }

    #[test]
    fn test_exactly_one_active_entry() {
        let picker = ThemePicker::new(ThemeMode::Dark);
        let active_count = ThemeMode::ALL
            .iter()
            .filter(|mode| **mode == picker.active())
            .count();
        assert_eq!(active_count, 1);
    }
}
