//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: error or status first, key hints below.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut content_lines: Vec<Line> = Vec::new();

        if let Some(error) = &state.error_message {
            content_lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ]));
        } else if !state.status_message.is_empty() {
            let line = if let Some(color) = state.status_color_override {
                Line::styled(state.status_message.as_str(), Style::default().fg(color))
            } else {
                Line::raw(state.status_message.as_str())
            };
            content_lines.push(line);
        } else {
            content_lines.push(Line::styled(
                format!("{} palette", state.palette.label),
                Style::default().fg(theme.text_muted),
            ));
        }

        content_lines.push(Self::hints_line(state, theme));

        let status = Paragraph::new(content_lines)
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(status, area);
    }

    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let key_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(theme.text_muted);

        let preview_hint = if state.preview_visible {
            " hide preview   "
        } else {
            " show preview   "
        };

        Line::from(vec![
            Span::styled("r", key_style),
            Span::styled(" random   ", label_style),
            Span::styled("1-3", key_style),
            Span::styled(" mood   ", label_style),
            Span::styled("←/→", key_style),
            Span::styled(" select   ", label_style),
            Span::styled("Enter", key_style),
            Span::styled(" copy   ", label_style),
            Span::styled("p", key_style),
            Span::styled(preview_hint, label_style),
            Span::styled("t", key_style),
            Span::styled(" theme   ", label_style),
            Span::styled("?", key_style),
            Span::styled(" help   ", label_style),
            Span::styled("q", key_style),
            Span::styled(" quit", label_style),
        ])
    }
}
