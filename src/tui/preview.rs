//! Mock-webpage preview pane.
//!
//! Applies the current palette to a fixed page skeleton (header, nav links,
//! two cards, two buttons, footer) through the role binding in
//! [`crate::models::preview`]. Every surface that gets a background also gets
//! a contrast-resolved text color.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::{Palette, PreviewRole, RgbColor};
use crate::tui::Theme;

/// The preview pane widget.
pub struct PreviewPane;

impl PreviewPane {
    /// Render the mock page styled with `palette`.
    ///
    /// With an empty palette only the frame is drawn; each role resolves its
    /// color independently and is skipped when the palette cannot supply one.
    pub fn render(f: &mut Frame, area: Rect, palette: &Palette, theme: &Theme) {
        let frame_block = Block::default()
            .title(" Preview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));
        let inner = frame_block.inner(area);
        f.render_widget(frame_block, area);

        if palette.is_empty() || inner.height < 10 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(1), // Nav links
                Constraint::Min(5),    // Cards
                Constraint::Length(3), // Buttons
                Constraint::Length(2), // Footer
            ])
            .split(inner);

        let colors = &palette.colors;

        if let Some(color) = PreviewRole::Header.resolve(colors) {
            render_banner(f, chunks[0], color, "Aurora Studio", true);
        }
        if let Some(color) = PreviewRole::NavLinks.resolve(colors) {
            render_nav(f, chunks[1], color, theme);
        }
        render_cards(f, chunks[2], colors);
        render_buttons(f, chunks[3], colors);
        if let Some(color) = PreviewRole::Footer.resolve(colors) {
            render_banner(f, chunks[4], color, "© Aurora Studio - all colors reserved", false);
        }
    }
}

/// Full-width bar with centered text (header and footer).
fn render_banner(f: &mut Frame, area: Rect, color: RgbColor, text: &str, bold: bool) {
    let mut style = Style::default().fg(color.text_tone().to_ratatui_color());
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    let banner = Paragraph::new(Line::styled(text.to_string(), style))
        .alignment(Alignment::Center)
        .style(Style::default().bg(color.to_ratatui_color()));
    f.render_widget(banner, area);
}

/// Nav links color only their text, not a background.
fn render_nav(f: &mut Frame, area: Rect, color: RgbColor, theme: &Theme) {
    let link_style = Style::default()
        .fg(color.to_ratatui_color())
        .add_modifier(Modifier::UNDERLINED);
    let nav = Paragraph::new(Line::from(vec![
        Span::styled("Home", link_style),
        Span::raw("   "),
        Span::styled("Work", link_style),
        Span::raw("   "),
        Span::styled("About", link_style),
        Span::raw("   "),
        Span::styled("Contact", link_style),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().bg(theme.surface));
    f.render_widget(nav, area);
}

fn render_cards(f: &mut Frame, area: Rect, colors: &[RgbColor]) {
    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let cards = [
        (PreviewRole::Card1, "Design", "Palettes that carry a page."),
        (PreviewRole::Card2, "Build", "Six colors, seven surfaces."),
    ];
    for ((role, title, body), card_area) in cards.into_iter().zip(card_areas.iter()) {
        if let Some((color, tone)) = role.resolve_with_text(colors) {
            let text_color = tone.to_ratatui_color();
            let card = Paragraph::new(vec![
                Line::styled(
                    title.to_string(),
                    Style::default().fg(text_color).add_modifier(Modifier::BOLD),
                ),
                Line::raw(""),
                Line::styled(body.to_string(), Style::default().fg(text_color)),
            ])
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(color.to_ratatui_color()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(text_color)),
            );
            f.render_widget(card, *card_area);
        }
    }
}

fn render_buttons(f: &mut Frame, area: Rect, colors: &[RgbColor]) {
    let button_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
        ])
        .split(area);

    let buttons = [
        (PreviewRole::PrimaryButton, "Get Started"),
        (PreviewRole::SecondaryButton, "Learn More"),
    ];
    for ((role, caption), button_area) in buttons.into_iter().zip(button_areas.iter()) {
        if let Some((color, tone)) = role.resolve_with_text(colors) {
            let button = Paragraph::new(Line::styled(
                caption.to_string(),
                Style::default()
                    .fg(tone.to_ratatui_color())
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .style(Style::default().bg(color.to_ratatui_color()))
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(button, *button_area);
        }
    }
}
