//! Palette tile board: one colored tile per palette entry.
//!
//! Tiles render entirely from state each frame (full replace, no diffing).
//! A copied tile shows "Copied!" until its per-tile deadline passes.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

use crate::constants::COPY_FLASH_MS;
use crate::tui::AppState;

/// Per-tile "Copied!" deadlines.
///
/// Each copy arms an independent deadline for its tile; re-copying re-arms it
/// (the revert is self-overriding, so the label settles exactly once). Expiry
/// is checked against a caller-supplied instant, which keeps tests
/// deterministic without sleeping.
#[derive(Debug, Clone, Default)]
pub struct CopyFlash {
    deadlines: Vec<Option<Instant>>,
}

impl CopyFlash {
    /// Creates deadline slots for `len` tiles, all idle.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            deadlines: vec![None; len],
        }
    }

    /// Drops all pending deadlines and resizes to `len` tiles.
    ///
    /// Called when a new palette replaces the old one; a flash must never
    /// outlive the tile it confirmed.
    pub fn reset(&mut self, len: usize) {
        self.deadlines.clear();
        self.deadlines.resize(len, None);
    }

    /// Arms (or re-arms) the flash for one tile.
    pub fn arm(&mut self, index: usize, now: Instant) {
        if let Some(slot) = self.deadlines.get_mut(index) {
            *slot = Some(now + Duration::from_millis(COPY_FLASH_MS));
        }
    }

    /// Clears every deadline that has passed.
    pub fn sweep(&mut self, now: Instant) {
        for slot in &mut self.deadlines {
            if slot.is_some_and(|deadline| deadline <= now) {
                *slot = None;
            }
        }
    }

    /// Whether a tile is currently showing its "Copied!" label.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.deadlines.get(index).copied().flatten().is_some()
    }

    /// Whether any tile is flashing.
    #[must_use]
    pub fn any_active(&self) -> bool {
        self.deadlines.iter().any(Option::is_some)
    }
}

/// The tile board widget.
pub struct TileBoard;

impl TileBoard {
    /// Render the palette as a row of tiles.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let colors = &state.palette.colors;
        if colors.is_empty() || area.height < 3 {
            return;
        }

        let constraints: Vec<Constraint> = colors
            .iter()
            .map(|_| Constraint::Ratio(1, colors.len() as u32))
            .collect();
        let tile_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (index, color) in colors.iter().enumerate() {
            Self::render_tile(f, tile_areas[index], state, index, *color);
        }
    }

    fn render_tile(
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        index: usize,
        color: crate::models::RgbColor,
    ) {
        let theme = &state.theme;
        let selected = index == state.selected_tile;

        let border_style = if selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };

        let fill = color.to_ratatui_color();
        let text_color = color.text_tone().to_ratatui_color();

        let label = if state.copy_flash.is_active(index) {
            "Copied!".to_string()
        } else {
            color.to_hex_upper()
        };

        // Vertically center the label and mood tag inside the tile.
        let inner_height = area.height.saturating_sub(2);
        let pad = inner_height.saturating_sub(2) / 2;
        let mut lines = vec![Line::raw(""); pad as usize];
        lines.push(Line::styled(
            label,
            Style::default().fg(text_color).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            state.palette.label.clone(),
            Style::default().fg(text_color),
        ));

        let tile = Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().bg(fill))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        f.render_widget(tile, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_new_flash_is_idle() {
        let flash = CopyFlash::new(6);
        assert!(!flash.any_active());
        assert!(!flash.is_active(0));
    }

    #[test]
    fn test_arm_then_expire() {
        let now = t0();
        let mut flash = CopyFlash::new(6);

        flash.arm(2, now);
        assert!(flash.is_active(2));
        assert!(!flash.is_active(1));

        // Still pending just before the deadline.
        flash.sweep(now + Duration::from_millis(COPY_FLASH_MS - 1));
        assert!(flash.is_active(2));

        // Settles exactly once at the deadline.
        flash.sweep(now + Duration::from_millis(COPY_FLASH_MS));
        assert!(!flash.is_active(2));
        flash.sweep(now + Duration::from_millis(COPY_FLASH_MS * 2));
        assert!(!flash.any_active());
    }

    #[test]
    fn test_rearm_extends_deadline() {
        let now = t0();
        let mut flash = CopyFlash::new(6);

        flash.arm(0, now);
        let second_click = now + Duration::from_millis(500);
        flash.arm(0, second_click);

        // The first deadline alone would have expired here.
        flash.sweep(now + Duration::from_millis(COPY_FLASH_MS + 100));
        assert!(flash.is_active(0));

        // The re-armed deadline settles it for good.
        flash.sweep(second_click + Duration::from_millis(COPY_FLASH_MS));
        assert!(!flash.is_active(0));
    }

    #[test]
    fn test_independent_tiles() {
        let now = t0();
        let mut flash = CopyFlash::new(6);

        flash.arm(1, now);
        flash.arm(4, now + Duration::from_millis(400));

        flash.sweep(now + Duration::from_millis(COPY_FLASH_MS));
        assert!(!flash.is_active(1));
        assert!(flash.is_active(4));
    }

    #[test]
    fn test_reset_clears_pending_flashes() {
        let now = t0();
        let mut flash = CopyFlash::new(6);
        flash.arm(3, now);

        flash.reset(6);
        assert!(!flash.any_active());
    }

    #[test]
    fn test_arm_out_of_range_is_ignored() {
        let now = t0();
        let mut flash = CopyFlash::new(2);
        flash.arm(5, now);
        assert!(!flash.any_active());
    }
}
