//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

pub mod clipboard;
pub mod component;
pub mod handlers;
pub mod help_overlay;
pub mod preview;
pub mod status_bar;
pub mod theme;
pub mod theme_picker;
pub mod tiles;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::{Config, ThemeMode};
use crate::constants::APP_NAME;
use crate::models::{MoodLibrary, Palette};

// Re-export TUI components
pub use clipboard::{CopySink, SystemClipboard};
pub use component::Component;
pub use help_overlay::{HelpOverlay, HelpOverlayEvent};
pub use preview::PreviewPane;
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use theme_picker::{ThemePicker, ThemePickerEvent};
pub use tiles::{CopyFlash, TileBoard};

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Theme picker popup
    ThemePicker,
    /// Help overlay popup
    HelpOverlay,
}

/// Currently active popup component.
///
/// Only one component can be active at a time.
#[derive(Debug)]
pub enum ActiveComponent {
    /// Theme picker component
    ThemePicker(ThemePicker),
    /// Help overlay component
    HelpOverlay(HelpOverlay),
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Current palette (fully replaced on every generation)
    pub palette: Palette,
    /// Mood preset library, loaded once at startup
    pub moods: MoodLibrary,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Index of the selected tile
    pub selected_tile: usize,
    /// Whether the webpage preview pane is shown
    pub preview_visible: bool,
    /// Per-tile "Copied!" deadlines
    pub copy_flash: CopyFlash,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Currently active component (if any)
    pub active_component: Option<ActiveComponent>,
    /// Status bar message
    pub status_message: String,
    /// Optional color override for the status message
    pub status_color_override: Option<ratatui::style::Color>,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // System resources
    /// Application configuration
    pub config: Config,
    /// Clipboard sink (system clipboard in the app, a double in tests)
    pub copy_sink: Box<dyn CopySink>,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` from an initial palette, the mood library,
    /// loaded config, and a clipboard sink.
    #[must_use]
    pub fn new(
        palette: Palette,
        moods: MoodLibrary,
        config: Config,
        copy_sink: Box<dyn CopySink>,
    ) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let copy_flash = CopyFlash::new(palette.len());

        Self {
            palette,
            moods,
            theme,
            selected_tile: 0,
            preview_visible: false,
            copy_flash,
            active_popup: None,
            active_component: None,
            status_message: "Press ? for help".to_string(),
            status_color_override: None,
            error_message: None,
            config,
            copy_sink,
            should_quit: false,
        }
    }

    /// Replaces the current palette wholesale.
    ///
    /// Pending copy flashes are dropped and the selection returns to the
    /// first tile; the preview picks up the new colors on the next frame.
    pub fn apply_palette(&mut self, palette: Palette) {
        self.copy_flash.reset(palette.len());
        self.selected_tile = 0;
        self.palette = palette;
    }

    /// Applies a theme mode and persists it immediately.
    ///
    /// The in-memory theme always changes; a failed save is reported through
    /// the error channel without reverting the visible theme.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.config.ui.theme_mode = mode;
        self.theme = Theme::from_mode(mode);
        if let Err(e) = self.config.save() {
            self.set_error(format!("Failed to save theme preference: {e:#}"));
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
        self.status_color_override = None;
    }

    /// Set status message with custom foreground color
    pub fn set_status_with_style(
        &mut self,
        message: impl Into<String>,
        color: ratatui::style::Color,
    ) {
        self.status_message = message.into();
        self.error_message = None;
        self.status_color_override = Some(color);
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Open the theme picker component
    pub fn open_theme_picker(&mut self) {
        let picker = ThemePicker::new(self.config.ui.theme_mode);
        self.active_component = Some(ActiveComponent::ThemePicker(picker));
        self.active_popup = Some(PopupType::ThemePicker);
    }

    /// Open the help overlay component
    pub fn open_help_overlay(&mut self) {
        self.active_component = Some(ActiveComponent::HelpOverlay(HelpOverlay::new()));
        self.active_popup = Some(PopupType::HelpOverlay);
    }

    /// Close the currently active component
    pub fn close_component(&mut self) {
        self.active_component = None;
        self.active_popup = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto tracks the OS)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        // Revert any "Copied!" labels whose deadline has passed
        state.copy_flash.sweep(Instant::now());

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handlers::handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(8),    // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    // Render popup if active
    if let Some(component) = &state.active_component {
        match component {
            ActiveComponent::ThemePicker(picker) => picker.render(f, f.area(), &state.theme),
            ActiveComponent::HelpOverlay(overlay) => overlay.render(f, f.area(), &state.theme),
        }
    }
}

/// Render title bar with the palette label
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(" {} - {} palette", APP_NAME, state.palette.label);

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render tiles, plus the preview pane when visible
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    if state.preview_visible {
        let halves = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        TileBoard::render(f, halves[0], state);
        PreviewPane::render(f, halves[1], &state.palette, &state.theme);
    } else {
        TileBoard::render(f, area, state);
    }
}

/// Helper to create a centered rect using a percentage of the available area
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
