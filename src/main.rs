//! Swatchbook - terminal color palette workspace
//!
//! Generates random or mood-based 6-color palettes, previews them on a mock
//! webpage layout, and copies colors to the system clipboard.

use anyhow::{Context, Result};
use clap::Parser;

use swatchbook::config::{Config, ThemeMode};
use swatchbook::constants::{APP_NAME, TILE_COUNT};
use swatchbook::models::{MoodLibrary, Palette};
use swatchbook::tui::{self, AppState, SystemClipboard};

/// Swatchbook - terminal color palette workspace
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Start with a mood preset (calm, energetic, soft). Unknown moods fall
    /// back to a random palette.
    #[arg(short, long, value_name = "MOOD")]
    mood: Option<String>,

    /// Use this theme for the session and persist it (auto, dark, light)
    #[arg(short, long, value_name = "THEME")]
    theme: Option<ThemeMode>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load();
    let moods = MoodLibrary::load().context("Failed to load mood presets")?;

    let palette = match cli.mood.as_deref() {
        Some(key) => Palette::for_mood_key(&moods, key, TILE_COUNT),
        None => Palette::random(TILE_COUNT),
    };

    if let Some(mode) = cli.theme {
        config.ui.theme_mode = mode;
        if let Err(e) = config.save() {
            eprintln!("{APP_NAME}: could not save theme preference: {e:#}");
        }
    }

    let mut state = AppState::new(palette, moods, config, Box::new(SystemClipboard));
    if state.config.ui.show_help_on_startup {
        state.open_help_overlay();
    }

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;

    result
}
