//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard};
use swatchbook::config::{Config, CONFIG_DIR_ENV};
use swatchbook::constants::TILE_COUNT;
use swatchbook::models::{MoodLibrary, Palette};
use swatchbook::tui::clipboard::{CopySink, MemoryClipboard};
use swatchbook::tui::AppState;
use tempfile::TempDir;

// Mutex to ensure tests that redirect the config directory don't run in
// parallel (the override is process-wide).
static CONFIG_TEST_LOCK: Mutex<()> = Mutex::new(());

/// Redirects the config directory to a temp dir for the guard's lifetime.
pub struct ConfigDirGuard {
    _lock: MutexGuard<'static, ()>,
    temp: TempDir,
}

impl ConfigDirGuard {
    /// Acquire the lock and point `SWATCHBOOK_CONFIG_DIR` at a fresh temp dir.
    pub fn new() -> Self {
        let lock = CONFIG_TEST_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let temp = TempDir::new().expect("Failed to create temp config dir");
        std::env::set_var(CONFIG_DIR_ENV, temp.path());
        Self { _lock: lock, temp }
    }

    /// Path of the isolated config directory.
    pub fn path(&self) -> &std::path::Path {
        self.temp.path()
    }
}

impl Drop for ConfigDirGuard {
    fn drop(&mut self) {
        std::env::remove_var(CONFIG_DIR_ENV);
    }
}

/// Clipboard double with an inspectable shared buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedClipboard(pub Rc<RefCell<Vec<String>>>);

impl CopySink for SharedClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        self.0.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Builds an `AppState` seeded with the calm preset and a memory clipboard.
pub fn test_state() -> AppState {
    let moods = MoodLibrary::load().expect("Failed to load moods");
    let palette = Palette::for_mood_key(&moods, "calm", TILE_COUNT);
    AppState::new(
        palette,
        moods,
        Config::new(),
        Box::new(MemoryClipboard::default()),
    )
}

/// Builds an `AppState` whose clipboard writes land in `buffer`.
pub fn test_state_with_clipboard(buffer: Rc<RefCell<Vec<String>>>) -> AppState {
    let moods = MoodLibrary::load().expect("Failed to load moods");
    let palette = Palette::for_mood_key(&moods, "calm", TILE_COUNT);
    AppState::new(
        palette,
        moods,
        Config::new(),
        Box::new(SharedClipboard(buffer)),
    )
}

/// Synthetic key press with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
