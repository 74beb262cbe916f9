//! Keyboard input handlers mutating [`AppState`].
//!
//! Handlers return `Ok(true)` when the application should quit.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::constants::TILE_COUNT;
use crate::models::Palette;
use crate::tui::{
    ActiveComponent, AppState, Component, HelpOverlayEvent, ThemePickerEvent,
};

/// Route a key event to the active popup or the main surface.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // A lingering error is dismissed by the next keypress, which is then
    // handled normally.
    state.clear_error();

    if state.active_popup.is_some() {
        return handle_popup_input(state, key);
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Ok(true),
        KeyCode::Char('q') => Ok(true),
        KeyCode::Char('r' | ' ') => {
            generate_random(state);
            Ok(false)
        }
        KeyCode::Char(digit @ '1'..='9') => {
            select_mood(state, digit as usize - '1' as usize);
            Ok(false)
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.selected_tile = state.selected_tile.saturating_sub(1);
            Ok(false)
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let last = state.palette.len().saturating_sub(1);
            state.selected_tile = (state.selected_tile + 1).min(last);
            Ok(false)
        }
        KeyCode::Home => {
            state.selected_tile = 0;
            Ok(false)
        }
        KeyCode::End => {
            state.selected_tile = state.palette.len().saturating_sub(1);
            Ok(false)
        }
        KeyCode::Enter | KeyCode::Char('c' | 'y') => {
            copy_selected(state, Instant::now());
            Ok(false)
        }
        KeyCode::Char('p') => {
            toggle_preview(state);
            Ok(false)
        }
        KeyCode::Char('t') => {
            state.open_theme_picker();
            Ok(false)
        }
        KeyCode::Char('?') => {
            state.open_help_overlay();
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Events a popup can hand back to the main loop.
enum PopupEvent {
    Theme(ThemePickerEvent),
    Help(HelpOverlayEvent),
}

fn handle_popup_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let event = match state.active_component.as_mut() {
        Some(ActiveComponent::ThemePicker(picker)) => {
            picker.handle_input(key).map(PopupEvent::Theme)
        }
        Some(ActiveComponent::HelpOverlay(overlay)) => {
            overlay.handle_input(key).map(PopupEvent::Help)
        }
        None => None,
    };

    match event {
        Some(PopupEvent::Theme(ThemePickerEvent::Selected(mode))) => {
            state.close_component();
            state.set_status(format!("Theme: {}", mode.label()));
            // set_theme last so a failed save surfaces as an error
            state.set_theme(mode);
        }
        Some(PopupEvent::Theme(ThemePickerEvent::Cancelled)) => {
            state.close_component();
            state.set_status("Theme unchanged");
        }
        Some(PopupEvent::Help(HelpOverlayEvent::Closed)) => {
            state.close_component();
            state.set_status("Press ? for help");
        }
        None => {}
    }

    Ok(false)
}

/// Generate and apply a fresh random palette.
pub fn generate_random(state: &mut AppState) {
    state.apply_palette(Palette::random(TILE_COUNT));
    state.set_status("Generated a random palette");
}

/// Apply the mood preset at `index`, if it exists.
pub fn select_mood(state: &mut AppState, index: usize) {
    let Some(preset) = state.moods.preset_at(index) else {
        state.set_status(format!("No mood preset {}", index + 1));
        return;
    };
    let palette = Palette::from_mood(preset);
    let label = palette.label.clone();
    state.apply_palette(palette);
    state.set_status(format!("Mood: {label}"));
}

/// Toggle the webpage preview pane.
pub fn toggle_preview(state: &mut AppState) {
    state.preview_visible = !state.preview_visible;
    if state.preview_visible {
        state.set_status("Preview shown");
    } else {
        state.set_status("Preview hidden");
    }
}

/// Copy the selected tile's color to the clipboard.
///
/// On success the tile flashes "Copied!" until `now` plus the flash delay;
/// on failure the error lands in the status bar and the label is untouched.
/// Failures are not retried; the user re-copies if they want.
pub fn copy_selected(state: &mut AppState, now: Instant) {
    let Some(color) = state.palette.colors.get(state.selected_tile).copied() else {
        return;
    };

    let text = color.to_hex();
    match state.copy_sink.copy_text(&text) {
        Ok(()) => {
            state.copy_flash.arm(state.selected_tile, now);
            let success = state.theme.success;
            state.set_status_with_style(format!("Copied {text} to clipboard"), success);
        }
        Err(e) => state.set_error(format!("{e:#}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::constants::COPY_FLASH_MS;
    use crate::models::MoodLibrary;
    use crate::tui::clipboard::{CopySink, FailingClipboard, MemoryClipboard};
    use crate::tui::PopupType;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    /// Clipboard double with an inspectable shared buffer.
    #[derive(Debug, Clone, Default)]
    struct SharedClipboard(Rc<RefCell<Vec<String>>>);

    impl CopySink for SharedClipboard {
        fn copy_text(&mut self, text: &str) -> Result<()> {
            self.0.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn state_with(sink: Box<dyn CopySink>) -> AppState {
        let moods = MoodLibrary::load().unwrap();
        let palette = Palette::for_mood_key(&moods, "calm", TILE_COUNT);
        AppState::new(palette, moods, Config::new(), sink)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_random_key_replaces_palette() {
        let mut state = state_with(Box::new(MemoryClipboard::default()));
        state.selected_tile = 3;

        let quit = handle_key_event(&mut state, key(KeyCode::Char('r'))).unwrap();

        assert!(!quit);
        assert_eq!(state.palette.label, "Random");
        assert_eq!(state.palette.len(), TILE_COUNT);
        assert_eq!(state.selected_tile, 0);
    }

    #[test]
    fn test_mood_key_applies_preset() {
        let mut state = state_with(Box::new(MemoryClipboard::default()));
        handle_key_event(&mut state, key(KeyCode::Char('2'))).unwrap();

        assert_eq!(state.palette.label, "Energetic");
        let expected = state.moods.get("energetic").unwrap().colors.clone();
        assert_eq!(state.palette.colors, expected);
    }

    #[test]
    fn test_out_of_range_mood_keeps_palette() {
        let mut state = state_with(Box::new(MemoryClipboard::default()));
        let before = state.palette.clone();

        handle_key_event(&mut state, key(KeyCode::Char('9'))).unwrap();
        assert_eq!(state.palette, before);
    }

    #[test]
    fn test_tile_navigation_clamps() {
        let mut state = state_with(Box::new(MemoryClipboard::default()));

        handle_key_event(&mut state, key(KeyCode::Left)).unwrap();
        assert_eq!(state.selected_tile, 0);

        handle_key_event(&mut state, key(KeyCode::End)).unwrap();
        assert_eq!(state.selected_tile, TILE_COUNT - 1);

        handle_key_event(&mut state, key(KeyCode::Right)).unwrap();
        assert_eq!(state.selected_tile, TILE_COUNT - 1);
    }

    #[test]
    fn test_copy_writes_canonical_hex_and_arms_flash() {
        let buffer = Rc::new(RefCell::new(Vec::new()));
        let mut state = state_with(Box::new(SharedClipboard(buffer.clone())));
        state.selected_tile = 1;

        copy_selected(&mut state, Instant::now());

        assert_eq!(buffer.borrow().as_slice(), ["#bfdbfe"]);
        assert!(state.copy_flash.is_active(1));
        assert!(!state.copy_flash.is_active(0));
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_copy_failure_reports_error_without_flash() {
        let mut state = state_with(Box::new(FailingClipboard));

        copy_selected(&mut state, Instant::now());

        assert!(state.error_message.is_some());
        assert!(!state.copy_flash.any_active());
    }

    #[test]
    fn test_double_copy_settles_once() {
        let mut state = state_with(Box::new(MemoryClipboard::default()));
        let t0 = Instant::now();

        copy_selected(&mut state, t0);
        copy_selected(&mut state, t0 + Duration::from_millis(300));

        // After the first deadline the re-armed flash is still pending.
        state.copy_flash.sweep(t0 + Duration::from_millis(COPY_FLASH_MS));
        assert!(state.copy_flash.is_active(0));

        // After the second deadline it settles and stays settled.
        state
            .copy_flash
            .sweep(t0 + Duration::from_millis(300 + COPY_FLASH_MS));
        assert!(!state.copy_flash.is_active(0));
    }

    #[test]
    fn test_new_palette_clears_pending_flash() {
        let mut state = state_with(Box::new(MemoryClipboard::default()));
        copy_selected(&mut state, Instant::now());
        assert!(state.copy_flash.any_active());

        handle_key_event(&mut state, key(KeyCode::Char('r'))).unwrap();
        assert!(!state.copy_flash.any_active());
    }

    #[test]
    fn test_preview_toggle() {
        let mut state = state_with(Box::new(MemoryClipboard::default()));
        assert!(!state.preview_visible);

        handle_key_event(&mut state, key(KeyCode::Char('p'))).unwrap();
        assert!(state.preview_visible);

        handle_key_event(&mut state, key(KeyCode::Char('p'))).unwrap();
        assert!(!state.preview_visible);
    }

    #[test]
    fn test_theme_picker_opens_and_routes_input() {
        let mut state = state_with(Box::new(MemoryClipboard::default()));

        handle_key_event(&mut state, key(KeyCode::Char('t'))).unwrap();
        assert_eq!(state.active_popup, Some(PopupType::ThemePicker));

        // While the picker is open, main-surface keys are not handled.
        handle_key_event(&mut state, key(KeyCode::Char('p'))).unwrap();
        assert!(!state.preview_visible);

        handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
        assert_eq!(state.active_popup, None);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = state_with(Box::new(MemoryClipboard::default()));
        assert!(handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap());

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key_event(&mut state, ctrl_c).unwrap());
    }
}
