//! Curated mood presets for palette generation.
//!
//! Each mood maps a short key ("calm", "energetic", "soft") to a fixed
//! sequence of six colors. The preset table is embedded JSON data, loaded
//! once at startup and immutable afterwards.

use anyhow::{Context, Result};
use serde::Deserialize;

use super::RgbColor;

/// Raw file shape of the embedded mood data.
#[derive(Debug, Deserialize)]
struct MoodFile {
    moods: Vec<MoodEntry>,
}

#[derive(Debug, Deserialize)]
struct MoodEntry {
    key: String,
    colors: Vec<String>,
}

/// A single named preset with its fixed color sequence.
#[derive(Debug, Clone)]
pub struct MoodPreset {
    /// Lookup key, lowercase (e.g. "calm").
    pub key: String,
    /// The fixed colors, in display order.
    pub colors: Vec<RgbColor>,
}

impl MoodPreset {
    /// Display label: the key with only its first character capitalized.
    ///
    /// An empty key has no defined capitalization and falls back to "Random".
    #[must_use]
    pub fn label(&self) -> String {
        let mut chars = self.key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => "Random".to_string(),
        }
    }
}

/// The complete set of mood presets.
#[derive(Debug, Clone)]
pub struct MoodLibrary {
    /// Presets in menu order.
    pub presets: Vec<MoodPreset>,
}

impl MoodLibrary {
    /// Load the mood presets from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed or a preset color
    /// is not valid hex.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("../data/moods.json");
        let file: MoodFile = serde_json::from_str(json_data).context("Failed to parse mood data")?;

        let mut presets = Vec::with_capacity(file.moods.len());
        for entry in file.moods {
            let colors = entry
                .colors
                .iter()
                .map(|hex| RgbColor::from_hex(hex))
                .collect::<Result<Vec<_>>>()
                .context(format!("Invalid color in mood '{}'", entry.key))?;
            presets.push(MoodPreset {
                key: entry.key,
                colors,
            });
        }

        Ok(Self { presets })
    }

    /// Look up a preset by its key.
    ///
    /// Unknown keys return `None`; callers fall back to a random palette.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MoodPreset> {
        self.presets.iter().find(|preset| preset.key == key)
    }

    /// Get a preset by menu position.
    #[must_use]
    pub fn preset_at(&self, index: usize) -> Option<&MoodPreset> {
        self.presets.get(index)
    }

    /// Number of presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the library holds no presets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for MoodLibrary {
    fn default() -> Self {
        Self::load().unwrap_or_else(|_| Self {
            presets: Vec::new(),
        })
    }
}
