//! The palette value: an ordered set of colors shown together.

use super::{MoodLibrary, MoodPreset, RgbColor};

/// Label used when a palette was not produced by a mood preset.
pub const RANDOM_LABEL: &str = "Random";

/// An ordered sequence of colors plus a display label.
///
/// Generated palettes fully replace their predecessor; no history is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Colors in tile order.
    pub colors: Vec<RgbColor>,
    /// Display label ("Random" or a capitalized mood name).
    pub label: String,
}

impl Palette {
    /// An empty palette with no colors (renders nothing, previews nothing).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            colors: Vec::new(),
            label: RANDOM_LABEL.to_string(),
        }
    }

    /// Generates `count` independent random colors.
    ///
    /// Duplicates are permitted and not deduplicated.
    #[must_use]
    pub fn random(count: usize) -> Self {
        let mut rng = rand::rng();
        let colors = (0..count).map(|_| RgbColor::random(&mut rng)).collect();
        Self {
            colors,
            label: RANDOM_LABEL.to_string(),
        }
    }

    /// Builds a palette from a mood preset's fixed colors.
    #[must_use]
    pub fn from_mood(preset: &MoodPreset) -> Self {
        Self {
            colors: preset.colors.clone(),
            label: preset.label(),
        }
    }

    /// Resolves a mood key to a palette.
    ///
    /// An unrecognized (or empty) key falls back to a freshly generated random
    /// palette of `count` colors; this is never an error.
    #[must_use]
    pub fn for_mood_key(library: &MoodLibrary, key: &str, count: usize) -> Self {
        library
            .get(key)
            .map_or_else(|| Self::random(count), Self::from_mood)
    }

    /// Number of colors in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette holds no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TILE_COUNT;

    #[test]
    fn test_random_palette_count() {
        assert_eq!(Palette::random(0).len(), 0);
        assert_eq!(Palette::random(1).len(), 1);
        assert_eq!(Palette::random(TILE_COUNT).len(), TILE_COUNT);
    }

    #[test]
    fn test_random_palette_label() {
        let palette = Palette::random(TILE_COUNT);
        assert_eq!(palette.label, "Random");
    }

    #[test]
    fn test_mood_palette_uses_preset_colors() {
        let library = MoodLibrary::load().unwrap();
        let palette = Palette::for_mood_key(&library, "calm", TILE_COUNT);

        assert_eq!(palette.label, "Calm");
        assert_eq!(palette.colors, library.get("calm").unwrap().colors);
    }

    #[test]
    fn test_unknown_mood_falls_back_to_random() {
        let library = MoodLibrary::load().unwrap();
        let palette = Palette::for_mood_key(&library, "xyz", TILE_COUNT);

        assert_eq!(palette.label, "Random");
        assert_eq!(palette.len(), TILE_COUNT);
        // Vanishingly unlikely to equal a fixed preset; check shape instead.
        for color in &palette.colors {
            let hex = color.to_hex();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
        }
    }

    #[test]
    fn test_empty_mood_key_falls_back_to_random() {
        let library = MoodLibrary::load().unwrap();
        let palette = Palette::for_mood_key(&library, "", TILE_COUNT);
        assert_eq!(palette.label, "Random");
        assert_eq!(palette.len(), TILE_COUNT);
    }

    #[test]
    fn test_empty_palette() {
        let palette = Palette::empty();
        assert!(palette.is_empty());
        assert_eq!(palette.len(), 0);
    }
}
