//! Data models for palettes, moods, colors, and the preview role mapping.

pub mod color;
pub mod mood;
pub mod palette;
pub mod preview;

pub use color::{contrast_text_color, RgbColor, TextTone};
pub use mood::{MoodLibrary, MoodPreset};
pub use palette::Palette;
pub use preview::PreviewRole;
