//! RGB color handling with hex parsing, generation, and contrast resolution.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use rand::Rng;
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// The canonical string form is lowercase `#rrggbb`; tiles display the
/// uppercase variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchbook::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#ff0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to its canonical hex form "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchbook::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to the uppercase hex form "#RRGGBB" shown on tiles.
    #[must_use]
    pub fn to_hex_upper(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Draws a uniformly random color.
    ///
    /// Samples one integer in `[0, 0xFFFFFF]` and splits it into channels, so
    /// every 24-bit color is equally likely. The general-purpose RNG is fine
    /// here; output is cosmetic.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let n: u32 = rng.random_range(0..=0x00FF_FFFF);
        Self::new((n >> 16) as u8, (n >> 8) as u8, n as u8)
    }

    /// Perceptual luminance in [0.0, 1.0].
    ///
    /// Uses the Rec. 601 weights `(0.299 R + 0.587 G + 0.114 B) / 255`. This
    /// is a readability heuristic, not a WCAG relative-luminance computation.
    #[must_use]
    pub fn luminance(&self) -> f32 {
        (0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b)) / 255.0
    }

    /// Picks the text tone that stays readable on this background color.
    #[must_use]
    pub fn text_tone(&self) -> TextTone {
        // Strictly greater: a luminance of exactly 0.5 keeps light text.
        if self.luminance() > 0.5 {
            TextTone::Dark
        } else {
            TextTone::Light
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

/// Text tone overlaid on a colored surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    /// Near-black text for light backgrounds
    Dark,
    /// Near-white text for dark backgrounds
    Light,
}

impl TextTone {
    /// The terminal color used to render this tone.
    #[must_use]
    pub const fn to_ratatui_color(self) -> ratatui::style::Color {
        match self {
            Self::Dark => ratatui::style::Color::Rgb(31, 41, 55),
            Self::Light => ratatui::style::Color::Rgb(249, 250, 251),
        }
    }
}

/// Resolves the text tone for a background given in hex string form.
///
/// Degrades gracefully: a missing, empty, or unparseable color yields
/// [`TextTone::Dark`] rather than an error. Pure and deterministic.
#[must_use]
pub fn contrast_text_color(hex: Option<&str>) -> TextTone {
    match hex {
        Some(value) => RgbColor::from_hex(value).map_or(TextTone::Dark, |c| c.text_tone()),
        None => TextTone::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_canonical_hex(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..]
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    }

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00ff00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("  #0000ff  ").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#fff").is_err());
        assert!(RgbColor::from_hex("#fffffff").is_err());
        assert!(RgbColor::from_hex("gggggg").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        let color = RgbColor::new(255, 10, 0);
        assert_eq!(color.to_hex(), "#ff0a00");
        assert_eq!(color.to_hex_upper(), "#FF0A00");
        assert_eq!(color.to_string(), "#ff0a00");
    }

    #[test]
    fn test_roundtrip() {
        let original = RgbColor::new(123, 45, 67);
        let parsed = RgbColor::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_random_colors_are_canonical() {
        let mut rng = rand::rng();
        for _ in 0..64 {
            let color = RgbColor::random(&mut rng);
            assert!(is_canonical_hex(&color.to_hex()), "bad hex: {color}");
        }
    }

    #[test]
    fn test_luminance_extremes() {
        assert!(RgbColor::new(0, 0, 0).luminance() < 0.001);
        assert!(RgbColor::new(255, 255, 255).luminance() > 0.999);
    }

    #[test]
    fn test_text_tone_on_white_and_black() {
        assert_eq!(RgbColor::from_hex("#ffffff").unwrap().text_tone(), TextTone::Dark);
        assert_eq!(RgbColor::from_hex("#000000").unwrap().text_tone(), TextTone::Light);
    }

    #[test]
    fn test_text_tone_boundary_direction() {
        // 128/255 ~= 0.502 is just over the threshold, 127/255 ~= 0.498 just under.
        // Exactly 0.5 is not greater than 0.5, so mid-gray below resolves light.
        assert_eq!(RgbColor::from_hex("#808080").unwrap().text_tone(), TextTone::Dark);
        assert_eq!(RgbColor::from_hex("#7f7f7f").unwrap().text_tone(), TextTone::Light);
    }

    #[test]
    fn test_contrast_text_color_degrades_to_dark() {
        assert_eq!(contrast_text_color(None), TextTone::Dark);
        assert_eq!(contrast_text_color(Some("")), TextTone::Dark);
        assert_eq!(contrast_text_color(Some("not-a-color")), TextTone::Dark);
        assert_eq!(contrast_text_color(Some("#ffffff")), TextTone::Dark);
        assert_eq!(contrast_text_color(Some("#000000")), TextTone::Light);
    }
}
