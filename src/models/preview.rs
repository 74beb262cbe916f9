//! Role binding for the mock-webpage preview.
//!
//! Each role of the preview layout draws its color from a fixed palette
//! index, with a fallback index used when the palette is shorter than the
//! primary index requires. Roles degrade individually; a short palette never
//! fails the preview as a whole.

use super::{RgbColor, TextTone};

/// A surface of the mock page layout bound to a palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewRole {
    /// Page header bar
    Header,
    /// Navigation link text
    NavLinks,
    /// First content card
    Card1,
    /// Second content card
    Card2,
    /// Primary call-to-action button
    PrimaryButton,
    /// Secondary button
    SecondaryButton,
    /// Page footer (mirrors the header color)
    Footer,
}

impl PreviewRole {
    /// All roles, in paint order. Assignments are independent, so the order
    /// only matters for display.
    pub const ALL: [Self; 7] = [
        Self::Header,
        Self::NavLinks,
        Self::Card1,
        Self::Card2,
        Self::PrimaryButton,
        Self::SecondaryButton,
        Self::Footer,
    ];

    /// The (primary, fallback) palette indices for this role.
    #[must_use]
    pub const fn binding(self) -> (usize, usize) {
        match self {
            Self::Header | Self::Footer => (0, 0),
            Self::NavLinks => (1, 0),
            Self::Card1 => (2, 0),
            Self::Card2 => (3, 1),
            Self::PrimaryButton => (4, 0),
            Self::SecondaryButton => (5, 1),
        }
    }

    /// Whether this role paints a background (and therefore needs a contrast
    /// text tone). `NavLinks` colors its link text instead.
    #[must_use]
    pub const fn paints_background(self) -> bool {
        !matches!(self, Self::NavLinks)
    }

    /// Resolve this role's color against a palette.
    ///
    /// Tries the primary index, then the fallback; `None` when both are out
    /// of range, in which case the role is skipped silently.
    #[must_use]
    pub fn resolve(self, colors: &[RgbColor]) -> Option<RgbColor> {
        let (primary, fallback) = self.binding();
        colors.get(primary).or_else(|| colors.get(fallback)).copied()
    }

    /// Resolve this role's background together with its contrast text tone.
    #[must_use]
    pub fn resolve_with_text(self, colors: &[RgbColor]) -> Option<(RgbColor, TextTone)> {
        self.resolve(colors).map(|color| (color, color.text_tone()))
    }
}
