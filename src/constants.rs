//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Swatchbook";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "swatchbook";

/// Number of tiles in a generated palette.
pub const TILE_COUNT: usize = 6;

/// How long a tile shows "Copied!" before reverting to its hex label.
pub const COPY_FLASH_MS: u64 = 800;
