//! Strategy defaults and runtime configuration constants

// Blend widths applied when the caller leaves the width unset
/// Default border width for the wrap-pad blend
pub const DEFAULT_WRAP_BORDER: usize = 32;
/// Default band half-width for the center-roll linear blend
pub const DEFAULT_ROLL_BLEND_WIDTH: usize = 20;
/// Default band half-width for the center-roll patch blend
pub const DEFAULT_PATCH_BLEND_WIDTH: usize = 50;

/// Strategy used when none is given on the command line
pub const DEFAULT_STRATEGY_NAME: &str = "quadrant-mirror";

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_seamless";
/// Suffix added to 2x2 preview filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
/// Output files are always encoded as PNG
pub const OUTPUT_EXTENSION: &str = "png";
/// Input file extensions picked up from a directory (lowercase)
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Repetitions per axis in a tiled preview
pub const PREVIEW_REPEAT: usize = 2;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
