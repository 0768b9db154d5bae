//! Seam strategies: turn an arbitrary bitmap into a tileable one
//!
//! Each strategy is a pure function of the input bitmap and one optional
//! width. [`Strategy`] names them, validates widths and dispatches;
//! [`transform`] is the string-keyed entry point used by callers that only
//! know a strategy by name.

/// Lane cross-fades shared by the blending strategies
pub mod blend;
/// 2x2 mirror grid cropped around its center
pub mod mirror_grid;
/// Four-fold reflection of the top-left quadrant
pub mod quadrant;
/// Half-size roll with a cascading seam blend
pub mod roll_blend;
/// Half-size roll with a bounds-checked wide blend
pub mod roll_patch;
/// Wrap padding with linear border fades
pub mod wrap_blend;

use crate::io::configuration::{
    DEFAULT_PATCH_BLEND_WIDTH, DEFAULT_ROLL_BLEND_WIDTH, DEFAULT_WRAP_BORDER,
};
use crate::io::error::{Result, TileError};
use crate::raster::bitmap::{Bitmap, ColorMode};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The available tiling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    /// Reflect the top-left quadrant into the other three (RGBA)
    QuadrantMirror,
    /// Crop the center of a 2x2 mirror grid of the whole image (RGB)
    MirrorGrid,
    /// Fade the bottom and right borders into the top and left (RGB)
    WrapBlend,
    /// Roll by half the size and blend a band around the centered seams (RGB)
    RollBlend,
    /// Roll by half the size and blend a wide, bounds-checked band (RGB)
    RollPatch,
}

impl Strategy {
    /// Every strategy in declaration order
    pub const ALL: [Self; 5] = [
        Self::QuadrantMirror,
        Self::MirrorGrid,
        Self::WrapBlend,
        Self::RollBlend,
        Self::RollPatch,
    ];

    /// Stable kebab-case name, as accepted by [`transform`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::QuadrantMirror => "quadrant-mirror",
            Self::MirrorGrid => "mirror-grid",
            Self::WrapBlend => "wrap-blend",
            Self::RollBlend => "roll-blend",
            Self::RollPatch => "roll-patch",
        }
    }

    /// Width used when the caller leaves it unset, `None` for strategies without one
    pub const fn default_width(self) -> Option<usize> {
        match self {
            Self::QuadrantMirror | Self::MirrorGrid => None,
            Self::WrapBlend => Some(DEFAULT_WRAP_BORDER),
            Self::RollBlend => Some(DEFAULT_ROLL_BLEND_WIDTH),
            Self::RollPatch => Some(DEFAULT_PATCH_BLEND_WIDTH),
        }
    }

    /// Exclusive upper bound on the width for a `height x width` bitmap
    ///
    /// `None` when the strategy takes no width or accepts any positive one.
    pub fn width_limit(self, height: usize, width: usize) -> Option<usize> {
        match self {
            Self::QuadrantMirror | Self::MirrorGrid | Self::RollPatch => None,
            Self::WrapBlend => Some(wrap_blend::border_limit(height, width)),
            Self::RollBlend => Some(roll_blend::band_limit(height, width)),
        }
    }

    /// Channel layout of every bitmap this strategy returns
    pub const fn output_mode(self) -> ColorMode {
        match self {
            Self::QuadrantMirror => ColorMode::Rgba,
            Self::MirrorGrid | Self::WrapBlend | Self::RollBlend | Self::RollPatch => {
                ColorMode::Rgb
            }
        }
    }

    /// Run the strategy on `bitmap`
    ///
    /// The input is never modified; the result is a new bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::InvalidDimension`] when the effective width is
    /// zero or exceeds what the strategy can handle for this bitmap
    pub fn apply(self, bitmap: &Bitmap, params: &BlendParams) -> Result<Bitmap> {
        let (height, width, channels) = bitmap.dim();
        let blend_width = params.width_for(self);
        debug!(
            strategy = self.name(),
            height,
            width,
            channels,
            ?blend_width,
            "Applying seam strategy"
        );
        if blend_width.is_none() && params.width.is_some() {
            debug!(strategy = self.name(), "Strategy takes no width, ignoring it");
        }

        match (self, blend_width) {
            (Self::QuadrantMirror, _) => Ok(quadrant::quadrant_mirror(bitmap)),
            (Self::MirrorGrid, _) => Ok(mirror_grid::mirror_grid(bitmap)),
            (Self::WrapBlend, Some(border)) => wrap_blend::wrap_blend(bitmap, border),
            (Self::RollBlend, Some(band)) => roll_blend::roll_blend(bitmap, band),
            (Self::RollPatch, Some(band)) => roll_patch::roll_patch(bitmap, band),
            (Self::WrapBlend | Self::RollBlend | Self::RollPatch, None) => {
                Err(TileError::InvalidParameter {
                    parameter: "width",
                    value: String::from("none"),
                    reason: format!("{self} requires a blend width"),
                })
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = TileError;

    /// Case-insensitive; underscores are accepted in place of hyphens
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| TileError::UnknownStrategy {
                name: s.to_string(),
            })
    }
}

/// Per-call configuration shared by all strategies
///
/// Only the width is recognized. Mirror strategies ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlendParams {
    /// Border width (wrap blend) or band half-width (roll blends); `None` means default
    pub width: Option<usize>,
}

impl BlendParams {
    /// Parameters that use every strategy's defaults
    pub const fn new() -> Self {
        Self { width: None }
    }

    /// Parameters with an explicit width
    pub const fn with_width(width: usize) -> Self {
        Self { width: Some(width) }
    }

    /// Width `strategy` will actually use, `None` if it takes none
    pub fn width_for(&self, strategy: Strategy) -> Option<usize> {
        strategy
            .default_width()
            .map(|default| self.width.unwrap_or(default))
    }

    /// Clamp the width so `strategy` accepts it for `bitmap`
    ///
    /// The effective width (explicit or default) is lowered to the largest
    /// value below the strategy's limit. Widths that already fit, and
    /// strategies without a limit, are left unchanged. A bitmap too small
    /// for any width yields zero, which [`Strategy::apply`] then rejects.
    #[must_use]
    pub fn fitted(&self, strategy: Strategy, bitmap: &Bitmap) -> Self {
        let Some(requested) = self.width_for(strategy) else {
            return *self;
        };
        let width = strategy
            .width_limit(bitmap.height(), bitmap.width())
            .map_or(requested, |limit| requested.min(limit.saturating_sub(1)));
        Self { width: Some(width) }
    }
}

/// Apply the strategy called `strategy_name` to `bitmap`
///
/// # Errors
///
/// Returns an error if:
/// - `strategy_name` is not one of the names in [`Strategy::ALL`]
/// - The width is rejected by the strategy
pub fn transform(strategy_name: &str, bitmap: &Bitmap, params: &BlendParams) -> Result<Bitmap> {
    let strategy: Strategy = strategy_name.parse()?;
    strategy.apply(bitmap, params)
}
