use crate::constants::{ARROW_HEADROOM, DEFAULT_DPI, FIGURE_SIZE_IN, RADIAL_MAX};
use crate::math::Scalar;

use palette::Srgb;

use super::colors::TAB10;
use super::RenderError;

/// Figure settings for a phasor diagram.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Edge length of the square figure in inches.
    pub size_in: Scalar,
    /// Raster resolution in dots per inch.
    pub dpi: u32,
    /// Fraction of the radial axis reached by the longest arrow.
    pub headroom: Scalar,
    /// Radial axis limit.
    pub radial_max: Scalar,
    /// Number of concentric grid rings.
    pub grid_rings: usize,
    /// Arrow colors, cycled in draw order.
    pub palette: Vec<Srgb<u8>>,
    /// CSS font-family list used for all text.
    pub font_family: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size_in: FIGURE_SIZE_IN,
            dpi: DEFAULT_DPI,
            headroom: ARROW_HEADROOM,
            radial_max: RADIAL_MAX,
            grid_rings: 5,
            palette: TAB10.to_vec(),
            font_family: String::from("DejaVu Sans, Arial, Helvetica, sans-serif"),
        }
    }
}

impl RenderConfig {
    /// Overrides the figure size in inches.
    #[must_use]
    pub fn with_size_in(mut self, size_in: Scalar) -> Self {
        self.size_in = size_in;
        self
    }

    /// Overrides the resolution.
    #[must_use]
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Overrides the arrow color palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Srgb<u8>>) -> Self {
        self.palette = palette;
        self
    }

    /// Overrides the font family list.
    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    /// Canvas edge length in pixels.
    #[must_use]
    pub fn pixel_size(&self) -> u32 {
        (self.size_in * Scalar::from(self.dpi)).round() as u32
    }

    /// Converts typographic points to pixels at this resolution.
    #[must_use]
    pub fn pt(&self, points: Scalar) -> Scalar {
        points * Scalar::from(self.dpi) / 72.0
    }

    pub(crate) fn validate(&self) -> Result<(), RenderError> {
        if !(self.size_in.is_finite() && self.size_in > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "figure size must be positive, got {}",
                self.size_in
            )));
        }
        if self.dpi == 0 {
            return Err(RenderError::InvalidConfig("dpi must be non-zero".into()));
        }
        if self.pixel_size() == 0 {
            return Err(RenderError::InvalidConfig("figure rounds to zero pixels".into()));
        }
        if !(self.radial_max.is_finite() && self.radial_max > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "radial max must be positive, got {}",
                self.radial_max
            )));
        }
        if !(self.headroom > 0.0 && self.headroom <= self.radial_max) {
            return Err(RenderError::InvalidConfig(format!(
                "headroom {} outside (0, {}]",
                self.headroom, self.radial_max
            )));
        }
        if self.grid_rings == 0 {
            return Err(RenderError::InvalidConfig("at least one grid ring is required".into()));
        }
        Ok(())
    }
}
