//! Normalized arrow geometry for a phasor diagram.

use palette::Srgb;

use crate::format::format_polar;
use crate::math::{normalize_angle, CScalar, Scalar};
use crate::phasor_set::LabeledPhasorSet;

use super::config::RenderConfig;
use super::colors::color_at;
use super::RenderError;

/// One arrow of the diagram, in plot units (radial axis spans `0..=radial_max`).
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    /// Text drawn beside the arrow.
    pub label: String,
    /// Legend text, `"label (magnitude ∠ angle°)"`.
    pub legend: String,
    /// Source phasor.
    pub phasor: CScalar,
    /// Fill color.
    pub color: Srgb<u8>,
    /// Normalized length: `|z| / max|z| * headroom`.
    pub length: Scalar,
    /// Phase angle in radians, within (−π, π].
    pub angle: Scalar,
}

impl Arrow {
    /// Tip position in plot units.
    #[must_use]
    pub fn tip(&self) -> (Scalar, Scalar) {
        self.point_at(self.length)
    }

    /// Anchor of the arrow's text label: halfway along the shaft.
    #[must_use]
    pub fn label_anchor(&self) -> (Scalar, Scalar) {
        self.point_at(self.length / 2.0)
    }

    fn point_at(&self, r: Scalar) -> (Scalar, Scalar) {
        (r * self.angle.cos(), r * self.angle.sin())
    }
}

/// Laid-out polar diagram ready to be serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct PhasorDiagram {
    title: String,
    max_magnitude: Scalar,
    radial_max: Scalar,
    arrows: Vec<Arrow>,
}

impl PhasorDiagram {
    /// Scales every phasor against the largest magnitude in `phasors`.
    ///
    /// Fails with [`RenderError::EmptyOrZeroInput`] when the set is empty or
    /// every magnitude is zero, and with [`RenderError::NonFinitePhasor`] when
    /// an entry holds NaN or infinity.
    pub fn layout(
        phasors: &LabeledPhasorSet,
        title: &str,
        config: &RenderConfig,
    ) -> Result<Self, RenderError> {
        if let Some((label, _)) = phasors.iter().find(|(_, z)| !z.is_finite()) {
            return Err(RenderError::NonFinitePhasor {
                label: label.to_owned(),
            });
        }
        let max_magnitude = phasors
            .max_magnitude()
            .filter(|m| *m > 0.0)
            .ok_or(RenderError::EmptyOrZeroInput)?;

        let arrows = phasors
            .iter()
            .enumerate()
            .map(|(i, (label, z))| Arrow {
                label: label.to_owned(),
                legend: format!("{label} ({})", format_polar(z)),
                phasor: z,
                color: color_at(&config.palette, i),
                length: z.norm() / max_magnitude * config.headroom,
                angle: normalize_angle(z.arg()),
            })
            .collect();

        Ok(Self {
            title: title.to_owned(),
            max_magnitude,
            radial_max: config.radial_max,
            arrows,
        })
    }

    /// Diagram title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Magnitude that maps to the headroom radius.
    #[must_use]
    pub fn max_magnitude(&self) -> Scalar {
        self.max_magnitude
    }

    /// Radial axis limit in plot units.
    #[must_use]
    pub fn radial_max(&self) -> Scalar {
        self.radial_max
    }

    /// Arrows in draw order.
    #[must_use]
    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }
}
