//! Fixed constants used by the solver and the diagram renderer.
//!
//! The diagram constants describe a matplotlib-like polar figure: an 8 inch
//! square canvas rasterized at 300 DPI, with every arrow scaled so that the
//! largest phasor reaches 80% of the radial axis.

use std::f64::consts::PI;

/// Fraction of the radial axis reached by the longest arrow.
pub const ARROW_HEADROOM: f64 = 0.8;
/// Radial axis limit of the polar plot. Arrow lengths are pre-normalized.
pub const RADIAL_MAX: f64 = 1.0;
/// Default raster resolution in dots per inch.
pub const DEFAULT_DPI: u32 = 300;
/// Default figure edge length in inches.
pub const FIGURE_SIZE_IN: f64 = 8.0;
/// Number of inches in a meter, used for the PNG `pHYs` chunk.
pub const INCHES_PER_METER: f64 = 1.0 / 0.0254;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}

/// Converts a resolution in DPI to pixels per meter, rounded to the nearest pixel.
#[inline]
#[must_use]
pub fn dpi_to_pixels_per_meter(dpi: u32) -> u32 {
    (f64::from(dpi) * INCHES_PER_METER).round() as u32
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn angular_frequency_matches_reference() {
        assert_relative_eq!(
            angular_frequency(1000.0),
            6_283.185_307_179_586,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn three_hundred_dpi_in_pixels_per_meter() {
        assert_eq!(dpi_to_pixels_per_meter(300), 11_811);
    }
}
