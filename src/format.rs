//! Display text for phasors.
//!
//! Both formats print two decimals. The rectangular form is a literal
//! `"re + im j"` concatenation, so a negative imaginary part reads `"+ -3.00j"`.

use crate::math::{CScalar, Polar};

/// Formats `z` as `"magnitude ∠ angle°"` with the angle in (−180°, 180°].
#[must_use]
pub fn format_polar(z: CScalar) -> String {
    let polar = Polar::from_complex(z);
    let mut angle = format!("{:.2}", polar.angle_deg());
    // Angles just above −180° round onto the excluded endpoint.
    if angle == "-180.00" {
        angle = String::from("180.00");
    }
    format!("{:.2} ∠ {angle}°", polar.magnitude)
}

/// Formats `z` as `"real + imag j"`.
#[must_use]
pub fn format_rectangular(z: CScalar) -> String {
    format!("{:.2} + {:.2}j", z.re, z.im)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::from_polar_degrees;

    #[test]
    fn polar_text_uses_degrees() {
        assert_eq!(format_polar(CScalar::new(0.0, 5.0)), "5.00 ∠ 90.00°");
        assert_eq!(format_polar(CScalar::new(10.0, 0.0)), "10.00 ∠ 0.00°");
    }

    #[test]
    fn polar_text_on_negative_real_axis_is_plus_180() {
        assert_eq!(format_polar(CScalar::new(-1.0, -0.0)), "1.00 ∠ 180.00°");
    }

    #[test]
    fn polar_text_near_minus_180_rounds_onto_plus_180() {
        let z = from_polar_degrees(1.0, -179.996);
        assert_eq!(format_polar(z), "1.00 ∠ 180.00°");
        let z = from_polar_degrees(1.0, -179.994);
        assert_eq!(format_polar(z), "1.00 ∠ -179.99°");
    }

    #[test]
    fn rectangular_keeps_literal_sign() {
        assert_eq!(format_rectangular(CScalar::new(2.0, -3.0)), "2.00 + -3.00j");
        assert_eq!(format_rectangular(CScalar::new(1.234, 5.678)), "1.23 + 5.68j");
    }
}
