//! Shared numerical primitives anchored on `num_complex`.

use std::f64::consts::PI;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for phasors.
pub type CScalar = num_complex::Complex<Scalar>;

/// Builds a phasor from a magnitude and an angle given in degrees.
#[must_use]
pub fn from_polar_degrees(magnitude: Scalar, angle_deg: Scalar) -> CScalar {
    CScalar::from_polar(magnitude, angle_deg.to_radians())
}

/// Wraps an angle in radians into (−π, π].
#[must_use]
pub fn normalize_angle(theta: Scalar) -> Scalar {
    let mut wrapped = theta % (2.0 * PI);
    if wrapped <= -PI {
        wrapped += 2.0 * PI;
    } else if wrapped > PI {
        wrapped -= 2.0 * PI;
    }
    wrapped
}

/// Wraps an angle in degrees into (−180°, 180°].
#[must_use]
pub fn normalize_degrees(deg: Scalar) -> Scalar {
    let mut wrapped = deg % 360.0;
    if wrapped <= -180.0 {
        wrapped += 360.0;
    } else if wrapped > 180.0 {
        wrapped -= 360.0;
    }
    wrapped
}

/// Polar form of a phasor: magnitude and phase angle in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    /// Magnitude, never negative.
    pub magnitude: Scalar,
    /// Phase angle in radians, within (−π, π].
    pub angle: Scalar,
}

impl Polar {
    /// Converts a rectangular phasor to polar form.
    #[must_use]
    pub fn from_complex(z: CScalar) -> Self {
        Self {
            magnitude: z.norm(),
            angle: normalize_angle(z.arg()),
        }
    }

    /// Phase angle in degrees, within (−180°, 180°].
    #[must_use]
    pub fn angle_deg(&self) -> Scalar {
        normalize_degrees(self.angle.to_degrees())
    }

    /// Converts back to rectangular form.
    #[must_use]
    pub fn to_complex(&self) -> CScalar {
        CScalar::from_polar(self.magnitude, self.angle)
    }
}

impl From<CScalar> for Polar {
    fn from(z: CScalar) -> Self {
        Self::from_complex(z)
    }
}
