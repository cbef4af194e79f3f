//! Input bundle for a single analysis run.

use crate::math::{from_polar_degrees, CScalar, Scalar};

use super::CircuitError;

/// Reference voltage as entered by the caller.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceVoltage {
    /// Magnitude in volts and phase in degrees.
    Polar {
        /// Magnitude in volts.
        magnitude: Scalar,
        /// Phase angle in degrees.
        angle_deg: Scalar,
    },
    /// Real and imaginary parts in volts.
    Rectangular {
        /// Real part.
        re: Scalar,
        /// Imaginary part.
        im: Scalar,
    },
}

impl ReferenceVoltage {
    /// Resolves the entry to a complex phasor. Polar angles are converted to radians first.
    #[must_use]
    pub fn to_phasor(self) -> CScalar {
        match self {
            Self::Polar {
                magnitude,
                angle_deg,
            } => from_polar_degrees(magnitude, angle_deg),
            Self::Rectangular { re, im } => CScalar::new(re, im),
        }
    }
}

impl From<ReferenceVoltage> for CScalar {
    fn from(v: ReferenceVoltage) -> Self {
        v.to_phasor()
    }
}

/// Frequency, component values, and reference voltage for the mixed RLC circuit.
///
/// Branch 1 is `C + R1 + R2` in series; branch 2 is `R3 + L` in series; the two
/// branches sit in parallel across `v_ref`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitParameters {
    /// Source frequency in hertz.
    pub frequency_hz: Scalar,
    /// Capacitance in farads.
    pub capacitance_f: Scalar,
    /// Inductance in henries.
    pub inductance_h: Scalar,
    /// Resistance R1 in ohms (branch 1).
    pub r1_ohms: Scalar,
    /// Resistance R2 in ohms (branch 1).
    pub r2_ohms: Scalar,
    /// Resistance R3 in ohms (branch 2).
    pub r3_ohms: Scalar,
    /// Reference voltage phasor across both branches.
    pub v_ref: CScalar,
}

impl CircuitParameters {
    /// Creates a parameter set from SI values.
    #[must_use]
    pub fn new(
        frequency_hz: Scalar,
        capacitance_f: Scalar,
        inductance_h: Scalar,
        resistances_ohms: [Scalar; 3],
        v_ref: impl Into<CScalar>,
    ) -> Self {
        let [r1_ohms, r2_ohms, r3_ohms] = resistances_ohms;
        Self {
            frequency_hz,
            capacitance_f,
            inductance_h,
            r1_ohms,
            r2_ohms,
            r3_ohms,
            v_ref: v_ref.into(),
        }
    }

    /// Replaces the capacitance, given in microfarads.
    #[must_use]
    pub fn with_microfarads(mut self, capacitance_uf: Scalar) -> Self {
        self.capacitance_f = capacitance_uf * 1e-6;
        self
    }

    /// Replaces the inductance, given in microhenries.
    #[must_use]
    pub fn with_microhenries(mut self, inductance_uh: Scalar) -> Self {
        self.inductance_h = inductance_uh * 1e-6;
        self
    }

    /// Replaces the reference voltage.
    #[must_use]
    pub fn with_reference(mut self, v_ref: impl Into<CScalar>) -> Self {
        self.v_ref = v_ref.into();
        self
    }

    /// Replaces the source frequency.
    #[must_use]
    pub fn with_frequency(mut self, frequency_hz: Scalar) -> Self {
        self.frequency_hz = frequency_hz;
        self
    }

    /// Checks that every value is usable before any impedance is computed.
    ///
    /// Frequency, capacitance, inductance and the three resistances must be
    /// finite and strictly positive; both parts of `v_ref` must be finite.
    pub fn validate(&self) -> Result<(), CircuitError> {
        let positive = [
            ("frequency_hz", self.frequency_hz),
            ("capacitance_f", self.capacitance_f),
            ("inductance_h", self.inductance_h),
            ("r1_ohms", self.r1_ohms),
            ("r2_ohms", self.r2_ohms),
            ("r3_ohms", self.r3_ohms),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(CircuitError::InvalidParameter { field, value });
            }
        }
        if !self.v_ref.re.is_finite() {
            return Err(CircuitError::InvalidParameter {
                field: "v_ref.re",
                value: self.v_ref.re,
            });
        }
        if !self.v_ref.im.is_finite() {
            return Err(CircuitError::InvalidParameter {
                field: "v_ref.im",
                value: self.v_ref.im,
            });
        }
        Ok(())
    }
}

impl Default for CircuitParameters {
    /// 1 kHz, 1 µF, 1000 µH, R1 = 1 kΩ, R2 = 2 kΩ, R3 = 3 kΩ, 10 V ∠ 0°.
    fn default() -> Self {
        Self::new(
            1000.0,
            1e-6,
            1e-3,
            [1000.0, 2000.0, 3000.0],
            ReferenceVoltage::Polar {
                magnitude: 10.0,
                angle_deg: 0.0,
            },
        )
    }
}
