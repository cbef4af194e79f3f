use num_complex::Complex;

use crate::math::Scalar;

/// Trait implemented by all circuit components that can provide a frequency-domain impedance.
pub trait Component {
    /// Returns the component's impedance for an angular frequency `omega` (rad/s).
    fn impedance(&self, omega: Scalar) -> Complex<Scalar>;

    /// Human-readable identifier (e.g. `R1`).
    fn name(&self) -> &str;
}

/// Lumped resistor model.
#[derive(Debug, Clone)]
pub struct Resistor {
    name: String,
    resistance: Scalar,
}

impl Resistor {
    /// Creates a resistor.
    #[must_use]
    pub fn new(name: impl Into<String>, resistance_ohms: Scalar) -> Self {
        Self {
            name: name.into(),
            resistance: resistance_ohms,
        }
    }
}

impl Component for Resistor {
    fn impedance(&self, _omega: Scalar) -> Complex<Scalar> {
        Complex::new(self.resistance, 0.0)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Lumped capacitor model (ideal).
#[derive(Debug, Clone)]
pub struct Capacitor {
    name: String,
    capacitance: Scalar,
}

impl Capacitor {
    /// Creates a capacitor.
    #[must_use]
    pub fn new(name: impl Into<String>, capacitance_f: Scalar) -> Self {
        Self {
            name: name.into(),
            capacitance: capacitance_f,
        }
    }
}

impl Component for Capacitor {
    /// `1 / (jωC)`. Open circuit (infinite real part) at DC.
    fn impedance(&self, omega: Scalar) -> Complex<Scalar> {
        if omega == 0.0 {
            Complex::new(f64::INFINITY, 0.0)
        } else {
            Complex::new(0.0, -1.0 / (omega * self.capacitance))
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Lumped inductor model (ideal).
#[derive(Debug, Clone)]
pub struct Inductor {
    name: String,
    inductance: Scalar,
}

impl Inductor {
    /// Creates an inductor.
    #[must_use]
    pub fn new(name: impl Into<String>, inductance_h: Scalar) -> Self {
        Self {
            name: name.into(),
            inductance: inductance_h,
        }
    }
}

impl Component for Inductor {
    fn impedance(&self, omega: Scalar) -> Complex<Scalar> {
        Complex::new(0.0, omega * self.inductance)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::angular_frequency;

    #[test]
    fn resistor_impedance_is_real() {
        let r = Resistor::new("R1", 100.0);
        let z = r.impedance(1.0);
        assert_relative_eq!(z.re, 100.0);
        assert_relative_eq!(z.im, 0.0);
    }

    #[test]
    fn capacitor_reactance_at_one_kilohertz() {
        let c = Capacitor::new("C", 1e-6);
        let z = c.impedance(angular_frequency(1000.0));
        assert_relative_eq!(z.re, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(z.im, -159.154_943_091_895_3, max_relative = 1.0e-12);
    }

    #[test]
    fn capacitor_is_open_at_dc() {
        let z = Capacitor::new("C", 1e-6).impedance(0.0);
        assert!(z.re.is_infinite());
    }

    #[test]
    fn capacitor_stays_finite_at_very_low_frequency() {
        let omega = angular_frequency(1e-17);
        let z = Capacitor::new("C", 1e-6).impedance(omega);
        assert!(z.is_finite());
        assert_relative_eq!(z.re, 0.0);
        assert_relative_eq!(z.im, -1.0 / (omega * 1e-6), max_relative = 1.0e-12);
    }

    #[test]
    fn inductor_reactance_at_one_kilohertz() {
        let l = Inductor::new("L", 1e-3);
        let z = l.impedance(angular_frequency(1000.0));
        assert_relative_eq!(z.re, 0.0);
        assert_relative_eq!(z.im, 6.283_185_307_179_586, max_relative = 1.0e-12);
    }
}
