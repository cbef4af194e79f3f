//! Convenience re-exports for running an analysis end to end.

pub use crate::circuits::{
    solve, Capacitor, CircuitError, CircuitParameters, CircuitReport, CircuitState, Component,
    ConnectionKind, Inductor, Network, ReferenceVoltage, Resistor,
};
pub use crate::constants::{angular_frequency, ARROW_HEADROOM, DEFAULT_DPI, RADIAL_MAX};
pub use crate::errors::RlcError;
pub use crate::format::{format_polar, format_rectangular};
pub use crate::math::{from_polar_degrees, CScalar, Polar, Scalar};
pub use crate::phasor_set::LabeledPhasorSet;
pub use crate::render::{render, render_svg, render_with, PhasorDiagram, RenderConfig, RenderError};
