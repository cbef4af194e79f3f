//! Lumped components and the phasor solver for the mixed RLC circuit.

/// Lumped component definitions and traits.
pub mod component;
/// Aggregate series/parallel composition.
pub mod network;
/// Analysis inputs and the reference voltage entry forms.
pub mod parameters;
/// Formatted readouts of a solved circuit.
pub mod report;
/// Fixed-topology phasor solver.
pub mod solver;

pub use component::{Capacitor, Component, Inductor, Resistor};
pub use network::{ConnectionKind, Network};
pub use parameters::{CircuitParameters, ReferenceVoltage};
pub use report::{CircuitReport, Readout, ReportSection};
pub use solver::{solve, CircuitState};

/// Errors raised while validating circuit parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CircuitError {
    /// A value is zero, negative or not finite where a positive finite value is required.
    #[error("invalid parameter `{field}`: {value}")]
    InvalidParameter {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}
