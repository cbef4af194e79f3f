#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fixed constants for the analysis and the diagram geometry.
pub mod constants;
/// Shared complex-number primitives and polar conversions.
pub mod math;
/// Display text for phasors in polar and rectangular form.
pub mod format;
/// Ordered, labeled collections of phasors.
pub mod phasor_set;
/// Circuit components, parameters, and the fixed-topology solver.
pub mod circuits;
/// Polar phasor diagram layout and PNG rendering.
pub mod render;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

pub use circuits::solver::solve;
pub use render::{render, render_with};
