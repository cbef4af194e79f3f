//! Shared error types used across submodules.

use thiserror::Error;

use crate::circuits::CircuitError;
use crate::render::RenderError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum RlcError {
    /// Wraps parameter validation errors from the solver.
    #[error(transparent)]
    Circuit(#[from] CircuitError),
    /// Wraps diagram rendering errors.
    #[error(transparent)]
    Render(#[from] RenderError),
}
