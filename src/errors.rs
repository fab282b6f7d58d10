//! Error types returned by the stack entry points.

use thiserror::Error;

/// Errors raised before any computation is attempted.
///
/// Only [`ThinFilmError::InvalidStack`] is raised by the default (permissive)
/// entry points. The remaining variants are produced by
/// [`crate::validate::validate_inputs`] when strict validation is requested.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThinFilmError {
    /// The layer sequence is empty.
    #[error("zero length stack is meaningless")]
    InvalidStack,
    /// The wavelength is not a finite positive number.
    #[error("wavelength must be finite and greater than 0, got {0}")]
    InvalidWavelength(f64),
    /// A layer thickness is negative or non-finite.
    #[error("layer {index} has invalid thickness {thickness}")]
    InvalidThickness { index: usize, thickness: f64 },
    /// A layer refractive index has zero magnitude or non-finite components.
    #[error("layer {index} has a degenerate refractive index")]
    DegenerateIndex { index: usize },
}
