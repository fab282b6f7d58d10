//! Optional strict checks on stack inputs.
//!
//! The entry points only reject empty stacks and otherwise let degenerate
//! numbers flow through to a non-finite result. Callers that prefer an error
//! run [`validate_inputs`] first.

use crate::errors::ThinFilmError;
use crate::layer::Layer;


/// Checks the wavelength and every layer before a computation.
pub fn validate_inputs(wavelength: f64, stack: &[Layer]) -> Result<(), ThinFilmError> {
    if stack.is_empty() {
        return Err(ThinFilmError::InvalidStack);
    }
    if !(wavelength.is_finite() && wavelength > 0.0) {
        return Err(ThinFilmError::InvalidWavelength(wavelength));
    }
    for (index, layer) in stack.iter().enumerate() {
        if !(layer.thickness.is_finite() && layer.thickness >= 0.0) {
            return Err(ThinFilmError::InvalidThickness {
                index,
                thickness: layer.thickness,
            });
        }
        let n = layer.refr_index;
        if !n.is_finite() || n.norm_sqr() == 0.0 {
            return Err(ThinFilmError::DegenerateIndex { index });
        }
    }
    Ok(())
}
