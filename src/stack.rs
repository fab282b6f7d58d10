//! Accumulation of layer matrices into a single system matrix.
//!
//! The angle of incidence is propagated from layer to layer with the complex
//! form of Snell's law, and each layer's characteristic matrix is multiplied
//! onto the right of the running product so the first layer (nearest the
//! incident medium) stays leftmost.

use log::trace;
use nalgebra::Complex;

use crate::layer::Layer;
use crate::linalg::{identity, Mat2C};
use crate::matrix::Convention;
use crate::polarization::Polarization;
use crate::snell::refracted_angle;


/// Result of a stack traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulated {
    /// Ordered product of every layer's characteristic matrix.
    pub matrix: Mat2C,
    /// Index of the last layer, the substrate side of the stack.
    pub exit_index: Complex<f64>,
    /// Complex propagation angle inside the last layer.
    pub exit_angle: Complex<f64>,
}

/// Traverses `stack` starting from a medium of index `n_ambient` at real angle
/// `aoi` (radians).
///
/// The stack must be non-empty; callers reject empty stacks before getting
/// here.
pub fn accumulate(
    pol: Polarization,
    wavelength: f64,
    stack: &[Layer],
    n_ambient: Complex<f64>,
    aoi: f64,
    convention: Convention,
) -> Accumulated {
    debug_assert!(!stack.is_empty());

    let mut n0 = n_ambient;
    let mut theta = Complex::new(aoi, 0.0);
    let mut matrix = identity();

    for (i, layer) in stack.iter().enumerate() {
        let n1 = layer.refr_index;
        let theta1 = refracted_angle(n0, n1, theta);
        let mj = convention.characteristic_matrix(pol, wavelength, layer.thickness, n1, theta1);
        trace!("layer {}: n = {}, theta = {}", i, n1, theta1);
        matrix *= mj;
        theta = theta1;
        n0 = n1;
    }

    Accumulated {
        matrix,
        exit_index: n0,
        exit_angle: theta,
    }
}
