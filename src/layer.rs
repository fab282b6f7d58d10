use std::fmt;

use nalgebra::Complex;
use serde::{Deserialize, Serialize};

/// One homogeneous film in a stack, ordered from the incident side.
///
/// `thickness` shares its length unit with the wavelength passed to the entry
/// points. Indices are written `n + ik`; an absorbing medium has `k > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Layer {
    pub thickness: f64,
    pub refr_index: Complex<f64>,
}

impl Layer {
    pub fn new(thickness: f64, refr_index: Complex<f64>) -> Self {
        Self {
            thickness,
            refr_index,
        }
    }

    /// A layer with a purely real index.
    pub fn lossless(thickness: f64, n: f64) -> Self {
        Self::new(thickness, Complex::new(n, 0.0))
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4} @ {:.6} + {:.6}i",
            self.thickness, self.refr_index.re, self.refr_index.im
        )
    }
}
