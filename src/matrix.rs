//! Characteristic (transfer) matrices of single layers.
//!
//! Every layer matrix has the form
//!
//! ```text
//! [[ cos β,        -i·X·sin β ],
//!  [ -i·Y·sin β,   cos β      ]]
//! ```
//!
//! with phase thickness `β = (2π/λ)·n·d·cosθ`. The coupling factors `X` and
//! `Y` come from the layer's tilted admittance and depend on the
//! [`Convention`] and [`Polarization`]. A layer of zero thickness gives
//! `β = 0` and the matrix is exactly the identity.

use std::f64::consts::PI;
use std::fmt;

use clap::ValueEnum;
use nalgebra::Complex;
use serde::{Deserialize, Serialize};

use crate::linalg::{layer_form, Mat2C};
use crate::polarization::Polarization;

/// `-i`, the off-diagonal prefactor of every characteristic matrix.
const NEG_I: Complex<f64> = Complex::new(0.0, -1.0);


/// Which thin-film formulation a computation follows.
///
/// Both share the same layer matrices up to rounding; they differ in how the
/// coupling factors are evaluated and, more importantly, in how the ambient
/// and substrate boundaries are applied (see [`crate::abeles`] and
/// [`crate::macleod`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Direct characteristic-matrix formulation, yields r and t.
    Abeles,
    /// Admittance formulation, yields r only.
    Macleod,
}

impl Convention {
    /// Off-diagonal coupling factors `(X, Y)` for a layer with index `n` and
    /// propagation cosine `cos_theta`.
    pub fn coupling(
        self,
        pol: Polarization,
        n: Complex<f64>,
        cos_theta: Complex<f64>,
    ) -> (Complex<f64>, Complex<f64>) {
        match (self, pol) {
            (Convention::Abeles, Polarization::S) => (1.0 / (cos_theta * n), n * cos_theta),
            (Convention::Abeles, Polarization::P) => (cos_theta / n, n / cos_theta),
            (Convention::Macleod, _) => {
                let eta = pol.admittance(n, cos_theta);
                (1.0 / eta, eta)
            }
        }
    }

    /// Builds the characteristic matrix of a layer of thickness `d` and index
    /// `n`, traversed at complex angle `theta`.
    pub fn characteristic_matrix(
        self,
        pol: Polarization,
        wavelength: f64,
        d: f64,
        n: Complex<f64>,
        theta: Complex<f64>,
    ) -> Mat2C {
        let cos_theta = theta.cos();
        let beta = phase_thickness(wavelength, d, n, cos_theta);
        let (sin_b, cos_b) = (beta.sin(), beta.cos());
        let (x, y) = self.coupling(pol, n, cos_theta);
        layer_form(cos_b, NEG_I * sin_b * x, NEG_I * y * sin_b)
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::Abeles => write!(f, "abeles"),
            Convention::Macleod => write!(f, "macleod"),
        }
    }
}

/// Phase thickness `β = (2π/λ)·n·d·cosθ` of a layer.
pub fn phase_thickness(
    wavelength: f64,
    d: f64,
    n: Complex<f64>,
    cos_theta: Complex<f64>,
) -> Complex<f64> {
    let k = Complex::new(2.0 * PI / wavelength, 0.0) * n;
    k * Complex::new(d, 0.0) * cos_theta
}
