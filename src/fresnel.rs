//! Fresnel equations for a single planar interface.
//!
//! This module implements the classic two-media Fresnel coefficients with
//! complex refractive indices and complex propagation angles. A stack whose
//! only layer has zero thickness collapses to a single interface, so these
//! coefficients are the reference the stack algorithms reduce to.
//!
//! The coefficients are written in the admittance convention used by the
//! characteristic matrices: with tilted admittances `η = n·cosθ` (s) and
//! `η = n/cosθ` (p),
//!
//! - `r = (η_1 - η_2) / (η_1 + η_2)`
//! - `t = 2·η_1 / (η_1 + η_2)`
//!
//! so `t` is the ratio of tangential electric field amplitudes.

use nalgebra::{Complex, Matrix2, Vector2};

use crate::polarization::Polarization;


/// Computes Fresnel reflection coefficients at an interface.
///
/// Returns a diagonal matrix with the s coefficient at `(0, 0)` and the p
/// coefficient at `(1, 1)`.
///
/// # Example
/// ```rust
/// use nalgebra::Complex;
/// use thinfilm::fresnel;
///
/// let zero = Complex::new(0.0, 0.0);
/// let r = fresnel::refl(Complex::new(1.0, 0.0), Complex::new(1.5, 0.0), zero, zero);
/// assert!((r[(0, 0)].re + 0.2).abs() < 1e-12);
/// ```
pub fn refl(
    n1: Complex<f64>,
    n2: Complex<f64>,
    theta_i: Complex<f64>,
    theta_t: Complex<f64>,
) -> Matrix2<Complex<f64>> {
    let f11 = coefficient_r(Polarization::S, n1, n2, theta_i, theta_t);
    let f22 = coefficient_r(Polarization::P, n1, n2, theta_i, theta_t);
    Matrix2::from_diagonal(&Vector2::new(f11, f22))
}

/// Computes Fresnel transmission coefficients at an interface.
///
/// Same layout as [`refl`].
pub fn refr(
    n1: Complex<f64>,
    n2: Complex<f64>,
    theta_i: Complex<f64>,
    theta_t: Complex<f64>,
) -> Matrix2<Complex<f64>> {
    let f11 = coefficient_t(Polarization::S, n1, n2, theta_i, theta_t);
    let f22 = coefficient_t(Polarization::P, n1, n2, theta_i, theta_t);
    Matrix2::from_diagonal(&Vector2::new(f11, f22))
}

/// Single-polarization Fresnel reflection coefficient.
pub fn coefficient_r(
    pol: Polarization,
    n1: Complex<f64>,
    n2: Complex<f64>,
    theta_i: Complex<f64>,
    theta_t: Complex<f64>,
) -> Complex<f64> {
    let eta1 = pol.admittance(n1, theta_i.cos());
    let eta2 = pol.admittance(n2, theta_t.cos());
    (eta1 - eta2) / (eta1 + eta2)
}

/// Single-polarization Fresnel transmission coefficient.
pub fn coefficient_t(
    pol: Polarization,
    n1: Complex<f64>,
    n2: Complex<f64>,
    theta_i: Complex<f64>,
    theta_t: Complex<f64>,
) -> Complex<f64> {
    let eta1 = pol.admittance(n1, theta_i.cos());
    let eta2 = pol.admittance(n2, theta_t.cos());
    2.0 * eta1 / (eta1 + eta2)
}
