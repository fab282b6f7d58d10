//! Abeles characteristic-matrix formulation of a thin-film stack.
//!
//! The stack product is bracketed by a front matrix built from the ambient
//! medium and a back matrix built from the exit medium,
//!
//! ```text
//! front = 1/(2·n0·cosθ0) · [[n0·cosθ0,  1],
//!                           [n0·cosθ0, -1]]
//! back  = [[1,            0],
//!          [n1·cosθ_exit, 0]]
//! M     = front · S · back
//! ```
//!
//! from which `r = M[1][0] / M[0][0]` and `t = 1 / M[0][0]`.
//!
//! Both boundary matrices use the tilted index `n·cosθ` for either
//! polarization; the layer matrices in between are polarization-specific.

use log::{debug, warn};
use nalgebra::Complex;

use crate::errors::ThinFilmError;
use crate::layer::Layer;
use crate::linalg::Mat2C;
use crate::matrix::Convention;
use crate::polarization::Polarization;
use crate::stack::accumulate;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn bare_glass_normal_incidence() {
        let stack = [Layer::lossless(0.0, 1.5)];
        let (r, t) = stack_rt_characteristic(Polarization::S, 500.0, &stack, 0.0, true).unwrap();
        assert_abs_diff_eq!(r.re, -0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(r.im, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.re, 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(t.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_stack_is_rejected() {
        let res = stack_rt_characteristic(Polarization::P, 500.0, &[], 10.0, true);
        assert_eq!(res, Err(ThinFilmError::InvalidStack));
    }

    #[test]
    fn index_matched_ambient_does_not_reflect() {
        let stack = [Layer::lossless(0.0, 1.5)];
        let (r, t) = stack_rt_characteristic(Polarization::S, 500.0, &stack, 30.0, false).unwrap();
        assert!(r.norm() < 1e-12);
        assert_abs_diff_eq!(t.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn quarter_wave_antireflection() {
        // MgF2-like quarter wave on a substrate with n = n_c², vanishes at λ0
        let wavelength = 550.0;
        let n_c = 1.2247448713915890;
        let stack = [
            Layer::lossless(wavelength / (4.0 * n_c), n_c),
            Layer::lossless(0.0, n_c * n_c),
        ];
        let (r, _) =
            stack_rt_characteristic(Polarization::S, wavelength, &stack, 0.0, true).unwrap();
        assert!(r.norm() < 1e-9, "r = {}", r);
    }
}

/// Full output of the Abeles formulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Amplitude reflection coefficient.
    pub r: Complex<f64>,
    /// Amplitude transmission coefficient.
    pub t: Complex<f64>,
    /// `n0·cosθ0` of the incident medium.
    pub eta_ambient: Complex<f64>,
    /// `n1·cosθ_exit` of the exit medium.
    pub eta_exit: Complex<f64>,
}

/// Computes the reflection and transmission coefficients of `stack`.
///
/// `aoi` is in degrees. When `vac_ambient` is false the first layer's index
/// is used for the incident medium.
///
/// # Example
/// ```rust
/// use thinfilm::{abeles, Layer, Polarization};
///
/// let stack = [Layer::lossless(0.0, 1.5)];
/// let (r, t) = abeles::stack_rt_characteristic(Polarization::S, 500.0, &stack, 0.0, true)?;
/// assert!((r.re + 0.2).abs() < 1e-12);
/// assert!((t.re - 0.8).abs() < 1e-12);
/// # Ok::<(), thinfilm::ThinFilmError>(())
/// ```
pub fn stack_rt_characteristic(
    pol: Polarization,
    wavelength: f64,
    stack: &[Layer],
    aoi: f64,
    vac_ambient: bool,
) -> Result<(Complex<f64>, Complex<f64>), ThinFilmError> {
    let solution = solve(pol, wavelength, stack, aoi, vac_ambient)?;
    Ok((solution.r, solution.t))
}

/// As [`stack_rt_characteristic`], also returning the boundary admittances.
pub fn solve(
    pol: Polarization,
    wavelength: f64,
    stack: &[Layer],
    aoi: f64,
    vac_ambient: bool,
) -> Result<Solution, ThinFilmError> {
    let first = stack.first().ok_or(ThinFilmError::InvalidStack)?;
    let aoi = aoi.to_radians();
    let n0 = if vac_ambient {
        Complex::new(1.0, 0.0)
    } else {
        first.refr_index
    };
    debug!(
        "abeles: pol = {}, wavelength = {}, aoi = {} rad, {} layers",
        pol,
        wavelength,
        aoi,
        stack.len()
    );

    let cos0 = Complex::new(aoi.cos(), 0.0);
    let eta_ambient = n0 * cos0;
    let front = front_matrix(eta_ambient);

    let acc = accumulate(pol, wavelength, stack, n0, aoi, Convention::Abeles);

    let eta_exit = acc.exit_index * acc.exit_angle.cos();
    let m = front * acc.matrix * back_matrix(eta_exit);

    let solution = Solution {
        r: total_r(&m),
        t: total_t(&m),
        eta_ambient,
        eta_exit,
    };
    if !(solution.r.is_finite() && solution.t.is_finite()) {
        warn!(
            "abeles: non-finite result r = {}, t = {}",
            solution.r, solution.t
        );
    }
    Ok(solution)
}

/// Front boundary matrix for an incident medium with tilted index `eta`.
pub fn front_matrix(eta: Complex<f64>) -> Mat2C {
    let one = Complex::new(1.0, 0.0);
    let scale = one / (2.0 * eta);
    Mat2C::new(eta, one, eta, -one) * scale
}

/// Back boundary matrix for an exit medium with tilted index `eta`.
pub fn back_matrix(eta: Complex<f64>) -> Mat2C {
    let zero = Complex::new(0.0, 0.0);
    Mat2C::new(Complex::new(1.0, 0.0), zero, eta, zero)
}

fn total_r(m: &Mat2C) -> Complex<f64> {
    m[(1, 0)] / m[(0, 0)]
}

fn total_t(m: &Mat2C) -> Complex<f64> {
    Complex::new(1.0, 0.0) / m[(0, 0)]
}
