//! Generalized Snell's law for complex refractive indices.
//!
//! Absorbing media and angles beyond the critical angle both produce complex
//! angles of refraction. Rather than decomposing the indices into real and
//! imaginary parts, the angle is kept complex throughout and Snell's law is
//! evaluated directly with the principal branch of the complex arcsine:
//!
//! `θ_t = asin((n_from / n_to) · sin θ_i)`
//!
//! For lossless media at sub-critical real angles this reduces to the
//! ordinary real Snell's law. Past the critical angle the refracted angle is
//! `π/2 + i·acosh(x)`, with `x` the real Snell kernel. A zero index in
//! `n_to` is not checked and yields a non-finite angle.

use nalgebra::Complex;

#[cfg(test)]
mod tests {

    use nalgebra::Complex;

    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn normal_incidence_same_media() {
        let theta_i = Complex::new(0.0, 0.0);
        let m1 = Complex::new(1.0, 0.0);
        let m2 = m1;
        let theta_t = refracted_angle(m1, m2, theta_i);
        assert!((theta_t - theta_i).norm() < f64::EPSILON)
    }

    #[test]
    fn normal_incidence() {
        let theta_i = Complex::new(0.0, 0.0);
        let m1 = Complex::new(1.0, 0.0);
        let m2 = Complex::new(1.31, 0.0);
        let theta_t = refracted_angle(m1, m2, theta_i);
        assert!(theta_t.norm() < f64::EPSILON)
    }

    #[test]
    fn angle30_incidence() {
        let theta_i = Complex::new(30.0 * PI / 180.0, 0.0);
        let m1 = Complex::new(1.0, 0.0);
        let m2 = Complex::new(1.31, 0.0);
        let theta_t = refracted_angle(m1, m2, theta_i);
        let expected = (0.5f64 / 1.31).asin();
        assert!((theta_t.re - expected).abs() < 1e-12);
        assert!(theta_t.im.abs() < 1e-12);
    }

    #[test]
    fn same_media_oblique() {
        let theta_i = Complex::new(1.0, 0.0);
        let m = Complex::new(1.5, 0.0);
        let theta_t = refracted_angle(m, m, theta_i);
        assert!((theta_t - theta_i).norm() < 1e-12);
    }

    #[test]
    fn total_internal_reflection_is_complex() {
        // glass to air at 60 degrees, past the ~41.8 degree critical angle
        let theta_i = Complex::new(60.0 * PI / 180.0, 0.0);
        let m1 = Complex::new(1.5, 0.0);
        let m2 = Complex::new(1.0, 0.0);
        let theta_t = refracted_angle(m1, m2, theta_i);
        let x = 1.5 * (60.0 * PI / 180.0).sin();
        assert!((theta_t.re - PI / 2.0).abs() < 1e-9);
        assert!((theta_t.im - x.acosh()).abs() < 1e-9, "theta_t: {}", theta_t);
        assert!((theta_t.im - 0.75527).abs() < 1e-5);
        // the sine still satisfies Snell's law exactly
        let lhs = m1 * theta_i.sin();
        let rhs = m2 * theta_t.sin();
        assert!((lhs - rhs).norm() < 1e-12);
    }

    #[test]
    fn branch_follows_sign_of_zero() {
        let above = asin(Complex::new(1.3, 0.0));
        let below = asin(Complex::new(1.3, -0.0));
        assert!(above.im > 0.0);
        assert!(below.im < 0.0);
        assert!((above.re - PI / 2.0).abs() < 1e-12);
        assert!((above.im + below.im).abs() < 1e-12);
    }

    #[test]
    fn asin_matches_real_on_unit_interval() {
        for x in [-1.0, -0.3, 0.0, 0.5, 1.0] {
            let theta = asin(Complex::new(x, 0.0));
            assert_eq!(theta.re, f64::asin(x));
            assert_eq!(theta.im, 0.0);
        }
    }

    #[test]
    fn asin_inverts_sin_off_axis() {
        let z = Complex::new(0.4, -0.7);
        assert!((asin(z).sin() - z).norm() < 1e-12);
    }

    #[test]
    fn absorbing_test() {
        let theta_i = Complex::new(1.17773, 0.0);
        let m1 = Complex::new(1.0, 0.0);
        let m2 = Complex::new(1.5, 0.1);
        let theta_t = refracted_angle(m1, m2, theta_i);
        assert!(theta_t.im.abs() > 0.0);
        let lhs = m1 * theta_i.sin();
        let rhs = m2 * theta_t.sin();
        assert!((lhs - rhs).norm() < 1e-12);
    }
}

/// Computes the complex angle of refraction for a wave travelling from a
/// medium of index `n_from` into one of index `n_to`.
///
/// # Example
/// ```rust
/// use nalgebra::Complex;
/// use thinfilm::snell::refracted_angle;
///
/// let theta_t = refracted_angle(
///     Complex::new(1.0, 0.0),
///     Complex::new(1.5, 0.0),
///     Complex::new(0.0, 0.0),
/// );
/// assert_eq!(theta_t.re, 0.0);
/// ```
pub fn refracted_angle(
    n_from: Complex<f64>,
    n_to: Complex<f64>,
    theta_i: Complex<f64>,
) -> Complex<f64> {
    let kernel = n_from / n_to * theta_i.sin();
    asin(kernel)
}

/// Principal complex arcsine, `-i·ln(i·z + sqrt(1 - z²))`.
///
/// The imaginary part of `1 - z²` is formed by negation so that a real
/// argument beyond ±1 keeps the side of the branch cut given by the sign of
/// its zero imaginary part: `+0` maps to `π/2 + i·acosh(x)`.
pub fn asin(z: Complex<f64>) -> Complex<f64> {
    if z.im == 0.0 && z.re.abs() <= 1.0 {
        return Complex::new(z.re.asin(), z.im);
    }
    if z.re == 0.0 && z.im.abs() <= 1.0 {
        return Complex::new(z.re, z.im.asinh());
    }
    let iz = Complex::new(-z.im, z.re);
    let zz = z * z;
    let root = sqrt(Complex::new(1.0 - zz.re, -zz.im));
    let w = (iz + root).ln();
    Complex::new(w.im, -w.re)
}

/// Principal square root; a negative real argument maps to the imaginary
/// axis on the side given by the sign of its zero imaginary part.
fn sqrt(z: Complex<f64>) -> Complex<f64> {
    if z.im == 0.0 && z.re < 0.0 {
        return Complex::new(0.0, (-z.re).sqrt().copysign(z.im));
    }
    z.sqrt()
}
