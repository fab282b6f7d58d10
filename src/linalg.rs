//! Fixed-size complex linear algebra for transfer matrices.
//!
//! Characteristic matrices and field vectors are plain `nalgebra` 2x2 and
//! 2x1 matrices over `Complex<f64>`. Products and scalar scaling use the
//! `nalgebra` operators directly; the helpers here only name the shapes and
//! the constructors the rest of the crate needs.

use nalgebra::{Complex, Matrix2, Vector2};

/// Complex 2x2 matrix, row-major constructor order.
pub type Mat2C = Matrix2<Complex<f64>>;
/// Complex 2-component column vector.
pub type Vec2C = Vector2<Complex<f64>>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn c(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    fn sample_a() -> Mat2C {
        Mat2C::new(c(1.0, 2.0), c(0.5, -1.0), c(-3.0, 0.0), c(2.0, 0.25))
    }

    fn sample_b() -> Mat2C {
        Mat2C::new(c(0.0, 1.0), c(2.0, 0.0), c(1.5, -0.5), c(-1.0, 1.0))
    }

    #[test]
    fn identity_is_neutral() {
        let a = sample_a();
        assert_eq!(a * identity(), a);
        assert_eq!(identity() * a, a);
    }

    #[test]
    fn product_is_row_major() {
        let a = sample_a();
        let b = sample_b();
        let ab = a * b;
        let expected = a[(1, 0)] * b[(0, 1)] + a[(1, 1)] * b[(1, 1)];
        assert_eq!(ab[(1, 1)], expected);
    }

    #[test]
    fn product_is_associative() {
        let a = sample_a();
        let b = sample_b();
        let m = a * b;
        let left = (a * b) * m;
        let right = a * (b * m);
        for (l, r) in left.iter().zip(right.iter()) {
            assert_abs_diff_eq!(l.re, r.re, epsilon = 1e-12);
            assert_abs_diff_eq!(l.im, r.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn matrix_vector_product() {
        let a = sample_a();
        let v = Vec2C::new(c(1.0, 0.0), c(0.0, 1.0));
        let bc = a * v;
        assert_eq!(bc[0], a[(0, 0)] + a[(0, 1)] * c(0.0, 1.0));
        assert_eq!(bc[1], a[(1, 0)] + a[(1, 1)] * c(0.0, 1.0));
    }

    #[test]
    fn scaling_is_uniform() {
        let a = sample_a();
        let s = c(0.5, -2.0);
        let scaled = a * s;
        for (x, y) in scaled.iter().zip(a.iter()) {
            assert_eq!(*x, y * s);
        }
    }
}

/// The 2x2 complex identity matrix.
pub fn identity() -> Mat2C {
    Mat2C::identity()
}

/// Builds the symmetric-diagonal layout shared by every characteristic matrix:
/// `[[diag, upper], [lower, diag]]`.
pub fn layer_form(diag: Complex<f64>, upper: Complex<f64>, lower: Complex<f64>) -> Mat2C {
    Mat2C::new(diag, upper, lower, diag)
}
