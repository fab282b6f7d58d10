//! Admittance (Macleod) formulation of a thin-film stack.
//!
//! The stack matrix maps the exit-medium field vector `[1, η_exit]` onto
//! `[B, C]`, the normalized tangential fields at the front surface. The
//! input admittance of the assembly is `Y = C / B` and
//!
//! `r = (η0 - Y) / (η0 + Y)`.
//!
//! Both `η0` and `η_exit` are evaluated with the cosine of the real angle of
//! incidence. For the exit medium this is only exact when the exit angle
//! equals the incident one (normal incidence, or an exit medium matching the
//! ambient); it is kept as is so that results stay comparable with existing
//! data computed this way.

use log::{debug, warn};
use nalgebra::Complex;

use crate::errors::ThinFilmError;
use crate::layer::Layer;
use crate::linalg::Vec2C;
use crate::matrix::Convention;
use crate::polarization::Polarization;
use crate::stack::accumulate;


/// Computes the reflection coefficient of `stack` in the admittance
/// formulation. `aoi` is in degrees.
///
/// # Example
/// ```rust
/// use thinfilm::{macleod, Layer, Polarization};
///
/// let stack = [Layer::lossless(0.0, 1.5)];
/// let r = macleod::stack_r_admittance(Polarization::P, 500.0, &stack, 0.0, true)?;
/// assert!((r.re + 0.2).abs() < 1e-12);
/// # Ok::<(), thinfilm::ThinFilmError>(())
/// ```
pub fn stack_r_admittance(
    pol: Polarization,
    wavelength: f64,
    stack: &[Layer],
    aoi: f64,
    vac_ambient: bool,
) -> Result<Complex<f64>, ThinFilmError> {
    let first = stack.first().ok_or(ThinFilmError::InvalidStack)?;
    let aoi = aoi.to_radians();
    let n0 = if vac_ambient {
        Complex::new(1.0, 0.0)
    } else {
        first.refr_index
    };
    debug!(
        "macleod: pol = {}, wavelength = {}, aoi = {} rad, {} layers",
        pol,
        wavelength,
        aoi,
        stack.len()
    );

    let cos0 = Complex::new(aoi.cos(), 0.0);
    let eta0 = pol.admittance(n0, cos0);

    let acc = accumulate(pol, wavelength, stack, n0, aoi, Convention::Macleod);

    let eta_exit = pol.admittance(acc.exit_index, cos0);
    let bc = acc.matrix * Vec2C::new(Complex::new(1.0, 0.0), eta_exit);

    let r = reflection(&bc, eta0);
    if !r.is_finite() {
        warn!("macleod: non-finite result r = {}", r);
    }
    Ok(r)
}

/// Reflection coefficient from the `[B, C]` vector and ambient admittance.
pub fn reflection(bc: &Vec2C, eta0: Complex<f64>) -> Complex<f64> {
    let y = bc[1] / bc[0];
    (eta0 - y) / (eta0 + y)
}
