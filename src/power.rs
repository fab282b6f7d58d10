//! Power reflectance and transmittance of a stack.
//!
//! Amplitude coefficients are converted to power fractions with the
//! admittances of the bounding media, `T = Re(η_exit)/Re(η_0)·|t|²`. For a
//! lossless stack at sub-critical angles `R + T = 1`; whatever remains is
//! absorbed in the films.

use std::fmt;

use nalgebra::Complex;
use serde::Serialize;

use crate::abeles::{self, Solution};
use crate::errors::ThinFilmError;
use crate::layer::Layer;
use crate::polarization::Polarization;


/// Fractions of incident power reflected, transmitted and absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Powers {
    pub reflectance: f64,
    pub transmittance: f64,
    pub absorptance: f64,
}

impl Powers {
    /// Derives power fractions from an Abeles solution.
    pub fn from_solution(solution: &Solution) -> Self {
        let reflectance = solution.r.norm_sqr();
        let transmittance = transmittance(solution.t, solution.eta_ambient, solution.eta_exit);
        Self {
            reflectance,
            transmittance,
            absorptance: 1.0 - reflectance - transmittance,
        }
    }
}

/// `Re(η_exit)/Re(η_ambient)·|t|²`.
pub fn transmittance(t: Complex<f64>, eta_ambient: Complex<f64>, eta_exit: Complex<f64>) -> f64 {
    eta_exit.re / eta_ambient.re * t.norm_sqr()
}

/// Power fractions of `stack` in the Abeles formulation. `aoi` is in degrees.
pub fn stack_powers_characteristic(
    pol: Polarization,
    wavelength: f64,
    stack: &[Layer],
    aoi: f64,
    vac_ambient: bool,
) -> Result<Powers, ThinFilmError> {
    let solution = abeles::solve(pol, wavelength, stack, aoi, vac_ambient)?;
    Ok(Powers::from_solution(&solution))
}

impl fmt::Display for Powers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Powers:")?;
        writeln!(f, "  Reflectance:      {:.6}", self.reflectance)?;
        writeln!(f, "  Transmittance:    {:.6}", self.transmittance)?;
        writeln!(f, "  Absorptance:      {:.6}", self.absorptance)
    }
}
