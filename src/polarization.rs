//! Polarization states and the optical admittance they select.

use std::fmt;

use clap::ValueEnum;
use nalgebra::Complex;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_incidence_admittances_coincide() {
        let n = Complex::new(1.7, 0.03);
        let cos = Complex::new(1.0, 0.0);
        assert_eq!(
            Polarization::S.admittance(n, cos),
            Polarization::P.admittance(n, cos)
        );
    }

    #[test]
    fn oblique_admittances() {
        let n = Complex::new(1.5, 0.0);
        let cos = Complex::new(0.5, 0.0);
        assert_eq!(Polarization::S.admittance(n, cos), Complex::new(0.75, 0.0));
        assert_eq!(Polarization::P.admittance(n, cos), Complex::new(3.0, 0.0));
    }
}

/// Field orientation relative to the plane of incidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Polarization {
    /// Transverse electric, electric field perpendicular to the plane of incidence.
    S,
    /// Transverse magnetic, electric field parallel to the plane of incidence.
    P,
}

impl Polarization {
    /// Tilted optical admittance of a medium with index `n` for a wave whose
    /// propagation angle has cosine `cos_theta`.
    ///
    /// `n·cosθ` for S and `n/cosθ` for P.
    pub fn admittance(self, n: Complex<f64>, cos_theta: Complex<f64>) -> Complex<f64> {
        match self {
            Polarization::S => n * cos_theta,
            Polarization::P => n / cos_theta,
        }
    }
}

impl fmt::Display for Polarization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarization::S => write!(f, "s"),
            Polarization::P => write!(f, "p"),
        }
    }
}
