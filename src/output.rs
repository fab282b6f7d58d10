//! Rendering of a single stack computation for the command line.

use std::fmt;

use nalgebra::Complex;
use serde::Serialize;

use crate::abeles;
use crate::errors::ThinFilmError;
use crate::macleod;
use crate::matrix::Convention;
use crate::polarization::Polarization;
use crate::power::Powers;
use crate::settings::Settings;
use crate::validate::validate_inputs;


/// Coefficients of one (wavelength, angle, polarization) point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub polarization: Polarization,
    pub convention: Convention,
    pub wavelength: f64,
    pub aoi: f64,
    pub r: Complex<f64>,
    pub t: Option<Complex<f64>>,
    /// `|r|²`, given only when there are no `powers` to carry it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reflectance: Option<f64>,
    pub powers: Option<Powers>,
}

impl Report {
    /// Runs the configured formulation over the configured stack.
    pub fn compute(settings: &Settings) -> Result<Self, ThinFilmError> {
        if settings.strict {
            validate_inputs(settings.wavelength, &settings.layers)?;
        }

        let (r, t, powers) = match settings.convention {
            Convention::Abeles => {
                let solution = abeles::solve(
                    settings.polarization,
                    settings.wavelength,
                    &settings.layers,
                    settings.aoi,
                    settings.vac_ambient,
                )?;
                (
                    solution.r,
                    Some(solution.t),
                    Some(Powers::from_solution(&solution)),
                )
            }
            Convention::Macleod => {
                let r = macleod::stack_r_admittance(
                    settings.polarization,
                    settings.wavelength,
                    &settings.layers,
                    settings.aoi,
                    settings.vac_ambient,
                )?;
                (r, None, None)
            }
        };

        Ok(Self {
            polarization: settings.polarization,
            convention: settings.convention,
            wavelength: settings.wavelength,
            aoi: settings.aoi,
            r,
            t,
            reflectance: powers.is_none().then(|| r.norm_sqr()),
            powers,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Result ({}, {}-polarized):", self.convention, self.polarization)?;
        writeln!(f, "  Wavelength:       {:.6}", self.wavelength)?;
        writeln!(f, "  AOI:              {:.6} deg", self.aoi)?;
        writeln!(f, "  r:                {:.6} + {:.6}i", self.r.re, self.r.im)?;
        if let Some(t) = self.t {
            writeln!(f, "  t:                {:.6} + {:.6}i", t.re, t.im)?;
        }
        if let Some(reflectance) = self.reflectance {
            writeln!(f, "  Reflectance:      {:.6}", reflectance)?;
        }
        match &self.powers {
            Some(powers) => write!(f, "{}", powers),
            None => Ok(()),
        }
    }
}
