use num_complex::Complex;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use thinfilm::{Layer, Polarization, ThinFilmError};

fn to_py_err(err: ThinFilmError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_pol(pol: &str) -> PyResult<Polarization> {
    match pol {
        "s" | "S" => Ok(Polarization::S),
        "p" | "P" => Ok(Polarization::P),
        _ => Err(PyValueError::new_err(format!(
            "invalid polarization '{}', must be either 's' or 'p'",
            pol
        ))),
    }
}

fn to_stack(layers: Vec<(f64, Complex<f64>)>) -> Vec<Layer> {
    layers
        .into_iter()
        .map(|(thickness, refr_index)| Layer::new(thickness, refr_index))
        .collect()
}

/// Reflection and transmission coefficients (r, t) of a stack of (thickness, index) layers.
#[pyfunction]
#[pyo3(signature = (pol, wavelength, layers, aoi, vac_ambient=true))]
fn stack_rt(
    pol: &str,
    wavelength: f64,
    layers: Vec<(f64, Complex<f64>)>,
    aoi: f64,
    vac_ambient: bool,
) -> PyResult<(Complex<f64>, Complex<f64>)> {
    let pol = parse_pol(pol)?;
    thinfilm::stack_rt_characteristic(pol, wavelength, &to_stack(layers), aoi, vac_ambient)
        .map_err(to_py_err)
}

/// Reflection coefficient of a stack from its input admittance.
#[pyfunction]
#[pyo3(signature = (pol, wavelength, layers, aoi, vac_ambient=true))]
fn stack_r(
    pol: &str,
    wavelength: f64,
    layers: Vec<(f64, Complex<f64>)>,
    aoi: f64,
    vac_ambient: bool,
) -> PyResult<Complex<f64>> {
    let pol = parse_pol(pol)?;
    thinfilm::stack_r_admittance(pol, wavelength, &to_stack(layers), aoi, vac_ambient)
        .map_err(to_py_err)
}

/// Thin-film stack coefficients implemented in Rust.
#[pymodule]
fn thinfilm_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(stack_rt, m)?)?;
    m.add_function(wrap_pyfunction!(stack_r, m)?)?;
    Ok(())
}
