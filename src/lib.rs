//! Reflection and transmission of planar thin-film stacks.
//!
//! Computes complex amplitude coefficients for light incident on a stack of
//! homogeneous, parallel layers with the characteristic matrix method. Two
//! formulations are provided: [`abeles::stack_rt_characteristic`] returns the
//! reflection and transmission coefficients, [`macleod::stack_r_admittance`]
//! returns the reflection coefficient from the input admittance of the stack.
//!
//! Every computation is a pure function of its inputs and handles one
//! (wavelength, angle, polarization) point per call.

pub mod abeles;
pub mod errors;
pub mod fresnel;
pub mod layer;
pub mod linalg;
pub mod macleod;
pub mod matrix;
pub mod output;
pub mod polarization;
pub mod power;
pub mod settings;
pub mod snell;
pub mod stack;
pub mod validate;

pub use abeles::stack_rt_characteristic;
pub use errors::ThinFilmError;
pub use layer::Layer;
pub use macleod::stack_r_admittance;
pub use matrix::Convention;
pub use polarization::Polarization;
