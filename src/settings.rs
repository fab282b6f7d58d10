use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use config::{Config, Environment, File};
use log::info;
use nalgebra::Complex;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::layer::Layer;
use crate::matrix::Convention;
use crate::polarization::Polarization;


/// Runtime configuration for the application.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    /// Wavelength in the same length unit as the layer thicknesses.
    pub wavelength: f64,
    /// Angle of incidence in degrees.
    pub aoi: f64,
    pub polarization: Polarization,
    pub convention: Convention,
    #[serde(default = "default_vac_ambient")]
    pub vac_ambient: bool,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub json: bool,
    pub layers: Vec<Layer>,
}

fn default_vac_ambient() -> bool {
    true
}

pub fn load_default_config() -> Result<Settings> {
    let root = retrieve_project_root()?;
    let default_config_file = root.join("config/default.toml");

    let config: Settings = Config::builder()
        .add_source(File::from(default_config_file).required(true))
        .build()
        .context("Error loading configuration")?
        .try_deserialize()
        .context("Error deserializing configuration")?;

    validate_config(&config)?;

    Ok(config)
}

pub fn load_config() -> Result<Settings> {
    let root = retrieve_project_root()?;

    let default_config_file = root.join("config/default.toml");
    let local_config = root.join("config/local.toml");

    let config_file = if local_config.exists() {
        info!("Using local configuration: {:?}", local_config);
        local_config
    } else {
        info!("Using default configuration: {:?}", default_config_file);
        default_config_file
    };

    let mut config: Settings = Config::builder()
        .add_source(File::from(config_file).required(true))
        .add_source(Environment::with_prefix("thinfilm"))
        .build()
        .context("Error loading configuration")?
        .try_deserialize()
        .context("Error deserializing configuration")?;

    apply_args(&mut config, CliArgs::parse());

    validate_config(&config)?;

    Ok(config)
}

/// Overrides configuration values with those given on the command line.
pub fn apply_args(config: &mut Settings, args: CliArgs) {
    if let Some(wavelength) = args.w {
        config.wavelength = wavelength;
    }
    if let Some(aoi) = args.aoi {
        config.aoi = aoi;
    }
    if let Some(pol) = args.pol {
        config.polarization = pol;
    }
    if let Some(convention) = args.convention {
        config.convention = convention;
    }
    if args.ambient_layer {
        config.vac_ambient = false;
    }
    if args.strict {
        config.strict = true;
    }
    if args.json {
        config.json = true;
    }
    if let Some(layers) = args.layer {
        config.layers = layers;
    }
}

/// Retrieve the project root directory.
/// This function tries to find the project root directory in different ways:
/// 1. If the CARGO_MANIFEST_DIR environment variable is set, use it.
/// 2. If the THINFILM_ROOT_DIR environment variable is set, use it.
/// 3. If the "config" subdirectory is found in the executable directory or any of its parents,
///    use it.
fn retrieve_project_root() -> Result<PathBuf> {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        return Ok(PathBuf::from(manifest_dir));
    }
    if let Ok(path) = env::var("THINFILM_ROOT_DIR") {
        return Ok(PathBuf::from(path));
    }

    let exe_path = env::current_exe().context("Failed to get current executable path")?;
    exe_path
        .ancestors()
        .skip(1)
        .find(|dir| dir.join("config").is_dir())
        .map(|dir| dir.to_path_buf())
        .ok_or_else(|| anyhow!("Could not find project root directory"))
}

fn validate_config(config: &Settings) -> Result<()> {
    if !(config.wavelength > 0.0) {
        bail!("Wavelength must be greater than 0");
    }
    if config.layers.is_empty() {
        bail!("At least one layer must be given");
    }
    Ok(())
}

#[derive(Parser, Debug)]
#[command(version, about = "thinfilm - reflection and transmission of planar thin-film stacks")]
pub struct CliArgs {
    /// Wavelength in units of the layer thicknesses.
    #[arg(short, long)]
    w: Option<f64>,

    /// Angle of incidence in degrees.
    #[arg(long)]
    aoi: Option<f64>,

    /// Polarization of the incident wave.
    #[arg(long, value_enum)]
    pol: Option<Polarization>,

    /// Formulation used for the stack. Only abeles yields a transmission coefficient.
    #[arg(long, value_enum)]
    convention: Option<Convention>,

    /// Use the first layer's refractive index for the incident medium instead of vacuum.
    #[arg(long)]
    ambient_layer: bool,

    /// Reject degenerate inputs instead of returning non-finite coefficients.
    #[arg(long)]
    strict: bool,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// A layer as "thickness,index", ordered from the incident side. The index may be complex,
    /// e.g. "20,0.2+3i". Repeat for each layer; replaces the configured stack.
    #[arg(short, long, value_parser = parse_layer)]
    layer: Option<Vec<Layer>>,
}

/// Parse a layer in the format "thickness,index"
fn parse_layer(s: &str) -> Result<Layer, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(format!(
            "Invalid layer format: '{}'. Expected 'thickness,index'",
            s
        ));
    }

    let thickness = parts[0]
        .parse::<f64>()
        .map_err(|_| format!("Failed to parse thickness: {}", parts[0]))?;
    let refr_index = parts[1]
        .parse::<Complex<f64>>()
        .map_err(|_| format!("Failed to parse refractive index: {}", parts[1]))?;

    Ok(Layer::new(thickness, refr_index))
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Settings:")?;
        writeln!(f, "  - Wavelength: {:.6}", self.wavelength)?;
        writeln!(f, "  - Angle of Incidence: {:.6} deg", self.aoi)?;
        writeln!(f, "  - Polarization: {}", self.polarization)?;
        writeln!(f, "  - Convention: {}", self.convention)?;
        writeln!(f, "  - Vacuum Ambient: {}", self.vac_ambient)?;
        writeln!(f, "  - Layers:")?;
        for layer in &self.layers {
            writeln!(f, "      {}", layer)?;
        }
        Ok(())
    }
}
