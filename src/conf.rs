//! Run configuration, read from a YAML file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Parameters for a single VMC run.
///
/// Example file:
///
/// ```yaml
/// n_particles: 10
/// n_dimensions: 3
/// alpha: 0.5
/// beta: 1.0
/// omega_z: 1.0
/// step_size: 0.1
/// n_warmup: 1000
/// n_samples: 100000
/// importance: true
/// seed: 1234
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VmcConfig {
    pub n_particles: usize,
    pub n_dimensions: usize,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_beta")]
    pub beta: f64,
    #[serde(default = "default_omega_z")]
    pub omega_z: f64,
    #[serde(default = "default_step_size")]
    pub step_size: f64,
    #[serde(default = "default_n_warmup")]
    pub n_warmup: usize,
    #[serde(default = "default_n_samples")]
    pub n_samples: usize,
    /// Use the drift-assisted sampler instead of plain Metropolis.
    #[serde(default)]
    pub importance: bool,
    /// Seed for the chain's random source; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_alpha() -> f64 {
    0.5
}

fn default_beta() -> f64 {
    1.0
}

fn default_omega_z() -> f64 {
    1.0
}

fn default_step_size() -> f64 {
    0.1
}

fn default_n_warmup() -> usize {
    1_000
}

fn default_n_samples() -> usize {
    100_000
}

/// Read a `VmcConfig` from a YAML file.
pub fn read_config<P: AsRef<Path>>(path: P) -> Result<VmcConfig, Error> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_yaml::from_reader(reader)?;
    Ok(config)
}
