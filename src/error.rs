//! Error types for construction and configuration failures.
//!
//! Contract violations (out-of-range particle indices, querying the
//! acceptance rate before any step) panic instead; numeric divergence
//! propagates as NaN through the energy path so an outer loop can
//! discard the sample.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A system was requested with zero particles or zero dimensions.
    EmptySystem {
        n_particles: usize,
        n_dimensions: usize,
    },
    /// Sampler step size must be positive and finite.
    InvalidStepSize(f64),
    Io(std::io::Error),
    Config(serde_yaml::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySystem {
                n_particles,
                n_dimensions,
            } => write!(
                f,
                "system must have at least one particle and one dimension, got {}x{}",
                n_particles, n_dimensions
            ),
            Error::InvalidStepSize(step) => {
                write!(f, "step size must be positive and finite, got {}", step)
            }
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Config(e) => write!(f, "config error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Config(e)
    }
}
