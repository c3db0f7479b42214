//! The reference Gaussian trial state for a harmonically trapped system.

use nalgebra::{dvector, DVector};
use serde::{Deserialize, Serialize};

use super::Wavefunction;
use crate::system::System;

/// Gaussian trial wavefunction, psi = exp(-alpha * g(R)) with
/// g(R) = sum_k (x_k^2 + y_k^2 + beta * z_k^2) in three dimensions and
/// the plain squared norm otherwise.
///
/// `alpha` is the variational amplitude-decay parameter; `beta` is a fixed
/// anisotropy factor on the last axis of a 3-D trap. At alpha = 0.5 and
/// beta = 1 this is the exact isotropic-oscillator ground state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimpleGaussian {
    pub alpha: f64,
    pub beta: f64,
}

impl SimpleGaussian {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// The trap-weighted squared norm g(R) in the exponent.
    fn exponent(&self, system: &System) -> f64 {
        if system.n_dimensions() == 3 {
            let mut g = 0.0;
            for k in 0..system.n_particles() {
                g += system[(k, 0)].powi(2)
                    + system[(k, 1)].powi(2)
                    + self.beta * system[(k, 2)].powi(2);
            }
            g
        } else {
            system.positions().norm_squared()
        }
    }
}

impl Default for SimpleGaussian {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 1.0,
        }
    }
}

impl Wavefunction for SimpleGaussian {
    fn parameters(&self) -> Vec<f64> {
        vec![self.alpha, self.beta]
    }

    fn set_parameters(&mut self, params: &[f64]) {
        if let Some(&alpha) = params.first() {
            self.alpha = alpha;
        }
        if let Some(&beta) = params.get(1) {
            self.beta = beta;
        }
    }

    fn evaluate(&self, system: &System) -> f64 {
        (-self.alpha * self.exponent(system)).exp()
    }

    /// Only alpha is variational; d ln(psi) / d alpha = -g(R).
    fn gradient(&self, system: &System) -> DVector<f64> {
        dvector![-self.exponent(system)]
    }

    fn laplacian(&self, system: &System) -> f64 {
        let trapped_3d = system.n_dimensions() == 3;
        let one_body_term = -if trapped_3d {
            2.0 + self.beta
        } else {
            system.n_dimensions() as f64
        };

        let mut laplacian = 0.0;
        for k in 0..system.n_particles() {
            let mut r2 = 0.0;
            for d in 0..system.n_dimensions() {
                let mut x = system[(k, d)];
                if trapped_3d && d == 2 {
                    x *= self.beta;
                }
                r2 += x * x;
            }
            laplacian += 2.0 * self.alpha * (2.0 * self.alpha * r2 + one_body_term);
        }
        laplacian
    }

    fn drift_force_component(&self, system: &System, particle: usize, dim: usize) -> f64 {
        let scale = if system.n_dimensions() == 3 && dim == 2 {
            self.beta
        } else {
            1.0
        };
        -2.0 * self.alpha * scale * system[(particle, dim)]
    }
}
