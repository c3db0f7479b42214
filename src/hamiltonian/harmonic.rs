//! Harmonic-oscillator trap, the reference non-interacting Hamiltonian.

use super::Hamiltonian;
use crate::system::System;

/// Harmonic trap in oscillator units. In three dimensions the trap may be
/// elliptic along the z axis,
///
/// ```text
/// V_ext = 1/2 * sum_k (x_k^2 + y_k^2 + (omega_z * z_k)^2)
/// ```
///
/// with transverse frequency 1; in one or two dimensions it is the
/// isotropic `1/2 * sum |r_k|^2`. There is no particle interaction.
#[derive(Clone, Copy, Debug)]
pub struct HarmonicOscillator {
    omega_z: f64,
}

impl HarmonicOscillator {
    pub fn new(omega_z: f64) -> Self {
        Self { omega_z }
    }

    pub fn omega_z(&self) -> f64 {
        self.omega_z
    }
}

impl Hamiltonian for HarmonicOscillator {
    fn external_potential(&self, system: &System) -> f64 {
        let potential = if system.n_dimensions() == 3 {
            let mut pot = 0.0;
            for k in 0..system.n_particles() {
                pot += system[(k, 0)].powi(2)
                    + system[(k, 1)].powi(2)
                    + (self.omega_z * system[(k, 2)]).powi(2);
            }
            pot
        } else {
            system.positions().norm_squared()
        };
        0.5 * potential
    }

    fn internal_potential(&self, _system: &System) -> f64 {
        0.0
    }
}
