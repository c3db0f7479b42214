//! Drift-assisted Metropolis-Hastings (importance) sampling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use super::{ChainState, Sampler};
use crate::error::Error;
use crate::system::System;
use crate::wavefunction::Wavefunction;

/// Importance sampler: proposals diffuse along the wavefunction's drift
/// force, `x' = x + step * F(x) + N(0, sqrt(step))` per coordinate of the
/// rotating particle, with F = d ln(psi) / dx. The proposal is asymmetric,
/// so the acceptance ratio carries the Green's-function correction
///
/// ```text
/// exp(-(g1 - g2) / (2 * step)) * (psi_new / psi_old)^2
/// g1 = sum_d (x_d - x'_d - step * F_d(x'))^2
/// g2 = sum_d (x'_d - x_d - step * F_d(x))^2
/// ```
pub struct ImportanceSampler<'a, W, R = StdRng> {
    chain: ChainState,
    wavefunction: &'a W,
    normal: Normal<f64>,
    rng: R,
}

impl<'a, W: Wavefunction> ImportanceSampler<'a, W, StdRng> {
    /// Construct with an entropy-seeded random source.
    pub fn new(system: System, wavefunction: &'a W, step: f64) -> Result<Self, Error> {
        Self::from_rng(system, wavefunction, step, StdRng::from_entropy())
    }
}

impl<'a, W: Wavefunction, R: Rng> ImportanceSampler<'a, W, R> {
    /// Construct with a caller-supplied random source, for reproducible
    /// chains.
    pub fn from_rng(system: System, wavefunction: &'a W, step: f64, rng: R) -> Result<Self, Error> {
        let chain = ChainState::new(system, step)?;
        let normal =
            Normal::new(0.0, chain.step().sqrt()).map_err(|_| Error::InvalidStepSize(step))?;
        Ok(Self {
            chain,
            wavefunction,
            normal,
            rng,
        })
    }
}

impl<'a, W: Wavefunction, R: Rng> Sampler for ImportanceSampler<'a, W, R> {
    type R = R;

    fn chain(&self) -> &ChainState {
        &self.chain
    }

    fn chain_mut(&mut self) -> &mut ChainState {
        &mut self.chain
    }

    fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    fn initialize_system(&mut self) {
        let psi = self.wavefunction.evaluate(self.chain.current_system());
        self.chain.seed_amplitude(psi);
    }

    fn perturb_system(&mut self) {
        let k = self.chain.particle_to_move();
        let step = self.chain.step();
        for d in 0..self.chain.current_system().n_dimensions() {
            let noise = self.normal.sample(&mut self.rng);
            let drift = step
                * self
                    .wavefunction
                    .drift_force_component(self.chain.proposed_system(), k, d);
            self.chain.proposed_system_mut()[(k, d)] += noise + drift;
        }
        let psi = self.wavefunction.evaluate(self.chain.proposed_system());
        self.chain.set_proposed_amplitude(psi);
    }

    fn acceptance_probability(&self) -> f64 {
        let k = self.chain.particle_to_move();
        let step = self.chain.step();
        let current = self.chain.current_system();
        let proposed = self.chain.proposed_system();

        // Green's function exponents for the forward and reverse moves.
        let mut g_reverse = 0.0;
        let mut g_forward = 0.0;
        for d in 0..current.n_dimensions() {
            let x_old = current[(k, d)];
            let x_new = proposed[(k, d)];
            let drift_new = step * self.wavefunction.drift_force_component(proposed, k, d);
            let drift_old = step * self.wavefunction.drift_force_component(current, k, d);
            g_reverse += (x_old - x_new - drift_new).powi(2);
            g_forward += (x_new - x_old - drift_old).powi(2);
        }

        let correction = (-(g_reverse - g_forward) / (2.0 * step)).exp();
        correction * (self.chain.proposed_amplitude() / self.chain.amplitude()).powi(2)
    }
}
