//! Plain Metropolis sampling with a symmetric box proposal.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{ChainState, Sampler};
use crate::error::Error;
use crate::system::System;
use crate::wavefunction::Wavefunction;

/// Metropolis sampler with a uniform displacement kernel: each coordinate
/// of the rotating particle is kicked by `step * (u - 1/2)` with u uniform
/// in [0, 1). The proposal is symmetric, so the acceptance ratio is just
/// (psi_new / psi_old)^2.
pub struct MetropolisSampler<'a, W, R = StdRng> {
    chain: ChainState,
    wavefunction: &'a W,
    rng: R,
}

impl<'a, W: Wavefunction> MetropolisSampler<'a, W, StdRng> {
    /// Construct with an entropy-seeded random source.
    pub fn new(system: System, wavefunction: &'a W, step: f64) -> Result<Self, Error> {
        Self::from_rng(system, wavefunction, step, StdRng::from_entropy())
    }
}

impl<'a, W: Wavefunction, R: Rng> MetropolisSampler<'a, W, R> {
    /// Construct with a caller-supplied random source, for reproducible
    /// chains.
    pub fn from_rng(system: System, wavefunction: &'a W, step: f64, rng: R) -> Result<Self, Error> {
        Ok(Self {
            chain: ChainState::new(system, step)?,
            wavefunction,
            rng,
        })
    }
}

impl<'a, W: Wavefunction, R: Rng> Sampler for MetropolisSampler<'a, W, R> {
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
            let kick = step * (self.rng.gen::<f64>() - 0.5);
            self.chain.proposed_system_mut()[(k, d)] += kick;
        }
        let psi = self.wavefunction.evaluate(self.chain.proposed_system());
        self.chain.set_proposed_amplitude(psi);
    }

    fn acceptance_probability(&self) -> f64 {
        (self.chain.proposed_amplitude() / self.chain.amplitude()).powi(2)
    }
}
