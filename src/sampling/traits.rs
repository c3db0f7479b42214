//! The Markov-chain sampler trait.

use rand::Rng;

use super::ChainState;
use crate::system::System;

/// A Markov-chain sampler with stationary distribution |psi|^2.
///
/// Concrete schemes supply the proposal kernel (`perturb_system`) and the
/// matching acceptance ratio; the propose -> evaluate -> accept/reject
/// transition itself is provided. The random source is owned by the
/// sampler and explicitly seedable so chains are reproducible and
/// independent chains never share hidden state.
pub trait Sampler {
    type R: Rng;

    fn chain(&self) -> &ChainState;

    fn chain_mut(&mut self) -> &mut ChainState;

    fn rng_mut(&mut self) -> &mut Self::R;

    /// Seed the initial amplitude from the starting configuration. Must be
    /// called once before the first `next_configuration`.
    fn initialize_system(&mut self);

    /// Perturb the rotating particle of the proposed snapshot and record
    /// the proposed amplitude.
    fn perturb_system(&mut self);

    /// Acceptance ratio for the pending proposal. May exceed 1; it is only
    /// ever compared against a uniform draw from [0, 1).
    fn acceptance_probability(&self) -> f64;

    /// Advance the chain one step and return the (possibly unchanged)
    /// current configuration.
    fn next_configuration(&mut self) -> &System {
        self.perturb_system();
        let ratio = self.acceptance_probability();
        let accepted = self.rng_mut().gen::<f64>() < ratio;

        let chain = self.chain_mut();
        if accepted {
            chain.accept();
        } else {
            chain.reject();
        }
        chain.advance();
        self.chain().current_system()
    }

    fn current_system(&self) -> &System {
        self.chain().current_system()
    }

    fn accepted_steps(&self) -> u64 {
        self.chain().accepted_steps()
    }

    fn total_steps(&self) -> u64 {
        self.chain().total_steps()
    }

    /// Fraction of accepted steps so far. Panics before the first step.
    fn acceptance_rate(&self) -> f64 {
        self.chain().acceptance_rate()
    }
}
