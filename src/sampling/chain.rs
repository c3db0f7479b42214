//! Shared Markov-chain bookkeeping.

use crate::error::Error;
use crate::system::System;

/// State common to every sampling scheme: the accepted configuration, a
/// scratch proposed configuration, their amplitudes, acceptance counters,
/// and the rotating next-particle-to-move index.
///
/// Invariants: `accepted_steps <= total_steps`; only the particle indicated
/// by `particle_to_move` ever differs between the two snapshots.
#[derive(Clone, Debug)]
pub struct ChainState {
    step: f64,
    current: System,
    proposed: System,
    amplitude: f64,
    proposed_amplitude: f64,
    accepted_steps: u64,
    total_steps: u64,
    particle_to_move: usize,
}

impl ChainState {
    /// Start a chain from `system` with the given proposal step size.
    pub fn new(system: System, step: f64) -> Result<Self, Error> {
        if !(step > 0.0 && step.is_finite()) {
            return Err(Error::InvalidStepSize(step));
        }
        let proposed = system.clone();
        Ok(Self {
            step,
            current: system,
            proposed,
            amplitude: 0.0,
            proposed_amplitude: 0.0,
            accepted_steps: 0,
            total_steps: 0,
            particle_to_move: 0,
        })
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn current_system(&self) -> &System {
        &self.current
    }

    pub fn proposed_system(&self) -> &System {
        &self.proposed
    }

    pub fn proposed_system_mut(&mut self) -> &mut System {
        &mut self.proposed
    }

    /// Amplitude of the current (accepted) configuration.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn proposed_amplitude(&self) -> f64 {
        self.proposed_amplitude
    }

    pub fn set_proposed_amplitude(&mut self, psi: f64) {
        self.proposed_amplitude = psi;
    }

    /// Seed both amplitudes, used by `Sampler::initialize_system` before
    /// the first step.
    pub fn seed_amplitude(&mut self, psi: f64) {
        self.amplitude = psi;
        self.proposed_amplitude = psi;
    }

    /// Index of the particle the next proposal perturbs.
    pub fn particle_to_move(&self) -> usize {
        self.particle_to_move
    }

    /// Adopt the proposed move: only the moved particle needs copying.
    pub fn accept(&mut self) {
        let k = self.particle_to_move;
        self.current.copy_particle_from(&self.proposed, k);
        self.amplitude = self.proposed_amplitude;
        self.accepted_steps += 1;
    }

    /// Discard the proposed move, restoring the scratch snapshot so the
    /// next proposal starts from the accepted state.
    pub fn reject(&mut self) {
        let k = self.particle_to_move;
        self.proposed.copy_particle_from(&self.current, k);
        self.proposed_amplitude = self.amplitude;
    }

    /// Count the step and rotate to the next particle, so every particle
    /// is perturbed once per N steps.
    pub fn advance(&mut self) {
        self.total_steps += 1;
        self.particle_to_move = (self.particle_to_move + 1) % self.current.n_particles();
    }

    pub fn accepted_steps(&self) -> u64 {
        self.accepted_steps
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Fraction of accepted steps. Panics if no step has been taken yet.
    pub fn acceptance_rate(&self) -> f64 {
        assert!(
            self.total_steps > 0,
            "acceptance rate queried before any step was taken"
        );
        self.accepted_steps as f64 / self.total_steps as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_step_size() {
        let s = System::new(2, 2).unwrap();
        assert!(ChainState::new(s.clone(), 0.0).is_err());
        assert!(ChainState::new(s.clone(), -0.1).is_err());
        assert!(ChainState::new(s.clone(), f64::NAN).is_err());
        assert!(ChainState::new(s, 0.1).is_ok());
    }

    #[test]
    fn test_accept_copies_moved_particle() {
        let s = System::new(3, 2).unwrap();
        let mut chain = ChainState::new(s, 0.1).unwrap();
        chain.seed_amplitude(1.0);

        chain.proposed_system_mut()[(0, 1)] = 2.5;
        chain.set_proposed_amplitude(0.8);
        chain.accept();
        assert_eq!(chain.current_system()[(0, 1)], 2.5);
        assert_eq!(chain.amplitude(), 0.8);
        assert_eq!(chain.accepted_steps(), 1);
    }

    #[test]
    fn test_reject_restores_scratch() {
        let s = System::new(3, 2).unwrap();
        let mut chain = ChainState::new(s, 0.1).unwrap();
        chain.seed_amplitude(1.0);

        chain.proposed_system_mut()[(0, 0)] = 9.0;
        chain.set_proposed_amplitude(0.1);
        chain.reject();
        assert_eq!(chain.proposed_system()[(0, 0)], 0.0);
        assert_eq!(chain.proposed_amplitude(), 1.0);
        assert_eq!(chain.accepted_steps(), 0);
    }

    #[test]
    fn test_advance_rotates_particle_index() {
        let s = System::new(3, 1).unwrap();
        let mut chain = ChainState::new(s, 0.1).unwrap();
        let indices: Vec<usize> = (0..7)
            .map(|_| {
                let k = chain.particle_to_move();
                chain.advance();
                k
            })
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 0, 1, 2, 0]);
        assert_eq!(chain.total_steps(), 7);
    }

    #[test]
    #[should_panic]
    fn test_acceptance_rate_before_any_step_panics() {
        let s = System::new(2, 2).unwrap();
        let chain = ChainState::new(s, 0.1).unwrap();
        let _ = chain.acceptance_rate();
    }
}
