//! Markov-chain samplers drawing configurations from |psi|^2.
//!
//! `ChainState` holds the bookkeeping every chain shares (current and
//! proposed snapshots, amplitudes, acceptance counters, the rotating
//! particle index); the `Sampler` trait layers the propose/evaluate/accept
//! transition on top of it. Two proposal kernels are provided: a plain
//! Metropolis box move and a drift-assisted Metropolis-Hastings move.

mod chain;
mod importance;
mod metropolis;
mod traits;

pub use chain::ChainState;
pub use importance::ImportanceSampler;
pub use metropolis::MetropolisSampler;
pub use traits::Sampler;
