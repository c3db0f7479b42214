//! Hamiltonians: local-energy evaluation from a wavefunction's kinetic
//! term plus one-body and two-body potentials.

mod harmonic;
mod traits;

pub use harmonic::HarmonicOscillator;
pub use traits::{Hamiltonian, NUMERIC_DIFF_STEP};
