//! The Hamiltonian capability trait.

use crate::system::System;
use crate::wavefunction::Wavefunction;

/// Finite-difference step used by the numerical kinetic term.
pub const NUMERIC_DIFF_STEP: f64 = 1e-3;

/// A stateless Hamiltonian in units where hbar = m = 1.
///
/// The local energy combines the wavefunction's Laplacian with a one-body
/// external potential and a pairwise internal potential,
///
/// ```text
/// E_L = -1/2 * nabla^2 psi / psi + V_ext(R) + V_int(R)
/// ```
///
/// `local_energy_numeric` replaces the analytic Laplacian with a central
/// finite-difference estimate. The two paths agreeing (to ~1e-6 relative,
/// the discretization error of the numeric one) is the primary correctness
/// oracle for any new wavefunction implementation.
pub trait Hamiltonian {
    /// One-body potential, summed over particles.
    fn external_potential(&self, system: &System) -> f64;

    /// Pairwise two-body interaction sum; zero for non-interacting systems.
    fn internal_potential(&self, system: &System) -> f64;

    /// Local energy with the analytic kinetic term.
    fn local_energy<W: Wavefunction>(&self, system: &System, wavefunction: &W) -> f64 {
        -0.5 * wavefunction.laplacian(system)
            + self.external_potential(system)
            + self.internal_potential(system)
    }

    /// Local energy with the finite-difference kinetic term. Provided for
    /// every concrete Hamiltonian as the validation oracle.
    fn local_energy_numeric<W: Wavefunction>(&self, system: &System, wavefunction: &W) -> f64 {
        -0.5 * wavefunction.laplacian_numeric(system, NUMERIC_DIFF_STEP)
            + self.external_potential(system)
            + self.internal_potential(system)
    }
}
