//! The trial-wavefunction capability trait.

use nalgebra::DVector;

use crate::system::System;

/// A parameterized trial wavefunction over particle configurations.
///
/// Implementations must be pure functions of the configuration: amplitudes
/// are not required to be normalized, and the variational parameters are
/// logically immutable during a sampling run (`set_parameters` is meant for
/// an external optimizer to call between runs).
///
/// The drift force and the numerical Laplacian have provided
/// implementations assembled from the required primitives; concrete types
/// may override them when a cheaper closed form exists.
pub trait Wavefunction {
    /// Current variational parameter values.
    fn parameters(&self) -> Vec<f64>;

    /// Replace the leading variational parameters with `params`.
    fn set_parameters(&mut self, params: &[f64]);

    /// Evaluate the (unnormalized) amplitude at `system`.
    fn evaluate(&self, system: &System) -> f64;

    /// Log-derivatives with respect to the variational parameters,
    /// d ln(psi) / d p_i. Consumed by an external optimizer.
    fn gradient(&self, system: &System) -> DVector<f64>;

    /// Closed-form Laplacian contribution, nabla^2 psi / psi summed over
    /// all particles and dimensions. Drives the analytic kinetic term.
    fn laplacian(&self, system: &System) -> f64;

    /// Drift force of a single coordinate, d ln(psi) / d x_{k,d}.
    fn drift_force_component(&self, system: &System, particle: usize, dim: usize) -> f64;

    /// Full drift force vector, laid out as `n_dimensions * k + d`.
    ///
    /// The default assembles it from `drift_force_component` with O(N * D)
    /// calls; override when the whole vector is cheaper in one pass.
    fn drift_force(&self, system: &System) -> DVector<f64> {
        let n_dimensions = system.n_dimensions();
        let mut force = DVector::zeros(system.degrees_of_freedom());
        for k in 0..system.n_particles() {
            for d in 0..n_dimensions {
                force[n_dimensions * k + d] = self.drift_force_component(system, k, d);
            }
        }
        force
    }

    /// Finite-difference estimate of `laplacian`, using the three-point
    /// central formula with step `h` on each of the N * D coordinates.
    ///
    /// Returned on the same scale as `laplacian` (divided by psi), so the
    /// two paths are directly comparable. An amplitude underflow shows up
    /// as NaN/Inf here and is propagated, not caught.
    fn laplacian_numeric(&self, system: &System, h: f64) -> f64 {
        let psi = self.evaluate(system);
        let mut probe = system.clone();
        let mut sum = 0.0;
        for k in 0..system.n_particles() {
            for d in 0..system.n_dimensions() {
                let x = probe[(k, d)];
                probe[(k, d)] = x + h;
                let forward = self.evaluate(&probe);
                probe[(k, d)] = x - h;
                let backward = self.evaluate(&probe);
                probe[(k, d)] = x;
                sum += forward - 2.0 * psi + backward;
            }
        }
        sum / (h * h * psi)
    }
}
