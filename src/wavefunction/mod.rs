//! Trial wavefunctions for variational Monte Carlo.
//!
//! Provides the `Wavefunction` capability trait (amplitude, drift force,
//! Laplacian, parameter derivatives, plus a finite-difference fallback)
//! together with the reference `SimpleGaussian` trial state.

mod gaussian;
mod traits;

pub use gaussian::SimpleGaussian;
pub use traits::Wavefunction;
