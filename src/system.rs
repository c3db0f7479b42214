//! Particle configurations: the N x D position matrix everything else
//! operates on.

use std::ops::{Index, IndexMut};

use nalgebra::{DMatrix, RowDVector};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A configuration of `n_particles` particles in `n_dimensions` dimensions,
/// stored as a dense row-per-particle matrix.
///
/// Both sizes are fixed for the lifetime of the instance, and particle
/// index `k` is stable across a sampling run. Cloning is a deep copy,
/// which the samplers rely on for their independent current/proposed
/// snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct System {
    positions: DMatrix<f64>,
}

impl System {
    /// Create a system with all positions at the origin.
    pub fn new(n_particles: usize, n_dimensions: usize) -> Result<Self, Error> {
        if n_particles == 0 || n_dimensions == 0 {
            return Err(Error::EmptySystem {
                n_particles,
                n_dimensions,
            });
        }
        Ok(Self {
            positions: DMatrix::zeros(n_particles, n_dimensions),
        })
    }

    /// Wrap an existing position matrix (rows are particles).
    pub fn from_positions(positions: DMatrix<f64>) -> Result<Self, Error> {
        if positions.nrows() == 0 || positions.ncols() == 0 {
            return Err(Error::EmptySystem {
                n_particles: positions.nrows(),
                n_dimensions: positions.ncols(),
            });
        }
        Ok(Self { positions })
    }

    /// Create a system with positions drawn uniformly from
    /// `[-spread, spread)` in every coordinate.
    pub fn random<R: Rng>(
        n_particles: usize,
        n_dimensions: usize,
        spread: f64,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let mut system = Self::new(n_particles, n_dimensions)?;
        for x in system.positions.iter_mut() {
            *x = rng.gen_range(-spread..spread);
        }
        Ok(system)
    }

    pub fn n_particles(&self) -> usize {
        self.positions.nrows()
    }

    pub fn n_dimensions(&self) -> usize {
        self.positions.ncols()
    }

    /// Total number of degrees of freedom, `n_particles * n_dimensions`.
    pub fn degrees_of_freedom(&self) -> usize {
        self.positions.len()
    }

    /// Copy of particle `k`'s position vector. Panics if out of range.
    pub fn particle(&self, k: usize) -> RowDVector<f64> {
        self.positions.row(k).into_owned()
    }

    /// Overwrite particle `k`'s position. Panics on index or length mismatch.
    pub fn set_particle(&mut self, k: usize, coords: &[f64]) {
        assert_eq!(
            coords.len(),
            self.n_dimensions(),
            "coordinate count does not match system dimensions"
        );
        for (d, &x) in coords.iter().enumerate() {
            self.positions[(k, d)] = x;
        }
    }

    /// Iterate over particle positions in index order.
    pub fn particles(&self) -> impl Iterator<Item = RowDVector<f64>> + '_ {
        self.positions.row_iter().map(|row| row.into_owned())
    }

    pub fn positions(&self) -> &DMatrix<f64> {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut DMatrix<f64> {
        &mut self.positions
    }

    /// Copy particle `k` from `other` into this system.
    pub fn copy_particle_from(&mut self, other: &System, k: usize) {
        let row = other.positions.row(k).into_owned();
        self.positions.set_row(k, &row);
    }

    /// Exchange the positions of particles `i` and `j`.
    pub fn swap_particles(&mut self, i: usize, j: usize) {
        self.positions.swap_rows(i, j);
    }
}

impl Index<(usize, usize)> for System {
    type Output = f64;

    fn index(&self, (k, d): (usize, usize)) -> &f64 {
        &self.positions[(k, d)]
    }
}

impl IndexMut<(usize, usize)> for System {
    fn index_mut(&mut self, (k, d): (usize, usize)) -> &mut f64 {
        &mut self.positions[(k, d)]
    }
}
