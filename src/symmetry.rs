//! Exchange-symmetry diagnostic.
//!
//! Estimates how (anti)symmetric a wavefunction is under particle
//! exchange by comparing its amplitude, averaged over random two-particle
//! transpositions, against the unpermuted amplitude on configurations
//! drawn from a sampler's stationary chain. A fully symmetric
//! wavefunction scores 1; an antisymmetric one scores near 0.

use rand::Rng;

use crate::sampling::Sampler;
use crate::system::System;
use crate::wavefunction::Wavefunction;

/// Estimate the exchange symmetry of `wavefunction` over `samples`
/// configurations drawn from `sampler`.
///
/// Each sample averages the amplitude over an even, factorial-capped
/// number of random transpositions (a cheap symmetry proxy, not an
/// exhaustive permutation sweep); the metric is the ratio
/// sum(average^2) / sum(base^2). A configuration with fewer than two
/// particles is symmetric by definition, so the metric is exactly 1.
pub fn symmetry_metric<W, S, R>(
    wavefunction: &W,
    sampler: &mut S,
    rng: &mut R,
    samples: usize,
    max_permutations: u64,
) -> f64
where
    W: Wavefunction,
    S: Sampler,
    R: Rng,
{
    let n_particles = sampler.current_system().n_particles();
    if n_particles < 2 {
        return 1.0;
    }

    let permutations = even_permutation_count(n_particles, max_permutations);

    let mut num = 0.0;
    let mut den = 0.0;
    for _ in 0..samples {
        let mut system = sampler.next_configuration().clone();
        let base = wavefunction.evaluate(&system);
        let mut sum = base;
        for _ in 0..permutations - 1 {
            random_transposition(&mut system, rng);
            sum += wavefunction.evaluate(&system);
        }
        let average = sum / permutations as f64;
        num += average * average;
        den += base * base;
    }

    num / den
}

/// Number of permutations to average over: N! saturated at `cap`, masked
/// even for balanced sampling, and never below 2.
fn even_permutation_count(n_particles: usize, cap: u64) -> u64 {
    (capped_factorial(n_particles, cap) & !1).max(2)
}

/// n!, or `cap` if n! would exceed it. Stops multiplying as soon as the
/// running product reaches the cap, so large n cannot overflow.
fn capped_factorial(n: usize, cap: u64) -> u64 {
    let mut factorial: u64 = 1;
    for i in 2..=n as u64 {
        if factorial >= cap {
            break;
        }
        factorial = factorial.saturating_mul(i);
    }
    factorial.min(cap)
}

/// Swap two distinct, uniformly chosen particles.
fn random_transposition<R: Rng>(system: &mut System, rng: &mut R) {
    let n = system.n_particles();
    debug_assert!(n > 1);
    let i = rng.gen_range(0..n);
    let mut j = rng.gen_range(0..n);
    while j == i {
        j = rng.gen_range(0..n);
    }
    system.swap_particles(i, j);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::MetropolisSampler;
    use crate::wavefunction::SimpleGaussian;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_capped_factorial() {
        assert_eq!(capped_factorial(0, 100), 1);
        assert_eq!(capped_factorial(1, 100), 1);
        assert_eq!(capped_factorial(4, 100), 24);
        assert_eq!(capped_factorial(5, 100), 100);
        assert_eq!(capped_factorial(6, 30), 30);
        // Far beyond u64 factorial range, must not overflow.
        assert_eq!(capped_factorial(100, 1_000_000), 1_000_000);
    }

    #[test]
    fn test_even_permutation_count() {
        assert_eq!(even_permutation_count(4, 100), 24);
        assert_eq!(even_permutation_count(4, 23), 22);
        assert_eq!(even_permutation_count(2, 100), 2);
        // A degenerate cap still yields a usable even count.
        assert_eq!(even_permutation_count(5, 1), 2);
    }

    #[test]
    fn test_single_particle_is_symmetric_by_definition() {
        let psi = SimpleGaussian::default();
        let mut rng = StdRng::seed_from_u64(21);
        let system = System::random(1, 3, 1.0, &mut rng).unwrap();
        let mut sampler = MetropolisSampler::from_rng(system, &psi, 0.5, rng).unwrap();
        sampler.initialize_system();

        let mut metric_rng = StdRng::seed_from_u64(22);
        let metric = symmetry_metric(&psi, &mut sampler, &mut metric_rng, 100, 100);
        assert_eq!(metric, 1.0);
        // And the sampler was never advanced to conclude that.
        assert_eq!(sampler.total_steps(), 0);
    }

    #[test]
    fn test_gaussian_is_exchange_symmetric() {
        let psi = SimpleGaussian::new(0.5, 1.0);
        let mut rng = StdRng::seed_from_u64(23);
        let system = System::random(5, 3, 1.0, &mut rng).unwrap();
        let mut sampler = MetropolisSampler::from_rng(system, &psi, 0.5, rng).unwrap();
        sampler.initialize_system();

        let mut metric_rng = StdRng::seed_from_u64(24);
        let metric = symmetry_metric(&psi, &mut sampler, &mut metric_rng, 200, 64);
        assert_relative_eq!(metric, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transposition_swaps_two_distinct_particles() {
        let mut rng = StdRng::seed_from_u64(25);
        let mut system = System::new(6, 2).unwrap();
        for k in 0..6 {
            system.set_particle(k, &[k as f64, -(k as f64)]);
        }
        let before = system.clone();
        random_transposition(&mut system, &mut rng);
        let changed: Vec<usize> = (0..6)
            .filter(|&k| system.particle(k) != before.particle(k))
            .collect();
        assert_eq!(changed.len(), 2);
        assert_eq!(system.particle(changed[0]), before.particle(changed[1]));
        assert_eq!(system.particle(changed[1]), before.particle(changed[0]));
    }
}
