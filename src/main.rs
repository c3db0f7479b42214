//! Demo driver: sample a harmonically trapped Gaussian trial state and
//! report the energy statistics an external optimizer would consume.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rust_vmc::{
    read_config, Error, Hamiltonian, HarmonicOscillator, ImportanceSampler, MetropolisSampler,
    Sampler, SimpleGaussian, System, Wavefunction,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "config.yml")]
    config: String,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    let config = read_config(&args.config)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let system = System::random(config.n_particles, config.n_dimensions, 1.0, &mut rng)?;
    let psi = SimpleGaussian::new(config.alpha, config.beta);
    let hamiltonian = HarmonicOscillator::new(config.omega_z);

    let (mean, variance, acceptance_rate) = if config.importance {
        let mut sampler = ImportanceSampler::from_rng(system, &psi, config.step_size, rng)?;
        sampler.initialize_system();
        run_chain(
            &mut sampler,
            &hamiltonian,
            &psi,
            config.n_warmup,
            config.n_samples,
        )
    } else {
        let mut sampler = MetropolisSampler::from_rng(system, &psi, config.step_size, rng)?;
        sampler.initialize_system();
        run_chain(
            &mut sampler,
            &hamiltonian,
            &psi,
            config.n_warmup,
            config.n_samples,
        )
    };

    println!("VMC run ({} sampling)", if config.importance { "importance" } else { "metropolis" });
    println!("----------------------------------------");
    println!(
        "System: {} particles in {}D, alpha={}, beta={}, omega_z={}",
        config.n_particles, config.n_dimensions, config.alpha, config.beta, config.omega_z
    );
    println!("Samples: {} (+{} warmup), step size {}", config.n_samples, config.n_warmup, config.step_size);
    println!("Energy: {:.6} (variance {:.6})", mean, variance);
    println!("Acceptance rate: {:.4}", acceptance_rate);

    Ok(())
}

/// Warm up the chain, then accumulate per-step local energies. This is the
/// external averaging loop the library itself deliberately does not own.
fn run_chain<S, H, W>(
    sampler: &mut S,
    hamiltonian: &H,
    psi: &W,
    n_warmup: usize,
    n_samples: usize,
) -> (f64, f64, f64)
where
    S: Sampler,
    H: Hamiltonian,
    W: Wavefunction,
{
    for _ in 0..n_warmup {
        sampler.next_configuration();
    }

    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for _ in 0..n_samples {
        let energy = hamiltonian.local_energy(sampler.next_configuration(), psi);
        sum += energy;
        sum_sq += energy * energy;
    }
    let mean = sum / n_samples as f64;
    let variance = sum_sq / n_samples as f64 - mean * mean;
    (mean, variance, sampler.acceptance_rate())
}
