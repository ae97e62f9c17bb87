// Trains a small rectifier network on a Boolean gate, then scores it on
// freshly drawn samples.
//
//   relu-stack                 # [2, 2, 1] on AND with defaults
//   relu-stack run.json        # {"network": {...}, "training": {...}}
//
// Verbosity follows RUST_LOG, e.g. RUST_LOG=debug.
use std::process;

use log::{error, info};
use relu_stack::{evaluate, train_until_streak, BoolSampler, Network, Result, RunConfig};

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match RunConfig::load_json(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("could not load {path}: {e}");
                process::exit(1);
            }
        },
        None => RunConfig::default(),
    };

    if let Err(e) = run(&config) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<()> {
    let training = &config.training;
    let mut network = Network::from_spec(&config.network)?;

    let (mut train_sampler, mut eval_sampler) = match training.seed {
        Some(seed) => (
            BoolSampler::new(training.gate, seed),
            BoolSampler::new(training.gate, seed.wrapping_add(1)),
        ),
        None => (
            BoolSampler::from_entropy(training.gate),
            BoolSampler::from_entropy(training.gate),
        ),
    };

    info!("training {:?} on {:?}", network.widths(), training.gate);
    let report = train_until_streak(&mut network, &mut train_sampler, training)?;
    info!(
        "stopped after {} presentations (converged: {})",
        report.presentations, report.converged
    );

    let eval = evaluate(
        &mut network,
        &mut eval_sampler,
        training.eval_samples,
        training.threshold,
    )?;
    println!("{eval}");
    Ok(())
}
