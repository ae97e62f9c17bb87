use log::{debug, info, warn};

use crate::error::{NetworkError, Result};
use crate::network::network::Network;
use crate::train::report::{Evaluation, TrainReport};
use crate::train::sampler::{BoolSampler, Sample};
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Shows samples to `network` until it classifies `config.streak` of them
/// correctly in a row, or `config.max_presentations` run out.
///
/// Each presentation is `compute`, a classification of `output[0]` against
/// `config.threshold` (made before the update), then `backprop` toward the
/// sample's `0`/`1` target.
///
/// Stopping on the streak matters: under this update rule, training far past
/// the first good run tends to push every activation to zero.
///
/// # Errors
/// `Config` if the network is not two inputs to one output or `config` is
/// invalid.
pub fn train_until_streak(
    network: &mut Network,
    sampler: &mut BoolSampler,
    config: &TrainConfig,
) -> Result<TrainReport> {
    config.validate()?;
    check_shape(network)?;

    let mut streak = 0;
    let mut presentations = 0;

    while streak < config.streak && presentations < config.max_presentations {
        let sample = sampler.draw();
        let guess = present(network, &sample, config.threshold)?;
        presentations += 1;

        if guess == sample.label {
            streak += 1;
        } else {
            debug!(
                "presentation {presentations}: {:?} -> {} (expected {}), streak reset",
                sample.inputs, guess, sample.label
            );
            streak = 0;
        }
    }

    let converged = streak >= config.streak;
    if converged {
        info!("reached a streak of {streak} after {presentations} presentations");
    } else {
        warn!("no streak of {} within {presentations} presentations", config.streak);
    }

    Ok(TrainReport {
        presentations,
        final_streak: streak,
        converged,
    })
}

/// Classifies `samples` fresh draws without touching any weight.
pub fn evaluate(
    network: &mut Network,
    sampler: &mut BoolSampler,
    samples: usize,
    threshold: f32,
) -> Result<Evaluation> {
    check_shape(network)?;

    let mut eval = Evaluation::default();
    for sample in sampler.by_ref().take(samples) {
        if classify(network, &sample.inputs, threshold)? == sample.label {
            eval.correct += 1;
        } else {
            eval.wrong += 1;
        }
    }

    debug!("evaluation over {samples} samples: {eval}");
    Ok(eval)
}

/// Forward pass, then `output[0] > threshold`.
pub fn classify(network: &mut Network, inputs: &[f32], threshold: f32) -> Result<bool> {
    network.compute(inputs)?;
    Ok(network.output()[0] > threshold)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One training step. Returns the classification made before the update.
fn present(network: &mut Network, sample: &Sample, threshold: f32) -> Result<bool> {
    let guess = classify(network, &sample.inputs, threshold)?;
    network.backprop(&sample.target())?;
    Ok(guess)
}

fn check_shape(network: &Network) -> Result<()> {
    if network.input_width() != 2 || network.output_width() != 1 {
        return Err(NetworkError::Config(format!(
            "a Boolean gate needs a 2-input, 1-output network, got {:?}",
            network.widths()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train::sampler::BoolGate;

    #[test]
    fn stops_on_the_streak() {
        let mut net = Network::new(&[2, 2, 1]).unwrap();
        let mut sampler = BoolSampler::new(BoolGate::And, 11);
        let report = train_until_streak(&mut net, &mut sampler, &TrainConfig::seeded(11)).unwrap();
        assert!(report.converged);
        assert_eq!(report.final_streak, 3);
        assert!(report.presentations >= 3);
    }

    #[test]
    fn respects_the_presentation_cap() {
        let mut net = Network::new(&[2, 2, 1]).unwrap();
        let mut sampler = BoolSampler::new(BoolGate::And, 3);
        let config = TrainConfig {
            streak: 1_000,
            max_presentations: 25,
            ..TrainConfig::seeded(3)
        };
        let report = train_until_streak(&mut net, &mut sampler, &config).unwrap();
        assert_eq!(report.presentations, 25);
        assert!(!report.converged);
    }

    #[test]
    fn rejects_networks_of_the_wrong_shape() {
        let mut net = Network::new(&[3, 1]).unwrap();
        let mut sampler = BoolSampler::new(BoolGate::And, 0);
        let err = train_until_streak(&mut net, &mut sampler, &TrainConfig::default()).unwrap_err();
        assert!(matches!(err, NetworkError::Config(_)));
        assert!(evaluate(&mut net, &mut sampler, 4, 0.5).is_err());
    }

    #[test]
    fn evaluation_does_not_train() {
        let mut net = Network::new(&[2, 2, 1]).unwrap();
        let before = net.clone();
        let mut sampler = BoolSampler::new(BoolGate::And, 5);
        let eval = evaluate(&mut net, &mut sampler, 100, 0.5).unwrap();
        assert_eq!(eval.total(), 100);
        for (a, b) in net.layers().iter().zip(before.layers()) {
            assert_eq!(a.weights(), b.weights());
        }
    }

    #[test]
    fn constant_weights_already_separate_and() {
        // every weight 0.5: [0, 1] gives 0.5 through both layers, [1, 1] gives 1.0
        let mut net = Network::new(&[2, 2, 1]).unwrap();
        assert!(classify(&mut net, &[1.0, 1.0], 0.5).unwrap());
        assert!(!classify(&mut net, &[0.0, 1.0], 0.5).unwrap());
        assert!(!classify(&mut net, &[0.0, 0.0], 0.5).unwrap());
    }
}
