use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};
use crate::network::spec::NetworkSpec;
use crate::train::sampler::BoolGate;

/// Knobs for the streak-stopped training driver.
///
/// # Fields
/// - `gate`              — Boolean function to learn
/// - `streak`            — consecutive correct classifications that end training
/// - `max_presentations` — hard cap on samples shown, streak or not
/// - `threshold`         — output above this counts as `true`
/// - `seed`              — sampler seed; `None` draws one from the OS
/// - `eval_samples`      — fresh samples used by the evaluation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub gate: BoolGate,
    pub streak: usize,
    pub max_presentations: usize,
    pub threshold: f32,
    pub seed: Option<u64>,
    pub eval_samples: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            gate: BoolGate::And,
            streak: 3,
            max_presentations: 100_000,
            threshold: 0.5,
            seed: None,
            eval_samples: 100_000,
        }
    }
}

impl TrainConfig {
    pub fn seeded(seed: u64) -> Self {
        TrainConfig { seed: Some(seed), ..TrainConfig::default() }
    }

    pub fn validate(&self) -> Result<()> {
        if self.streak == 0 {
            return Err(NetworkError::Config("streak must be at least 1".into()));
        }
        if self.max_presentations == 0 {
            return Err(NetworkError::Config("max_presentations must be at least 1".into()));
        }
        if !self.threshold.is_finite() {
            return Err(NetworkError::Config(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Everything the `relu-stack` binary needs for one run: the topology plus
/// how to train it. Kept as two sections so the architecture can be shared
/// between runs with different training settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub network: NetworkSpec,
    #[serde(default)]
    pub training: TrainConfig,
}

impl RunConfig {
    /// Reads and validates a run configuration from a JSON file.
    pub fn load_json(path: &str) -> Result<RunConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: RunConfig = serde_json::from_reader(reader)?;
        config.network.validate()?;
        config.training.validate()?;
        Ok(config)
    }
}
