use serde::{Deserialize, Serialize};

use crate::{
    error::{NetworkError, Result},
    layers::dense::DEFAULT_WEIGHT,
};

/// Serializable description of a network's shape.
///
/// Only the topology and the constant the weights start from are stored;
/// trained weights are never written out.
///
/// ```json
/// { "widths": [2, 2, 1], "initial_weight": 0.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Layer widths, input width first. Needs at least two entries.
    pub widths: Vec<usize>,
    #[serde(default = "default_weight")]
    pub initial_weight: f32,
}

fn default_weight() -> f32 {
    DEFAULT_WEIGHT
}

impl NetworkSpec {
    pub fn new(widths: Vec<usize>) -> NetworkSpec {
        NetworkSpec { widths, initial_weight: DEFAULT_WEIGHT }
    }

    /// Checks the width list without building anything.
    pub fn validate(&self) -> Result<()> {
        if self.widths.len() < 2 {
            return Err(NetworkError::TooFewWidths { got: self.widths.len() });
        }
        if let Some(index) = self.widths.iter().position(|&w| w == 0) {
            return Err(NetworkError::ZeroWidth { index });
        }
        if !self.initial_weight.is_finite() {
            return Err(NetworkError::Config(format!(
                "initial_weight must be finite, got {}",
                self.initial_weight
            )));
        }
        Ok(())
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads and validates a spec from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec: NetworkSpec = serde_json::from_reader(reader)?;
        spec.validate()?;
        Ok(spec)
    }
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec::new(vec![2, 2, 1])
    }
}
