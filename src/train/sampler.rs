use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Two-input Boolean function the driver teaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoolGate {
    #[default]
    And,
    Or,
    Nand,
    Nor,
}

impl BoolGate {
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            BoolGate::And => a && b,
            BoolGate::Or => a || b,
            BoolGate::Nand => !(a && b),
            BoolGate::Nor => !(a || b),
        }
    }

    /// All four rows of the truth table.
    pub fn truth_table(self) -> [Sample; 4] {
        [(false, false), (false, true), (true, false), (true, true)]
            .map(|(a, b)| Sample::new(a, b, self.apply(a, b)))
    }
}

/// One labelled Boolean pair, with inputs encoded as `0.0` / `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub inputs: [f32; 2],
    pub label: bool,
}

impl Sample {
    pub fn new(a: bool, b: bool, label: bool) -> Sample {
        Sample {
            inputs: [encode(a), encode(b)],
            label,
        }
    }

    /// The label as a one-element target vector.
    pub fn target(&self) -> [f32; 1] {
        [encode(self.label)]
    }
}

fn encode(bit: bool) -> f32 {
    if bit { 1.0 } else { 0.0 }
}

/// Seeded source of uniformly drawn Boolean pairs.
#[derive(Debug, Clone)]
pub struct BoolSampler {
    gate: BoolGate,
    rng: ChaCha8Rng,
}

impl BoolSampler {
    pub fn new(gate: BoolGate, seed: u64) -> BoolSampler {
        BoolSampler {
            gate,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Sampler seeded from the operating system.
    pub fn from_entropy(gate: BoolGate) -> BoolSampler {
        BoolSampler {
            gate,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn gate(&self) -> BoolGate {
        self.gate
    }

    /// Draws one sample; each input bit is an independent fair coin.
    pub fn draw(&mut self) -> Sample {
        let bits: u32 = self.rng.gen();
        let a = bits & 1 != 0;
        let b = bits & 2 != 0;
        Sample::new(a, b, self.gate.apply(a, b))
    }
}

impl Iterator for BoolSampler {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        Some(self.draw())
    }
}
