use crate::{
    activation::activation::{gate, rectify},
    error::{NetworkError, Result},
    math::matrix::Matrix,
};

/// Step size shared by every weight update in a network.
pub const LEARNING_RATE: f32 = 0.5;

/// Constant every weight starts from unless another value is requested.
pub const DEFAULT_WEIGHT: f32 = 0.5;

/// One fully-connected rectifier layer.
///
/// `weights` is `width x input_count`: one row per input, one column per
/// neuron, so `weights.get(n, i)` is the weight from input `i` into neuron
/// `n`. `neurons` holds the activations of the last `compute`, `deltas` the
/// error signal of the last backward step; both start at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    input_count: usize,
    width: usize,
    neurons: Vec<f32>,
    deltas: Vec<f32>,
    weights: Matrix,
}

impl Layer {
    pub fn new(input_count: usize, width: usize) -> Layer {
        Layer::with_weight(input_count, width, DEFAULT_WEIGHT)
    }

    /// Builds a layer whose weights all start at `weight`.
    pub fn with_weight(input_count: usize, width: usize, weight: f32) -> Layer {
        Layer {
            input_count,
            width,
            neurons: vec![0.0; width],
            deltas: vec![0.0; width],
            weights: Matrix::filled(width, input_count, weight),
        }
    }

    pub fn input_count(&self) -> usize {
        self.input_count
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn neurons(&self) -> &[f32] {
        &self.neurons
    }

    pub fn deltas(&self) -> &[f32] {
        &self.deltas
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    /// Forward pass: `neurons[n] = rectify(sum_i inputs[i] * w(n, i))`.
    ///
    /// Returns the fresh activations.
    pub fn compute(&mut self, inputs: &[f32]) -> Result<&[f32]> {
        if inputs.len() != self.input_count {
            return Err(NetworkError::InputLength {
                expected: self.input_count,
                got: inputs.len(),
            });
        }

        for n in 0..self.width {
            let net: f32 = inputs
                .iter()
                .enumerate()
                .map(|(i, x)| x * self.weights.get(n, i))
                .sum();
            self.neurons[n] = rectify(net);
        }

        Ok(&self.neurons)
    }

    /// Output-layer update, driven directly by the target.
    ///
    /// `deltas[n] = expected[n] - neurons[n]`, then every weight feeding
    /// neuron `n` moves by `LEARNING_RATE * deltas[n] * expected[n] *
    /// gate(neurons[n])`. The `expected[n]` factor is part of the rule.
    pub fn backprop(&mut self, expected: &[f32]) -> Result<()> {
        if expected.len() != self.width {
            return Err(NetworkError::TargetLength {
                expected: self.width,
                got: expected.len(),
            });
        }

        for (n, &target) in expected.iter().enumerate() {
            let delta = target - self.neurons[n];
            self.deltas[n] = delta;

            let step = LEARNING_RATE * delta * target * gate(self.neurons[n]);
            for i in 0..self.input_count {
                *self.weights.get_mut(n, i) += step;
            }
        }

        Ok(())
    }

    /// Hidden-layer update, driven by the layer this one feeds into.
    ///
    /// `next` must already have run its own backward step: its deltas and
    /// (updated) weights give `deltas[n] = sum_j next.deltas[j] * next.w(j, n)`.
    /// Every weight feeding neuron `n` then moves by
    /// `LEARNING_RATE * deltas[n] * gate(neurons[n])`.
    pub fn backprop_hidden(&mut self, next: &Layer) -> Result<()> {
        if next.input_count != self.width {
            return Err(NetworkError::NotAdjacent {
                width: self.width,
                next_inputs: next.input_count,
            });
        }

        for n in 0..self.width {
            let delta: f32 = next
                .deltas
                .iter()
                .enumerate()
                .map(|(j, d)| d * next.weights.get(j, n))
                .sum();
            self.deltas[n] = delta;

            let step = LEARNING_RATE * delta * gate(self.neurons[n]);
            for i in 0..self.input_count {
                *self.weights.get_mut(n, i) += step;
            }
        }

        Ok(())
    }
}
