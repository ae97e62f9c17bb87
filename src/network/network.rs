use log::{debug, trace};

use crate::{
    error::{NetworkError, Result},
    layers::dense::{Layer, DEFAULT_WEIGHT},
    network::spec::NetworkSpec,
};

/// A chain of rectifier layers with widths fixed at construction.
///
/// Layer `k` reads the activations of layer `k - 1` (layer 0 reads the
/// network input). The last layer is the output layer. Every layer owns its
/// storage, so a `clone()` is a fully independent network.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from layer widths, input width first.
    ///
    /// `[2, 2, 1]` is two inputs, one hidden layer of two neurons and a
    /// single output neuron. Every weight starts at `0.5`.
    pub fn new(widths: &[usize]) -> Result<Network> {
        Network::with_weight(widths, DEFAULT_WEIGHT)
    }

    /// Same as [`Network::new`] with every weight set to `weight`.
    pub fn with_weight(widths: &[usize], weight: f32) -> Result<Network> {
        if widths.len() < 2 {
            return Err(NetworkError::TooFewWidths { got: widths.len() });
        }
        if let Some(index) = widths.iter().position(|&w| w == 0) {
            return Err(NetworkError::ZeroWidth { index });
        }

        let layers = widths
            .windows(2)
            .map(|pair| Layer::with_weight(pair[0], pair[1], weight))
            .collect();

        debug!("built network {widths:?} with initial weight {weight}");
        Ok(Network { layers })
    }

    /// Assembles a network from prebuilt layers, checking that each layer's
    /// width matches the input count of the one after it.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Network> {
        if layers.is_empty() {
            return Err(NetworkError::Empty);
        }
        if let Some(layer) = layers.iter().position(|l| l.width() == 0 || l.input_count() == 0) {
            let index = if layers[layer].input_count() == 0 { layer } else { layer + 1 };
            return Err(NetworkError::ZeroWidth { index });
        }
        for (k, pair) in layers.windows(2).enumerate() {
            if pair[0].width() != pair[1].input_count() {
                return Err(NetworkError::ChainMismatch {
                    layer: k,
                    width: pair[0].width(),
                    next_inputs: pair[1].input_count(),
                });
            }
        }

        let network = Network { layers };
        debug!("assembled network {:?} from layers", network.widths());
        Ok(network)
    }

    /// Builds the network a [`NetworkSpec`] describes, after validating it.
    pub fn from_spec(spec: &NetworkSpec) -> Result<Network> {
        spec.validate()?;
        Network::with_weight(&spec.widths, spec.initial_weight)
    }

    /// Forward pass through every layer, input to output.
    ///
    /// Read the result with [`Network::output`].
    pub fn compute(&mut self, inputs: &[f32]) -> Result<()> {
        self.layers[0].compute(inputs)?;
        for k in 1..self.layers.len() {
            let (done, rest) = self.layers.split_at_mut(k);
            rest[0].compute(done[k - 1].neurons())?;
        }

        trace!("compute {inputs:?} -> {:?}", self.output());
        Ok(())
    }

    /// Backward pass against `expected`, which is sized to the output layer.
    ///
    /// The output layer updates first, straight from the target. Each earlier
    /// layer then derives its deltas from the layer after it, whose deltas
    /// and weights are already updated.
    pub fn backprop(&mut self, expected: &[f32]) -> Result<()> {
        let last = self.layers.len() - 1;
        self.layers[last].backprop(expected)?;

        for k in (0..last).rev() {
            let (head, tail) = self.layers.split_at_mut(k + 1);
            head[k].backprop_hidden(&tail[0])?;
        }

        trace!("backprop {expected:?}, output deltas {:?}", self.layers[last].deltas());
        Ok(())
    }

    /// Activations of the output layer from the last `compute`.
    pub fn output(&self) -> &[f32] {
        self.output_layer().neurons()
    }

    pub fn output_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Number of layers, not counting the input.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    pub fn input_width(&self) -> usize {
        self.layers[0].input_count()
    }

    pub fn output_width(&self) -> usize {
        self.output_layer().width()
    }

    /// The width list this network was built from, input width first.
    pub fn widths(&self) -> Vec<usize> {
        std::iter::once(self.input_width())
            .chain(self.layers.iter().map(Layer::width))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_one_layer_per_width_pair() {
        let net = Network::new(&[3, 4, 2, 1]).unwrap();
        assert_eq!(net.depth(), 3);
        assert_eq!(net.widths(), vec![3, 4, 2, 1]);
        assert_eq!(net.layer(1).unwrap().input_count(), 4);
        assert_eq!(net.layer(1).unwrap().width(), 2);
        assert!(net.layer(3).is_none());
    }

    #[test]
    fn rejects_short_width_lists() {
        assert!(matches!(Network::new(&[]), Err(NetworkError::TooFewWidths { got: 0 })));
        assert!(matches!(Network::new(&[4]), Err(NetworkError::TooFewWidths { got: 1 })));
    }

    #[test]
    fn rejects_zero_widths() {
        assert!(matches!(Network::new(&[2, 0, 1]), Err(NetworkError::ZeroWidth { index: 1 })));
    }

    #[test]
    fn from_layers_checks_the_chain() {
        let err = Network::from_layers(vec![Layer::new(2, 3), Layer::new(2, 1)]).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::ChainMismatch { layer: 0, width: 3, next_inputs: 2 }
        ));
        assert!(matches!(Network::from_layers(vec![]), Err(NetworkError::Empty)));

        let net = Network::from_layers(vec![Layer::new(2, 3), Layer::new(3, 1)]).unwrap();
        assert_eq!(net.widths(), vec![2, 3, 1]);
    }

    #[test]
    fn single_layer_network_is_its_output_layer() {
        let mut net = Network::new(&[2, 1]).unwrap();
        net.compute(&[1.0, 1.0]).unwrap();
        net.backprop(&[1.0]).unwrap();
        assert_eq!(net.output_layer().deltas(), &[0.0]);
        assert_eq!(net.output(), net.layers()[0].neurons());
    }

    #[test]
    fn compute_and_backprop_check_lengths() {
        let mut net = Network::new(&[2, 2, 1]).unwrap();
        assert!(matches!(
            net.compute(&[1.0]),
            Err(NetworkError::InputLength { expected: 2, got: 1 })
        ));
        assert!(matches!(
            net.backprop(&[1.0, 1.0]),
            Err(NetworkError::TargetLength { expected: 1, got: 2 })
        ));
    }

    #[test]
    fn backprop_reaches_the_first_layer() {
        let mut net = Network::new(&[2, 2, 1]).unwrap();
        net.compute(&[1.0, 1.0]).unwrap();
        net.backprop(&[0.0]).unwrap();

        // output delta -1 reaches the hidden layer through 0.5 weights
        assert_eq!(net.layers()[1].deltas(), &[-1.0]);
        assert_eq!(net.layers()[0].deltas(), &[-0.5, -0.5]);
        assert!(net.layers()[0].weights().iter().all(|&w| w == 0.25));
    }

    #[test]
    fn hidden_deltas_read_the_updated_output_weights() {
        let mut net = Network::new(&[2, 2, 1]).unwrap();
        net.compute(&[1.0, 1.0]).unwrap();
        net.backprop(&[0.5]).unwrap();

        // output: delta -0.5, weights 0.5 + 0.5 * -0.5 * 0.5 = 0.375
        assert_eq!(net.layers()[1].deltas(), &[-0.5]);
        assert!(net.layers()[1].weights().iter().all(|&w| w == 0.375));
        // hidden: -0.5 * 0.375, not -0.5 * 0.5
        assert_eq!(net.layers()[0].deltas(), &[-0.1875, -0.1875]);
        assert!(net.layers()[0].weights().iter().all(|&w| w == 0.40625));
    }

    #[test]
    fn from_spec_rejects_non_finite_weights() {
        let spec = NetworkSpec { widths: vec![2, 2, 1], initial_weight: f32::NAN };
        assert!(matches!(Network::from_spec(&spec), Err(NetworkError::Config(_))));
    }
}
