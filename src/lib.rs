pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod error;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use layers::dense::{Layer, DEFAULT_WEIGHT, LEARNING_RATE};
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use error::{NetworkError, Result};
pub use train::{
    evaluate, train_until_streak, BoolGate, BoolSampler, Evaluation, RunConfig, TrainConfig,
    TrainReport,
};
