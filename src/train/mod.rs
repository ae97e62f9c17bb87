pub mod loop_fn;
pub mod report;
pub mod sampler;
pub mod train_config;

pub use loop_fn::{classify, evaluate, train_until_streak};
pub use report::{Evaluation, TrainReport};
pub use sampler::{BoolGate, BoolSampler, Sample};
pub use train_config::{RunConfig, TrainConfig};
