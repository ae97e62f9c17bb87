pub mod dense;

pub use dense::{Layer, DEFAULT_WEIGHT, LEARNING_RATE};
