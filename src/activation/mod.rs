pub mod activation;

pub use activation::{gate, rectify};
