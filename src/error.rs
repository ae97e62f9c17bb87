use thiserror::Error;

/// Everything that can go wrong when building or driving a [`Network`].
///
/// Dimension problems are reported here instead of being left to the caller:
/// a network never reads past the end of an input or target slice.
///
/// [`Network`]: crate::network::network::Network
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("a network needs at least 2 widths (inputs + one layer), got {got}")]
    TooFewWidths { got: usize },

    #[error("width at position {index} is zero")]
    ZeroWidth { index: usize },

    #[error("a network needs at least one layer")]
    Empty,

    #[error("layer {layer} has {width} neurons but the next layer expects {next_inputs} inputs")]
    ChainMismatch {
        layer: usize,
        width: usize,
        next_inputs: usize,
    },

    #[error("a layer of width {width} cannot feed a layer expecting {next_inputs} inputs")]
    NotAdjacent { width: usize, next_inputs: usize },

    #[error("expected {expected} inputs, got {got}")]
    InputLength { expected: usize, got: usize },

    #[error("expected {expected} target values, got {got}")]
    TargetLength { expected: usize, got: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_sizes() {
        let err = NetworkError::InputLength { expected: 2, got: 3 };
        assert_eq!(err.to_string(), "expected 2 inputs, got 3");

        let err = NetworkError::ChainMismatch { layer: 0, width: 2, next_inputs: 3 };
        assert!(err.to_string().contains("2 neurons"));
        assert!(err.to_string().contains("3 inputs"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: NetworkError = io.into();
        assert!(matches!(err, NetworkError::Io(_)));
    }
}
