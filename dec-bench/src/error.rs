use thiserror::Error;

/// Errors that can occur while configuring or running the harness.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("unsupported width: {0} (expected 8, 16, 32 or 64)")]
    UnsupportedWidth(u32),

    #[error("value {value} does not fit in u{bits}")]
    ValueOutOfRange { value: String, bits: u32 },

    #[error("codec disagrees with std for u{bits} on {token:?}: codec={codec}, std={reference}")]
    Disagreement {
        bits: u32,
        token: String,
        codec: String,
        reference: String,
    },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}
