use thiserror::Error;

/// Construction-time configuration failures.
///
/// Both sketches validate their parameters up front and fail atomically:
/// no partially-initialized structure is ever observable.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("bit vector size must be greater than 0")]
    ZeroSize,

    #[error("number of hash functions must be greater than 0")]
    ZeroHashes,

    #[error("capacity must be greater than 0")]
    ZeroCapacity,

    #[error("false positive rate must be between 0 and 1, got {rate}")]
    InvalidFalsePositiveRate { rate: f64 },

    #[error("precision {precision} outside supported range {min}..={max}")]
    PrecisionOutOfRange { precision: u8, min: u8, max: u8 },
}
