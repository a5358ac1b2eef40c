use thiserror::Error;

// Need to explicitly import alloc because we are in a no-std environment.
extern crate alloc;
use alloc::string::String;

/// Errors related to FFT domain construction and transforms.
///
/// The `FFTError` enum covers every failure the FFT engine can report:
/// unsupported domain sizes, non-power-of-two inputs, and inputs that do
/// not fit the domain they are transformed over.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FFTError {
    /// Requested domain scale exceeds the two-adicity of the scalar field.
    #[error("fft scale {0} exceeds maximum supported scale of 28")]
    ScaleTooLarge(u8),

    /// Input length is zero or not a power of two.
    #[error("length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// Input length does not fit the domain it is transformed over.
    #[error("length mismatch: domain supports up to {max_width}, got {actual}")]
    LengthMismatch { max_width: usize, actual: usize },

    /// Destination buffer is smaller than the polynomial being built into it.
    #[error("destination too small: need {needed}, got {actual}")]
    InvalidDestinationLength { needed: usize, actual: usize },

    /// Zero polynomial grew past the requested output length.
    #[error("zero polynomial length {actual} exceeds requested length {requested}")]
    ZeroPolyTooLarge { actual: usize, requested: usize },
}

/// Errors related to Polynomial operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolynomialError {
    /// Error related to Fast Fourier Transform (FFT) operations with a descriptive message.
    #[error("FFT error: {0}")]
    FFTError(String),

    /// A generic error with a descriptive message.
    #[error("generic error: {0}")]
    GenericError(String),
}

/// Errors related to KZG operations.
///
/// The `KzgError` enum encapsulates all possible errors that can occur during
/// KZG-related operations, including those from `FFTError` and
/// `PolynomialError`. It also includes additional errors specific to
/// commitment, proof generation, and erasure recovery.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum KzgError {
    /// Wraps errors originating from FFT operations.
    #[error("FFT error: {0}")]
    FFTError(#[from] FFTError),

    /// Wraps errors originating from Polynomial operations.
    #[error("polynomial error: {0}")]
    PolynomialError(#[from] PolynomialError),

    #[error("MSM error: {0}")]
    MsmError(String),

    /// Error related to serialization with a descriptive message.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Error when polynomial degree exceeds SRS capacity
    #[error("polynomial degree {polynomial_len} exceeds SRS capacity {srs_len}")]
    SrsCapacityExceeded {
        polynomial_len: usize,
        srs_len: usize,
    },

    /// Error related to commitment processes with a descriptive message.
    #[error("not on curve error: {0}")]
    NotOnCurveError(String),

    /// Error indicating an invalid commit operation with a descriptive message.
    #[error("commit error: {0}")]
    CommitError(String),

    /// Erasure recovery produced a polynomial whose degree exceeds the data
    /// length. The upstream chunks are corrupted or inconsistent.
    #[error("recovered polynomial has nonzero coefficient {index} past the data length")]
    RecoveryMismatch { index: usize },

    /// A generic error with a descriptive message.
    #[error("generic error: {0}")]
    GenericError(String),

    /// Error indicating an invalid denominator scenario, typically in mathematical operations.
    #[error("invalid denominator")]
    InvalidDenominator,

    /// Error indicating an invalid input length scenario, typically in data processing.
    #[error("invalid input length")]
    InvalidInputLength,

    /// Error indicating invalid field element bytes that exceed the field modulus.
    #[error("invalid field element: {0}")]
    InvalidFieldElement(String),
}
