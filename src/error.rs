//! Error types for the convolutional codec.
//!
//! All validation is eager: configuration problems are rejected at codec
//! construction, and malformed inputs are rejected before any encoding or
//! decoding work starts. A decode over a valid-length, valid-alphabet
//! sequence never fails, no matter how corrupted the bits are.

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during codec construction, encoding, or decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("Constraint length must be between 1 and 64, got {0}")]
    InvalidConstraint(usize),

    #[error("At least one generator polynomial is required")]
    EmptyPolynomials,

    #[error("At most 64 generator polynomials are supported, got {0}")]
    TooManyPolynomials(usize),

    #[error("Polynomial must be positive and less than 2^{constraint}, got {polynomial}")]
    InvalidPolynomial { polynomial: u64, constraint: usize },

    #[error("Expected a binary sequence, found {found:?} at position {position}")]
    InvalidBitChar { found: char, position: usize },

    #[error("Received length must be a positive multiple of {multiple}, got {length}")]
    LengthNotMultiple { length: usize, multiple: usize },

    #[error("Received sequence holds {symbols} symbols, fewer than the {tail} flush symbols")]
    ReceivedTooShort { symbols: usize, tail: usize },
}
