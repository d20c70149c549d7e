use thiserror::Error;

/// Error type for splitting, combining, and share-handling operations
#[derive(Error, Debug)]
pub enum ShamirError {
    /// Threshold below the scheme minimum (must be >= 2)
    #[error("threshold must be at least 2, got {0}")]
    ThresholdTooLow(u32),

    /// Threshold exceeds the number of shares being produced
    #[error("threshold {threshold} exceeds total shares {shares}")]
    ThresholdExceedsShares { threshold: u32, shares: u32 },

    /// Combine was called with an empty input
    #[error("no shares provided")]
    NoSharesProvided,

    /// Fewer shares supplied than the threshold requires
    #[error("need at least {required} shares, got {provided}")]
    InsufficientShares { provided: u32, required: u32 },

    /// A share's value does not hash to its recorded checksum
    #[error("checksum mismatch for share {index}")]
    ShareChecksumMismatch { index: u32 },

    /// Shares from incompatible splits (differing thresholds)
    #[error("shares have different thresholds")]
    SharesDifferentThresholds,

    /// Reserved: shares with conflicting checksums for the same index
    #[error("shares have different checksums")]
    SharesDifferentChecksums,

    /// String share that does not match `index:threshold:checksum:value`
    #[error("invalid share format: {0}")]
    InvalidShareFormat(String),

    /// Structured share missing a field or carrying a wrongly typed one
    #[error("share is missing required fields")]
    ShareMissingRequiredFields,

    /// Collection lookup for an index that is not present
    #[error("share {0} not found")]
    ShareNotFound(u32),

    /// Decoded share payload is not an array
    #[error("share payload is not an array")]
    InvalidShareDataFormat,

    /// Share payload element is not a decimal numeric string
    #[error("share payload element is not a decimal string")]
    InvalidChunkDataType,

    /// Base64 share value failed strict decoding
    #[error("base64 decoding failed: {0}")]
    Base64DecodeFailed(#[from] base64::DecodeError),

    /// Hex share value failed strict decoding
    #[error("hex decoding failed: {0}")]
    HexDecodeFailed(#[from] hex::FromHexError),

    /// Modular inverse of zero (or of a value sharing a factor with the modulus)
    #[error("no modular inverse exists")]
    NoModularInverse,

    /// Reserved: a chunk value at or above the field prime
    #[error("secret chunk too large for the configured prime")]
    SecretTooLarge,

    /// The platform CSPRNG could not be reached
    #[error("random number generator unavailable")]
    RngUnavailable,

    /// Unusable configuration (e.g. a prime too small to hold one byte)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ShamirError>;
