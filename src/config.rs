use num_bigint::BigUint;
use num_integer::Integer;
use once_cell::sync::Lazy;

use crate::encoding::Encoding;
use crate::error::{Result, ShamirError};

/// 2^128 - 159, the largest 128-bit prime
pub static PRIME_128: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(b"340282366920938463463374607431768211297", 10)
        .expect("valid prime constant")
});

/// The secp256k1 field prime, 2^256 - 2^32 - 977
pub static PRIME_256: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(
        b"115792089237316195423570985008687907853269984665640564039457584007908834671663",
        10,
    )
    .expect("valid prime constant")
});

/// 2^512 - 569, the largest 512-bit prime
pub static PRIME_512: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(
        b"134078079299425970995740249982058461274793658205923933777235614437217640300735\
          46976801874298166903427690031858186486050853753882811946569946433649006083527",
        10,
    )
    .expect("valid prime constant")
});

/// Chunk size used with [`PRIME_256`], matching existing share payloads
const PRIME_256_CHUNK_SIZE: usize = 30;

/// Configuration for a secret sharing scheme
///
/// Immutable pair of the field prime and the share value encoding. The
/// recognized primes [`PRIME_128`], [`PRIME_256`], and [`PRIME_512`] are
/// provided as constants; any other odd prime of at least 9 bits is
/// accepted.
///
/// # Example
/// ```
/// use prime_share::{Config, Encoding, PRIME_128};
///
/// let config = Config::new()
///     .with_prime(PRIME_128.clone())
///     .unwrap()
///     .with_encoding(Encoding::Hex);
///
/// assert_eq!(config.encoding(), Encoding::Hex);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Field prime; all share arithmetic happens modulo this value
    prime: BigUint,
    /// Text encoding applied to serialized share payloads
    encoding: Encoding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prime: PRIME_256.clone(),
            encoding: Encoding::Base64,
        }
    }
}

impl Config {
    /// Creates a configuration with the defaults (PRIME_256, base64)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field prime, validating that it can hold at least one
    /// secret byte
    pub fn with_prime(mut self, prime: BigUint) -> Result<Self> {
        if prime.bits() < 9 {
            return Err(ShamirError::InvalidConfig(
                "prime must be at least 9 bits to hold one secret byte".into(),
            ));
        }
        if prime.is_even() {
            return Err(ShamirError::InvalidConfig("prime must be odd".into()));
        }
        self.prime = prime;
        Ok(self)
    }

    /// Sets the share value encoding
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Returns the field prime
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Returns the share value encoding
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Number of secret bytes packed into one field element
    ///
    /// Derived as `(bitlen(prime) - 1) / 8`, which keeps every chunk value
    /// strictly below the prime. PRIME_256 uses 30 bytes for compatibility
    /// with payloads produced by existing implementations.
    pub fn chunk_size(&self) -> usize {
        if self.prime == *PRIME_256 {
            return PRIME_256_CHUNK_SIZE;
        }
        ((self.prime.bits() - 1) / 8) as usize
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.prime.bits() < 9 || self.prime.is_even() {
            return Err(ShamirError::InvalidConfig(
                "prime must be an odd integer of at least 9 bits".into(),
            ));
        }
        Ok(())
    }
}
