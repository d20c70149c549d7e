//! Shamir's Secret Sharing over large prime fields
//!
//! This library splits a secret byte string into n shares such that any k
//! of them reconstruct it exactly, while k-1 shares reveal nothing at all
//! (information-theoretic secrecy). Arithmetic happens in GF(p) for a
//! configurable large prime; secrets longer than one field element are
//! chunked transparently, and shares serialize to a portable
//! `index:threshold:checksum:value` string.
//!
//! ## Security Features
//!
//! - **Cryptographically secure randomness** - polynomial coefficients from
//!   ChaCha20Rng seeded by the platform RNG
//! - **Integrity checksums** - SHA-256 over each share value, verified with
//!   a constant-time comparison before reconstruction
//! - **Memory hygiene** - polynomial coefficients and secret chunk buffers
//!   are cleared after use
//! - **Memory safety** - written in safe Rust with zero unsafe blocks
//!
//! # Quick Start
//!
//! ```
//! use prime_share::SecretSharing;
//!
//! let sharing = SecretSharing::default();
//!
//! // Split a secret into 5 shares, any 3 of which reconstruct it
//! let secret = b"my secret data";
//! let shares = sharing.split(secret, 3, 5).unwrap();
//!
//! // Persist or distribute the portable string form
//! let stored: Vec<String> = shares.iter().map(|s| s.to_string()).collect();
//!
//! // Any 3 shares bring the secret back
//! let reconstructed = sharing.combine(stored[0..3].to_vec()).unwrap();
//! assert_eq!(reconstructed, secret);
//! ```
//!
//! ## Custom field prime and encoding
//!
//! ```
//! use prime_share::{Config, Encoding, SecretSharing, PRIME_128};
//!
//! let config = Config::new()
//!     .with_prime(PRIME_128.clone())
//!     .unwrap()
//!     .with_encoding(Encoding::Hex);
//!
//! let sharing = SecretSharing::with_config(config);
//! let shares = sharing.split(b"secret", 2, 3).unwrap();
//! let reconstructed = sharing.combine(shares.shares()[1..3].iter()).unwrap();
//! assert_eq!(reconstructed, b"secret");
//! ```

mod codec;
mod config;
mod encoding;
mod error;
mod field;
mod interpolation;
mod polynomial;
mod share;
mod shamir;

pub use codec::Codec;
pub use config::{Config, PRIME_128, PRIME_256, PRIME_512};
pub use encoding::Encoding;
pub use error::{Result, ShamirError};
pub use field::PrimeField;
pub use interpolation::interpolate_at_zero;
pub use polynomial::Polynomial;
pub use shamir::SecretSharing;
pub use share::{Share, ShareCollection, ShareInput};

// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        Config, Encoding, Result, SecretSharing, ShamirError, Share, ShareCollection, ShareInput,
    };
}
