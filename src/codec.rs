use num_bigint::BigUint;
use num_traits::Zero;

use crate::config::Config;

/// Byte-string to field-element conversion with chunking
///
/// Secrets longer than one field element are cut into `chunk_size`-byte
/// slices, each interpreted as a big-endian unsigned integer. The chunk
/// size is derived from the configured prime so that every chunk value is
/// strictly below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    chunk_size: usize,
}

impl Codec {
    /// Creates a codec for the configuration's prime
    pub fn new(config: &Config) -> Self {
        Self {
            chunk_size: config.chunk_size(),
        }
    }

    /// Returns the number of secret bytes per field element
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Splits a secret into consecutive chunks of at most `chunk_size`
    /// bytes
    ///
    /// An empty secret yields a single empty chunk, so that combining a
    /// valid share set for it reproduces the empty string.
    pub fn chunk_secret(&self, secret: &[u8]) -> Vec<Vec<u8>> {
        if secret.is_empty() {
            return vec![Vec::new()];
        }
        secret.chunks(self.chunk_size).map(<[u8]>::to_vec).collect()
    }

    /// Interprets chunk bytes as a big-endian unsigned integer; empty
    /// chunks map to zero
    pub fn chunk_to_field(bytes: &[u8]) -> BigUint {
        BigUint::from_bytes_be(bytes)
    }

    /// Renders a reconstructed field element back into chunk bytes
    ///
    /// Non-final chunks are always exactly `chunk_size` bytes by
    /// construction, so they are left-padded with zero bytes back to that
    /// width. The final chunk is emitted unpadded (a zero value becomes
    /// the empty string); its original length is not recorded in the
    /// share payload, so leading zero bytes in a secret's final chunk are
    /// not recoverable.
    pub fn field_to_chunk(&self, value: &BigUint, is_final: bool) -> Vec<u8> {
        if is_final {
            if value.is_zero() {
                return Vec::new();
            }
            return value.to_bytes_be();
        }

        let raw = value.to_bytes_be();
        if raw.len() >= self.chunk_size {
            return raw;
        }
        let mut chunk = vec![0u8; self.chunk_size];
        chunk[self.chunk_size - raw.len()..].copy_from_slice(&raw);
        chunk
    }
}
