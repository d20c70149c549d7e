use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::codec::Codec;
use crate::config::Config;
use crate::error::{Result, ShamirError};
use crate::field::PrimeField;
use crate::interpolation::interpolate_at_zero;
use crate::polynomial::Polynomial;
use crate::share::{Share, ShareCollection, ShareInput};

/// Shamir's (k, n) threshold secret sharing over a prime field
///
/// Holds an immutable [`Config`] and dispatches the split and combine
/// pipelines; it carries no cryptographic state of its own. Splitting
/// chunks the secret into field elements, embeds each chunk as the
/// constant term of a fresh random polynomial of degree k-1, and
/// evaluates it at x = 1..n; combining interpolates the constant terms
/// back out of any k shares.
///
/// # Security
///
/// - Polynomial coefficients come from a ChaCha20 CSPRNG seeded from the
///   platform RNG and are cleared after each chunk
/// - Share checksums are verified with a constant-time comparison before
///   any payload is decoded
/// - Fewer than k shares reveal nothing about the secret; the checksum is
///   integrity-only and does not authenticate shares
///
/// # Example
/// ```
/// use prime_share::SecretSharing;
///
/// let sharing = SecretSharing::default();
/// let shares = sharing.split(b"my secret data", 3, 5).unwrap();
///
/// let reconstructed = sharing.combine(shares.shares()[0..3].iter()).unwrap();
/// assert_eq!(reconstructed, b"my secret data");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SecretSharing {
    /// Field prime and share encoding
    config: Config,
}

impl SecretSharing {
    /// Creates a scheme with the default configuration (PRIME_256, base64)
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheme with a custom configuration
    ///
    /// # Example
    /// ```
    /// use prime_share::{Config, Encoding, SecretSharing};
    ///
    /// let sharing = SecretSharing::with_config(Config::new().with_encoding(Encoding::Hex));
    /// assert_eq!(sharing.config().encoding(), Encoding::Hex);
    /// ```
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Splits a secret into `shares` shares, any `threshold` of which
    /// reconstruct it
    ///
    /// The returned collection is ordered by share index 1..n. Outputs
    /// are not reproducible across calls: every chunk gets a fresh random
    /// polynomial.
    ///
    /// # Errors
    /// - [`ShamirError::ThresholdTooLow`] if `threshold < 2`
    /// - [`ShamirError::ThresholdExceedsShares`] if `threshold > shares`
    /// - [`ShamirError::RngUnavailable`] if the platform CSPRNG cannot be
    ///   reached
    ///
    /// # Example
    /// ```
    /// use prime_share::SecretSharing;
    ///
    /// let sharing = SecretSharing::default();
    /// let shares = sharing.split(b"secret", 3, 5).unwrap();
    /// assert_eq!(shares.len(), 5);
    /// ```
    pub fn split(&self, secret: &[u8], threshold: u32, shares: u32) -> Result<ShareCollection> {
        let mut rng =
            ChaCha20Rng::try_from_rng(&mut OsRng).map_err(|_| ShamirError::RngUnavailable)?;
        self.split_inner(secret, threshold, shares, &mut rng)
    }

    /// Splits with a caller-supplied RNG, for deterministic tests
    #[cfg(any(test, feature = "testing"))]
    pub fn split_with_rng<R: RngCore>(
        &self,
        secret: &[u8],
        threshold: u32,
        shares: u32,
        rng: &mut R,
    ) -> Result<ShareCollection> {
        self.split_inner(secret, threshold, shares, rng)
    }

    fn split_inner<R: RngCore + ?Sized>(
        &self,
        secret: &[u8],
        threshold: u32,
        shares: u32,
        rng: &mut R,
    ) -> Result<ShareCollection> {
        if threshold < 2 {
            return Err(ShamirError::ThresholdTooLow(threshold));
        }
        if threshold > shares {
            return Err(ShamirError::ThresholdExceedsShares { threshold, shares });
        }
        self.config.validate()?;
        if BigUint::from(shares) >= *self.config.prime() {
            return Err(ShamirError::InvalidConfig(
                "total shares must be below the field prime".into(),
            ));
        }

        let field = PrimeField::new(self.config.prime().clone());
        let codec = Codec::new(&self.config);

        #[cfg_attr(not(feature = "zeroize"), allow(unused_mut))]
        let mut chunks = codec.chunk_secret(secret);

        // One polynomial per chunk, evaluated at every share index before
        // the next chunk's polynomial is built
        let mut evaluations: Vec<Vec<BigUint>> = (0..shares)
            .map(|_| Vec::with_capacity(chunks.len()))
            .collect();
        for chunk in &chunks {
            let polynomial =
                Polynomial::random(&field, threshold - 1, Codec::chunk_to_field(chunk), rng);
            for (i, row) in evaluations.iter_mut().enumerate() {
                let x = BigUint::from(i as u32 + 1);
                row.push(polynomial.evaluate(&x));
            }
            // dropping the polynomial clears its coefficients
        }

        #[cfg(feature = "zeroize")]
        for chunk in &mut chunks {
            chunk.zeroize();
        }

        let assembled = evaluations
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let payload: Vec<String> = row.iter().map(|y| y.to_str_radix(10)).collect();
                let json = serde_json::to_string(&payload).expect("string array serializes");
                let value = self.config.encoding().encode(json.as_bytes());
                Share::new(i as u32 + 1, value, threshold)
            })
            .collect();

        Ok(ShareCollection::new(assembled))
    }

    /// Reconstructs a secret from shares or their encoded string forms
    ///
    /// Accepts anything convertible into [`ShareInput`]; encoded strings
    /// are parsed first. All supplied shares participate in the
    /// interpolation, and the result is invariant under input order and
    /// under the choice of subset of size >= threshold.
    ///
    /// # Errors
    /// - [`ShamirError::NoSharesProvided`] for an empty input
    /// - [`ShamirError::InvalidShareFormat`] for a malformed string form,
    ///   a zero index, or duplicate indices
    /// - [`ShamirError::ShareChecksumMismatch`] when a share's value was
    ///   corrupted
    /// - [`ShamirError::SharesDifferentThresholds`] for shares of
    ///   incompatible splits
    /// - [`ShamirError::InsufficientShares`] when fewer than threshold
    ///   shares are supplied
    /// - [`ShamirError::Base64DecodeFailed`] / [`ShamirError::HexDecodeFailed`] /
    ///   [`ShamirError::InvalidShareDataFormat`] / [`ShamirError::InvalidChunkDataType`]
    ///   for undecodable payloads
    ///
    /// # Example
    /// ```
    /// use prime_share::SecretSharing;
    ///
    /// let sharing = SecretSharing::default();
    /// let shares = sharing.split(b"portable", 2, 3).unwrap();
    ///
    /// // Shares survive the trip through their string form
    /// let encoded: Vec<String> = shares.iter().map(|s| s.to_string()).collect();
    /// let secret = sharing.combine(encoded).unwrap();
    /// assert_eq!(secret, b"portable");
    /// ```
    pub fn combine<I>(&self, inputs: I) -> Result<Vec<u8>>
    where
        I: IntoIterator,
        I::Item: Into<ShareInput>,
    {
        let mut shares = Vec::new();
        for input in inputs {
            shares.push(input.into().into_share()?);
        }
        if shares.is_empty() {
            return Err(ShamirError::NoSharesProvided);
        }

        for share in &shares {
            share.verify_checksum()?;
        }

        let threshold = shares[0].threshold();
        if shares.iter().any(|share| share.threshold() != threshold) {
            return Err(ShamirError::SharesDifferentThresholds);
        }

        if (shares.len() as u32) < threshold {
            return Err(ShamirError::InsufficientShares {
                provided: shares.len() as u32,
                required: threshold,
            });
        }

        // Share indices become interpolation x-coordinates and must be
        // positive and pairwise distinct
        for (i, share) in shares.iter().enumerate() {
            if share.index() == 0 {
                return Err(ShamirError::InvalidShareFormat(
                    "share index must be positive".into(),
                ));
            }
            if shares[..i].iter().any(|other| other.index() == share.index()) {
                return Err(ShamirError::InvalidShareFormat(format!(
                    "duplicate share index {}",
                    share.index()
                )));
            }
        }

        let encoding = self.config.encoding();
        let mut payloads = Vec::with_capacity(shares.len());
        for share in &shares {
            let decoded = encoding.decode(share.value())?;
            payloads.push(parse_payload(&decoded)?);
        }

        let chunk_count = payloads[0].len();
        if payloads.iter().any(|payload| payload.len() != chunk_count) {
            return Err(ShamirError::InvalidShareDataFormat);
        }

        let field = PrimeField::new(self.config.prime().clone());
        let codec = Codec::new(&self.config);

        let mut secret = Vec::new();
        for c in 0..chunk_count {
            let points: Vec<(BigUint, BigUint)> = shares
                .iter()
                .zip(&payloads)
                .map(|(share, payload)| (BigUint::from(share.index()), payload[c].clone()))
                .collect();
            let value = interpolate_at_zero(&field, &points)?;

            #[cfg_attr(not(feature = "zeroize"), allow(unused_mut))]
            let mut chunk = codec.field_to_chunk(&value, c == chunk_count - 1);
            secret.extend_from_slice(&chunk);
            #[cfg(feature = "zeroize")]
            chunk.zeroize();
        }

        Ok(secret)
    }

    /// Whether the given shares could come from the same split
    ///
    /// True iff all thresholds are equal; trivially true for fewer than
    /// two shares. This is the same check combine enforces, usable
    /// up-front without attempting a reconstruction.
    pub fn are_compatible(&self, shares: &[Share]) -> bool {
        shares
            .windows(2)
            .all(|pair| pair[0].threshold() == pair[1].threshold())
    }
}

/// Parses a decoded share payload: a JSON array of decimal numeric strings
fn parse_payload(decoded: &[u8]) -> Result<Vec<BigUint>> {
    let json: serde_json::Value =
        serde_json::from_slice(decoded).map_err(|_| ShamirError::InvalidShareDataFormat)?;
    let serde_json::Value::Array(elements) = json else {
        return Err(ShamirError::InvalidShareDataFormat);
    };

    elements
        .iter()
        .map(|element| {
            let text = element.as_str().ok_or(ShamirError::InvalidChunkDataType)?;
            if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ShamirError::InvalidChunkDataType);
            }
            BigUint::parse_bytes(text.as_bytes(), 10).ok_or(ShamirError::InvalidChunkDataType)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn test_split_validates_threshold() {
        let sharing = SecretSharing::default();
        assert!(matches!(
            sharing.split(b"secret", 1, 5),
            Err(ShamirError::ThresholdTooLow(1))
        ));
        assert!(matches!(
            sharing.split(b"secret", 0, 5),
            Err(ShamirError::ThresholdTooLow(0))
        ));
        assert!(matches!(
            sharing.split(b"secret", 5, 3),
            Err(ShamirError::ThresholdExceedsShares {
                threshold: 5,
                shares: 3
            })
        ));
    }

    #[test]
    fn test_split_produces_indexed_shares() {
        let sharing = SecretSharing::default();
        let shares = sharing.split(b"test-secret", 3, 5).unwrap();

        assert_eq!(shares.len(), 5);
        for (i, share) in shares.iter().enumerate() {
            assert_eq!(share.index(), i as u32 + 1);
            assert_eq!(share.threshold(), 3);
            assert!(share.verify_checksum().is_ok());
        }
    }

    #[test]
    fn test_split_combine_round_trip() {
        let sharing = SecretSharing::default();
        let shares = sharing.split(b"test-secret", 3, 5).unwrap();
        let secret = sharing.combine(shares.shares()[0..3].iter()).unwrap();
        assert_eq!(secret, b"test-secret");
    }

    #[test]
    fn test_deterministic_split_with_seeded_rng() {
        let sharing = SecretSharing::default();
        let mut rng_a = ChaCha20Rng::from_seed([42u8; 32]);
        let mut rng_b = ChaCha20Rng::from_seed([42u8; 32]);

        let a = sharing.split_with_rng(b"secret", 2, 3, &mut rng_a).unwrap();
        let b = sharing.split_with_rng(b"secret", 2, 3, &mut rng_b).unwrap();
        assert_eq!(a.shares(), b.shares());

        let mut rng_c = ChaCha20Rng::from_seed([43u8; 32]);
        let c = sharing.split_with_rng(b"secret", 2, 3, &mut rng_c).unwrap();
        assert_ne!(a.shares(), c.shares());
    }

    #[test]
    fn test_combine_rejects_empty_input() {
        let sharing = SecretSharing::default();
        let inputs: Vec<Share> = Vec::new();
        assert!(matches!(
            sharing.combine(inputs),
            Err(ShamirError::NoSharesProvided)
        ));
    }

    #[test]
    fn test_combine_rejects_duplicate_indices() {
        let sharing = SecretSharing::default();
        let shares = sharing.split(b"secret", 2, 3).unwrap();
        let duplicated = vec![shares.shares()[0].clone(), shares.shares()[0].clone()];
        assert!(matches!(
            sharing.combine(duplicated),
            Err(ShamirError::InvalidShareFormat(_))
        ));
    }

    #[test]
    fn test_combine_rejects_zero_index() {
        let sharing = SecretSharing::default();
        let shares = sharing.split(b"secret", 2, 2).unwrap();
        let good = &shares.shares()[0];
        let zero = Share::new(0, good.value().to_string(), good.threshold());
        let pair = vec![zero, shares.shares()[1].clone()];
        assert!(matches!(
            sharing.combine(pair),
            Err(ShamirError::InvalidShareFormat(_))
        ));
    }

    #[test]
    fn test_parse_payload_rejects_non_array() {
        assert!(matches!(
            parse_payload(br#"{"a":1}"#),
            Err(ShamirError::InvalidShareDataFormat)
        ));
        assert!(matches!(
            parse_payload(b"not json"),
            Err(ShamirError::InvalidShareDataFormat)
        ));
    }

    #[test]
    fn test_parse_payload_rejects_non_decimal_elements() {
        assert!(matches!(
            parse_payload(br#"[123]"#),
            Err(ShamirError::InvalidChunkDataType)
        ));
        assert!(matches!(
            parse_payload(br#"["12a"]"#),
            Err(ShamirError::InvalidChunkDataType)
        ));
        assert!(matches!(
            parse_payload(br#"[""]"#),
            Err(ShamirError::InvalidChunkDataType)
        ));
    }

    #[test]
    fn test_parse_payload_accepts_decimal_strings() {
        let values = parse_payload(br#"["0","123456789012345678901234567890"]"#).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], BigUint::from(0u32));
    }

    #[test]
    fn test_are_compatible() {
        let sharing = SecretSharing::default();
        let a = sharing.split(b"secret-a", 3, 5).unwrap();
        let b = sharing.split(b"secret-b", 2, 5).unwrap();

        assert!(sharing.are_compatible(a.shares()));
        assert!(sharing.are_compatible(&[]));
        assert!(sharing.are_compatible(&a.shares()[..1]));

        let mixed = vec![a.shares()[0].clone(), b.shares()[0].clone()];
        assert!(!sharing.are_compatible(&mixed));
    }
}
