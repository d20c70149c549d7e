use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Result, ShamirError};

/// One share of a split secret
///
/// Immutable record of a share's 1-based index (the x-coordinate its
/// y-values were evaluated at), its encoded payload, the reconstruction
/// threshold, and a lowercase-hex SHA-256 checksum of the payload. The
/// checksum detects accidental corruption; it is not an authenticator.
///
/// The portable string form is `index:threshold:checksum:value` and round
/// trips through [`Display`](fmt::Display) and [`FromStr`]:
///
/// ```
/// use prime_share::Share;
///
/// let share = Share::new(1, "cGF5bG9hZA==".to_string(), 3);
/// let encoded = share.to_string();
/// let parsed: Share = encoded.parse().unwrap();
/// assert_eq!(parsed, share);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "zeroize", derive(Zeroize, ZeroizeOnDrop))]
pub struct Share {
    /// 1-based share index
    index: u32,
    /// Encoded share payload
    value: String,
    /// Minimum number of shares required for reconstruction
    threshold: u32,
    /// Lowercase-hex SHA-256 of `value`
    checksum: String,
}

impl Share {
    /// Creates a share, computing the checksum from the value
    pub fn new(index: u32, value: String, threshold: u32) -> Self {
        let checksum = Self::checksum_of(&value);
        Self {
            index,
            value,
            threshold,
            checksum,
        }
    }

    /// Assembles a share from already-known parts, e.g. parsed input
    ///
    /// The checksum is taken as-is; [`verify_checksum`](Share::verify_checksum)
    /// establishes whether it actually matches the value.
    pub fn from_parts(index: u32, value: String, threshold: u32, checksum: String) -> Self {
        Self {
            index,
            value,
            threshold,
            checksum,
        }
    }

    /// Returns the share index
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the encoded payload
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the reconstruction threshold
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Returns the recorded checksum
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Lowercase-hex SHA-256 of a share value
    pub fn checksum_of(value: &str) -> String {
        hex::encode(Sha256::digest(value.as_bytes()))
    }

    /// Recomputes the checksum and compares it to the recorded one in
    /// constant time
    pub fn verify_checksum(&self) -> Result<()> {
        let expected = Self::checksum_of(&self.value);
        let mut diff = expected.len() ^ self.checksum.len();
        for (a, b) in expected.bytes().zip(self.checksum.bytes()) {
            diff |= (a ^ b) as usize;
        }
        if diff != 0 {
            return Err(ShamirError::ShareChecksumMismatch { index: self.index });
        }
        Ok(())
    }

    /// Serializes to the structured JSON object form
    /// `{"index":..,"value":..,"threshold":..,"checksum":..}`
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("share serializes to JSON")
    }

    /// Parses the structured JSON object form
    ///
    /// Unknown keys are ignored; a missing or wrongly typed field fails
    /// with [`ShamirError::ShareMissingRequiredFields`].
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|_| ShamirError::ShareMissingRequiredFields)
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.index, self.threshold, self.checksum, self.value
        )
    }
}

impl FromStr for Share {
    type Err = ShamirError;

    /// Parses `index:threshold:checksum:value`
    ///
    /// Splits on `':'` at most three times from the left, so a value
    /// containing colons survives. Exactly four parts are required, index
    /// and threshold must be canonical decimal literals (no sign, no
    /// leading zeros except `"0"`), and the checksum must be 64 lowercase
    /// hex characters; any deviation is
    /// [`ShamirError::InvalidShareFormat`].
    fn from_str(encoded: &str) -> Result<Self> {
        let invalid = || ShamirError::InvalidShareFormat(encoded.to_string());

        let parts: Vec<&str> = encoded.splitn(4, ':').collect();
        if parts.len() != 4 {
            return Err(invalid());
        }

        let index = parse_decimal(parts[0]).ok_or_else(invalid)?;
        let threshold = parse_decimal(parts[1]).ok_or_else(invalid)?;

        let checksum = parts[2];
        if checksum.len() != 64
            || !checksum
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            return Err(invalid());
        }

        Ok(Share::from_parts(
            index,
            parts[3].to_string(),
            threshold,
            checksum.to_string(),
        ))
    }
}

/// Parses a canonical decimal literal: digits only, no sign, no leading
/// zeros except the literal `"0"`
fn parse_decimal(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }
    text.parse().ok()
}

/// Admission type for combine inputs
///
/// A combine input is either an in-memory [`Share`] or its encoded string
/// form; the conversion impls let callers pass either directly. Encoded
/// strings are parsed during normalization.
#[derive(Debug, Clone)]
pub enum ShareInput {
    /// An already-constructed share
    Share(Share),
    /// The `index:threshold:checksum:value` string form
    Encoded(String),
}

impl ShareInput {
    /// Normalizes to a [`Share`], parsing the encoded form
    pub fn into_share(self) -> Result<Share> {
        match self {
            ShareInput::Share(share) => Ok(share),
            ShareInput::Encoded(encoded) => encoded.parse(),
        }
    }
}

impl From<Share> for ShareInput {
    fn from(share: Share) -> Self {
        ShareInput::Share(share)
    }
}

impl From<&Share> for ShareInput {
    fn from(share: &Share) -> Self {
        ShareInput::Share(share.clone())
    }
}

impl From<String> for ShareInput {
    fn from(encoded: String) -> Self {
        ShareInput::Encoded(encoded)
    }
}

impl From<&str> for ShareInput {
    fn from(encoded: &str) -> Self {
        ShareInput::Encoded(encoded.to_string())
    }
}

/// The shares produced by one split, ordered by index 1..n
///
/// # Example
/// ```
/// use prime_share::SecretSharing;
///
/// let sharing = SecretSharing::default();
/// let shares = sharing.split(b"secret", 2, 3).unwrap();
/// assert_eq!(shares.len(), 3);
/// assert_eq!(shares.get(2).unwrap().index(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCollection {
    shares: Vec<Share>,
}

impl ShareCollection {
    /// Wraps an ordered list of shares
    pub fn new(shares: Vec<Share>) -> Self {
        Self { shares }
    }

    /// Returns the shares as a slice
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// Number of shares in the collection
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Looks a share up by its index
    pub fn get(&self, index: u32) -> Result<&Share> {
        self.shares
            .iter()
            .find(|share| share.index() == index)
            .ok_or(ShamirError::ShareNotFound(index))
    }

    /// Returns the shares keyed by index for handing out to holders
    ///
    /// The map's iteration order is randomized per instance, so walking it
    /// yields an unpredictable distribution order while each entry keeps
    /// its share identity.
    pub fn for_distribution(&self) -> HashMap<u32, Share> {
        self.shares
            .iter()
            .map(|share| (share.index(), share.clone()))
            .collect()
    }

    /// Iterates the shares in index order
    pub fn iter(&self) -> std::slice::Iter<'_, Share> {
        self.shares.iter()
    }

    /// Consumes the collection, returning the shares
    pub fn into_vec(self) -> Vec<Share> {
        self.shares
    }
}

impl IntoIterator for ShareCollection {
    type Item = Share;
    type IntoIter = std::vec::IntoIter<Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.into_iter()
    }
}

impl<'a> IntoIterator for &'a ShareCollection {
    type Item = &'a Share;
    type IntoIter = std::slice::Iter<'a, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.iter()
    }
}
