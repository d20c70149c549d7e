use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Text encoding applied to serialized share payloads
///
/// Both variants are strict round-trips: `decode(encode(b)) = b`, and
/// decoding rejects any input outside the alphabet, odd-length hex, and
/// malformed base64 padding.
///
/// # Example
/// ```
/// use prime_share::Encoding;
///
/// let encoded = Encoding::Hex.encode(b"\x01\xff");
/// assert_eq!(encoded, "01ff");
/// assert_eq!(Encoding::Hex.decode(&encoded).unwrap(), b"\x01\xff");
/// assert!(Encoding::Hex.decode("0").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Standard base64 with `=` padding
    Base64,
    /// Lowercase hexadecimal
    Hex,
}

impl Encoding {
    /// Encodes bytes into the variant's text alphabet
    pub fn encode(&self, bytes: &[u8]) -> String {
        match self {
            Encoding::Base64 => STANDARD.encode(bytes),
            Encoding::Hex => hex::encode(bytes),
        }
    }

    /// Decodes text back into bytes, strictly
    pub fn decode(&self, input: &str) -> Result<Vec<u8>> {
        match self {
            Encoding::Base64 => Ok(STANDARD.decode(input)?),
            Encoding::Hex => {
                // The hex crate is case-insensitive; the alphabet here is
                // lowercase only
                if let Some((index, b)) = input
                    .bytes()
                    .enumerate()
                    .find(|(_, b)| !b.is_ascii_digit() && !(b'a'..=b'f').contains(b))
                {
                    return Err(
                        hex::FromHexError::InvalidHexCharacter { c: char::from(b), index }.into(),
                    );
                }
                Ok(hex::decode(input)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShamirError;

    #[test]
    fn test_base64_round_trip() {
        let data = b"arbitrary \x00\x01\xfe bytes";
        let encoded = Encoding::Base64.encode(data);
        assert_eq!(Encoding::Base64.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_hex_round_trip() {
        let data = [0u8, 255, 16, 1];
        let encoded = Encoding::Hex.encode(&data);
        assert_eq!(encoded, "00ff1001");
        assert_eq!(Encoding::Hex.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_empty_round_trip() {
        assert_eq!(Encoding::Base64.encode(b""), "");
        assert_eq!(Encoding::Base64.decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(Encoding::Hex.decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_base64_rejects_invalid_padding() {
        assert!(matches!(
            Encoding::Base64.decode("AAA"),
            Err(ShamirError::Base64DecodeFailed(_))
        ));
    }

    #[test]
    fn test_base64_rejects_foreign_characters() {
        assert!(Encoding::Base64.decode("AA!A").is_err());
    }

    #[test]
    fn test_hex_rejects_odd_length() {
        assert!(matches!(
            Encoding::Hex.decode("abc"),
            Err(ShamirError::HexDecodeFailed(_))
        ));
    }

    #[test]
    fn test_hex_rejects_foreign_characters() {
        assert!(matches!(
            Encoding::Hex.decode("zz"),
            Err(ShamirError::HexDecodeFailed(_))
        ));
    }

    #[test]
    fn test_hex_rejects_uppercase() {
        // hex::decode alone would accept these
        assert!(matches!(
            Encoding::Hex.decode("AABBCC"),
            Err(ShamirError::HexDecodeFailed(_))
        ));
        assert!(matches!(
            Encoding::Hex.decode("0aFf"),
            Err(ShamirError::HexDecodeFailed(_))
        ));
    }
}
