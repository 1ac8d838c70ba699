//! SHA-256 digests and their hex rendering.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::str::FromStr;

/// Length in bytes of a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// Length of a rendered digest: two hex characters per byte.
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// Raw SHA-256 output for a file or byte buffer.
///
/// The rendered form is always [`DIGEST_HEX_LEN`] lowercase hex characters,
/// most-significant nibble first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileDigest(#[serde(with = "hex::serde")] [u8; DIGEST_LEN]);

impl FileDigest {
    /// Wrap an already computed digest.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Compute the SHA-256 digest of `data`.
    pub fn compute(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    /// Parse a rendered digest back into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`hex::FromHexError`] if `s` is not exactly 64 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Render as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for FileDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for FileDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Expected SHA-256 value, as given by a repository index or on the command
/// line.
///
/// Always exactly [`DIGEST_HEX_LEN`] lowercase hex characters, the form
/// [`FileDigest::to_hex`] produces, so it compares byte-for-byte against a
/// computed digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sha256Hash(String);

impl Sha256Hash {
    /// Parse an expected digest.
    ///
    /// # Errors
    ///
    /// Returns [`HashFormatError::Length`] if `s` is not 64 characters long and
    /// [`HashFormatError::NotLowercaseHex`] if any character is outside `0-9a-f`.
    pub fn validated(s: &str) -> Result<Self, HashFormatError> {
        if s.len() != DIGEST_HEX_LEN {
            return Err(HashFormatError::Length(s.len()));
        }
        if !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(HashFormatError::NotLowercaseHex(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Return the inner hex string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Sha256Hash {
    type Err = HashFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validated(s)
    }
}

impl std::fmt::Display for Sha256Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors from [`Sha256Hash::validated`].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum HashFormatError {
    /// Wrong number of characters.
    #[error("Invalid SHA256 hash: expected {DIGEST_HEX_LEN} hex chars, got {0}")]
    Length(usize),

    /// Right length, but not all characters are lowercase hex digits.
    #[error("Invalid SHA256 hash: expected lowercase hex digits in '{0}'")]
    NotLowercaseHex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn empty_input_digest() {
        assert_eq!(FileDigest::compute(b"").to_hex(), EMPTY_SHA256);
    }

    #[test]
    fn known_vector() {
        assert_eq!(
            FileDigest::compute(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn hex_is_lowercase_and_fixed_length() {
        let inputs: [&[u8]; 4] = [b"", b"x", b"hello world", &[0xff; 4096]];
        for input in inputs {
            let hex = FileDigest::compute(input).to_hex();
            assert_eq!(hex.len(), DIGEST_HEX_LEN);
            assert!(
                hex.chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
            );
        }
    }

    #[test]
    fn nibble_order() {
        let mut bytes = [0u8; DIGEST_LEN];
        bytes[0] = 0x0f;
        bytes[1] = 0xa0;
        let hex = FileDigest::from_bytes(bytes).to_hex();
        assert!(hex.starts_with("0fa0"));
    }

    #[test]
    fn from_hex_parses_rendered_form() {
        let digest = FileDigest::compute(b"payload");
        assert_eq!(FileDigest::from_hex(&digest.to_hex()).unwrap(), digest);
        assert!(FileDigest::from_hex("abc").is_err());
    }

    #[test]
    fn validated_rejects_bad_input() {
        assert_eq!(
            Sha256Hash::validated("abc"),
            Err(HashFormatError::Length(3))
        );
        let bad = "z".repeat(DIGEST_HEX_LEN);
        assert!(matches!(
            Sha256Hash::validated(&bad),
            Err(HashFormatError::NotLowercaseHex(_))
        ));
        assert_eq!(Sha256Hash::validated(EMPTY_SHA256).unwrap().as_str(), EMPTY_SHA256);
    }

    #[test]
    fn validated_only_accepts_rendered_form() {
        let rendered = FileDigest::compute(b"").to_hex();
        let hash: Sha256Hash = rendered.parse().unwrap();
        assert_eq!(hash.as_str(), rendered);

        let upper = rendered.to_uppercase();
        assert!(matches!(
            upper.parse::<Sha256Hash>(),
            Err(HashFormatError::NotLowercaseHex(_))
        ));
    }

    #[test]
    fn digest_serializes_as_hex() {
        let digest = FileDigest::compute(b"");
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{EMPTY_SHA256}\""));
        let back: FileDigest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }
}
