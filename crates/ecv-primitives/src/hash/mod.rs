//! Hash function primitives for the ECV SDK.
//!
//! Provides SHA-256 and the digest-algorithm registry used to bind each
//! supported curve to its conventional message digest.

use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// A message digest algorithm used during signature verification.
///
/// Each supported curve maps to exactly one digest; see
/// [`crate::ec::Curve::digest`]. Pinning the digest here keeps signature
/// producers and verifiers on the same algorithm regardless of which
/// backend performs the check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageDigest {
    /// SHA-256, paired with the 256-bit curve family.
    Sha256,
}

impl MessageDigest {
    /// Digest arbitrary-length data.
    ///
    /// # Arguments
    /// * `data` - Byte slice to digest; a zero-length slice is valid.
    ///
    /// # Returns
    /// The 32-byte digest output.
    pub fn digest(&self, data: &[u8]) -> [u8; 32] {
        match self {
            MessageDigest::Sha256 => sha256(data),
        }
    }

    /// The digest output length in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            MessageDigest::Sha256 => 32,
        }
    }

    /// The conventional algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            MessageDigest::Sha256 => "SHA-256",
        }
    }
}

impl std::fmt::Display for MessageDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
