use ecv_primitives::PrimitivesError;

/// Errors surfaced by signature verification.
///
/// A well-formed signature that simply does not match the key and message
/// is not an error; verification reports that as `Ok(false)`.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The raw signature could not be reconstructed into a DER signature,
    /// usually because it is not exactly 64 bytes.
    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    /// The public key document could not be parsed into an EC key.
    #[error("key import failed: {0}")]
    KeyImportFailed(String),

    /// The public key parsed but is not an EC key on a supported curve.
    #[error("public key is incorrect type: {0}")]
    UnsupportedKeyType(String),

    /// The message digest could not be computed. The digests in use are
    /// infallible, so this is kept for callers that match exhaustively and
    /// is never produced today.
    #[error("digest computation failed: {0}")]
    DigestComputationFailed(String),

    /// An internal buffer could not be allocated.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),
}

impl From<PrimitivesError> for VerifyError {
    fn from(e: PrimitivesError) -> Self {
        match e {
            PrimitivesError::InvalidSignature(msg) => VerifyError::MalformedSignature(msg),
            PrimitivesError::InvalidPublicKey(msg) => VerifyError::KeyImportFailed(msg),
            PrimitivesError::UnsupportedKeyAlgorithm(oid) => {
                VerifyError::UnsupportedKeyType(format!("unsupported key algorithm: {}", oid))
            }
            PrimitivesError::UnsupportedCurve(oid) => {
                VerifyError::UnsupportedKeyType(format!("unsupported curve: {}", oid))
            }
            PrimitivesError::InvalidHex(msg) => VerifyError::KeyImportFailed(msg),
            PrimitivesError::AllocationFailed(msg) => VerifyError::ResourceExhausted(msg),
        }
    }
}
