/// Unified error type for all primitives operations.
///
/// Covers errors from curve dispatch, key container parsing, and signature
/// encoding.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("unsupported key algorithm: {0}")]
    UnsupportedKeyAlgorithm(String),

    #[error("unsupported curve: {0}")]
    UnsupportedCurve(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("allocation failed: {0}")]
    AllocationFailed(String),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
