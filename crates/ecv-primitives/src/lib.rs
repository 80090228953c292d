/// ECV SDK - Cryptographic primitives for ECDSA signature verification.
///
/// This crate provides the foundational building blocks for the ECV SDK:
/// - Hash functions (SHA-256) and the digest-per-curve registry
/// - Supported elliptic curves (NIST P-256, secp256k1)
/// - Public keys imported from PEM / SubjectPublicKeyInfo containers
/// - The ECDSA signature codec (raw 64-byte wire form to DER and back)

pub mod ec;
pub mod hash;

mod error;
pub use error::PrimitivesError;
