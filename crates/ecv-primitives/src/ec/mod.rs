/// Elliptic curve cryptography for signature verification.
///
/// Provides the supported-curve registry, public keys imported from
/// standard containers, and the ECDSA signature codec.

pub mod curve;
pub mod public_key;
pub mod signature;

pub use curve::Curve;
pub use public_key::PublicKey;
pub use signature::Signature;
