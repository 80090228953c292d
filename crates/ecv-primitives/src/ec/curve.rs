//! The supported-curve registry.
//!
//! Every curve this SDK can verify against is declared here, together with
//! its named-curve OID and the digest algorithm bound to it. Adding a curve
//! means adding a variant and its table rows.

use std::fmt;

use spki::ObjectIdentifier;

use crate::hash::MessageDigest;
use crate::PrimitivesError;

/// Algorithm identifier for elliptic curve public keys (id-ecPublicKey).
pub const ID_EC_PUBLIC_KEY: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// Named-curve identifier for NIST P-256 (prime256v1 / secp256r1).
pub const OID_NIST_P256: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");

/// Named-curve identifier for secp256k1.
pub const OID_SECP256K1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.10");

/// A supported elliptic curve.
///
/// The curve determines the key size and the digest algorithm used when
/// verifying signatures made with keys on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    /// NIST P-256 (prime256v1 / secp256r1).
    NistP256,
    /// secp256k1.
    Secp256k1,
}

impl Curve {
    /// Look up a curve from the named-curve OID carried in a key's
    /// algorithm parameters.
    ///
    /// # Arguments
    /// * `oid` - The named-curve object identifier.
    ///
    /// # Returns
    /// The matching `Curve`, or an error for curves outside the registry.
    pub fn from_oid(oid: ObjectIdentifier) -> Result<Self, PrimitivesError> {
        if oid == OID_NIST_P256 {
            Ok(Curve::NistP256)
        } else if oid == OID_SECP256K1 {
            Ok(Curve::Secp256k1)
        } else {
            Err(PrimitivesError::UnsupportedCurve(oid.to_string()))
        }
    }

    /// The named-curve OID for this curve.
    pub fn oid(&self) -> ObjectIdentifier {
        match self {
            Curve::NistP256 => OID_NIST_P256,
            Curve::Secp256k1 => OID_SECP256K1,
        }
    }

    /// The conventional curve name.
    pub fn name(&self) -> &'static str {
        match self {
            Curve::NistP256 => "P-256",
            Curve::Secp256k1 => "secp256k1",
        }
    }

    /// The digest algorithm paired with this curve.
    ///
    /// Both supported curves are 256-bit and pair with SHA-256. The pairing
    /// is fixed here rather than left to a backend default: a signature
    /// produced for a curve must be checked with the same digest everywhere.
    pub fn digest(&self) -> MessageDigest {
        match self {
            Curve::NistP256 | Curve::Secp256k1 => MessageDigest::Sha256,
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
