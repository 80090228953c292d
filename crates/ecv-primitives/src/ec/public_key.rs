//! EC public keys imported from PEM or DER SubjectPublicKeyInfo documents.

use std::fmt;

use spki::der::Decode;
use spki::SubjectPublicKeyInfoRef;

use crate::ec::curve::{Curve, ID_EC_PUBLIC_KEY};
use crate::PrimitivesError;

/// PEM type label required on public key documents.
pub const PEM_PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// Curve-specific verification backend for a key.
#[derive(Clone, Debug)]
enum KeyKind {
    NistP256(p256::ecdsa::VerifyingKey),
    Secp256k1(k256::ecdsa::VerifyingKey),
}

/// An EC public key bound to the curve it was imported with.
///
/// A key is only constructed from bytes that parse as a valid curve point,
/// so every `PublicKey` value is usable for verification.
#[derive(Clone, Debug)]
pub struct PublicKey {
    curve: Curve,
    key: KeyKind,
}

impl PublicKey {
    /// Import a public key from a PEM document.
    ///
    /// The document must carry the `PUBLIC KEY` label and contain a DER
    /// SubjectPublicKeyInfo body. Any other label is rejected even when the
    /// body itself would parse.
    ///
    /// # Arguments
    /// * `pem` - The PEM text as bytes.
    ///
    /// # Returns
    /// A `PublicKey` on success, or an error describing why the document
    /// could not be imported.
    pub fn from_pem(pem: &[u8]) -> Result<Self, PrimitivesError> {
        let (label, der) = pem_rfc7468::decode_vec(pem)
            .map_err(|e| PrimitivesError::InvalidPublicKey(format!("pem decode: {}", e)))?;
        if label != PEM_PUBLIC_KEY_LABEL {
            return Err(PrimitivesError::InvalidPublicKey(format!(
                "unexpected pem label: {}",
                label
            )));
        }
        Self::from_der(&der)
    }

    /// Import a public key from a DER SubjectPublicKeyInfo document.
    ///
    /// The algorithm must be `id-ecPublicKey` with a named curve parameter.
    /// A non-EC algorithm maps to `UnsupportedKeyAlgorithm` and an EC key on
    /// a curve outside the supported set maps to `UnsupportedCurve`, so the
    /// two cases stay distinguishable to callers.
    ///
    /// # Arguments
    /// * `der` - The DER-encoded SubjectPublicKeyInfo bytes.
    ///
    /// # Returns
    /// A `PublicKey` on success, or an error describing why the document
    /// could not be imported.
    pub fn from_der(der: &[u8]) -> Result<Self, PrimitivesError> {
        let info = SubjectPublicKeyInfoRef::from_der(der)
            .map_err(|e| PrimitivesError::InvalidPublicKey(format!("spki decode: {}", e)))?;

        if info.algorithm.oid != ID_EC_PUBLIC_KEY {
            return Err(PrimitivesError::UnsupportedKeyAlgorithm(
                info.algorithm.oid.to_string(),
            ));
        }

        let curve_oid = info
            .algorithm
            .parameters_oid()
            .map_err(|e| PrimitivesError::InvalidPublicKey(format!("curve parameters: {}", e)))?;
        let curve = Curve::from_oid(curve_oid)?;

        let point = info.subject_public_key.as_bytes().ok_or_else(|| {
            PrimitivesError::InvalidPublicKey("public key bit string has unused bits".to_string())
        })?;

        Self::from_sec1_bytes(curve, point)
    }

    /// Import a public key from a SEC1 point encoding on a known curve.
    ///
    /// Accepts the compressed (33-byte) and uncompressed (65-byte) forms.
    /// Any other format prefix is rejected before the point is parsed. The
    /// point is validated against the curve equation on import.
    ///
    /// # Arguments
    /// * `curve` - The curve the point belongs to.
    /// * `bytes` - The SEC1-encoded point.
    ///
    /// # Returns
    /// A `PublicKey` on success, or an error if the bytes do not encode a
    /// point on the curve.
    pub fn from_sec1_bytes(curve: Curve, bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.is_empty() {
            return Err(PrimitivesError::InvalidPublicKey(
                "pubkey bytes are empty".to_string(),
            ));
        }
        // Only the standard point encodings pass; the curve backends would
        // otherwise also accept the draft compact form (prefix 0x05).
        match bytes[0] {
            0x02 | 0x03 | 0x04 => {}
            prefix => {
                return Err(PrimitivesError::InvalidPublicKey(format!(
                    "bad point format prefix: 0x{:02x}",
                    prefix
                )));
            }
        }
        let key = match curve {
            Curve::NistP256 => KeyKind::NistP256(
                p256::ecdsa::VerifyingKey::from_sec1_bytes(bytes)
                    .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?,
            ),
            Curve::Secp256k1 => KeyKind::Secp256k1(
                k256::ecdsa::VerifyingKey::from_sec1_bytes(bytes)
                    .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?,
            ),
        };
        Ok(PublicKey { curve, key })
    }

    /// Import a public key from a hex-encoded SEC1 point on a known curve.
    ///
    /// # Arguments
    /// * `curve` - The curve the point belongs to.
    /// * `hex_str` - The SEC1 point as a hex string.
    ///
    /// # Returns
    /// A `PublicKey` on success, or an error for bad hex or an invalid point.
    pub fn from_hex(curve: Curve, hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_sec1_bytes(curve, &bytes)
    }

    /// The curve this key lives on.
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Serialize the key as a SEC1 point encoding.
    ///
    /// # Arguments
    /// * `compressed` - Whether to use the 33-byte compressed form.
    ///
    /// # Returns
    /// The SEC1-encoded point bytes.
    pub fn to_sec1_bytes(&self, compressed: bool) -> Vec<u8> {
        match &self.key {
            KeyKind::NistP256(key) => key.to_encoded_point(compressed).as_bytes().to_vec(),
            KeyKind::Secp256k1(key) => key.to_encoded_point(compressed).as_bytes().to_vec(),
        }
    }

    /// Hex encoding of the compressed SEC1 point.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_sec1_bytes(true))
    }

    /// Verify a DER-encoded ECDSA signature over a message digest.
    ///
    /// The scalar arithmetic runs in the constant-time backend for the key's
    /// curve. A signature that fails to parse, carries an out-of-range or
    /// zero component, or does not match the digest all report as `false`;
    /// none of those conditions is an error. The S component may be in
    /// either half of the curve order.
    ///
    /// # Arguments
    /// * `digest` - The 32-byte message digest the signature covers.
    /// * `der_sig` - The DER-encoded signature.
    ///
    /// # Returns
    /// `true` if the signature is valid for this key and digest.
    pub fn verify_digest(&self, digest: &[u8; 32], der_sig: &[u8]) -> bool {
        use p256::ecdsa::signature::hazmat::PrehashVerifier;

        match &self.key {
            KeyKind::NistP256(key) => {
                let sig = match p256::ecdsa::Signature::from_der(der_sig) {
                    Ok(sig) => sig,
                    Err(_) => return false,
                };
                key.verify_prehash(digest, &sig).is_ok()
            }
            KeyKind::Secp256k1(key) => {
                let sig = match k256::ecdsa::Signature::from_der(der_sig) {
                    Ok(sig) => sig,
                    Err(_) => return false,
                };
                // The secp256k1 backend only accepts low-S signatures, so
                // fold the S component into the low half before verifying.
                let sig = sig.normalize_s().unwrap_or(sig);
                key.verify_prehash(digest, &sig).is_ok()
            }
        }
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.to_sec1_bytes(true) == other.to_sec1_bytes(true)
    }
}

impl Eq for PublicKey {}
