//! ECDSA verification of raw signatures against encoded public keys.

use ecv_primitives::ec::{PublicKey, Signature};

use crate::VerifyError;

/// Leading bytes of a PEM encapsulation boundary.
const PEM_PREAMBLE: &[u8] = b"-----BEGIN";

/// Verify a raw ECDSA signature over a message.
///
/// The signature must be exactly 64 bytes: the big-endian R and S
/// components, 32 bytes each. The public key may be a PEM `PUBLIC KEY`
/// document or DER SubjectPublicKeyInfo bytes. The message is hashed with
/// the digest bound to the key's curve, SHA-256 for the supported 256-bit
/// curves, and the signature is checked against that digest in the curve's
/// constant-time backend. An empty message is valid input.
///
/// The signature is reconstructed before the key is imported, so a
/// signature of the wrong length is reported even when the key is also
/// bad.
///
/// # Arguments
/// * `public_key` - PEM or DER encoded EC public key.
/// * `signature` - The raw 64-byte signature (R || S).
/// * `message` - The signed message bytes.
///
/// # Returns
/// `Ok(true)` when the signature matches, `Ok(false)` when the inputs were
/// understood but the signature does not match, and an error only when an
/// input could not be understood at all.
pub fn verify(public_key: &[u8], signature: &[u8], message: &[u8]) -> Result<bool, VerifyError> {
    let der_sig = Signature::from_raw(signature)?.to_der()?;
    let key = import_public_key(public_key)?;
    let digest = key.curve().digest().digest(message);
    Ok(key.verify_digest(&digest, &der_sig))
}

/// Import a public key from PEM or DER input.
///
/// Input starting with a PEM encapsulation boundary, after any leading
/// ASCII whitespace, is parsed strictly as PEM with no DER fallback.
/// Everything else is parsed as DER.
fn import_public_key(bytes: &[u8]) -> Result<PublicKey, VerifyError> {
    let trimmed = trim_whitespace(bytes);
    if trimmed.starts_with(PEM_PREAMBLE) {
        Ok(PublicKey::from_pem(trimmed)?)
    } else {
        Ok(PublicKey::from_der(bytes)?)
    }
}

/// Strip leading ASCII whitespace. The PEM decoder wants the encapsulation
/// boundary at the start of its input.
fn trim_whitespace(bytes: &[u8]) -> &[u8] {
    let mut rest = bytes;
    while let Some((first, tail)) = rest.split_first() {
        if !first.is_ascii_whitespace() {
            break;
        }
        rest = tail;
    }
    rest
}
