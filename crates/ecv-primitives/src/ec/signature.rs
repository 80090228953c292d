//! ECDSA signature codec between the raw 64-byte wire form and DER.
//!
//! The wire form is the R and S components as unsigned big-endian integers,
//! 32 bytes each, concatenated. DER is the SEQUENCE-of-two-INTEGERs form
//! consumed by the verification backends. Conversion is lossless in both
//! directions.

use crate::PrimitivesError;

/// Length in bytes of the raw wire encoding (R || S).
pub const RAW_LEN: usize = 64;

/// An ECDSA signature with R and S components.
///
/// Holds the components in fixed-width big-endian form and converts between
/// the raw 64-byte wire encoding and DER. Range checks against the curve
/// order are deliberately not performed here: a structurally well-formed
/// signature with an out-of-range component decodes fine and is rejected by
/// the verification primitive instead.
#[derive(Clone, Debug)]
pub struct Signature {
    /// The R component of the signature (32 bytes, big-endian).
    r: [u8; 32],
    /// The S component of the signature (32 bytes, big-endian).
    s: [u8; 32],
}

impl Signature {
    /// Create a signature from raw R and S 32-byte arrays.
    ///
    /// # Arguments
    /// * `r` - The R component (32 bytes, big-endian).
    /// * `s` - The S component (32 bytes, big-endian).
    ///
    /// # Returns
    /// A new `Signature` with the given R and S values.
    pub fn new(r: [u8; 32], s: [u8; 32]) -> Self {
        Signature { r, s }
    }

    /// Access the R component of the signature.
    ///
    /// # Returns
    /// A reference to the 32-byte R value.
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// Access the S component of the signature.
    ///
    /// # Returns
    /// A reference to the 32-byte S value.
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// Parse a raw signature: big-endian R followed by big-endian S,
    /// 32 bytes each.
    ///
    /// The halves are sliced only after the length check, so inputs of any
    /// other length fail cleanly instead of reading out of bounds.
    ///
    /// # Arguments
    /// * `bytes` - The raw signature, exactly 64 bytes.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or an error for any other input length.
    pub fn from_raw(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != RAW_LEN {
            return Err(PrimitivesError::InvalidSignature(format!(
                "invalid raw signature size: expected {} bytes, got {}",
                RAW_LEN,
                bytes.len()
            )));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Ok(Signature { r, s })
    }

    /// Serialize as the raw 64-byte wire encoding.
    ///
    /// # Returns
    /// A 64-byte array: big-endian R followed by big-endian S.
    pub fn to_raw(&self) -> [u8; RAW_LEN] {
        let mut out = [0u8; RAW_LEN];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }

    /// Parse a DER-encoded ECDSA signature.
    ///
    /// Expected format: 0x30 <len> 0x02 <r_len> <r> 0x02 <s_len> <s>
    ///
    /// Extra leading zero padding inside an integer is tolerated; a negative
    /// integer, a wrong tag, a length that does not match the input, an
    /// empty integer body, or a value wider than 32 bytes are all rejected.
    ///
    /// # Arguments
    /// * `bytes` - DER-encoded signature bytes.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or an error if the DER encoding is malformed.
    pub fn from_der(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() < 8 {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: too short".to_string(),
            ));
        }

        if bytes[0] != 0x30 {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: no header magic".to_string(),
            ));
        }

        let sig_len = bytes[1] as usize;
        if sig_len + 2 != bytes.len() {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: bad length".to_string(),
            ));
        }

        let data = bytes;
        let mut idx = 2;

        // Parse R
        if data[idx] != 0x02 {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: no 1st int marker".to_string(),
            ));
        }
        idx += 1;
        let r_len = data[idx] as usize;
        idx += 1;
        if r_len == 0 || idx + r_len > data.len() - 3 {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: bogus R length".to_string(),
            ));
        }
        let r_bytes = &data[idx..idx + r_len];
        idx += r_len;

        // Parse S
        if data[idx] != 0x02 {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: no 2nd int marker".to_string(),
            ));
        }
        idx += 1;
        let s_len = data[idx] as usize;
        idx += 1;
        if s_len == 0 || idx + s_len != data.len() {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: bogus S length".to_string(),
            ));
        }
        let s_bytes = &data[idx..];

        // The components are unsigned by contract; a set high bit without a
        // zero pad byte would re-parse as a negative number.
        if r_bytes[0] & 0x80 != 0 {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: R is negative".to_string(),
            ));
        }
        if s_bytes[0] & 0x80 != 0 {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: S is negative".to_string(),
            ));
        }

        let r = to_32_bytes(r_bytes)?;
        let s = to_32_bytes(s_bytes)?;

        Ok(Signature { r, s })
    }

    /// Serialize the signature in DER format.
    ///
    /// Output format: 0x30 <len> 0x02 <r_len> <r_bytes> 0x02 <s_len> <s_bytes>
    ///
    /// Each component is trimmed to its minimal unsigned encoding, with a
    /// 0x00 pad byte prepended when the high bit is set. The component
    /// values are written exactly as stored, so the output re-parses to an
    /// identical signature. The encoding length is data-dependent and is
    /// computed per call.
    ///
    /// # Returns
    /// A byte vector containing the DER-encoded signature, or an error if
    /// the output buffer cannot be allocated.
    pub fn to_der(&self) -> Result<Vec<u8>, PrimitivesError> {
        let rb = trim_leading_zeros(&self.r);
        let sb = trim_leading_zeros(&self.s);
        let r_pad = usize::from(rb[0] & 0x80 != 0);
        let s_pad = usize::from(sb[0] & 0x80 != 0);

        let r_len = rb.len() + r_pad;
        let s_len = sb.len() + s_pad;
        let total_len = 6 + r_len + s_len;

        let mut out = Vec::new();
        out.try_reserve_exact(total_len)
            .map_err(|e| PrimitivesError::AllocationFailed(e.to_string()))?;
        out.push(0x30);
        out.push((total_len - 2) as u8);
        out.push(0x02);
        out.push(r_len as u8);
        if r_pad == 1 {
            out.push(0x00);
        }
        out.extend_from_slice(rb);
        out.push(0x02);
        out.push(s_len as u8);
        if s_pad == 1 {
            out.push(0x00);
        }
        out.extend_from_slice(sb);
        Ok(out)
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r && self.s == other.s
    }
}

impl Eq for Signature {}

/// Trim leading zero bytes from a big-endian integer, keeping at least one
/// byte so that zero encodes as a single 0x00.
fn trim_leading_zeros(val: &[u8; 32]) -> &[u8] {
    let mut start = 0;
    while start < 31 && val[start] == 0 {
        start += 1;
    }
    &val[start..]
}

/// Convert a variable-length big-endian byte slice to a fixed 32-byte array.
///
/// Strips any leading zero-padding and left-pads to 32 bytes.
///
/// # Arguments
/// * `bytes` - Variable-length big-endian integer bytes.
///
/// # Returns
/// `Ok([u8; 32])` or an error if the value exceeds 32 bytes after trimming.
fn to_32_bytes(bytes: &[u8]) -> Result<[u8; 32], PrimitivesError> {
    let mut trimmed = bytes;
    while trimmed.len() > 1 && trimmed[0] == 0 {
        trimmed = &trimmed[1..];
    }
    if trimmed.len() > 32 {
        return Err(PrimitivesError::InvalidSignature(
            "integer value too large for 32 bytes".to_string(),
        ));
    }
    let mut out = [0u8; 32];
    out[32 - trimmed.len()..].copy_from_slice(trimmed);
    Ok(out)
}
