use ecv_verify::{verify, VerifyError};

const P256_PEM: &str = include_str!("testdata/p256_pub.pem");
const SECP256K1_PEM: &str = include_str!("testdata/secp256k1_pub.pem");
const RSA_PEM: &str = include_str!("testdata/rsa_pub.pem");
const DSA_PEM: &str = include_str!("testdata/dsa_pub.pem");
const ED25519_PEM: &str = include_str!("testdata/ed25519_pub.pem");
const P384_PEM: &str = include_str!("testdata/p384_pub.pem");

/// Raw signature over "hello world" by the P-256 test key.
const P256_HELLO_WORLD_SIG: &str =
    "ee719b34351cadb9e986619d38cd71f89d83551125dc177ba8bf068000020c0b\
     251f3bf6a0e2113fe7bd037000e289cf12d64220eb39598ae22108fb04fba552";

/// Raw signature over "hello world" by the secp256k1 test key.
const SECP256K1_HELLO_WORLD_SIG: &str =
    "4b2d7f49e48e849d827bb5add96e1c06c7558c02e8e1bcdd557fe1b9501bae3b\
     03c73c7c7f18f80dab1d2fffb510972d6ad1984094b60049ce9ad5e9945d49e6";

/// DER SubjectPublicKeyInfo form of the P-256 test key.
const P256_SPKI_HEX: &str = "3059301306072a8648ce3d020106082a8648ce3d030107034200\
                            0460fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6\
                            7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299";

/// DER SubjectPublicKeyInfo form of the secp256k1 test key.
const SECP256K1_SPKI_HEX: &str = "3056301006072a8648ce3d020106052b8104000a034200\
                                 045721dc46f9969ac1dbb33e91b2d4fad09466761f8c1185ad8404268af3da0aa1\
                                 36184f1cca09187e182c2125936d660509b9816b0360e60af048200679734a68";

fn raw(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).unwrap()
}

#[test]
fn test_verifies_valid_signature() {
    let sig = raw(P256_HELLO_WORLD_SIG);
    assert_eq!(
        verify(P256_PEM.as_bytes(), &sig, b"hello world").unwrap(),
        true
    );

    let sig = raw(SECP256K1_HELLO_WORLD_SIG);
    assert_eq!(
        verify(SECP256K1_PEM.as_bytes(), &sig, b"hello world").unwrap(),
        true
    );
}

#[test]
fn test_rejects_altered_message() {
    let sig = raw(P256_HELLO_WORLD_SIG);
    assert_eq!(
        verify(P256_PEM.as_bytes(), &sig, b"hello World").unwrap(),
        false
    );
    assert_eq!(
        verify(P256_PEM.as_bytes(), &sig, b"hello worl").unwrap(),
        false
    );
    assert_eq!(
        verify(P256_PEM.as_bytes(), &sig, b"hello world ").unwrap(),
        false
    );
    assert_eq!(verify(P256_PEM.as_bytes(), &sig, b"").unwrap(), false);
}

#[test]
fn test_rejects_wrong_length_signatures() {
    let sig = raw(P256_HELLO_WORLD_SIG);
    for len in [0, 1, 32, 63, 65, 128] {
        let mut resized = sig.clone();
        resized.resize(len, 0);
        let err = verify(P256_PEM.as_bytes(), &resized, b"hello world").unwrap_err();
        assert!(
            matches!(err, VerifyError::MalformedSignature(_)),
            "length {}: {}",
            len,
            err
        );
    }

    let err = verify(P256_PEM.as_bytes(), &sig[..63], b"hello world").unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed signature: invalid raw signature size: expected 64 bytes, got 63"
    );
}

#[test]
fn test_rejects_empty_key() {
    let sig = raw(P256_HELLO_WORLD_SIG);
    let err = verify(b"", &sig, b"hello world").unwrap_err();
    assert!(matches!(err, VerifyError::KeyImportFailed(_)));
}

/// Any single-bit change to the signature flips the result to a clean
/// rejection, never an error, even when the altered component falls
/// outside the curve order.
#[test]
fn test_rejects_tampered_signature_bits() {
    let sig = raw(SECP256K1_HELLO_WORLD_SIG);
    for i in 0..sig.len() {
        for mask in [0x01, 0x80] {
            let mut tampered = sig.clone();
            tampered[i] ^= mask;
            let result = verify(SECP256K1_PEM.as_bytes(), &tampered, b"hello world")
                .unwrap_or_else(|e| panic!("byte {} mask {:#04x}: {}", i, mask, e));
            assert!(!result, "byte {} mask {:#04x} still verified", i, mask);
        }
    }
}

#[test]
fn test_rejects_unrelated_key() {
    let sig = raw(SECP256K1_HELLO_WORLD_SIG);
    assert_eq!(
        verify(P256_PEM.as_bytes(), &sig, b"hello world").unwrap(),
        false
    );

    let sig = raw(P256_HELLO_WORLD_SIG);
    assert_eq!(
        verify(SECP256K1_PEM.as_bytes(), &sig, b"hello world").unwrap(),
        false
    );
}

#[test]
fn test_rejects_non_ec_keys() {
    let sig = raw(P256_HELLO_WORLD_SIG);
    for (name, pem) in [
        ("rsa", RSA_PEM),
        ("dsa", DSA_PEM),
        ("ed25519", ED25519_PEM),
        ("p384", P384_PEM),
    ] {
        let err = verify(pem.as_bytes(), &sig, b"hello world").unwrap_err();
        assert!(
            matches!(err, VerifyError::UnsupportedKeyType(_)),
            "{}: {}",
            name,
            err
        );
    }
}

#[test]
fn test_rejects_garbage_keys() {
    let sig = raw(P256_HELLO_WORLD_SIG);

    let err = verify(b"not a key at all", &sig, b"hello world").unwrap_err();
    assert!(matches!(err, VerifyError::KeyImportFailed(_)));

    let bad_base64 = b"-----BEGIN PUBLIC KEY-----\n!!!!\n-----END PUBLIC KEY-----\n";
    let err = verify(bad_base64, &sig, b"hello world").unwrap_err();
    assert!(matches!(err, VerifyError::KeyImportFailed(_)));

    let err = verify(&[0xde, 0xad, 0xbe, 0xef], &sig, b"hello world").unwrap_err();
    assert!(matches!(err, VerifyError::KeyImportFailed(_)));
}

#[test]
fn test_empty_message_is_valid_input() {
    let sig = raw(
        "447b9b1afab76d95bfb4eab9ea321760506d95e3bdb0daf8d3ae3eb465a40dd7\
         08aca0e5df0b25e9e062db0e8f7a07e6c400346f88333cee5c392f04d303c42f",
    );
    assert_eq!(verify(P256_PEM.as_bytes(), &sig, b"").unwrap(), true);
    assert_eq!(verify(P256_PEM.as_bytes(), &sig, b"x").unwrap(), false);
}

#[test]
fn test_accepts_der_public_keys() {
    let key = raw(P256_SPKI_HEX);
    let sig = raw(P256_HELLO_WORLD_SIG);
    assert_eq!(verify(&key, &sig, b"hello world").unwrap(), true);

    let key = raw(SECP256K1_SPKI_HEX);
    let sig = raw(SECP256K1_HELLO_WORLD_SIG);
    assert_eq!(verify(&key, &sig, b"hello world").unwrap(), true);
}

#[test]
fn test_accepts_surrounding_whitespace_and_crlf_pem() {
    let sig = raw(P256_HELLO_WORLD_SIG);

    let padded = format!("\n  {}", P256_PEM);
    assert_eq!(
        verify(padded.as_bytes(), &sig, b"hello world").unwrap(),
        true
    );

    let crlf = P256_PEM.replace('\n', "\r\n");
    assert_eq!(verify(crlf.as_bytes(), &sig, b"hello world").unwrap(), true);
}

/// Structurally fine signatures with degenerate or out-of-range components
/// are checked and rejected, not errors.
#[test]
fn test_degenerate_signatures_fail_cleanly() {
    assert_eq!(
        verify(P256_PEM.as_bytes(), &[0u8; 64], b"hello world").unwrap(),
        false
    );
    assert_eq!(
        verify(P256_PEM.as_bytes(), &[0xffu8; 64], b"hello world").unwrap(),
        false
    );
    assert_eq!(
        verify(SECP256K1_PEM.as_bytes(), &[0u8; 64], b"hello world").unwrap(),
        false
    );
}

#[test]
fn test_verify_vectors() {
    let data = include_str!("testdata/verify_vectors.json");
    let vectors: serde_json::Value = serde_json::from_str(data).unwrap();

    for v in vectors.as_array().unwrap() {
        let name = v["name"].as_str().unwrap();
        let pem = match v["curve"].as_str().unwrap() {
            "P-256" => P256_PEM,
            "secp256k1" => SECP256K1_PEM,
            other => panic!("{}: unknown curve {}", name, other),
        };
        let sig = raw(v["signatureHex"].as_str().unwrap());
        let message = v["message"].as_str().unwrap();
        let expected = v["valid"].as_bool().unwrap();

        let result = verify(pem.as_bytes(), &sig, message.as_bytes())
            .unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert_eq!(result, expected, "{}", name);
    }
}

#[test]
fn test_verifies_freshly_signed_messages() {
    use k256::ecdsa::signature::Signer;
    use p256::pkcs8::{EncodePublicKey, LineEnding};

    let sk = p256::ecdsa::SigningKey::from_slice(&[0x17; 32]).unwrap();
    let pem = sk
        .verifying_key()
        .to_public_key_pem(LineEnding::LF)
        .unwrap();
    let sig: p256::ecdsa::Signature = sk.sign(b"fresh message");
    let sig_bytes = sig.to_bytes();
    assert_eq!(
        verify(pem.as_bytes(), &sig_bytes, b"fresh message").unwrap(),
        true
    );
    assert_eq!(
        verify(pem.as_bytes(), &sig_bytes, b"fresh message!").unwrap(),
        false
    );

    let sk = k256::ecdsa::SigningKey::from_slice(&[0x2a; 32]).unwrap();
    let pem = sk
        .verifying_key()
        .to_public_key_pem(LineEnding::LF)
        .unwrap();
    let sig: k256::ecdsa::Signature = sk.sign(b"fresh message");
    let sig_bytes = sig.to_bytes();
    assert_eq!(
        verify(pem.as_bytes(), &sig_bytes, b"fresh message").unwrap(),
        true
    );
}
