#![deny(missing_docs)]

//! ECV SDK - ECDSA signature verification.
//!
//! Checks raw 64-byte ECDSA signatures against EC public keys supplied as
//! PEM `PUBLIC KEY` documents or DER SubjectPublicKeyInfo bytes. The
//! message digest is chosen by the curve the key was imported with.
//!
//! A signature that was understood but does not match reports as
//! `Ok(false)`. Errors are reserved for inputs that could not be
//! understood: a signature of the wrong length, a key that does not parse,
//! or a key of an unsupported type.

mod error;
pub mod ecdsa;

pub use ecdsa::verify;
pub use error::VerifyError;
