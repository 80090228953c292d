#![deny(missing_docs)]

//! ECV SDK - Complete SDK.
//!
//! Re-exports all ECV SDK components for convenient single-crate usage.

pub use ecv_primitives as primitives;
pub use ecv_verify as verify;
