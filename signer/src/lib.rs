//! RSA PKCS#1 v1.5 signatures over keys parsed by `hanko-pkcs`.
//!
//! ```ignore
//! use hanko_signer::{Signer, Verifier};
//!
//! let signer = Signer::from_sha256_pem(private_pem)?;
//! let signature = signer.sign(b"test message")?;
//!
//! let verifier = Verifier::from_sha256_pem(public_pem)?;
//! assert!(verifier.verify(b"test message", &signature)?);
//! ```
//!
//! Signers and verifiers hold no per-call state and may be shared between
//! threads.

pub mod error;
pub mod scheme;
pub mod signer;
pub mod verifier;

pub use error::{Error, Result};
pub use scheme::DigestScheme;
pub use signer::Signer;
pub use verifier::Verifier;

/// Largest modulus, in bits, a signer or verifier accepts.
pub const MAX_MODULUS_BITS: usize = 16384;

fn to_rsa_biguint(value: &num_bigint::BigUint) -> rsa::BigUint {
    rsa::BigUint::from_bytes_be(&value.to_bytes_be())
}
