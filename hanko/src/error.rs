//! Error classification shared by every hanko crate.

use std::fmt::{Display, Formatter};

/// Coarse category of a failure.
///
/// Each crate's error type maps its variants onto one of these through a
/// `kind()` method, so callers can branch on the category without matching
/// every nested variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not in a recognized format (unknown PEM header, wrong key kind).
    Format,
    /// The PEM body is not valid base64.
    Decode,
    /// The DER structure does not match the expected key layout.
    Structure,
    /// The signature primitive rejected the key material or the signature bytes.
    Crypto,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Format => write!(f, "format error"),
            ErrorKind::Decode => write!(f, "decode error"),
            ErrorKind::Structure => write!(f, "structure error"),
            ErrorKind::Crypto => write!(f, "crypto error"),
        }
    }
}
