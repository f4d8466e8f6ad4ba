//! Digest schemes for RSA PKCS#1 v1.5 signatures.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rsa::Pkcs1v15Sign;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::error::Error;

const SHA1_WITH_RSA: &str = "SHA1withRSA";
const SHA256_WITH_RSA: &str = "SHA256withRSA";

/// Hash function paired with RSA PKCS#1 v1.5 padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestScheme {
    Sha1WithRsa,
    Sha256WithRsa,
}

impl DigestScheme {
    /// OID of the digest algorithm embedded in the DigestInfo.
    pub fn digest_oid(&self) -> &'static str {
        match self {
            // id-sha1
            DigestScheme::Sha1WithRsa => "1.3.14.3.2.26",
            // id-sha256
            DigestScheme::Sha256WithRsa => "2.16.840.1.101.3.4.2.1",
        }
    }

    /// OID of the combined signature algorithm.
    pub fn signature_oid(&self) -> &'static str {
        match self {
            // sha1WithRSAEncryption
            DigestScheme::Sha1WithRsa => "1.2.840.113549.1.1.5",
            // sha256WithRSAEncryption
            DigestScheme::Sha256WithRsa => "1.2.840.113549.1.1.11",
        }
    }

    /// Digest length in bytes.
    pub fn output_size(&self) -> usize {
        match self {
            DigestScheme::Sha1WithRsa => <Sha1 as Digest>::output_size(),
            DigestScheme::Sha256WithRsa => <Sha256 as Digest>::output_size(),
        }
    }

    /// Hashes `message` with a fresh digest state.
    pub fn digest(&self, message: &[u8]) -> Vec<u8> {
        match self {
            DigestScheme::Sha1WithRsa => Sha1::digest(message).to_vec(),
            DigestScheme::Sha256WithRsa => Sha256::digest(message).to_vec(),
        }
    }

    pub(crate) fn padding(&self) -> Pkcs1v15Sign {
        match self {
            DigestScheme::Sha1WithRsa => Pkcs1v15Sign::new::<Sha1>(),
            DigestScheme::Sha256WithRsa => Pkcs1v15Sign::new::<Sha256>(),
        }
    }
}

impl Display for DigestScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DigestScheme::Sha1WithRsa => write!(f, "{}", SHA1_WITH_RSA),
            DigestScheme::Sha256WithRsa => write!(f, "{}", SHA256_WITH_RSA),
        }
    }
}

impl FromStr for DigestScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(SHA1_WITH_RSA) {
            Ok(DigestScheme::Sha1WithRsa)
        } else if s.eq_ignore_ascii_case(SHA256_WITH_RSA) {
            Ok(DigestScheme::Sha256WithRsa)
        } else {
            Err(Error::UnknownScheme(s.to_string()))
        }
    }
}
