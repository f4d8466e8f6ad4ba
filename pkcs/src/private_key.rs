//! RSA private keys.
//!
//! A [`PrivateKey`] is decoded from either a PKCS#1 `RSAPrivateKey` or a
//! PKCS#8 `PrivateKeyInfo` wrapping one. Only the values needed to sign are
//! kept; the CRT values are recomputed by the signature primitive.

use std::fmt::{Debug, Formatter};

use hanko::decoder::{DecodableFrom, Decoder};
use hanko_pem::{Label, Pem};
use log::debug;
use num_bigint::BigUint;

use crate::Encoding;
use crate::error::{Error, Result};
use crate::layout::{PKCS1_PRIVATE, PKCS8_PRIVATE, extract};
use crate::public_key::PublicKey;
use crate::reader::read_sequence;

/// An RSA private key.
///
/// The `Debug` output only shows the public components.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    modulus: BigUint,
    public_exponent: BigUint,
    private_exponent: BigUint,
    prime_p: BigUint,
    prime_q: BigUint,
}

impl PrivateKey {
    /// Parses a DER-encoded private key in the given encoding.
    ///
    /// The components are not checked for consistency with each other
    /// (for example `modulus == prime_p * prime_q`).
    pub fn from_der(bytes: &[u8], encoding: Encoding) -> Result<Self> {
        let layout = match encoding {
            Encoding::Pkcs1 => &PKCS1_PRIVATE,
            Encoding::Pkcs8 => &PKCS8_PRIVATE,
        };
        let sequence = read_sequence(bytes)?;
        let [modulus, public_exponent, private_exponent, prime_p, prime_q] =
            extract(&sequence, layout)?;
        Ok(PrivateKey {
            modulus,
            public_exponent,
            private_exponent,
            prime_p,
            prime_q,
        })
    }

    /// n
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// e
    pub fn public_exponent(&self) -> &BigUint {
        &self.public_exponent
    }

    /// d
    pub fn private_exponent(&self) -> &BigUint {
        &self.private_exponent
    }

    /// p
    pub fn prime_p(&self) -> &BigUint {
        &self.prime_p
    }

    /// q
    pub fn prime_q(&self) -> &BigUint {
        &self.prime_q
    }

    /// Modulus length in bits.
    pub fn key_size(&self) -> u64 {
        self.modulus.bits()
    }

    /// The public half of this key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_components(self.modulus.clone(), self.public_exponent.clone())
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("modulus", &self.modulus)
            .field("public_exponent", &self.public_exponent)
            .finish_non_exhaustive()
    }
}

impl DecodableFrom<Pem> for PrivateKey {}

impl Decoder<Pem, PrivateKey> for Pem {
    type Error = Error;

    fn decode(&self) -> Result<PrivateKey> {
        let encoding = match self.label()? {
            Label::RSAPrivateKey => Encoding::Pkcs1,
            Label::PrivateKey => Encoding::Pkcs8,
            actual => {
                return Err(Error::UnexpectedLabel {
                    expected: "private key",
                    actual,
                });
            }
        };
        debug!("decoding {} private key", encoding);
        let bytes: Vec<u8> = self.decode()?;
        PrivateKey::from_der(&bytes, encoding)
    }
}
