//! RSA public keys.
//!
//! A [`PublicKey`] is decoded from either a PKCS#1 `RSAPublicKey` or a
//! PKCS#8/X.509 `SubjectPublicKeyInfo` wrapping one. Both encodings of the
//! same key produce equal values.
//!
//! ```ignore
//! use hanko::decoder::Decoder;
//! use hanko_pem::Pem;
//! use hanko_pkcs::PublicKey;
//!
//! let pem: Pem = "-----BEGIN PUBLIC KEY-----\n...".parse()?;
//! let key: PublicKey = pem.decode()?;
//! println!("Key size: {} bits", key.key_size());
//! ```

use hanko::decoder::{DecodableFrom, Decoder};
use hanko_pem::{Label, Pem};
use log::debug;
use num_bigint::BigUint;

use crate::Encoding;
use crate::error::{Error, Result};
use crate::layout::{MODULUS, PKCS1_PUBLIC, PKCS8_PUBLIC, PUBLIC_EXPONENT, extract};
use crate::reader::read_sequence;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    modulus: BigUint,
    public_exponent: BigUint,
}

impl PublicKey {
    /// Builds a key from its components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositiveInteger`] if either component is zero.
    pub fn new(modulus: BigUint, public_exponent: BigUint) -> Result<Self> {
        if modulus.bits() == 0 {
            return Err(Error::NonPositiveInteger { field: MODULUS });
        }
        if public_exponent.bits() == 0 {
            return Err(Error::NonPositiveInteger {
                field: PUBLIC_EXPONENT,
            });
        }
        Ok(Self::from_components(modulus, public_exponent))
    }

    pub(crate) fn from_components(modulus: BigUint, public_exponent: BigUint) -> Self {
        PublicKey {
            modulus,
            public_exponent,
        }
    }

    /// Parses a DER-encoded public key in the given encoding.
    pub fn from_der(bytes: &[u8], encoding: Encoding) -> Result<Self> {
        let layout = match encoding {
            Encoding::Pkcs1 => &PKCS1_PUBLIC,
            Encoding::Pkcs8 => &PKCS8_PUBLIC,
        };
        let sequence = read_sequence(bytes)?;
        let [modulus, public_exponent] = extract(&sequence, layout)?;
        Ok(Self::from_components(modulus, public_exponent))
    }

    /// n
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// e
    pub fn public_exponent(&self) -> &BigUint {
        &self.public_exponent
    }

    /// Modulus length in bits.
    pub fn key_size(&self) -> u64 {
        self.modulus.bits()
    }
}

impl DecodableFrom<Pem> for PublicKey {}

impl Decoder<Pem, PublicKey> for Pem {
    type Error = Error;

    fn decode(&self) -> Result<PublicKey> {
        let encoding = match self.label()? {
            Label::RSAPublicKey => Encoding::Pkcs1,
            Label::PublicKey => Encoding::Pkcs8,
            actual => {
                return Err(Error::UnexpectedLabel {
                    expected: "public key",
                    actual,
                });
            }
        };
        debug!("decoding {} public key", encoding);
        let bytes: Vec<u8> = self.decode()?;
        PublicKey::from_der(&bytes, encoding)
    }
}
