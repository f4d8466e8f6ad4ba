//! Field positions of the four RSA key layouts.
//!
//! Every layout is described as data by a [`KeyLayout`] constant; [`extract`]
//! walks that description over a decoded SEQUENCE. PKCS#8 layouts are envelopes:
//! they unwrap one nested payload and continue with the matching PKCS#1
//! layout.

use std::fmt::{Display, Formatter};

use hanko_asn1::Element;
use log::trace;
use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::reader::read_sequence;

/// rsaEncryption
pub const RSA_ENCRYPTION_OID: &str = "1.2.840.113549.1.1.1";

pub const MODULUS: &str = "modulus";
pub const PUBLIC_EXPONENT: &str = "publicExponent";
pub const PRIVATE_EXPONENT: &str = "privateExponent";
pub const PRIME_P: &str = "prime1";
pub const PRIME_Q: &str = "prime2";

const ALGORITHM: &str = "algorithm";
const SUBJECT_PUBLIC_KEY: &str = "subjectPublicKey";
const PRIVATE_KEY: &str = "privateKey";

/*
RFC 8017 Appendix A.1

RSAPublicKey ::= SEQUENCE {
    modulus           INTEGER,  -- n
    publicExponent    INTEGER   -- e
}

RSAPrivateKey ::= SEQUENCE {
    version           Version,
    modulus           INTEGER,  -- n
    publicExponent    INTEGER,  -- e
    privateExponent   INTEGER,  -- d
    prime1            INTEGER,  -- p
    prime2            INTEGER,  -- q
    exponent1         INTEGER,  -- d mod (p-1)
    exponent2         INTEGER,  -- d mod (q-1)
    coefficient       INTEGER,  -- (inverse of q) mod p
    otherPrimeInfos   OtherPrimeInfos OPTIONAL
}

RFC 5280 Section 4.1

SubjectPublicKeyInfo ::= SEQUENCE {
    algorithm         AlgorithmIdentifier,
    subjectPublicKey  BIT STRING
}

RFC 5208 Section 5

PrivateKeyInfo ::= SEQUENCE {
    version                   Version,
    privateKeyAlgorithm       PrivateKeyAlgorithmIdentifier,
    privateKey                PrivateKey,
    attributes           [0]  IMPLICIT Attributes OPTIONAL
}
*/

/// Names a key structure in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Pkcs1Public,
    Pkcs1Private,
    Pkcs8Public,
    Pkcs8Private,
}

impl Display for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Pkcs1Public => write!(f, "PKCS#1 public key"),
            Layout::Pkcs1Private => write!(f, "PKCS#1 private key"),
            Layout::Pkcs8Public => write!(f, "PKCS#8 public key"),
            Layout::Pkcs8Private => write!(f, "PKCS#8 private key"),
        }
    }
}

/// Container holding a nested DER payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    BitString,
    /// OCTET STRING, with BIT STRING also accepted.
    OctetString,
}

/// How the `N` integers of a key are laid out in a SEQUENCE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<const N: usize> {
    /// Positive INTEGERs at fixed positions, in output order.
    Integers([(usize, &'static str); N]),
    /// An rsaEncryption AlgorithmIdentifier followed by a wrapped payload
    /// that is read as a SEQUENCE with the `inner` layout.
    Wrapped {
        algorithm: usize,
        index: usize,
        payload: Payload,
        inner: &'static KeyLayout<N>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLayout<const N: usize> {
    layout: Layout,
    shape: Shape<N>,
}

impl<const N: usize> KeyLayout<N> {
    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn shape(&self) -> &Shape<N> {
        &self.shape
    }
}

/// Yields `[modulus, publicExponent]`.
pub const PKCS1_PUBLIC: KeyLayout<2> = KeyLayout {
    layout: Layout::Pkcs1Public,
    shape: Shape::Integers([(0, MODULUS), (1, PUBLIC_EXPONENT)]),
};

/// Yields `[modulus, publicExponent, privateExponent, prime1, prime2]`.
/// version [0] and the CRT values [6..=8] are not extracted.
pub const PKCS1_PRIVATE: KeyLayout<5> = KeyLayout {
    layout: Layout::Pkcs1Private,
    shape: Shape::Integers([
        (1, MODULUS),
        (2, PUBLIC_EXPONENT),
        (3, PRIVATE_EXPONENT),
        (4, PRIME_P),
        (5, PRIME_Q),
    ]),
};

pub const PKCS8_PUBLIC: KeyLayout<2> = KeyLayout {
    layout: Layout::Pkcs8Public,
    shape: Shape::Wrapped {
        algorithm: 0,
        index: 1,
        payload: Payload::BitString,
        inner: &PKCS1_PUBLIC,
    },
};

pub const PKCS8_PRIVATE: KeyLayout<5> = KeyLayout {
    layout: Layout::Pkcs8Private,
    shape: Shape::Wrapped {
        algorithm: 1,
        index: 2,
        payload: Payload::OctetString,
        inner: &PKCS1_PRIVATE,
    },
};

/// Extracts the integers `key_layout` declares from the children of a
/// SEQUENCE, in the order of its [`Shape::Integers`] table.
pub fn extract<const N: usize>(
    sequence: &[Element],
    key_layout: &KeyLayout<N>,
) -> Result<[BigUint; N]> {
    let layout = key_layout.layout;
    match key_layout.shape {
        Shape::Integers(fields) => {
            let mut values: [BigUint; N] = std::array::from_fn(|_| BigUint::default());
            for (value, (index, field)) in values.iter_mut().zip(fields) {
                *value = positive_integer(sequence, layout, index, field)?;
            }
            Ok(values)
        }
        Shape::Wrapped {
            algorithm,
            index,
            payload,
            inner,
        } => {
            check_algorithm(sequence, layout, algorithm)?;
            let bytes = payload_bytes(sequence, layout, index, payload)?;
            trace!("{}: nested payload of {} bytes", layout, bytes.len());
            let nested = read_sequence(bytes)?;
            extract(&nested, inner)
        }
    }
}

fn element_at<'a>(
    sequence: &'a [Element],
    layout: Layout,
    index: usize,
    field: &'static str,
) -> Result<&'a Element> {
    sequence.get(index).ok_or(Error::MissingElement {
        layout,
        index,
        field,
    })
}

fn unexpected(
    layout: Layout,
    index: usize,
    field: &'static str,
    expected: &'static str,
    actual: &Element,
) -> Error {
    Error::UnexpectedElement {
        layout,
        index,
        field,
        expected,
        actual: actual.name(),
    }
}

fn positive_integer(
    sequence: &[Element],
    layout: Layout,
    index: usize,
    field: &'static str,
) -> Result<BigUint> {
    match element_at(sequence, layout, index, field)? {
        Element::Integer(integer) if integer.is_positive() => integer
            .to_biguint()
            .ok_or(Error::NonPositiveInteger { field }),
        Element::Integer(_) => Err(Error::NonPositiveInteger { field }),
        other => Err(unexpected(layout, index, field, "INTEGER", other)),
    }
}

fn check_algorithm(sequence: &[Element], layout: Layout, index: usize) -> Result<()> {
    let identifier = match element_at(sequence, layout, index, ALGORITHM)? {
        Element::Sequence(identifier) => identifier,
        other => return Err(unexpected(layout, index, ALGORITHM, "SEQUENCE", other)),
    };
    match identifier.first() {
        Some(Element::ObjectIdentifier(oid)) if *oid == RSA_ENCRYPTION_OID => Ok(()),
        Some(Element::ObjectIdentifier(oid)) => Err(Error::UnsupportedAlgorithm(oid.to_string())),
        Some(other) => Err(unexpected(layout, index, ALGORITHM, "OBJECT IDENTIFIER", other)),
        None => Err(Error::MissingElement {
            layout,
            index,
            field: ALGORITHM,
        }),
    }
}

fn payload_bytes<'a>(
    sequence: &'a [Element],
    layout: Layout,
    index: usize,
    payload: Payload,
) -> Result<&'a [u8]> {
    let field = match payload {
        Payload::BitString => SUBJECT_PUBLIC_KEY,
        Payload::OctetString => PRIVATE_KEY,
    };
    match (payload, element_at(sequence, layout, index, field)?) {
        (_, Element::BitString(bits)) if bits.unused_bits() != 0 => {
            Err(Error::NonZeroUnusedBits(bits.unused_bits()))
        }
        (_, Element::BitString(bits)) => Ok(bits.as_bytes()),
        (Payload::OctetString, Element::OctetString(octets)) => Ok(octets.as_bytes()),
        (Payload::BitString, other) => Err(unexpected(layout, index, field, "BIT STRING", other)),
        (Payload::OctetString, other) => {
            Err(unexpected(layout, index, field, "OCTET STRING", other))
        }
    }
}
