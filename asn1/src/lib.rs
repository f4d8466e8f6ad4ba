//! Typed ASN.1 elements.
//!
//! Converts the TLV tree produced by `hanko-der` into [`Element`] values.
//! Only the universal types that appear in RSA key structures get a typed
//! representation; everything else is kept as [`Element::Unimplemented`].

use std::{fmt::Display, str::FromStr};

use error::Error;
use hanko::decoder::{DecodableFrom, Decoder};
use hanko_der::{Der, PrimitiveTag, Tag, Tlv};
use num_bigint::{BigInt, BigUint, Sign};

pub mod error;

#[derive(Debug, Clone)]
pub struct ASN1Object {
    elements: Vec<Element>,
}

impl ASN1Object {
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}

impl DecodableFrom<Der> for ASN1Object {}

impl Decoder<Der, ASN1Object> for Der {
    type Error = Error;
    fn decode(&self) -> Result<ASN1Object, Error> {
        let elements = self
            .elements()
            .iter()
            .map(Element::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ASN1Object { elements })
    }
}

impl DecodableFrom<&[u8]> for ASN1Object {}

impl Decoder<&[u8], ASN1Object> for &[u8] {
    type Error = Error;
    fn decode(&self) -> Result<ASN1Object, Error> {
        let der: Der = self.decode()?;
        der.decode()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Boolean(bool),
    Integer(Integer),
    BitString(BitString),
    OctetString(OctetString),
    Null,
    ObjectIdentifier(ObjectIdentifier),
    Sequence(Vec<Element>),
    Set(Vec<Element>),
    /// A context-specific value.
    ///
    /// Constructed values with exactly one child hold that child; any other
    /// child count is wrapped in a `Sequence`. Primitive (IMPLICIT) values
    /// hold their raw content as an `OctetString`.
    ContextSpecific {
        slot: u8,
        constructed: bool,
        element: Box<Element>,
    },
    Unimplemented(Tlv),
}

impl Element {
    /// ASN.1 type name, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Element::Boolean(_) => "BOOLEAN",
            Element::Integer(_) => "INTEGER",
            Element::BitString(_) => "BIT STRING",
            Element::OctetString(_) => "OCTET STRING",
            Element::Null => "NULL",
            Element::ObjectIdentifier(_) => "OBJECT IDENTIFIER",
            Element::Sequence(_) => "SEQUENCE",
            Element::Set(_) => "SET",
            Element::ContextSpecific { .. } => "context-specific",
            Element::Unimplemented(_) => "unimplemented",
        }
    }
}

impl TryFrom<&Tlv> for Element {
    type Error = Error;

    fn try_from(tlv: &Tlv) -> Result<Self, Self::Error> {
        match tlv.tag() {
            Tag::Primitive(primitive_tag, _) => match (primitive_tag, tlv.data(), tlv.tlvs()) {
                (PrimitiveTag::Boolean, Some(data), _) => match data {
                    [0x00] => Ok(Element::Boolean(false)),
                    [0xff] => Ok(Element::Boolean(true)),
                    _ => Err(Error::InvalidBoolean),
                },
                (PrimitiveTag::Integer, Some(data), _) => {
                    Ok(Element::Integer(Integer::try_from(data)?))
                }
                (PrimitiveTag::BitString, Some(data), _) => {
                    Ok(Element::BitString(BitString::try_from(data)?))
                }
                (PrimitiveTag::OctetString, Some(data), _) => {
                    Ok(Element::OctetString(OctetString::from(data)))
                }
                (PrimitiveTag::Null, Some([]), _) => Ok(Element::Null),
                (PrimitiveTag::Null, Some(data), _) => Err(Error::NullWithContent(data.len())),
                (PrimitiveTag::ObjectIdentifier, Some(data), _) => {
                    Ok(Element::ObjectIdentifier(ObjectIdentifier::try_from(data)?))
                }
                (PrimitiveTag::Sequence, _, Some(tlvs)) => Ok(Element::Sequence(children(tlvs)?)),
                (PrimitiveTag::Set, _, Some(tlvs)) => Ok(Element::Set(children(tlvs)?)),
                // Unknown universal types, and known types with the wrong
                // primitive/constructed form, are kept raw.
                _ => Ok(Element::Unimplemented(tlv.clone())),
            },
            Tag::ContextSpecific { slot, constructed } => {
                let element = match (tlv.data(), tlv.tlvs()) {
                    (_, Some([tlv])) => Element::try_from(tlv)?,
                    (_, Some(tlvs)) => Element::Sequence(children(tlvs)?),
                    // Primitive: IMPLICIT tagging
                    // Store raw data as OctetString - the upper layer interprets based on schema
                    (Some(data), None) => Element::OctetString(OctetString::from(data)),
                    (None, None) => Element::OctetString(OctetString::from(Vec::new())),
                };
                Ok(Element::ContextSpecific {
                    slot: *slot,
                    constructed: *constructed,
                    element: Box::new(element),
                })
            }
            Tag::Other(_) => Ok(Element::Unimplemented(tlv.clone())),
        }
    }
}

fn children(tlvs: &[Tlv]) -> Result<Vec<Element>, Error> {
    tlvs.iter().map(Element::try_from).collect()
}

// ASN.1 INTEGER is a two's complement big-endian value of arbitrary size.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Integer {
    inner: BigInt,
}

impl Integer {
    /// True for values strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.inner.sign() == Sign::Plus
    }

    /// Unsigned magnitude, or `None` for negative values.
    pub fn to_biguint(&self) -> Option<BigUint> {
        self.inner.to_biguint()
    }
}

impl From<BigInt> for Integer {
    fn from(inner: BigInt) -> Self {
        Integer { inner }
    }
}

impl TryFrom<&[u8]> for Integer {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(Error::IntegerNoData);
        }
        Ok(Integer {
            inner: BigInt::from_signed_bytes_be(value),
        })
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectIdentifier {
    inner: Vec<u64>,
}

impl ObjectIdentifier {
    pub fn components(&self) -> &[u64] {
        &self.inner
    }
}

impl TryFrom<&[u8]> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(Error::ObjectIdentifierNoData);
        }

        // base-128 subidentifiers, high bit set on every byte but the last
        let mut subidentifiers = Vec::new();
        let mut val = 0u64;
        let mut pending = false;
        for b in value {
            if val > (u64::MAX >> 7) {
                return Err(Error::ObjectIdentifierComponentOverflow);
            }
            val = (val << 7) | u64::from(b & 0x7f);
            pending = b & 0x80 != 0;
            if !pending {
                subidentifiers.push(val);
                val = 0;
            }
        }

        let (first, rest) = match subidentifiers.split_first() {
            Some((first, rest)) if !pending => (*first, rest),
            _ => return Err(Error::ObjectIdentifierIncompleteEncoding),
        };

        // The first subidentifier packs two arcs as 40 * X + Y.
        let (arc1, arc2) = match first {
            0..=39 => (0, first),
            40..=79 => (1, first - 40),
            _ => (2, first - 80),
        };

        let mut inner = Vec::with_capacity(rest.len() + 2);
        inner.push(arc1);
        inner.push(arc2);
        inner.extend_from_slice(rest);
        Ok(ObjectIdentifier { inner })
    }
}

impl Display for ObjectIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self
            .inner
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{}", s)
    }
}

impl FromStr for ObjectIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .split('.')
            .map(|c| {
                c.parse::<u64>()
                    .map_err(|e| Error::ObjectIdentifierInvalidComponent(c.to_string(), e))
            })
            .collect::<Result<Vec<u64>, Error>>()?;
        if inner.len() < 2 {
            return Err(Error::ObjectIdentifierTooFewComponents);
        }
        Ok(ObjectIdentifier { inner })
    }
}

impl PartialEq<&str> for ObjectIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl PartialEq<ObjectIdentifier> for &str {
    fn eq(&self, other: &ObjectIdentifier) -> bool {
        *self == other.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString {
    unused: u8,
    data: Vec<u8>,
}

impl BitString {
    /// Returns the number of unused bits in the last byte
    pub fn unused_bits(&self) -> u8 {
        self.unused
    }

    /// Returns a reference to the underlying byte data
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl TryFrom<&[u8]> for BitString {
    type Error = Error;
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        match value.split_first() {
            Some((&unused, _)) if unused > 7 => Err(Error::BitStringUnusedBitsOutOfRange(unused)),
            // an empty bit string cannot leave bits unused
            Some((&unused, [])) if unused != 0 => {
                Err(Error::BitStringUnusedBitsOutOfRange(unused))
            }
            Some((&unused, data)) => Ok(BitString {
                unused,
                data: data.to_vec(),
            }),
            None => Err(Error::BitStringNoData),
        }
    }
}

impl Display for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut result = String::new();

        for (i, byte) in self.data.iter().enumerate() {
            if i == self.data.len() - 1 && self.unused > 0 {
                // Handle the last byte with unused bits
                let valid_bits = byte >> self.unused;
                let bit_count = 8 - self.unused as usize;
                result.push_str(&format!("{:0bit_count$b}", valid_bits));
            } else {
                result.push_str(&format!("{:08b}", byte));
            }
        }

        write!(f, "{}", result)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OctetString {
    inner: Vec<u8>,
}

impl OctetString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }}

impl From<Vec<u8>> for OctetString {
    fn from(value: Vec<u8>) -> Self {
        OctetString { inner: value }
    }
}

impl From<&[u8]> for OctetString {
    fn from(value: &[u8]) -> Self {
        OctetString {
            inner: value.to_vec(),
        }
    }
}

impl Display for OctetString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self
            .inner
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<String>();
        write!(f, "{}", s)
    }
}
