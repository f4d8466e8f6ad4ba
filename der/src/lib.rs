//! DER tokenizer.
//!
//! Splits a byte buffer into a tree of [`Tlv`] (tag, length, value) units.
//! Constructed values are parsed recursively; primitive values keep their
//! raw content octets for the ASN.1 layer to interpret.

use hanko::decoder::{DecodableFrom, Decoder};
use nom::{IResult, Parser};

pub mod error;

use error::Error;

pub const TAG_CONSTRUCTED: u8 = 0x20;
const TAG_CLASS_MASK: u8 = 0xc0;
const TAG_CLASS_UNIVERSAL: u8 = 0x00;
const TAG_CLASS_CONTEXT_SPECIFIC: u8 = 0x80;
const TAG_NUMBER_MASK: u8 = 0x1f;
const LENGTH_LONG_FORM: u8 = 0x80;

/// Deepest nesting of constructed values accepted by the tokenizer.
pub const MAX_DEPTH: usize = 32;

type PResult<'a, T> = IResult<&'a [u8], T, Error>;

impl nom::error::ParseError<&[u8]> for Error {
    fn from_error_kind(_input: &[u8], kind: nom::error::ErrorKind) -> Self {
        Error::Parser(kind)
    }

    fn append(_input: &[u8], _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

/// A sequence of top-level TLVs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Der {
    elements: Vec<Tlv>,
}

impl Der {
    pub fn elements(&self) -> &[Tlv] {
        &self.elements
    }
}

impl DecodableFrom<&[u8]> for Der {}

impl Decoder<&[u8], Der> for &[u8] {
    type Error = Error;

    fn decode(&self) -> Result<Der, Self::Error> {
        let mut input: &[u8] = self;
        let mut elements = Vec::new();
        while !input.is_empty() {
            let (rest, tlv) = Tlv::parse(input, 0).map_err(|e| match e {
                nom::Err::Error(e) | nom::Err::Failure(e) => e,
                nom::Err::Incomplete(needed) => Error::ParserIncomplete(needed),
            })?;
            input = rest;
            elements.push(tlv);
        }
        Ok(Der { elements })
    }
}

impl DecodableFrom<Vec<u8>> for Der {}

impl Decoder<Vec<u8>, Der> for Vec<u8> {
    type Error = Error;

    fn decode(&self) -> Result<Der, Self::Error> {
        let bytes: &[u8] = self.as_slice();
        bytes.decode()
    }
}

/// Universal class tag numbers the ASN.1 layer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrimitiveTag {
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectIdentifier,
    Sequence,
    Set,
    Unimplemented(u8),
}

impl From<u8> for PrimitiveTag {
    fn from(number: u8) -> Self {
        match number {
            0x01 => Self::Boolean,
            0x02 => Self::Integer,
            0x03 => Self::BitString,
            0x04 => Self::OctetString,
            0x05 => Self::Null,
            0x06 => Self::ObjectIdentifier,
            0x10 => Self::Sequence,
            0x11 => Self::Set,
            _ => Self::Unimplemented(number),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Universal class tag with its raw identifier octet.
    Primitive(PrimitiveTag, u8),
    ContextSpecific {
        slot: u8,
        constructed: bool,
    },
    /// Application or private class tag, kept opaque.
    Other(u8),
}

impl Tag {
    pub fn is_constructed(&self) -> bool {
        match self {
            Tag::Primitive(_, raw) | Tag::Other(raw) => raw & TAG_CONSTRUCTED != 0,
            Tag::ContextSpecific { constructed, .. } => *constructed,
        }
    }
}

impl From<u8> for Tag {
    fn from(value: u8) -> Self {
        let number = value & TAG_NUMBER_MASK;
        match value & TAG_CLASS_MASK {
            TAG_CLASS_UNIVERSAL => Tag::Primitive(PrimitiveTag::from(number), value),
            TAG_CLASS_CONTEXT_SPECIFIC => Tag::ContextSpecific {
                slot: number,
                constructed: value & TAG_CONSTRUCTED != 0,
            },
            _ => Tag::Other(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv {
    tag: Tag,
    length: usize,
    value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    Tlv(Vec<Tlv>),
    Data(Vec<u8>),
}

impl Tlv {
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Length of the content octets.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Content octets of a primitive value.
    pub fn data(&self) -> Option<&[u8]> {
        match &self.value {
            Value::Data(data) => Some(data),
            Value::Tlv(_) => None,
        }
    }

    /// Nested values of a constructed value.
    pub fn tlvs(&self) -> Option<&[Tlv]> {
        match &self.value {
            Value::Tlv(tlvs) => Some(tlvs),
            Value::Data(_) => None,
        }
    }

    fn parse(input: &[u8], depth: usize) -> PResult<'_, Tlv> {
        let (input, tag) = parse_tag(input)?;
        let (input, length) = parse_length(input)?;
        let (input, data) = nom::bytes::complete::take::<usize, &[u8], Error>(length).parse(input)?;

        if tag.is_constructed() {
            if depth >= MAX_DEPTH {
                return Err(nom::Err::Failure(Error::NestingTooDeep(MAX_DEPTH)));
            }
            // parse TLV recursively.
            let mut tlvs = Vec::new();
            let mut data = data;
            while !data.is_empty() {
                let (new_input, v) = Self::parse(data, depth + 1)?;
                data = new_input;
                tlvs.push(v);
            }

            return Ok((
                input,
                Tlv {
                    tag,
                    length,
                    value: Value::Tlv(tlvs),
                },
            ));
        }

        Ok((
            input,
            Tlv {
                tag,
                length,
                value: Value::Data(data.to_vec()),
            },
        ))
    }
}

fn parse_tag(input: &[u8]) -> PResult<'_, Tag> {
    let (input, n) = nom::number::complete::be_u8::<&[u8], Error>(input)?;
    if n & TAG_NUMBER_MASK == TAG_NUMBER_MASK {
        return Err(nom::Err::Failure(Error::HighTagNumber));
    }
    Ok((input, Tag::from(n)))
}

fn parse_length(input: &[u8]) -> PResult<'_, usize> {
    let (input, n) = nom::number::complete::be_u8::<&[u8], Error>(input)?;
    if n & LENGTH_LONG_FORM == 0 {
        // short form: 0-127
        return Ok((input, n as usize));
    }
    // long form
    // First 1 bit is a marker for long form.
    // Other bits represent bytes length of the length field.
    let count = n & !LENGTH_LONG_FORM;
    if count == 0 {
        return Err(nom::Err::Failure(Error::IndefiniteLength));
    }
    if count as usize > std::mem::size_of::<usize>() {
        return Err(nom::Err::Failure(Error::LengthTooLong(count)));
    }
    let (input, bs) = nom::bytes::complete::take::<usize, &[u8], Error>(count as usize).parse(input)?;
    let length = bs.iter().fold(0usize, |n, &b| (n << 8) | b as usize);
    Ok((input, length))
}
