//! Error types for ASN.1 element decoding.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while turning DER TLVs into typed elements.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    // Boolean errors
    #[error("BOOLEAN: invalid encoding")]
    InvalidBoolean,

    // Integer errors
    #[error("INTEGER: no data")]
    IntegerNoData,

    // ObjectIdentifier errors
    #[error("OBJECT IDENTIFIER: no data")]
    ObjectIdentifierNoData,
    #[error("OBJECT IDENTIFIER: incomplete encoding")]
    ObjectIdentifierIncompleteEncoding,
    #[error("OBJECT IDENTIFIER: component overflows u64")]
    ObjectIdentifierComponentOverflow,
    #[error("OBJECT IDENTIFIER: too few components (need at least 2)")]
    ObjectIdentifierTooFewComponents,
    #[error("OBJECT IDENTIFIER: invalid component '{0}': {1}")]
    ObjectIdentifierInvalidComponent(String, ParseIntError),

    // BitString errors
    #[error("BIT STRING: no data")]
    BitStringNoData,
    #[error("BIT STRING: unused bits {0} out of range (must be 0-7)")]
    BitStringUnusedBitsOutOfRange(u8),

    // Null errors
    #[error("NULL: must have no content, got {0} bytes")]
    NullWithContent(usize),

    // DER errors
    #[error("invalid DER encoding: {0}")]
    FailedToDecodeDer(#[from] hanko_der::error::Error),
}
