use hanko::error::ErrorKind;
use hanko_pem::Label;
use thiserror::Error;

use crate::layout::Layout;

#[derive(Debug, Error)]
pub enum Error {
    #[error("PEM error: {0}")]
    Pem(#[from] hanko_pem::error::Error),

    #[error("DER error: {0}")]
    Der(#[from] hanko_der::error::Error),

    #[error("ASN.1 error: {0}")]
    Asn1(#[from] hanko_asn1::error::Error),

    #[error("expected a {expected} PEM, got {actual}")]
    UnexpectedLabel { expected: &'static str, actual: Label },

    #[error("expected exactly one top-level element, got {0}")]
    ExpectedSingleElement(usize),

    #[error("expected SEQUENCE, got {0}")]
    ExpectedSequence(&'static str),

    #[error("{layout}: missing element {index} ({field})")]
    MissingElement {
        layout: Layout,
        index: usize,
        field: &'static str,
    },

    #[error("{layout}: element {index} ({field}) must be {expected}, got {actual}")]
    UnexpectedElement {
        layout: Layout,
        index: usize,
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("{field} must be a positive INTEGER")]
    NonPositiveInteger { field: &'static str },

    #[error("BIT STRING key payload has {0} unused bits")]
    NonZeroUnusedBits(u8),

    #[error("unsupported key algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Pem(e) => e.kind(),
            Error::UnexpectedLabel { .. } => ErrorKind::Format,
            _ => ErrorKind::Structure,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
