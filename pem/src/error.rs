use base64::DecodeError;
use hanko::error::ErrorKind;
use thiserror::Error;

/// Errors that can occur when framing or decoding PEM data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The first line is not one of the recognized `-----BEGIN ...-----` headers.
    #[error("unrecognized PEM header: {0:?}")]
    UnrecognizedHeader(String),

    /// The body is not valid standard base64.
    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnrecognizedHeader(_) => ErrorKind::Format,
            Error::Base64Decode(_) => ErrorKind::Decode,
        }
    }
}
