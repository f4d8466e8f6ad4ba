use hanko::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("key error: {0}")]
    Key(#[from] hanko_pkcs::Error),

    #[error("key rejected by the RSA primitive: {0}")]
    InvalidKey(#[source] rsa::Error),

    #[error("signing failed: {0}")]
    Signing(#[source] rsa::Error),

    #[error("verification failed: {0}")]
    Verification(#[source] rsa::Error),

    #[error("signature is {actual} bytes, longer than the {expected}-byte modulus")]
    MalformedSignature { expected: usize, actual: usize },

    #[error("signature is not less than the modulus")]
    SignatureOutOfRange,

    #[error("unknown signature scheme: {0}")]
    UnknownScheme(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Key(e) => e.kind(),
            Error::UnknownScheme(_) => ErrorKind::Format,
            Error::InvalidKey(_)
            | Error::Signing(_)
            | Error::Verification(_)
            | Error::MalformedSignature { .. }
            | Error::SignatureOutOfRange => ErrorKind::Crypto,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
