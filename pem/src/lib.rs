//! PEM framing for RSA key material.
//!
//! A [`Pem`] is produced from text by keeping the first line as the header
//! and joining the base64 lines between the `BEGIN` and `END` markers.
//! Decoding it with [`Decoder`] yields the raw DER bytes.
//!
//! Lines are split on `\n` only. A carriage return left at the end of the
//! header line makes the header unrecognizable; body lines are trimmed.

pub mod error;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use base64::{Engine, engine::general_purpose::STANDARD};
use error::Error;
use hanko::decoder::{DecodableFrom, Decoder};

const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";
const RSA_PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";
const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";
const RSA_PUBLIC_KEY_LABEL: &str = "RSA PUBLIC KEY";

const BEGIN_MARKER: &str = "-----BEGIN";
const END_MARKER: &str = "-----END";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// PKCS#8 private key (non-encrypted)
    PrivateKey,
    /// PKCS#1 RSA private key
    RSAPrivateKey,
    /// X.509 SubjectPublicKeyInfo
    PublicKey,
    /// PKCS#1 RSA public key
    RSAPublicKey,
}

impl Label {
    const ALL: [Label; 4] = [
        Label::RSAPublicKey,
        Label::PublicKey,
        Label::RSAPrivateKey,
        Label::PrivateKey,
    ];

    /// Resolves a header line such as `-----BEGIN RSA PUBLIC KEY-----`.
    ///
    /// The comparison is exact and case-sensitive: surrounding whitespace or
    /// a trailing `\r` is not accepted.
    pub fn from_header(line: &str) -> Result<Label, Error> {
        Self::ALL
            .into_iter()
            .find(|label| label.header() == line)
            .ok_or_else(|| Error::UnrecognizedHeader(line.to_string()))
    }

    /// The full `BEGIN` line for this label.
    pub fn header(&self) -> String {
        format!("{} {}-----", BEGIN_MARKER, self)
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::PrivateKey => write!(f, "{}", PRIVATE_KEY_LABEL),
            Label::RSAPrivateKey => write!(f, "{}", RSA_PRIVATE_KEY_LABEL),
            Label::PublicKey => write!(f, "{}", PUBLIC_KEY_LABEL),
            Label::RSAPublicKey => write!(f, "{}", RSA_PUBLIC_KEY_LABEL),
        }
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PRIVATE_KEY_LABEL => Ok(Label::PrivateKey),
            RSA_PRIVATE_KEY_LABEL => Ok(Label::RSAPrivateKey),
            PUBLIC_KEY_LABEL => Ok(Label::PublicKey),
            RSA_PUBLIC_KEY_LABEL => Ok(Label::RSAPublicKey),
            _ => Err(Error::UnrecognizedHeader(s.to_string())),
        }
    }
}

/*
ref: https://www.rfc-editor.org/rfc/rfc7468.html#section-3
*/

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pem {
    header: String,
    base64_data: String, // base64 encoded data
}

impl Pem {
    /// Splits PEM text into its header line and concatenated base64 body.
    ///
    /// Framing never fails; header validation happens in [`Pem::label`] and
    /// base64 validation happens when the body is decoded.
    pub fn frame(text: &str) -> Self {
        let mut lines = text.split('\n').peekable();
        let header = lines.peek().copied().unwrap_or_default().to_string();

        // The header itself starts with the BEGIN marker, so it is skipped here too.
        let base64_data = lines
            .skip_while(|line| line.starts_with(BEGIN_MARKER))
            .take_while(|line| !line.starts_with(END_MARKER))
            .map(str::trim)
            .collect::<String>();

        Pem {
            header,
            base64_data,
        }
    }

    /// The raw first line of the input.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Resolves the header line into a [`Label`].
    pub fn label(&self) -> Result<Label, Error> {
        Label::from_header(&self.header)
    }

    pub fn data(&self) -> &str {
        &self.base64_data
    }
}

impl FromStr for Pem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Pem::frame(s))
    }
}

impl DecodableFrom<Pem> for Vec<u8> {}

impl Decoder<Pem, Vec<u8>> for Pem {
    type Error = Error;

    fn decode(&self) -> Result<Vec<u8>, Self::Error> {
        // This discards label information from Pem format.
        STANDARD.decode(self.data()).map_err(Error::Base64Decode)
    }
}

impl DecodableFrom<String> for Pem {}

impl Decoder<String, Pem> for String {
    type Error = Error;

    fn decode(&self) -> Result<Pem, Self::Error> {
        Pem::from_str(self)
    }
}

impl DecodableFrom<&str> for Pem {}

impl Decoder<&str, Pem> for &str {
    type Error = Error;

    fn decode(&self) -> Result<Pem, Self::Error> {
        Pem::from_str(self)
    }
}
