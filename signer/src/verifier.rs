use hanko_pkcs::PublicKey;
use log::debug;
use rsa::RsaPublicKey;
use rsa::traits::PublicKeyParts;

use crate::error::{Error, Result};
use crate::scheme::DigestScheme;
use crate::{MAX_MODULUS_BITS, to_rsa_biguint};

/// Checks PKCS#1 v1.5 signatures against a bound public key.
#[derive(Debug, Clone)]
pub struct Verifier {
    scheme: DigestScheme,
    key: RsaPublicKey,
}

impl Verifier {
    /// Binds `key` to `scheme`.
    ///
    /// Accepts the same modulus sizes as [`Signer::new`](crate::Signer::new),
    /// up to [`MAX_MODULUS_BITS`].
    pub fn new(scheme: DigestScheme, key: &PublicKey) -> Result<Self> {
        let key = RsaPublicKey::new_with_max_size(
            to_rsa_biguint(key.modulus()),
            to_rsa_biguint(key.public_exponent()),
            MAX_MODULUS_BITS,
        )
        .map_err(Error::InvalidKey)?;

        debug!(
            "bound {} ({}) verifier to a {}-bit key",
            scheme,
            scheme.signature_oid(),
            key.n().bits()
        );
        Ok(Verifier { scheme, key })
    }

    /// Parses a PEM public key and binds it to `scheme`.
    pub fn from_pem(scheme: DigestScheme, pem: &str) -> Result<Self> {
        let key = hanko_pkcs::parse_public(pem)?;
        Self::new(scheme, &key)
    }

    pub fn from_sha1_pem(pem: &str) -> Result<Self> {
        Self::from_pem(DigestScheme::Sha1WithRsa, pem)
    }

    pub fn from_sha256_pem(pem: &str) -> Result<Self> {
        Self::from_pem(DigestScheme::Sha256WithRsa, pem)
    }

    pub fn scheme(&self) -> DigestScheme {
        self.scheme
    }

    /// Checks `signature` over `message`.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not match.
    /// A signature shorter than the modulus is left-padded with zeros.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedSignature`] if the signature is longer than the
    /// modulus, [`Error::SignatureOutOfRange`] if its value is not less
    /// than the modulus.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        let size = self.key.size();
        if signature.len() > size {
            return Err(Error::MalformedSignature {
                expected: size,
                actual: signature.len(),
            });
        }

        let mut padded = vec![0u8; size - signature.len()];
        padded.extend_from_slice(signature);
        if rsa::BigUint::from_bytes_be(&padded) >= *self.key.n() {
            return Err(Error::SignatureOutOfRange);
        }

        let hashed = self.scheme.digest(message);
        match self.key.verify(self.scheme.padding(), &hashed, &padded) {
            Ok(()) => Ok(true),
            Err(rsa::Error::Verification) => Ok(false),
            Err(e) => Err(Error::Verification(e)),
        }
    }
}
