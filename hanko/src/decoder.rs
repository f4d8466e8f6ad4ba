//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait converts a source type `T` into a destination type
//! `D`. Each hanko crate implements it for the step it owns: PEM text into
//! bytes, bytes into DER, DER into ASN.1 elements, elements into keys.
//!
//! # Design Pattern
//!
//! 1. `Decoder<T, D>` - performs the conversion
//! 2. `DecodableFrom<T>` - marker trait constraining valid conversions
//!
//! Only pairs with an explicit `DecodableFrom` implementation can be decoded,
//! so an invalid conversion is a compile error rather than a runtime one.
//!
//! # Implementation Guide
//!
//! ```no_run
//! use hanko::decoder::{Decoder, DecodableFrom};
//!
//! struct Body(Vec<u8>);
//! struct Text(String);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<Body> for Text {}
//!
//! impl Decoder<Body, Text> for Body {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<Text, Self::Error> {
//!         String::from_utf8(self.0.clone()).map(Text).map_err(|_| MyError)
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type (usually `Self == T`). The destination
/// type must implement [`DecodableFrom<T>`].
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The specific error
    /// conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// Has no methods. Implement it for every destination type that has a
/// matching [`Decoder`] implementation:
///
/// ```no_run
/// use hanko::decoder::DecodableFrom;
///
/// struct Source;
/// struct Dest;
///
/// impl DecodableFrom<Source> for Dest {}
/// ```
pub trait DecodableFrom<T> {}
