//! # hanko
//!
//! Core traits for decoding in the hanko RSA key and signature toolkit.
//!
//! This crate defines the `Decoder` trait that establishes the type-safe
//! conversion pattern used by every layer of hanko, and the [`ErrorKind`]
//! taxonomy their error types report.
//!
//! [`ErrorKind`]: error::ErrorKind
//!
//! ## Overview
//!
//! Key material flows through the layers like this:
//! ```text
//! PEM → Vec<u8> → DER → ASN1Object → PublicKey / PrivateKey
//! ```
//!
//! Each step uses the `Decoder` trait to convert from one type to the next.
//! Encoding is intentionally absent: hanko only reads key material.
//!
//! ## Example
//!
//! ```ignore
//! use hanko::decoder::Decoder;
//! use hanko_der::Der;
//! use hanko_asn1::ASN1Object;
//!
//! // Decode raw bytes to DER
//! let bytes: &[u8] = &[0x30, 0x00];
//! let der: Der = bytes.decode().unwrap();
//!
//! // Decode DER to ASN.1
//! let asn1: ASN1Object = der.decode().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod error;
