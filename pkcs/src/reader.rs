//! Reads a DER buffer that must hold exactly one SEQUENCE.

use hanko::decoder::Decoder;
use hanko_asn1::{ASN1Object, Element};
use hanko_der::Der;

use crate::error::{Error, Result};

/// Tokenizes `bytes` and returns the children of its single top-level SEQUENCE.
pub fn read_sequence(bytes: &[u8]) -> Result<Vec<Element>> {
    let der: Der = bytes.decode()?;
    let obj: ASN1Object = der.decode()?;

    let mut elements = obj.into_elements();
    if elements.len() != 1 {
        return Err(Error::ExpectedSingleElement(elements.len()));
    }
    match elements.pop() {
        Some(Element::Sequence(children)) => Ok(children),
        Some(other) => Err(Error::ExpectedSequence(other.name())),
        None => Err(Error::ExpectedSingleElement(0)),
    }
}

#[cfg(test)]
mod tests {
    use hanko_asn1::Element;
    use rstest::rstest;

    use super::read_sequence;
    use crate::error::Error;

    #[rstest(input, expected_len,
        case(vec![0x30, 0x00], 0),
        case(vec![0x30, 0x03, 0x02, 0x01, 0x01], 1),
        case(vec![0x30, 0x06, 0x02, 0x01, 0x05, 0x02, 0x01, 0x03], 2),
    )]
    fn test_read_sequence(input: Vec<u8>, expected_len: usize) {
        let elements = read_sequence(&input).unwrap();
        assert_eq!(expected_len, elements.len());
        assert!(elements.iter().all(|e| matches!(e, Element::Integer(_))));
    }

    #[test]
    fn test_read_sequence_empty_input() {
        assert!(matches!(
            read_sequence(&[]),
            Err(Error::ExpectedSingleElement(0))
        ));
    }

    #[test]
    fn test_read_sequence_trailing_element() {
        assert!(matches!(
            read_sequence(&[0x30, 0x00, 0x05, 0x00]),
            Err(Error::ExpectedSingleElement(2))
        ));
    }

    #[rstest(input, expected,
        case(vec![0x02, 0x01, 0x01], "INTEGER"),
        case(vec![0x31, 0x00], "SET"),
        case(vec![0x04, 0x00], "OCTET STRING"),
    )]
    fn test_read_sequence_not_a_sequence(input: Vec<u8>, expected: &str) {
        match read_sequence(&input) {
            Err(Error::ExpectedSequence(actual)) => assert_eq!(expected, actual),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_sequence_truncated() {
        let result = read_sequence(&[0x30, 0x05, 0x02, 0x01]);
        assert!(matches!(result, Err(Error::Der(_))));
    }

    #[test]
    fn test_read_sequence_bad_element() {
        let result = read_sequence(&[0x30, 0x02, 0x02, 0x00]);
        assert!(matches!(result, Err(Error::Asn1(_))));
    }
}
