//! Record data from [RFC 4255]: SSHFP records.
//!
//! This RFC defines the SSHFP record type.
//!
//! [RFC 4255]: https://tools.ietf.org/html/rfc4255

use crate::base::iana::Rtype;
use crate::base::rdata::{PresentError, RecordData};
use crate::base::validate::{self, FieldError};

//------------ Sshfp ---------------------------------------------------------

/// SSHFP record data.
///
/// SSHFP records publish a fingerprint of an SSH host key so clients can
/// verify the key out of band.
///
/// The algorithm and fingerprint type fields are 8 bit code points. The
/// designators assigned at the time of the RFC are available as associated
/// constants, but any 8 bit value is accepted so that algorithms registered
/// later stay representable.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sshfp {
    algorithm: Option<u8>,
    fingerprint_type: u8,
    fingerprint: Option<String>,
}

impl Sshfp {
    pub const RTYPE: Rtype = Rtype::SSHFP;
    pub const MNEMONIC: &'static str = "SSHFP";

    /// The RSA public key algorithm.
    pub const ALGORITHM_RSA: u8 = 1;

    /// The DSA public key algorithm.
    pub const ALGORITHM_DSA: u8 = 2;

    /// The SHA-1 fingerprint type, the default of the field.
    pub const FP_TYPE_SHA1: u8 = 1;

    /// Creates record data from the given field values.
    ///
    /// Empty record data is available through `Default`, with the
    /// fingerprint type starting out as SHA-1.
    pub fn new(
        algorithm: u16,
        fingerprint_type: u16,
        fingerprint: &str,
    ) -> Result<Self, FieldError> {
        let mut res = Self::default();
        res.set_algorithm(algorithm)?;
        res.set_fingerprint_type(fingerprint_type)?;
        res.set_fingerprint(fingerprint)?;
        Ok(res)
    }

    /// Returns the algorithm if it has been set.
    #[must_use]
    pub fn algorithm(&self) -> Option<u8> {
        self.algorithm
    }

    /// Sets the algorithm, an 8 bit integer.
    pub fn set_algorithm(&mut self, algorithm: u16) -> Result<(), FieldError> {
        self.algorithm = Some(validate::u8_field("algorithm", algorithm)?);
        Ok(())
    }

    /// Returns the fingerprint type.
    #[must_use]
    pub fn fingerprint_type(&self) -> u8 {
        self.fingerprint_type
    }

    /// Sets the fingerprint type, an 8 bit integer.
    pub fn set_fingerprint_type(
        &mut self,
        fingerprint_type: u16,
    ) -> Result<(), FieldError> {
        self.fingerprint_type =
            validate::u8_field("fingerprint type", fingerprint_type)?;
        Ok(())
    }

    /// Returns the fingerprint if it has been set.
    #[must_use]
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// Sets the fingerprint.
    ///
    /// The fingerprint must be a non-empty hexadecimal string. It is stored
    /// exactly as given, keeping its case.
    pub fn set_fingerprint(
        &mut self,
        fingerprint: &str,
    ) -> Result<(), FieldError> {
        validate::hex("fingerprint", fingerprint)?;
        self.fingerprint = Some(fingerprint.into());
        Ok(())
    }
}

//--- Default

impl Default for Sshfp {
    fn default() -> Self {
        Sshfp {
            algorithm: None,
            fingerprint_type: Self::FP_TYPE_SHA1,
            fingerprint: None,
        }
    }
}

//--- RecordData

impl RecordData for Sshfp {
    fn rtype(&self) -> Rtype {
        Self::RTYPE
    }

    fn mnemonic(&self) -> &'static str {
        Self::MNEMONIC
    }

    fn present(&self) -> Result<String, PresentError> {
        let algorithm = self
            .algorithm
            .ok_or_else(|| PresentError::missing(Self::RTYPE, "algorithm"))?;
        let fingerprint = self
            .fingerprint
            .as_deref()
            .ok_or_else(|| PresentError::missing(Self::RTYPE, "fingerprint"))?;
        Ok(format!(
            "{} {} {}",
            algorithm, self.fingerprint_type, fingerprint
        ))
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[test]
    fn present() {
        let sshfp = Sshfp::new(2, 1, "abcdef0123").unwrap();
        assert_eq!(sshfp.present().unwrap(), "2 1 abcdef0123");
    }

    #[test]
    fn present_is_idempotent() {
        let sshfp =
            Sshfp::new(1, 2, "123456789abcdef67890123456789abcdef67890")
                .unwrap();
        assert_eq!(sshfp.present().unwrap(), sshfp.present().unwrap());
    }

    #[test]
    fn fingerprint_type_defaults_to_sha1() {
        let mut sshfp = Sshfp::default();
        assert_eq!(sshfp.fingerprint_type(), Sshfp::FP_TYPE_SHA1);
        sshfp.set_algorithm(Sshfp::ALGORITHM_DSA.into()).unwrap();
        sshfp.set_fingerprint("abcdef0123").unwrap();
        assert_eq!(sshfp.present().unwrap(), "2 1 abcdef0123");
    }

    #[rstest]
    #[case(0)]
    #[case(200)]
    #[case(255)]
    fn eight_bit_fields_accept(#[case] value: u16) {
        let mut sshfp = Sshfp::default();
        sshfp.set_algorithm(value).unwrap();
        assert_eq!(sshfp.algorithm(), Some(value as u8));
        sshfp.set_fingerprint_type(value).unwrap();
        assert_eq!(sshfp.fingerprint_type(), value as u8);
    }

    #[rstest]
    #[case(256)]
    #[case(1000)]
    fn eight_bit_fields_reject_and_keep_state(#[case] value: u16) {
        let mut sshfp = Sshfp::new(2, 1, "abcdef0123").unwrap();
        assert_eq!(
            sshfp.set_algorithm(value),
            Err(FieldError::range("algorithm", value.into(), 255))
        );
        assert_eq!(sshfp.algorithm(), Some(2));

        let mut fresh = Sshfp::default();
        assert!(fresh.set_algorithm(value).is_err());
        assert_eq!(fresh.algorithm(), None);
    }

    #[test]
    fn fingerprint_is_stored_verbatim() {
        let mut sshfp = Sshfp::default();
        sshfp.set_fingerprint("AbCdEf0123").unwrap();
        assert_eq!(sshfp.fingerprint(), Some("AbCdEf0123"));
    }

    #[rstest]
    #[case("")]
    #[case("abcdefg")]
    #[case("12:34:56")]
    fn fingerprint_rejects_non_hex(#[case] value: &str) {
        let mut sshfp = Sshfp::new(2, 1, "abcdef0123").unwrap();
        assert!(matches!(
            sshfp.set_fingerprint(value),
            Err(FieldError::Format { field: "fingerprint", .. })
        ));
        assert_eq!(sshfp.fingerprint(), Some("abcdef0123"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Sshfp::new(2, 1, "abcdef0123").unwrap(),
            &[
                Token::Struct {
                    name: "Sshfp",
                    len: 3,
                },
                Token::Str("algorithm"),
                Token::Some,
                Token::U8(2),
                Token::Str("fingerprint_type"),
                Token::U8(1),
                Token::Str("fingerprint"),
                Token::Some,
                Token::Str("abcdef0123"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn missing_fields() {
        let mut sshfp = Sshfp::default();
        sshfp.set_algorithm(1).unwrap();
        assert_eq!(
            sshfp.present(),
            Err(PresentError::missing(Rtype::SSHFP, "fingerprint"))
        );

        let mut sshfp = Sshfp::default();
        sshfp.set_fingerprint("abcdef0123").unwrap();
        assert_eq!(
            sshfp.present(),
            Err(PresentError::missing(Rtype::SSHFP, "algorithm"))
        );
    }
}
