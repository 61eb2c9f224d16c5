//! Record data from [RFC 4034]: DNSKEY records.
//!
//! This RFC defines the record types for DNSSEC. Of those, DNSKEY is
//! implemented here.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034

use crate::base::iana::Rtype;
use crate::base::rdata::{PresentError, RecordData};
use crate::base::validate::{self, FieldError};

//------------ Dnskey --------------------------------------------------------

/// DNSKEY record data.
///
/// DNSKEY records publish the public key of a zone for use in DNSSEC
/// signature validation.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dnskey {
    flags: Option<u16>,
    protocol: u8,
    algorithm: Option<u8>,
    public_key: Option<String>,
}

impl Dnskey {
    pub const RTYPE: Rtype = Rtype::DNSKEY;
    pub const MNEMONIC: &'static str = "DNSKEY";

    /// The fixed protocol value mandated by RFC 4034, section 2.1.2.
    pub const PROTOCOL: u8 = 3;

    /// Creates record data from the given field values.
    ///
    /// The protocol field is left at its default. Empty record data is
    /// available through `Default`.
    pub fn new(
        flags: u32,
        algorithm: u16,
        public_key: &str,
    ) -> Result<Self, FieldError> {
        let mut res = Self::default();
        res.set_flags(flags)?;
        res.set_algorithm(algorithm)?;
        res.set_public_key(public_key)?;
        Ok(res)
    }

    /// Returns the flags if they have been set.
    #[must_use]
    pub fn flags(&self) -> Option<u16> {
        self.flags
    }

    /// Sets the flags, a 16 bit field.
    pub fn set_flags(&mut self, flags: u32) -> Result<(), FieldError> {
        self.flags = Some(validate::u16_field("flags", flags)?);
        Ok(())
    }

    /// Returns the protocol.
    #[must_use]
    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    /// Sets the protocol, an 8 bit integer.
    ///
    /// RFC 4034 requires the value 3, which the field defaults to, but any
    /// 8 bit value can be stored.
    pub fn set_protocol(&mut self, protocol: u16) -> Result<(), FieldError> {
        self.protocol = validate::u8_field("protocol", protocol)?;
        Ok(())
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

    /// Returns the public key if it has been set.
    #[must_use]
    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }

    /// Sets the public key, a Base 64 string stored as given.
    pub fn set_public_key(
        &mut self,
        public_key: &str,
    ) -> Result<(), FieldError> {
        validate::base64("public key", public_key)?;
        self.public_key = Some(public_key.into());
        Ok(())
    }
}

//--- Default

impl Default for Dnskey {
    fn default() -> Self {
        Dnskey {
            flags: None,
            protocol: Self::PROTOCOL,
            algorithm: None,
            public_key: None,
        }
    }
}

//--- RecordData

impl RecordData for Dnskey {
    fn rtype(&self) -> Rtype {
        Self::RTYPE
    }

    fn mnemonic(&self) -> &'static str {
        Self::MNEMONIC
    }

    fn present(&self) -> Result<String, PresentError> {
        let missing = |field| PresentError::missing(Self::RTYPE, field);
        let flags = self.flags.ok_or(missing("flags"))?;
        let algorithm = self.algorithm.ok_or(missing("algorithm"))?;
        let public_key =
            self.public_key.as_deref().ok_or(missing("public key"))?;
        Ok(format!(
            "{} {} {} {}",
            flags, self.protocol, algorithm, public_key
        ))
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    const KEY: &str = "AQPSKmynfzW4kyBv015MUG2DeIQ3";

    #[test]
    fn present() {
        let dnskey = Dnskey::new(256, 5, KEY).unwrap();
        assert_eq!(
            dnskey.present().unwrap(),
            format!("256 3 5 {}", KEY)
        );
    }

    #[test]
    fn protocol_defaults_to_three() {
        assert_eq!(Dnskey::default().protocol(), 3);
        let mut dnskey = Dnskey::default();
        dnskey.set_protocol(4).unwrap();
        assert_eq!(dnskey.protocol(), 4);
        assert!(dnskey.set_protocol(256).is_err());
        assert_eq!(dnskey.protocol(), 4);
    }

    #[test]
    fn public_key_must_be_base64() {
        let mut dnskey = Dnskey::new(256, 5, KEY).unwrap();
        assert!(dnskey.set_public_key("no key!").is_err());
        assert_eq!(dnskey.public_key(), Some(KEY));
    }

    #[test]
    fn missing_fields_in_grammar_order() {
        let mut dnskey = Dnskey::default();
        assert_eq!(
            dnskey.present(),
            Err(PresentError::missing(Rtype::DNSKEY, "flags"))
        );
        dnskey.set_flags(256).unwrap();
        assert_eq!(
            dnskey.present(),
            Err(PresentError::missing(Rtype::DNSKEY, "algorithm"))
        );
    }
}
