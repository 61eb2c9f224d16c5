//! Record data from [RFC 2782]: SRV records.
//!
//! This RFC defines the SRV record type.
//!
//! [RFC 2782]: https://tools.ietf.org/html/rfc2782

use crate::base::iana::Rtype;
use crate::base::rdata::{PresentError, RecordData};
use crate::base::validate::{self, FieldError};

//------------ Srv -----------------------------------------------------------

/// SRV record data.
///
/// SRV records describe the location of a server for a specific service
/// and protocol, together with a priority and weight for choosing between
/// several such servers.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Srv {
    priority: Option<u16>,
    weight: Option<u16>,
    port: Option<u16>,
    target: Option<String>,
}

impl Srv {
    pub const RTYPE: Rtype = Rtype::SRV;
    pub const MNEMONIC: &'static str = "SRV";

    /// Creates record data from the given field values.
    pub fn new(
        priority: u32,
        weight: u32,
        port: u32,
        target: &str,
    ) -> Result<Self, FieldError> {
        let mut res = Self::default();
        res.set_priority(priority)?;
        res.set_weight(weight)?;
        res.set_port(port)?;
        res.set_target(target)?;
        Ok(res)
    }

    /// Returns the priority if it has been set.
    #[must_use]
    pub fn priority(&self) -> Option<u16> {
        self.priority
    }

    /// Sets the priority, a 16 bit integer.
    pub fn set_priority(&mut self, priority: u32) -> Result<(), FieldError> {
        self.priority = Some(validate::u16_field("priority", priority)?);
        Ok(())
    }

    /// Returns the weight if it has been set.
    #[must_use]
    pub fn weight(&self) -> Option<u16> {
        self.weight
    }

    /// Sets the weight, a 16 bit integer.
    pub fn set_weight(&mut self, weight: u32) -> Result<(), FieldError> {
        self.weight = Some(validate::u16_field("weight", weight)?);
        Ok(())
    }

    /// Returns the port if it has been set.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Sets the port, a 16 bit integer.
    pub fn set_port(&mut self, port: u32) -> Result<(), FieldError> {
        self.port = Some(validate::u16_field("port", port)?);
        Ok(())
    }

    /// Returns the target if it has been set.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Sets the target, a domain name.
    pub fn set_target(&mut self, target: &str) -> Result<(), FieldError> {
        validate::name("target", target)?;
        self.target = Some(target.into());
        Ok(())
    }
}

//--- RecordData

impl RecordData for Srv {
    fn rtype(&self) -> Rtype {
        Self::RTYPE
    }

    fn mnemonic(&self) -> &'static str {
        Self::MNEMONIC
    }

    fn present(&self) -> Result<String, PresentError> {
        let missing = |field| PresentError::missing(Self::RTYPE, field);
        let priority = self.priority.ok_or(missing("priority"))?;
        let weight = self.weight.ok_or(missing("weight"))?;
        let port = self.port.ok_or(missing("port"))?;
        let target = self.target.as_deref().ok_or(missing("target"))?;
        Ok(format!("{} {} {} {}", priority, weight, port, target))
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn present() {
        let srv = Srv::new(0, 5, 5060, "sip.example.com.").unwrap();
        assert_eq!(srv.present().unwrap(), "0 5 5060 sip.example.com.");
    }

    #[test]
    fn missing_fields_in_grammar_order() {
        let mut srv = Srv::default();
        assert_eq!(
            srv.present(),
            Err(PresentError::missing(Rtype::SRV, "priority"))
        );
        srv.set_priority(0).unwrap();
        srv.set_weight(5).unwrap();
        assert_eq!(
            srv.present(),
            Err(PresentError::missing(Rtype::SRV, "port"))
        );
    }

    #[test]
    fn rejected_mutation_keeps_prior_value() {
        let mut srv = Srv::new(0, 5, 5060, "sip.example.com.").unwrap();
        assert!(srv.set_port(70000).is_err());
        assert_eq!(srv.port(), Some(5060));
        assert!(srv.set_target("no target").is_err());
        assert_eq!(srv.target(), Some("sip.example.com."));
    }
}
