//! Record data from [RFC 1035]: the initial record types.
//!
//! This RFC defines the initial set of record types. The types implemented
//! here are A, CNAME, MX, NS, PTR, SOA, and TXT.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use crate::base::iana::Rtype;
use crate::base::rdata::{PresentError, RecordData};
use crate::base::validate::{self, FieldError};
use std::net::Ipv4Addr;

//------------ A -------------------------------------------------------------

/// A record data.
///
/// A records convey the IPv4 address of a host.
///
/// The A record type is defined in RFC 1035, section 3.4.1.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct A {
    addr: Option<Ipv4Addr>,
}

impl A {
    pub const RTYPE: Rtype = Rtype::A;
    pub const MNEMONIC: &'static str = "A";

    /// Creates record data from an address.
    #[must_use]
    pub fn new(addr: Ipv4Addr) -> Self {
        A { addr: Some(addr) }
    }

    /// Returns the address if it has been set.
    #[must_use]
    pub fn addr(&self) -> Option<Ipv4Addr> {
        self.addr
    }

    /// Sets the address from its literal text form.
    pub fn set_addr(&mut self, addr: &str) -> Result<(), FieldError> {
        self.addr = Some(validate::ipv4("address", addr)?);
        Ok(())
    }
}

//--- From

impl From<Ipv4Addr> for A {
    fn from(addr: Ipv4Addr) -> Self {
        A::new(addr)
    }
}

//--- RecordData

impl RecordData for A {
    fn rtype(&self) -> Rtype {
        Self::RTYPE
    }

    fn mnemonic(&self) -> &'static str {
        Self::MNEMONIC
    }

    fn present(&self) -> Result<String, PresentError> {
        match self.addr {
            Some(addr) => Ok(addr.to_string()),
            None => Err(PresentError::missing(Self::RTYPE, "address")),
        }
    }
}

//------------ Cname ---------------------------------------------------------

name_rdata_type! {
    /// CNAME record data.
    ///
    /// The CNAME type specifies the canonical name of its owner, making the
    /// owner name an alias.
    ///
    /// The CNAME record type is defined in RFC 1035, section 3.3.1.
    (Cname, CNAME, "canonical name")
}

//------------ Mx ------------------------------------------------------------

/// MX record data.
///
/// MX records name a host willing to act as a mail exchange for the owner
/// together with a preference among multiple such hosts. Lower preference
/// values are preferred.
///
/// The MX record type is defined in RFC 1035, section 3.3.9.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mx {
    preference: Option<u16>,
    exchange: Option<String>,
}

impl Mx {
    pub const RTYPE: Rtype = Rtype::MX;
    pub const MNEMONIC: &'static str = "MX";

    /// Creates record data from the given field values.
    pub fn new(preference: u32, exchange: &str) -> Result<Self, FieldError> {
        let mut res = Self::default();
        res.set_preference(preference)?;
        res.set_exchange(exchange)?;
        Ok(res)
    }

    /// Returns the preference if it has been set.
    #[must_use]
    pub fn preference(&self) -> Option<u16> {
        self.preference
    }

    /// Sets the preference, a 16 bit integer.
    pub fn set_preference(&mut self, preference: u32) -> Result<(), FieldError> {
        self.preference = Some(validate::u16_field("preference", preference)?);
        Ok(())
    }

    /// Returns the exchange if it has been set.
    #[must_use]
    pub fn exchange(&self) -> Option<&str> {
        self.exchange.as_deref()
    }

    /// Sets the exchange, a domain name.
    pub fn set_exchange(&mut self, exchange: &str) -> Result<(), FieldError> {
        validate::name("exchange", exchange)?;
        self.exchange = Some(exchange.into());
        Ok(())
    }
}

//--- RecordData

impl RecordData for Mx {
    fn rtype(&self) -> Rtype {
        Self::RTYPE
    }

    fn mnemonic(&self) -> &'static str {
        Self::MNEMONIC
    }

    fn present(&self) -> Result<String, PresentError> {
        let preference = self
            .preference
            .ok_or_else(|| PresentError::missing(Self::RTYPE, "preference"))?;
        let exchange = self
            .exchange
            .as_deref()
            .ok_or_else(|| PresentError::missing(Self::RTYPE, "exchange"))?;
        Ok(format!("{} {}", preference, exchange))
    }
}

//------------ Ns ------------------------------------------------------------

name_rdata_type! {
    /// NS record data.
    ///
    /// NS records name a host that is authoritative for the owner's zone.
    ///
    /// The NS record type is defined in RFC 1035, section 3.3.11.
    (Ns, NS, "name server")
}

//------------ Ptr -----------------------------------------------------------

name_rdata_type! {
    /// PTR record data.
    ///
    /// PTR records point to some other location in the domain space, most
    /// commonly mapping addresses back to host names.
    ///
    /// The PTR record type is defined in RFC 1035, section 3.3.12.
    (Ptr, PTR, "pointer name")
}

//------------ Soa -----------------------------------------------------------

/// SOA record data.
///
/// SOA records mark the start of a zone of authority and carry the zone's
/// administrative parameters.
///
/// The SOA record type is defined in RFC 1035, section 3.3.13.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Soa {
    mname: Option<String>,
    rname: Option<String>,
    serial: Option<u32>,
    refresh: Option<u32>,
    retry: Option<u32>,
    expire: Option<u32>,
    minimum: Option<u32>,
}

impl Soa {
    pub const RTYPE: Rtype = Rtype::SOA;
    pub const MNEMONIC: &'static str = "SOA";

    /// Creates record data from the given field values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mname: &str,
        rname: &str,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> Result<Self, FieldError> {
        let mut res = Self::default();
        res.set_mname(mname)?;
        res.set_rname(rname)?;
        res.set_serial(serial);
        res.set_refresh(refresh);
        res.set_retry(retry);
        res.set_expire(expire);
        res.set_minimum(minimum);
        Ok(res)
    }

    /// Returns the primary name server if it has been set.
    #[must_use]
    pub fn mname(&self) -> Option<&str> {
        self.mname.as_deref()
    }

    /// Sets the primary name server, a domain name.
    pub fn set_mname(&mut self, mname: &str) -> Result<(), FieldError> {
        validate::name("mname", mname)?;
        self.mname = Some(mname.into());
        Ok(())
    }

    /// Returns the responsible person's mailbox if it has been set.
    #[must_use]
    pub fn rname(&self) -> Option<&str> {
        self.rname.as_deref()
    }

    /// Sets the responsible person's mailbox.
    ///
    /// The mailbox is encoded as a domain name with the local part as its
    /// first label.
    pub fn set_rname(&mut self, rname: &str) -> Result<(), FieldError> {
        validate::name("rname", rname)?;
        self.rname = Some(rname.into());
        Ok(())
    }

    /// Returns the serial number if it has been set.
    #[must_use]
    pub fn serial(&self) -> Option<u32> {
        self.serial
    }

    /// Sets the serial number.
    pub fn set_serial(&mut self, serial: u32) {
        self.serial = Some(serial);
    }

    /// Returns the refresh interval if it has been set.
    #[must_use]
    pub fn refresh(&self) -> Option<u32> {
        self.refresh
    }

    /// Sets the refresh interval in seconds.
    pub fn set_refresh(&mut self, refresh: u32) {
        self.refresh = Some(refresh);
    }

    /// Returns the retry interval if it has been set.
    #[must_use]
    pub fn retry(&self) -> Option<u32> {
        self.retry
    }

    /// Sets the retry interval in seconds.
    pub fn set_retry(&mut self, retry: u32) {
        self.retry = Some(retry);
    }

    /// Returns the expire interval if it has been set.
    #[must_use]
    pub fn expire(&self) -> Option<u32> {
        self.expire
    }

    /// Sets the expire interval in seconds.
    pub fn set_expire(&mut self, expire: u32) {
        self.expire = Some(expire);
    }

    /// Returns the minimum TTL if it has been set.
    #[must_use]
    pub fn minimum(&self) -> Option<u32> {
        self.minimum
    }

    /// Sets the minimum TTL in seconds.
    pub fn set_minimum(&mut self, minimum: u32) {
        self.minimum = Some(minimum);
    }
}

//--- RecordData

impl RecordData for Soa {
    fn rtype(&self) -> Rtype {
        Self::RTYPE
    }

    fn mnemonic(&self) -> &'static str {
        Self::MNEMONIC
    }

    fn present(&self) -> Result<String, PresentError> {
        let missing = |field| PresentError::missing(Self::RTYPE, field);
        let mname = self.mname.as_deref().ok_or(missing("mname"))?;
        let rname = self.rname.as_deref().ok_or(missing("rname"))?;
        let serial = self.serial.ok_or(missing("serial"))?;
        let refresh = self.refresh.ok_or(missing("refresh"))?;
        let retry = self.retry.ok_or(missing("retry"))?;
        let expire = self.expire.ok_or(missing("expire"))?;
        let minimum = self.minimum.ok_or(missing("minimum"))?;
        Ok(format!(
            "{} {} {} {} {} {} {}",
            mname, rname, serial, refresh, retry, expire, minimum
        ))
    }
}

//------------ Txt -----------------------------------------------------------

/// TXT record data.
///
/// TXT records hold descriptive text. The semantics of the text depend on
/// the domain where it is found.
///
/// The TXT record type is defined in RFC 1035, section 3.3.14.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Txt {
    text: Option<String>,
}

impl Txt {
    pub const RTYPE: Rtype = Rtype::TXT;
    pub const MNEMONIC: &'static str = "TXT";

    /// Creates record data from the given text.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Txt {
            text: Some(text.into()),
        }
    }

    /// Returns the text if it has been set.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Sets the text.
    ///
    /// Any text is acceptable. Presentation format takes care of quoting
    /// and escaping.
    pub fn set_text(&mut self, text: &str) {
        self.text = Some(text.into());
    }
}

//--- RecordData

impl RecordData for Txt {
    fn rtype(&self) -> Rtype {
        Self::RTYPE
    }

    fn mnemonic(&self) -> &'static str {
        Self::MNEMONIC
    }

    fn present(&self) -> Result<String, PresentError> {
        let text = self
            .text
            .as_deref()
            .ok_or_else(|| PresentError::missing(Self::RTYPE, "text"))?;
        let mut res = String::with_capacity(text.len() + 2);
        res.push('"');
        for ch in text.chars() {
            if ch == '"' || ch == '\\' {
                res.push('\\');
            }
            res.push(ch);
        }
        res.push('"');
        Ok(res)
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    //--- A

    #[test]
    fn a_present() {
        let a = A::new(Ipv4Addr::new(203, 0, 113, 63));
        assert_eq!(a.present().unwrap(), "203.0.113.63");
        assert_eq!(
            A::default().present(),
            Err(PresentError::missing(Rtype::A, "address"))
        );
    }

    #[test]
    fn a_set_addr() {
        let mut a = A::default();
        a.set_addr("192.0.2.1").unwrap();
        assert_eq!(a.addr(), Some(Ipv4Addr::new(192, 0, 2, 1)));
        assert!(a.set_addr("192.0.2.256").is_err());
        assert_eq!(a.addr(), Some(Ipv4Addr::new(192, 0, 2, 1)));
    }

    //--- Cname, Ns, Ptr

    #[test]
    fn name_types_present() {
        let cname = Cname::new("www.example.com.").unwrap();
        assert_eq!(cname.rtype(), Rtype::CNAME);
        assert_eq!(cname.mnemonic(), "CNAME");
        assert_eq!(cname.present().unwrap(), "www.example.com.");

        assert_eq!(Ns::new("ns1.example.com.").unwrap().rtype(), Rtype::NS);
        assert_eq!(
            Ptr::new("host.example.com.").unwrap().present().unwrap(),
            "host.example.com."
        );
        assert_eq!(
            Ns::default().present(),
            Err(PresentError::missing(Rtype::NS, "name server"))
        );
    }

    #[test]
    fn name_types_validate() {
        assert!(Cname::new("not a name").is_err());
        let mut cname = Cname::new("a.example.").unwrap();
        assert!(cname.set_name("b..example").is_err());
        assert_eq!(cname.name(), Some("a.example."));
    }

    //--- Mx

    #[test]
    fn mx_present() {
        let mx = Mx::new(10, "mail.example.com.").unwrap();
        assert_eq!(mx.present().unwrap(), "10 mail.example.com.");
    }

    #[test]
    fn mx_rejects_out_of_range_preference() {
        let mut mx = Mx::new(10, "mail.example.com.").unwrap();
        assert!(mx.set_preference(65536).is_err());
        assert_eq!(mx.preference(), Some(10));
    }

    #[test]
    fn mx_missing_fields_in_grammar_order() {
        let mut mx = Mx::default();
        assert_eq!(
            mx.present(),
            Err(PresentError::missing(Rtype::MX, "preference"))
        );
        mx.set_preference(10).unwrap();
        assert_eq!(
            mx.present(),
            Err(PresentError::missing(Rtype::MX, "exchange"))
        );
    }

    //--- Soa

    #[test]
    fn soa_present() {
        let soa = Soa::new(
            "ns1.example.com.",
            "admin.example.com.",
            2018031900,
            1800,
            900,
            604800,
            86400,
        )
        .unwrap();
        assert_eq!(
            soa.present().unwrap(),
            "ns1.example.com. admin.example.com. \
             2018031900 1800 900 604800 86400"
        );
    }

    #[test]
    fn soa_missing_field() {
        let mut soa = Soa::default();
        soa.set_mname("ns1.example.com.").unwrap();
        assert_eq!(
            soa.present(),
            Err(PresentError::missing(Rtype::SOA, "rname"))
        );
    }

    //--- Txt

    #[test]
    fn txt_present_quotes_and_escapes() {
        assert_eq!(
            Txt::new("v=spf1 -all").present().unwrap(),
            "\"v=spf1 -all\""
        );
        assert_eq!(
            Txt::new("say \"hi\" \\ bye").present().unwrap(),
            "\"say \\\"hi\\\" \\\\ bye\""
        );
        assert_eq!(
            Txt::default().present(),
            Err(PresentError::missing(Rtype::TXT, "text"))
        );
    }
}
