//! Record data from [RFC 3596]: AAAA records.
//!
//! This RFC defines the AAAA record type.
//!
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

use crate::base::iana::Rtype;
use crate::base::rdata::{PresentError, RecordData};
use crate::base::validate::{self, FieldError};
use std::net::Ipv6Addr;

//------------ Aaaa ----------------------------------------------------------

/// AAAA record data.
///
/// AAAA records convey the IPv6 address of a host.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aaaa {
    addr: Option<Ipv6Addr>,
}

impl Aaaa {
    pub const RTYPE: Rtype = Rtype::AAAA;
    pub const MNEMONIC: &'static str = "AAAA";

    /// Creates record data from an address.
    #[must_use]
    pub fn new(addr: Ipv6Addr) -> Self {
        Aaaa { addr: Some(addr) }
    }

    /// Returns the address if it has been set.
    #[must_use]
    pub fn addr(&self) -> Option<Ipv6Addr> {
        self.addr
    }

    /// Sets the address from its literal text form.
    pub fn set_addr(&mut self, addr: &str) -> Result<(), FieldError> {
        self.addr = Some(validate::ipv6("address", addr)?);
        Ok(())
    }
}

//--- From

impl From<Ipv6Addr> for Aaaa {
    fn from(addr: Ipv6Addr) -> Self {
        Aaaa::new(addr)
    }
}

//--- RecordData

impl RecordData for Aaaa {
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

//============ Tests =========================================================
