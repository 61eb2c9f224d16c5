//! Record data from [RFC 8005]: HIP records.
//!
//! This RFC defines the HIP record type.
//!
//! [RFC 8005]: https://tools.ietf.org/html/rfc8005

use crate::base::iana::Rtype;
use crate::base::rdata::{PresentError, RecordData};

//------------ Hip -----------------------------------------------------------

/// HIP record data.
///
/// HIP records store a Host Identity Protocol public key, its host identity
/// tag, and optional rendezvous servers.
///
/// Only the type identity is provided so far. The fields and the
/// presentation grammar are not implemented, and [`present`] fails with
/// [`PresentError::Unimplemented`] so callers can tell this type apart from
/// one that was merely left incomplete by mistake.
///
/// [`present`]: RecordData::present
// TODO: Implement the RFC 8005 fields and presentation grammar.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hip;

impl Hip {
    pub const RTYPE: Rtype = Rtype::HIP;
    pub const MNEMONIC: &'static str = "HIP";

    /// Creates record data.
    #[must_use]
    pub fn new() -> Self {
        Hip
    }
}

//--- RecordData

impl RecordData for Hip {
    fn rtype(&self) -> Rtype {
        Self::RTYPE
    }

    fn mnemonic(&self) -> &'static str {
        Self::MNEMONIC
    }

    fn present(&self) -> Result<String, PresentError> {
        Err(PresentError::Unimplemented(Self::RTYPE))
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reports_the_real_type_code() {
        assert_eq!(Hip::new().rtype().to_int(), 55);
        assert_eq!(Hip::new().mnemonic(), "HIP");
    }

    #[test]
    fn present_is_unimplemented() {
        assert_eq!(
            Hip::new().present(),
            Err(PresentError::Unimplemented(Rtype::HIP))
        );
    }
}
