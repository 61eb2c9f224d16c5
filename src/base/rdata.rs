//! Resource record data basics.
//!
//! This module defines the [`RecordData`] trait implemented by all record
//! data types as well as [`PresentError`], the error type for producing
//! presentation format text.

use super::iana::Rtype;
use core::fmt;

//------------ RecordData ----------------------------------------------------

/// A trait for types representing record data.
///
/// A value of a type implementing this trait holds the fields of one
/// record's RDATA. The trait provides access to the identity of the record
/// type and to the canonical presentation format text of the current field
/// values. Field access itself differs per record type and is provided by
/// the individual types directly.
pub trait RecordData {
    /// Returns the record type of this record data.
    fn rtype(&self) -> Rtype;

    /// Returns the mnemonic of the record type of this record data.
    ///
    /// This is the fixed type name used in zone files, e.g. `"SSHFP"`. It
    /// is identical for all values of an implementing type.
    fn mnemonic(&self) -> &'static str;

    /// Formats the record data in its canonical presentation format.
    ///
    /// The returned text is the type-specific grammar defined by the
    /// record type's RFC with fields separated by single spaces. No
    /// trailing white space or line terminator is appended.
    ///
    /// The method fails with [`PresentError::MissingField`] if a field
    /// required by the grammar has never been set and with
    /// [`PresentError::Unimplemented`] if the type has not implemented its
    /// grammar at all. The two cases are deliberately distinct so callers
    /// can tell ‘not ready’ apart from ‘misused.’
    fn present(&self) -> Result<String, PresentError>;
}

//------------ PresentError --------------------------------------------------

/// An error happened when presenting record data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PresentError {
    /// A field required by the record type's grammar has never been set.
    MissingField {
        /// The record type whose data was being presented.
        rtype: Rtype,

        /// The name of the field that is missing.
        field: &'static str,
    },

    /// The record type has not implemented its presentation grammar yet.
    Unimplemented(Rtype),
}

impl PresentError {
    /// Creates a missing field error for the given type and field.
    #[must_use]
    pub fn missing(rtype: Rtype, field: &'static str) -> Self {
        PresentError::MissingField { rtype, field }
    }

    /// Returns the record type the error occurred for.
    #[must_use]
    pub fn rtype(self) -> Rtype {
        match self {
            PresentError::MissingField { rtype, .. } => rtype,
            PresentError::Unimplemented(rtype) => rtype,
        }
    }
}

//--- Display and Error

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PresentError::MissingField { rtype, field } => {
                write!(f, "{} record data lacks the {} field", rtype, field)
            }
            PresentError::Unimplemented(rtype) => {
                write!(
                    f,
                    "presentation format of {} record data \
                     is not implemented",
                    rtype
                )
            }
        }
    }
}

impl std::error::Error for PresentError {}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kinds_are_distinguishable() {
        let missing = PresentError::missing(Rtype::SSHFP, "algorithm");
        let unimpl = PresentError::Unimplemented(Rtype::HIP);
        assert_ne!(missing, unimpl);
        assert!(matches!(
            missing,
            PresentError::MissingField { rtype: Rtype::SSHFP, field: "algorithm" }
        ));
        assert_eq!(missing.rtype(), Rtype::SSHFP);
        assert_eq!(unimpl.rtype(), Rtype::HIP);
    }

    #[test]
    fn display() {
        assert_eq!(
            PresentError::missing(Rtype::SSHFP, "fingerprint").to_string(),
            "SSHFP record data lacks the fingerprint field"
        );
        assert_eq!(
            PresentError::Unimplemented(Rtype::HIP).to_string(),
            "presentation format of HIP record data is not implemented"
        );
    }
}
