//! Basics.
//!
//! This module provides the types and traits shared by all record data
//! implementations. These are:
//!
//! * [iana] for types wrapping values of the relevant IANA registries,
//!   most importantly the record type in [`Rtype`],
//! * [rdata] for the [`RecordData`] trait describing the capabilities of
//!   all record data types and the errors that can happen when producing
//!   presentation format text, and
//! * [validate] for the field validators shared between the record data
//!   implementations.
//!
//! The most commonly used items are re-exported at the module level.

//--- Re-exports

pub use self::iana::Rtype;
pub use self::rdata::{PresentError, RecordData};
pub use self::validate::FieldError;

//--- Modules

pub mod iana;
pub mod rdata;
pub mod validate;
