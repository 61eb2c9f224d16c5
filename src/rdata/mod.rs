//! Record data implementations.
//!
//! This module contains implementations for the record data of all record
//! types supported by this crate.
//!
//! The types are named identically to the [`Rtype`] constant they implement.
//! They are grouped into submodules for the RFCs they are defined in. All
//! types are also re-exported at the top level here. Ie., for the SSHFP
//! record type, you can simply `use zonedata::rdata::Sshfp` instead of
//! `use zonedata::rdata::rfc4255::Sshfp` which nobody could possibly
//! remember.
//!
//! All types follow the same shape. They are value objects that can be
//! created empty (or, where every field is required, via a checked
//! constructor), mutated through one setter per field, and asked for their
//! canonical presentation format text through
//! [`RecordData::present`][crate::base::rdata::RecordData::present].
//! Setters validate only the field they set and either update it fully or
//! leave it untouched.
//!
//! [`Rtype`]: crate::base::iana::Rtype

#[macro_use]
mod macros;

pub mod rfc1035;
pub mod rfc2782;
pub mod rfc3596;
pub mod rfc4034;
pub mod rfc4255;
pub mod rfc8005;

rdata_types! {
    rfc1035::{
        A,
        Cname,
        Mx,
        Ns,
        Ptr,
        Soa,
        Txt,
    }
    rfc2782::{
        Srv,
    }
    rfc3596::{
        Aaaa,
    }
    rfc4034::{
        Dnskey,
    }
    rfc4255::{
        Sshfp,
    }
    rfc8005::{
        Hip,
    }
}

//============ Tests =========================================================
