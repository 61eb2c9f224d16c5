//! Typed DNS record data for zone files.
//!
//! This crate provides value objects for the RDATA portion of DNS resource
//! records: the type-specific payload that follows the generic record
//! header. Every supported record type has its own type that enforces the
//! field-level constraints mandated by the defining RFC and renders itself
//! into the canonical presentation format used in zone master files.
//!
//! The crate consists of two modules:
//!
//! * [base] contains the fundamental types: the record type registry, the
//!   [`RecordData`][base::rdata::RecordData] trait that all record data
//!   types implement, and the shared field validators, and
//! * [rdata] contains the implementations for the individual record types
//!   as well as [`ZoneRecordData`][rdata::ZoneRecordData], an enum over all
//!   of them.
//!
//! Reading and writing of zone files, the wire format, and the containers
//! pairing record data with an owner name, class, and TTL are all outside
//! the scope of this crate.
//!
//!
//! # Reference of Feature Flags
//!
//! * `serde`: Enables serialization and deserialization of record data and
//!   record type values via the [serde](https://serde.rs/) crate.

pub mod base;
pub mod rdata;
