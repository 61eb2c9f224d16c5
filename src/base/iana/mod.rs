//! IANA Definitions for DNS.
//!
//! This module contains types for parameters defined in IANA registries
//! that are relevant for this crate.
//!
//! All types defined hereunder follow the same basic structure. They are
//! newtypes over the raw integer of the registry with the well-defined
//! values available as associated constants. Since we cannot restrict the
//! raw integer to only the defined values, the full set of possible values
//! is always representable, which also keeps future registrations usable
//! without a crate update.
//!
//! There are two methods `from_int()` and `to_int()` to convert from and
//! to raw integer values as well as implementations of the `From` trait
//! for these. `FromStr` and `Display` are implemented to convert from
//! the mnemonics to the values and back.

pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod rtype;
