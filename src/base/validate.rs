//! Validation of record data fields.
//!
//! DNS record types constrain their fields in a small number of recurring
//! ways: integers limited to a bit width, strings limited to a character
//! class such as hexadecimal digits or Base 64, domain names, and IP
//! address literals. This module collects these checks as free functions
//! shared by the record data implementations.
//!
//! Each validator is a pure function taking the name of the field being
//! validated and the candidate value. It returns the accepted – and, for
//! the address validators, parsed – value, or a [`FieldError`] identifying
//! the field, the offending value, and the violated constraint. Rejected
//! values are never clamped or normalized into acceptance.

use core::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

//------------ Integer fields ------------------------------------------------

/// Checks a value destined for an 8 bit integer field.
///
/// The argument is deliberately wider than the field so that out-of-range
/// input stays representable and is rejected with a range error rather
/// than being made unrepresentable by the signature.
pub fn u8_field(field: &'static str, value: u16) -> Result<u8, FieldError> {
    u8::try_from(value)
        .map_err(|_| FieldError::range(field, value.into(), u8::MAX.into()))
}

/// Checks a value destined for a 16 bit integer field.
pub fn u16_field(field: &'static str, value: u32) -> Result<u16, FieldError> {
    u16::try_from(value)
        .map_err(|_| FieldError::range(field, value, u16::MAX.into()))
}

//------------ String fields -------------------------------------------------

/// Checks that a value is a non-empty string of hexadecimal digits.
///
/// Both upper and lower case digits are accepted. The value is checked
/// only, not normalized: a caller storing the value keeps its case.
pub fn hex(field: &'static str, value: &str) -> Result<(), FieldError> {
    if !value.is_empty() && value.bytes().all(|ch| ch.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(FieldError::format(field, value, "a hexadecimal string"))
    }
}

/// Checks that a value is a non-empty Base 64 encoded string.
///
/// The accepted grammar is that of [RFC 4648] section 4: the alphabet
/// `A`–`Z`, `a`–`z`, `0`–`9`, `+`, and `/` in groups of four characters,
/// with the final group optionally carrying one or two `=` padding
/// characters.
///
/// [RFC 4648]: https://tools.ietf.org/html/rfc4648
pub fn base64(field: &'static str, value: &str) -> Result<(), FieldError> {
    let err = || FieldError::format(field, value, "a Base 64 string");
    let bytes = value.as_bytes();
    if bytes.is_empty() || bytes.len() % 4 != 0 {
        return Err(err());
    }
    let data = match bytes {
        [head @ .., b'=', b'='] => head,
        [head @ .., b'='] => head,
        _ => bytes,
    };
    if data
        .iter()
        .all(|&ch| ch.is_ascii_alphanumeric() || ch == b'+' || ch == b'/')
    {
        Ok(())
    } else {
        Err(err())
    }
}

/// Checks that a value is a domain name in presentation form.
///
/// Accepted are the root name `.` alone and sequences of labels separated
/// by dots with an optional trailing dot for absolute names. A label is one
/// to 63 characters from letters, digits, `-`, and `_`; the leftmost label
/// may also be the wildcard label `*`. The entire name must not exceed 255
/// characters.
///
/// Note that escaped label characters, which a zone file parser would have
/// resolved before handing the name to this crate, are not accepted.
pub fn name(field: &'static str, value: &str) -> Result<(), FieldError> {
    let err = || FieldError::format(field, value, "a domain name");
    if value == "." {
        return Ok(());
    }
    if value.is_empty() || value.len() > 255 {
        return Err(err());
    }
    let relative = value.strip_suffix('.').unwrap_or(value);
    for (index, label) in relative.split('.').enumerate() {
        if label.is_empty() || label.len() > 63 {
            return Err(err());
        }
        if label == "*" && index == 0 {
            continue;
        }
        if !label
            .bytes()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == b'-' || ch == b'_')
        {
            return Err(err());
        }
    }
    Ok(())
}

//------------ Address fields ------------------------------------------------

/// Checks that a value is an IPv4 address literal and parses it.
pub fn ipv4(field: &'static str, value: &str) -> Result<Ipv4Addr, FieldError> {
    value
        .parse()
        .map_err(|_| FieldError::format(field, value, "an IPv4 address"))
}

/// Checks that a value is an IPv6 address literal and parses it.
pub fn ipv6(field: &'static str, value: &str) -> Result<Ipv6Addr, FieldError> {
    value
        .parse()
        .map_err(|_| FieldError::format(field, value, "an IPv6 address"))
}

//------------ FieldError ----------------------------------------------------

/// A record data field was given an invalid value.
///
/// Validation happens when a field is mutated, so a value of this type
/// always refers to a mutation that was rejected as a whole. The field
/// named by the error keeps whatever value it had before.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldError {
    /// An integer field received a value outside its bit-width range.
    Range {
        /// The name of the field.
        field: &'static str,

        /// The rejected value.
        value: u32,

        /// The largest acceptable value. The smallest is always zero.
        max: u32,
    },

    /// A string field received text outside its required character class.
    Format {
        /// The name of the field.
        field: &'static str,

        /// The rejected value.
        value: String,

        /// A description of the accepted format.
        expected: &'static str,
    },
}

impl FieldError {
    /// Creates a range error for the given field.
    #[must_use]
    pub fn range(field: &'static str, value: u32, max: u32) -> Self {
        FieldError::Range { field, value, max }
    }

    /// Creates a format error for the given field.
    #[must_use]
    pub fn format(
        field: &'static str,
        value: &str,
        expected: &'static str,
    ) -> Self {
        FieldError::Format {
            field,
            value: value.into(),
            expected,
        }
    }

    /// Returns the name of the field the error occurred for.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match *self {
            FieldError::Range { field, .. } => field,
            FieldError::Format { field, .. } => field,
        }
    }
}

//--- Display and Error

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FieldError::Range { field, value, max } => {
                write!(
                    f,
                    "{} must be an integer between 0 and {}, got {}",
                    field, max, value
                )
            }
            FieldError::Format {
                field,
                ref value,
                expected,
            } => {
                write!(f, "{} must be {}, got {:?}", field, expected, value)
            }
        }
    }
}

impl std::error::Error for FieldError {}

//============ Tests =========================================================
