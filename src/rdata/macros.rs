//! Macros for use in rdata definitions.
//!
//! These macros are not public but are used by the super module only. They
//! are here so that `mod.rs` doesn’t become too unwieldly.

/// Collects the implemented record data types into `ZoneRecordData`.
///
/// The macro re-exports every listed type from its RFC module and generates
/// the enum with one variant per type, `From` impls for each of them, and a
/// delegating `RecordData` implementation. Since the enum and the delegation
/// match exhaustively, adding a record type here is checked by the compiler
/// in full.
macro_rules! rdata_types {
    ( $(
        $module:ident::{
            $( $rtype:ident, )*
        }
    )* ) => {
        $(
            pub use self::$module::{
                $( $rtype ),*
            };
        )*

        //------------ ZoneRecordData -----------------------------------

        /// Record data for any implemented record type.
        ///
        /// This enum collects the record data types for all record types
        /// implemented by this crate, allowing generic code to keep and
        /// process records of heterogeneous types.
        #[derive(Clone, Debug, Eq, PartialEq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        #[non_exhaustive]
        pub enum ZoneRecordData {
            $( $(
                $rtype($rtype),
            )* )*
        }

        //--- From

        $( $(
            impl From<$rtype> for ZoneRecordData {
                fn from(value: $rtype) -> Self {
                    ZoneRecordData::$rtype(value)
                }
            }
        )* )*

        //--- RecordData

        impl $crate::base::rdata::RecordData for ZoneRecordData {
            fn rtype(&self) -> $crate::base::iana::Rtype {
                match *self {
                    $( $(
                        ZoneRecordData::$rtype(ref inner) => inner.rtype(),
                    )* )*
                }
            }

            fn mnemonic(&self) -> &'static str {
                match *self {
                    $( $(
                        ZoneRecordData::$rtype(ref inner) => {
                            inner.mnemonic()
                        }
                    )* )*
                }
            }

            fn present(
                &self,
            ) -> Result<String, $crate::base::rdata::PresentError> {
                match *self {
                    $( $(
                        ZoneRecordData::$rtype(ref inner) => inner.present(),
                    )* )*
                }
            }
        }
    }
}

/// Creates a record data type consisting of a single domain name.
///
/// Several record types share this exact shape and only differ in the
/// record type identity and the RFC name of their one field.
macro_rules! name_rdata_type {
    ( $(#[$attr:meta])*
      ( $target:ident, $rtype:ident, $field:expr ) ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Default, Eq, PartialEq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        pub struct $target {
            name: Option<String>,
        }

        impl $target {
            pub const RTYPE: $crate::base::iana::Rtype =
                $crate::base::iana::Rtype::$rtype;
            pub const MNEMONIC: &'static str = stringify!($rtype);

            /// Creates record data with the given name.
            pub fn new(
                name: &str,
            ) -> Result<Self, $crate::base::validate::FieldError> {
                let mut res = Self::default();
                res.set_name(name)?;
                Ok(res)
            }

            /// Returns the name if it has been set.
            #[must_use]
            pub fn name(&self) -> Option<&str> {
                self.name.as_deref()
            }

            /// Sets the name.
            ///
            /// The name must be a domain name in presentation form. It is
            /// stored exactly as given, so relative names stay relative.
            pub fn set_name(
                &mut self,
                name: &str,
            ) -> Result<(), $crate::base::validate::FieldError> {
                $crate::base::validate::name($field, name)?;
                self.name = Some(name.into());
                Ok(())
            }
        }

        impl $crate::base::rdata::RecordData for $target {
            fn rtype(&self) -> $crate::base::iana::Rtype {
                Self::RTYPE
            }

            fn mnemonic(&self) -> &'static str {
                Self::MNEMONIC
            }

            fn present(
                &self,
            ) -> Result<String, $crate::base::rdata::PresentError> {
                match self.name {
                    Some(ref name) => Ok(name.clone()),
                    None => Err($crate::base::rdata::PresentError::missing(
                        Self::RTYPE,
                        $field,
                    )),
                }
            }
        }
    }
}
