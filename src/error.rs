//! Serialization errors.
//!
//! Serialization fails only when the value tree asks for something the TOML
//! grammar cannot express: a negative hexadecimal integer, a literal string
//! holding a newline, an array of tables with no key to name its headers.
//! Each error carries the [`SourceLocation`] of the offending value so a
//! message can point back into the document the tree was parsed from.
//!
//! Errors abort the serialization immediately; nothing is recovered or
//! patched up locally.
//!
//! ## Examples
//!
//! ```rust
//! use toml_fmt::{to_string, Error, IntegerRadix, TomlSpec, Value};
//!
//! let mut v = Value::integer(-1);
//! v.integer_fmt_mut().unwrap().radix = IntegerRadix::Hex;
//!
//! match to_string(&v, TomlSpec::default()) {
//!     Err(Error::NegativeNonDecimal { .. }) => {}
//!     other => panic!("expected NegativeNonDecimal, got {:?}", other),
//! }
//! ```

use crate::value::{SourceLocation, ValueType};
use thiserror::Error;

/// All the ways serialization can fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The value kind cannot be rendered at the active specification level.
    /// Without the null-value extension this covers the `Empty` kind.
    #[error("{kind} value cannot be serialized at this specification level ({location})")]
    InvalidValue {
        kind: ValueType,
        location: SourceLocation,
    },

    /// Binary, octal, and hexadecimal notations have no sign character.
    #[error("binary, octal, and hexadecimal integers cannot be negative ({location})")]
    NegativeNonDecimal { location: SourceLocation },

    /// A single-line literal string contained a newline.
    #[error("single-line literal string cannot contain a newline ({location})")]
    InvalidLiteralString { location: SourceLocation },

    /// A string carried a delimiter form outside the enumerated set.
    #[error("string format is not basic, literal, or a multi-line form ({location})")]
    InvalidStringForm { location: SourceLocation },

    /// An array of tables or a dotted table was serialized without a key
    /// path to name it.
    #[error("{rendering} must have a key; serialize it with a key prefix ({location})")]
    MissingKey {
        rendering: &'static str,
        location: SourceLocation,
    },

    /// An implicit table contained a child that does not render with a
    /// header of its own.
    #[error("an implicit table can only contain header tables and arrays of header tables ({location})")]
    ImplicitTableChild { location: SourceLocation },

    /// An integer carried a radix outside the enumerated set.
    #[error("integer radix is not one of dec, hex, oct, bin ({location})")]
    BadIntegerRadix { location: SourceLocation },
}

impl Error {
    pub(crate) fn invalid_value(kind: ValueType, location: SourceLocation) -> Self {
        Error::InvalidValue { kind, location }
    }

    pub(crate) fn negative_non_decimal(location: SourceLocation) -> Self {
        Error::NegativeNonDecimal { location }
    }

    pub(crate) fn invalid_literal_string(location: SourceLocation) -> Self {
        Error::InvalidLiteralString { location }
    }

    pub(crate) fn missing_key(rendering: &'static str, location: SourceLocation) -> Self {
        Error::MissingKey {
            rendering,
            location,
        }
    }

    pub(crate) fn implicit_table_child(location: SourceLocation) -> Self {
        Error::ImplicitTableChild { location }
    }

    /// The source location of the offending value.
    #[must_use]
    pub fn location(&self) -> SourceLocation {
        match self {
            Error::InvalidValue { location, .. }
            | Error::NegativeNonDecimal { location }
            | Error::InvalidLiteralString { location }
            | Error::InvalidStringForm { location }
            | Error::MissingKey { location, .. }
            | Error::ImplicitTableChild { location }
            | Error::BadIntegerRadix { location } => *location,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
