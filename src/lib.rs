//! # toml_fmt
//!
//! A format-preserving serializer for TOML documents.
//!
//! ## What does "format-preserving" mean?
//!
//! Most TOML writers pick one house style and re-render everything in it.
//! This crate goes the other way: every [`Value`] in the tree carries a
//! formatting hint (integer radix and digit grouping, float notation,
//! string delimiter form, whether a table is a `[header]` block, an inline
//! `{...}`, a dotted prefix, or an implicit container) plus the comments
//! that were attached to it. Serialization honors those hints whenever they
//! are internally consistent, so a tree built by a parser renders back into
//! text a human would recognize as their own file.
//!
//! ## Key Features
//!
//! - **Faithful scalars**: hex/octal/binary integers with `_` grouping and
//!   zero-padding, fixed/scientific/hex floats, all four TOML string forms,
//!   dates and times down to nanosecond precision
//! - **Table layout control**: header blocks, inline tables, multi-line
//!   inline tables, dotted keys, and implicit tables, with per-value indent
//!   settings
//! - **Comment preservation**: comment blocks re-attach above the value
//!   they belong to; a discarding container drops them document-wide
//! - **Specification levels**: targets TOML 1.0.0 by default, with opt-in
//!   1.1.0 syntax and individually gated extensions
//! - **Precise errors**: impossible renderings (a negative hex integer, a
//!   newline in a literal string) fail with the source location of the
//!   offending value
//!
//! ## Quick Start
//!
//! ```rust
//! use toml_fmt::{toml, to_string, TomlSpec};
//!
//! let value = toml!({
//!     "title": "Example",
//!     "owner": {"name": "Tom"},
//! });
//!
//! let text = to_string(&value, TomlSpec::default()).unwrap();
//! assert_eq!(text, "title = \"Example\"\n\n[owner]\nname = \"Tom\"\n");
//! ```
//!
//! ## Controlling the rendering
//!
//! ```rust
//! use toml_fmt::{to_string, IntegerFormat, IntegerRadix, TomlSpec, Value};
//!
//! let mut mask = Value::integer(0b1010_0001);
//! *mask.integer_fmt_mut().unwrap() = IntegerFormat {
//!     radix: IntegerRadix::Bin,
//!     width: 8,
//!     spacer: 4,
//!     ..IntegerFormat::default()
//! };
//!
//! let text = to_string(&mask, TomlSpec::default()).unwrap();
//! assert_eq!(text, "0b1010_0001");
//! ```
//!
//! ## Serializing under a key prefix
//!
//! A bare value has no name of its own; renderings that need one (an array
//! of tables, a dotted table) are produced through the prefixed entry
//! points:
//!
//! ```rust
//! use toml_fmt::{toml, to_string_with_key, TomlSpec};
//!
//! let servers = toml!([{"host": "alpha"}, {"host": "beta"}]);
//! let text = to_string_with_key("server", &servers, TomlSpec::default()).unwrap();
//! assert_eq!(text, "[[server]]\nhost = \"alpha\"\n[[server]]\nhost = \"beta\"\n");
//! ```
//!
//! ## Scope
//!
//! This crate turns trees into strings. It does not parse TOML text, read
//! or write files, or decide what is in the tree; pair it with a parser
//! that records formatting hints to get full round-tripping.

pub mod comment;
pub mod error;
pub mod fmt;
pub mod macros;
pub mod map;
pub mod ser;
pub mod spec;
pub mod value;

pub use comment::Comments;
pub use error::{Error, Result};
pub use fmt::{
    ArrayForm, ArrayFormat, BooleanFormat, DatetimeDelimiter, FloatForm, FloatFormat, IndentChar,
    IntegerFormat, IntegerRadix, LocalDateFormat, LocalDatetimeFormat, LocalTimeFormat,
    OffsetDatetimeFormat, StringForm, StringFormat, TableForm, TableFormat,
};
pub use map::Table;
pub use ser::Serializer;
pub use spec::{TomlSpec, TomlVersion};
pub use value::{SourceLocation, Value, ValueRepr, ValueType};

/// Serializes `value` as a TOML document or fragment.
///
/// The key path starts empty, so `value` is typically a root table; a bare
/// scalar renders as just its own text.
///
/// # Examples
///
/// ```rust
/// use toml_fmt::{to_string, TomlSpec, Value};
///
/// let text = to_string(&Value::integer(42), TomlSpec::default()).unwrap();
/// assert_eq!(text, "42");
/// ```
///
/// # Errors
///
/// Returns an error when the tree asks for a rendering TOML cannot express;
/// see [`Error`].
pub fn to_string(value: &Value, spec: TomlSpec) -> Result<String> {
    Serializer::new(spec).serialize(value)
}

/// Serializes `value` as if it lived under `key` at the document root.
///
/// # Errors
///
/// Returns an error when the tree asks for a rendering TOML cannot express;
/// see [`Error`].
pub fn to_string_with_key(key: impl Into<String>, value: &Value, spec: TomlSpec) -> Result<String> {
    Serializer::new(spec).serialize_with_key(key, value)
}

/// Serializes `value` as if it lived under the given key path.
///
/// # Examples
///
/// ```rust
/// use toml_fmt::{to_string_with_keys, toml, TomlSpec};
///
/// let inner = toml!({"enabled": true});
/// let text = to_string_with_keys(["service", "cache"], &inner, TomlSpec::default()).unwrap();
/// assert_eq!(text, "[service.cache]\nenabled = true\n");
/// ```
///
/// # Errors
///
/// Returns an error when the tree asks for a rendering TOML cannot express;
/// see [`Error`].
pub fn to_string_with_keys<I, S>(keys: I, value: &Value, spec: TomlSpec) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Serializer::new(spec).serialize_with_keys(keys, value)
}
