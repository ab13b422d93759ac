//! The TOML value tree.
//!
//! [`Value`] is one node of a document: a typed payload, the formatting hint
//! for its kind, the comments attached to it, and the source location it was
//! parsed from (used only for error messages). The payload and hint live
//! together in [`ValueRepr`] so a value can never carry a hint for the wrong
//! kind.
//!
//! ## Creating values
//!
//! ```rust
//! use toml_fmt::{Table, Value};
//!
//! let flag = Value::boolean(true);
//! let count = Value::from(42);
//! let name = Value::from("Alice");
//!
//! let mut table = Table::new();
//! table.insert("enabled".to_string(), flag);
//! table.insert("count".to_string(), count);
//! table.insert("name".to_string(), name);
//! let root = Value::table(table);
//! assert!(root.is_table());
//! ```
//!
//! ## Inspecting values
//!
//! ```rust
//! use toml_fmt::{Value, ValueType};
//!
//! let value = Value::integer(7);
//! assert_eq!(value.kind(), ValueType::Integer);
//! assert_eq!(value.as_integer(), Some(7));
//! assert_eq!(value.as_str(), None);
//! ```

use crate::comment::Comments;
use crate::fmt::{
    ArrayFormat, BooleanFormat, FloatFormat, IntegerFormat, LocalDateFormat, LocalDatetimeFormat,
    LocalTimeFormat, OffsetDatetimeFormat, StringFormat, TableFormat,
};
use crate::map::Table;
use crate::spec::TomlSpec;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

/// Where a value came from in its source document.
///
/// `line` and `column` are 1-based; zero means the value was built
/// programmatically and has no source position. Locations only ever surface
/// in error messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        SourceLocation { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "unknown location")
        } else {
            write!(f, "line {}, column {}", self.line, self.column)
        }
    }
}

/// The kind tag of a [`Value`], used for dispatch and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueType {
    Empty,
    Boolean,
    Integer,
    Floating,
    String,
    LocalDate,
    LocalTime,
    LocalDatetime,
    OffsetDatetime,
    Array,
    Table,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Empty => "empty",
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Floating => "floating",
            ValueType::String => "string",
            ValueType::LocalDate => "local date",
            ValueType::LocalTime => "local time",
            ValueType::LocalDatetime => "local datetime",
            ValueType::OffsetDatetime => "offset datetime",
            ValueType::Array => "array",
            ValueType::Table => "table",
        };
        f.write_str(name)
    }
}

/// A typed payload paired with the formatting hint for its kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueRepr {
    Empty,
    Boolean(bool, BooleanFormat),
    Integer(i64, IntegerFormat),
    Floating(f64, FloatFormat),
    String(String, StringFormat),
    LocalDate(NaiveDate, LocalDateFormat),
    LocalTime(NaiveTime, LocalTimeFormat),
    LocalDatetime(NaiveDateTime, LocalDatetimeFormat),
    OffsetDatetime(DateTime<FixedOffset>, OffsetDatetimeFormat),
    Array(Vec<Value>, ArrayFormat),
    Table(Table, TableFormat),
}

/// One node of a TOML document tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Value {
    repr: ValueRepr,
    comments: Comments,
    location: SourceLocation,
}

impl Default for Value {
    fn default() -> Self {
        Value::empty()
    }
}

impl Value {
    fn new(repr: ValueRepr) -> Self {
        Value {
            repr,
            comments: Comments::default(),
            location: SourceLocation::default(),
        }
    }

    /// The `Empty` kind. Only serializable when the null-value extension is
    /// enabled.
    #[must_use]
    pub fn empty() -> Self {
        Value::new(ValueRepr::Empty)
    }

    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Value::new(ValueRepr::Boolean(value, BooleanFormat))
    }

    #[must_use]
    pub fn integer(value: i64) -> Self {
        Value::new(ValueRepr::Integer(value, IntegerFormat::default()))
    }

    #[must_use]
    pub fn floating(value: f64) -> Self {
        Value::new(ValueRepr::Floating(value, FloatFormat::default()))
    }

    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Value::new(ValueRepr::String(value.into(), StringFormat::default()))
    }

    #[must_use]
    pub fn local_date(value: NaiveDate) -> Self {
        Value::new(ValueRepr::LocalDate(value, LocalDateFormat))
    }

    #[must_use]
    pub fn local_time(value: NaiveTime) -> Self {
        Value::new(ValueRepr::LocalTime(value, LocalTimeFormat::default()))
    }

    #[must_use]
    pub fn local_datetime(value: NaiveDateTime) -> Self {
        Value::new(ValueRepr::LocalDatetime(
            value,
            LocalDatetimeFormat::default(),
        ))
    }

    #[must_use]
    pub fn offset_datetime(value: DateTime<FixedOffset>) -> Self {
        Value::new(ValueRepr::OffsetDatetime(
            value,
            OffsetDatetimeFormat::default(),
        ))
    }

    #[must_use]
    pub fn array(elements: Vec<Value>) -> Self {
        Value::new(ValueRepr::Array(elements, ArrayFormat::default()))
    }

    #[must_use]
    pub fn table(entries: Table) -> Self {
        Value::new(ValueRepr::Table(entries, TableFormat::default()))
    }

    /// Attaches preserved comments, replacing the current container.
    #[must_use]
    pub fn with_comments<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments = Comments::preserve(lines);
        self
    }

    /// Sets the source location reported in error messages.
    #[must_use]
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    /// The kind tag of this value.
    #[must_use]
    pub fn kind(&self) -> ValueType {
        match &self.repr {
            ValueRepr::Empty => ValueType::Empty,
            ValueRepr::Boolean(..) => ValueType::Boolean,
            ValueRepr::Integer(..) => ValueType::Integer,
            ValueRepr::Floating(..) => ValueType::Floating,
            ValueRepr::String(..) => ValueType::String,
            ValueRepr::LocalDate(..) => ValueType::LocalDate,
            ValueRepr::LocalTime(..) => ValueType::LocalTime,
            ValueRepr::LocalDatetime(..) => ValueType::LocalDatetime,
            ValueRepr::OffsetDatetime(..) => ValueType::OffsetDatetime,
            ValueRepr::Array(..) => ValueType::Array,
            ValueRepr::Table(..) => ValueType::Table,
        }
    }

    /// The payload and formatting hint.
    #[must_use]
    pub fn repr(&self) -> &ValueRepr {
        &self.repr
    }

    /// Mutable access to the payload and formatting hint.
    pub fn repr_mut(&mut self) -> &mut ValueRepr {
        &mut self.repr
    }

    /// The comments attached to this value.
    #[must_use]
    pub fn comments(&self) -> &Comments {
        &self.comments
    }

    pub fn comments_mut(&mut self) -> &mut Comments {
        &mut self.comments
    }

    /// Where this value came from; `Default` when built programmatically.
    #[must_use]
    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn set_location(&mut self, location: SourceLocation) {
        self.location = location;
    }

    #[must_use]
    pub fn is_empty_value(&self) -> bool {
        matches!(self.repr, ValueRepr::Empty)
    }

    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self.repr, ValueRepr::Boolean(..))
    }

    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self.repr, ValueRepr::Integer(..))
    }

    #[must_use]
    pub fn is_floating(&self) -> bool {
        matches!(self.repr, ValueRepr::Floating(..))
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self.repr, ValueRepr::String(..))
    }

    #[must_use]
    pub fn is_local_date(&self) -> bool {
        matches!(self.repr, ValueRepr::LocalDate(..))
    }

    #[must_use]
    pub fn is_local_time(&self) -> bool {
        matches!(self.repr, ValueRepr::LocalTime(..))
    }

    #[must_use]
    pub fn is_local_datetime(&self) -> bool {
        matches!(self.repr, ValueRepr::LocalDatetime(..))
    }

    #[must_use]
    pub fn is_offset_datetime(&self) -> bool {
        matches!(self.repr, ValueRepr::OffsetDatetime(..))
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self.repr, ValueRepr::Array(..))
    }

    #[must_use]
    pub fn is_table(&self) -> bool {
        matches!(self.repr, ValueRepr::Table(..))
    }

    /// `true` for a non-empty array whose elements are all tables.
    #[must_use]
    pub fn is_array_of_tables(&self) -> bool {
        match &self.repr {
            ValueRepr::Array(elements, _) => {
                !elements.is_empty() && elements.iter().all(Value::is_table)
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match &self.repr {
            ValueRepr::Boolean(b, _) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match &self.repr {
            ValueRepr::Integer(i, _) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_floating(&self) -> Option<f64> {
        match &self.repr {
            ValueRepr::Floating(f, _) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.repr {
            ValueRepr::String(s, _) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_local_date(&self) -> Option<NaiveDate> {
        match &self.repr {
            ValueRepr::LocalDate(d, _) => Some(*d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_local_time(&self) -> Option<NaiveTime> {
        match &self.repr {
            ValueRepr::LocalTime(t, _) => Some(*t),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_local_datetime(&self) -> Option<NaiveDateTime> {
        match &self.repr {
            ValueRepr::LocalDatetime(dt, _) => Some(*dt),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_offset_datetime(&self) -> Option<DateTime<FixedOffset>> {
        match &self.repr {
            ValueRepr::OffsetDatetime(dt, _) => Some(*dt),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match &self.repr {
            ValueRepr::Array(elements, _) => Some(elements),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match &mut self.repr {
            ValueRepr::Array(elements, _) => Some(elements),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match &self.repr {
            ValueRepr::Table(entries, _) => Some(entries),
            _ => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match &mut self.repr {
            ValueRepr::Table(entries, _) => Some(entries),
            _ => None,
        }
    }

    #[must_use]
    pub fn integer_fmt(&self) -> Option<&IntegerFormat> {
        match &self.repr {
            ValueRepr::Integer(_, fmt) => Some(fmt),
            _ => None,
        }
    }

    pub fn integer_fmt_mut(&mut self) -> Option<&mut IntegerFormat> {
        match &mut self.repr {
            ValueRepr::Integer(_, fmt) => Some(fmt),
            _ => None,
        }
    }

    #[must_use]
    pub fn float_fmt(&self) -> Option<&FloatFormat> {
        match &self.repr {
            ValueRepr::Floating(_, fmt) => Some(fmt),
            _ => None,
        }
    }

    pub fn float_fmt_mut(&mut self) -> Option<&mut FloatFormat> {
        match &mut self.repr {
            ValueRepr::Floating(_, fmt) => Some(fmt),
            _ => None,
        }
    }

    #[must_use]
    pub fn string_fmt(&self) -> Option<&StringFormat> {
        match &self.repr {
            ValueRepr::String(_, fmt) => Some(fmt),
            _ => None,
        }
    }

    pub fn string_fmt_mut(&mut self) -> Option<&mut StringFormat> {
        match &mut self.repr {
            ValueRepr::String(_, fmt) => Some(fmt),
            _ => None,
        }
    }

    #[must_use]
    pub fn local_time_fmt(&self) -> Option<&LocalTimeFormat> {
        match &self.repr {
            ValueRepr::LocalTime(_, fmt) => Some(fmt),
            _ => None,
        }
    }

    pub fn local_time_fmt_mut(&mut self) -> Option<&mut LocalTimeFormat> {
        match &mut self.repr {
            ValueRepr::LocalTime(_, fmt) => Some(fmt),
            _ => None,
        }
    }

    #[must_use]
    pub fn local_datetime_fmt(&self) -> Option<&LocalDatetimeFormat> {
        match &self.repr {
            ValueRepr::LocalDatetime(_, fmt) => Some(fmt),
            _ => None,
        }
    }

    pub fn local_datetime_fmt_mut(&mut self) -> Option<&mut LocalDatetimeFormat> {
        match &mut self.repr {
            ValueRepr::LocalDatetime(_, fmt) => Some(fmt),
            _ => None,
        }
    }

    #[must_use]
    pub fn offset_datetime_fmt(&self) -> Option<&OffsetDatetimeFormat> {
        match &self.repr {
            ValueRepr::OffsetDatetime(_, fmt) => Some(fmt),
            _ => None,
        }
    }

    pub fn offset_datetime_fmt_mut(&mut self) -> Option<&mut OffsetDatetimeFormat> {
        match &mut self.repr {
            ValueRepr::OffsetDatetime(_, fmt) => Some(fmt),
            _ => None,
        }
    }

    #[must_use]
    pub fn array_fmt(&self) -> Option<&ArrayFormat> {
        match &self.repr {
            ValueRepr::Array(_, fmt) => Some(fmt),
            _ => None,
        }
    }

    pub fn array_fmt_mut(&mut self) -> Option<&mut ArrayFormat> {
        match &mut self.repr {
            ValueRepr::Array(_, fmt) => Some(fmt),
            _ => None,
        }
    }

    #[must_use]
    pub fn table_fmt(&self) -> Option<&TableFormat> {
        match &self.repr {
            ValueRepr::Table(_, fmt) => Some(fmt),
            _ => None,
        }
    }

    pub fn table_fmt_mut(&mut self) -> Option<&mut TableFormat> {
        match &mut self.repr {
            ValueRepr::Table(_, fmt) => Some(fmt),
            _ => None,
        }
    }
}

/// Renders the value as TOML with the default specification level.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::to_string(self, TomlSpec::default()) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::boolean(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::integer(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::integer(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::integer(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::integer(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::integer(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::integer(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::floating(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::floating(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::string(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::local_date(value)
    }
}

impl From<NaiveTime> for Value {
    fn from(value: NaiveTime) -> Self {
        Value::local_time(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::local_datetime(value)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::offset_datetime(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::array(value)
    }
}

impl From<Table> for Value {
    fn from(value: Table) -> Self {
        Value::table(value)
    }
}

/// Maps the semantic content onto the serde data model.
///
/// Formatting hints, comments, and locations are presentation state and are
/// not serialized; datetimes become ISO 8601 strings.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.repr {
            ValueRepr::Empty => serializer.serialize_unit(),
            ValueRepr::Boolean(b, _) => serializer.serialize_bool(*b),
            ValueRepr::Integer(i, _) => serializer.serialize_i64(*i),
            ValueRepr::Floating(f, _) => serializer.serialize_f64(*f),
            ValueRepr::String(s, _) => serializer.serialize_str(s),
            ValueRepr::LocalDate(d, _) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            ValueRepr::LocalTime(t, _) => {
                serializer.serialize_str(&t.format("%H:%M:%S%.f").to_string())
            }
            ValueRepr::LocalDatetime(dt, _) => {
                serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
            }
            ValueRepr::OffsetDatetime(dt, _) => serializer.serialize_str(&dt.to_rfc3339()),
            ValueRepr::Array(elements, _) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            ValueRepr::Table(entries, _) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
