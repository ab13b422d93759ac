//! Formatting hints attached to TOML values.
//!
//! Every [`Value`](crate::Value) carries one of these records describing how
//! it should be written back out: the radix and grouping of an integer, the
//! delimiter form of a string, whether a table becomes a `[header]` block or
//! an inline `{...}`, and so on. A parser fills them in so a document
//! round-trips with its original shape; values built programmatically get
//! the defaults, which produce conventional TOML.
//!
//! ## Examples
//!
//! ```rust
//! use toml_fmt::{to_string, IntegerFormat, IntegerRadix, TomlSpec, Value};
//!
//! let mut port = Value::integer(0x1F90);
//! *port.integer_fmt_mut().unwrap() = IntegerFormat {
//!     radix: IntegerRadix::Hex,
//!     width: 4,
//!     uppercase: true,
//!     ..IntegerFormat::default()
//! };
//! assert_eq!(to_string(&port, TomlSpec::default()).unwrap(), "0x1F90");
//! ```

/// Formatting hint for booleans.
///
/// TOML booleans have a single spelling, so there is nothing to configure;
/// the record exists so every value kind carries a hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BooleanFormat;

/// The radix an integer is written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegerRadix {
    #[default]
    Dec,
    Hex,
    Oct,
    Bin,
}

/// Formatting hint for integers.
///
/// # Examples
///
/// ```rust
/// use toml_fmt::{IntegerFormat, IntegerRadix};
///
/// // 0xDEAD_BEEF
/// let fmt = IntegerFormat {
///     radix: IntegerRadix::Hex,
///     uppercase: true,
///     spacer: 4,
///     ..IntegerFormat::default()
/// };
/// assert_eq!(fmt.width, 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntegerFormat {
    pub radix: IntegerRadix,
    /// Minimum number of digits; shorter renderings are zero-padded.
    pub width: usize,
    /// Digit-group size for `_` separators, counted from the right.
    /// `0` disables grouping.
    pub spacer: usize,
    /// Use `A`-`F` rather than `a`-`f` for hexadecimal digits.
    pub uppercase: bool,
    /// Unit suffix appended as `_<suffix>`. Only honored when the
    /// numeric-suffix extension is enabled, and only for decimal integers.
    pub suffix: String,
}

/// The notation a float is written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FloatForm {
    /// Shortest rendering that still contains a `.` or an exponent.
    #[default]
    Default,
    /// Plain decimal notation, never an exponent.
    Fixed,
    /// Exponent notation.
    Scientific,
    /// C-style hex float (`0x1.8p+1`). Requires the hex-float extension;
    /// without it the serializer falls back to full-precision scientific.
    Hex,
}

/// Formatting hint for floats.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FloatFormat {
    pub form: FloatForm,
    /// Number of fractional digits. `0` leaves the precision unspecified.
    pub precision: usize,
    /// Unit suffix appended as `_<suffix>` (numeric-suffix extension,
    /// decimal forms only).
    pub suffix: String,
}

/// The delimiter form of a string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StringForm {
    /// `"escaped"`
    #[default]
    Basic,
    /// `'verbatim'`; must not contain a newline.
    Literal,
    /// `"""escaped, may span lines"""`
    MultilineBasic,
    /// `'''verbatim, may span lines'''`
    MultilineLiteral,
}

/// Formatting hint for strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StringFormat {
    pub form: StringForm,
    /// Start multi-line forms with a newline right after the opening
    /// delimiter. Ignored for single-line forms.
    pub start_with_newline: bool,
}

/// Formatting hint for local dates. Dates have a single rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalDateFormat;

/// Formatting hint for local times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalTimeFormat {
    /// Emit the `:SS` component.
    pub has_seconds: bool,
    /// Digits of sub-second precision, `0`–`9`. `0` omits the fraction.
    pub subsecond_precision: usize,
}

impl Default for LocalTimeFormat {
    fn default() -> Self {
        LocalTimeFormat {
            has_seconds: true,
            subsecond_precision: 0,
        }
    }
}

/// The character between the date and time parts of a datetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DatetimeDelimiter {
    #[default]
    UpperT,
    LowerT,
    Space,
}

/// Formatting hint for local datetimes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalDatetimeFormat {
    pub delimiter: DatetimeDelimiter,
    pub has_seconds: bool,
    pub subsecond_precision: usize,
}

impl Default for LocalDatetimeFormat {
    fn default() -> Self {
        LocalDatetimeFormat {
            delimiter: DatetimeDelimiter::default(),
            has_seconds: true,
            subsecond_precision: 0,
        }
    }
}

/// Formatting hint for offset datetimes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OffsetDatetimeFormat {
    pub delimiter: DatetimeDelimiter,
    pub has_seconds: bool,
    pub subsecond_precision: usize,
}

impl Default for OffsetDatetimeFormat {
    fn default() -> Self {
        OffsetDatetimeFormat {
            delimiter: DatetimeDelimiter::default(),
            has_seconds: true,
            subsecond_precision: 0,
        }
    }
}

/// The layout an array is written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArrayForm {
    /// Let the serializer pick: `[[header]]` blocks for arrays of tables,
    /// one line for short scalar arrays, multi-line otherwise.
    #[default]
    Default,
    /// `[1, 2, 3]`
    Oneline,
    /// One element per line between `[` and `]`.
    Multiline,
    /// Repeated `[[name]]` header blocks. Requires a key path and
    /// table elements.
    ArrayOfTables,
}

/// Formatting hint for arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayFormat {
    pub form: ArrayForm,
    /// Indent added for each element line of a multi-line array.
    pub body_indent: i32,
    /// Indent added for the closing `]` of a multi-line array.
    pub closing_indent: i32,
    pub indent_char: IndentChar,
}

impl Default for ArrayFormat {
    fn default() -> Self {
        ArrayFormat {
            form: ArrayForm::default(),
            body_indent: 4,
            closing_indent: 0,
            indent_char: IndentChar::default(),
        }
    }
}

/// The layout a table is written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableForm {
    /// A `[header]` block with one `key = value` line per entry.
    #[default]
    Multiline,
    /// An inline `{k = v, ...}` table.
    Oneline,
    /// An inline table spread over several lines, one entry per line.
    MultilineOneline,
    /// Flattened into dotted keys: `outer.inner.key = value`.
    Dotted,
    /// No header of its own; only table-like children are allowed, each
    /// rendered under its full path.
    Implicit,
}

/// Formatting hint for tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableFormat {
    pub form: TableForm,
    /// Indent added for the `[header]` line.
    pub name_indent: i32,
    /// Indent added for each entry line of the body.
    pub body_indent: i32,
    /// Indent added for the closing `}` of a multi-line inline table.
    pub closing_indent: i32,
    pub indent_char: IndentChar,
}

/// The character used to build indent prefixes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndentChar {
    #[default]
    Space,
    Tab,
    /// Suppress indentation entirely.
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_defaults_are_plain_decimal() {
        let fmt = IntegerFormat::default();
        assert_eq!(fmt.radix, IntegerRadix::Dec);
        assert_eq!(fmt.width, 0);
        assert_eq!(fmt.spacer, 0);
        assert!(!fmt.uppercase);
        assert!(fmt.suffix.is_empty());
    }

    #[test]
    fn time_defaults_keep_seconds_without_fraction() {
        let fmt = LocalTimeFormat::default();
        assert!(fmt.has_seconds);
        assert_eq!(fmt.subsecond_precision, 0);
    }

    #[test]
    fn table_defaults_to_header_block() {
        let fmt = TableFormat::default();
        assert_eq!(fmt.form, TableForm::Multiline);
        assert_eq!(fmt.body_indent, 0);
        assert_eq!(fmt.indent_char, IndentChar::Space);
    }
}
