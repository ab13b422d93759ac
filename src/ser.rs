//! The TOML serializer.
//!
//! [`Serializer`] walks a [`Value`] tree and produces TOML text, honoring
//! each value's formatting hint wherever the hints are internally
//! consistent. The walk carries three pieces of context:
//!
//! - the **key path** from the root to the current value, needed for
//!   `[section]` and `[[array.of.tables]]` headers and dotted keys;
//! - the **inline flag**, set inside `[...]` and `{...}` where newlines are
//!   forbidden, which overrides hints that would need their own lines;
//! - the **current indent**, adjusted by the indent fields of the
//!   surrounding array and table hints.
//!
//! Tables render in two passes: first the entries that fit on a
//! `key = value` line, then the entries that open a header of their own.
//! TOML forces this split: once a `[section]` header is written, a bare
//! `key = value` line would belong to that section, not to its parent.
//!
//! Most users should call [`to_string`](crate::to_string) and friends
//! instead of driving a `Serializer` directly.
//!
//! ## Examples
//!
//! ```rust
//! use toml_fmt::{toml, Serializer, TomlSpec};
//!
//! let mut ser = Serializer::new(TomlSpec::default());
//! let text = ser.serialize_with_key("server", &toml!({"host": "alpha"})).unwrap();
//! assert_eq!(text, "[server]\nhost = \"alpha\"\n");
//! ```

use crate::comment::Comments;
use crate::error::{Error, Result};
use crate::fmt::{
    ArrayForm, ArrayFormat, DatetimeDelimiter, FloatForm, FloatFormat, IndentChar, IntegerFormat,
    IntegerRadix, StringForm, StringFormat, TableForm, TableFormat,
};
use crate::map::Table;
use crate::spec::{TomlSpec, TomlVersion};
use crate::value::{SourceLocation, Value, ValueRepr};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Serializes [`Value`] trees into TOML text.
///
/// A serializer is cheap to build and scoped to one top-level call; nothing
/// persists between calls except the specification level.
pub struct Serializer {
    spec: TomlSpec,
    force_inline: bool,
    current_indent: i32,
    keys: Vec<String>,
}

impl Serializer {
    #[must_use]
    pub fn new(spec: TomlSpec) -> Self {
        Serializer {
            spec,
            force_inline: false,
            current_indent: 0,
            keys: Vec::new(),
        }
    }

    /// Serializes `value` with an empty key path.
    pub fn serialize(&mut self, value: &Value) -> Result<String> {
        self.value(value)
    }

    /// Serializes `value` as if it lived under `key` at the root.
    pub fn serialize_with_key(&mut self, key: impl Into<String>, value: &Value) -> Result<String> {
        self.keys.push(key.into());
        self.value(value)
    }

    /// Serializes `value` as if it lived under the given key path.
    pub fn serialize_with_keys<I, S>(&mut self, keys: I, value: &Value) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys.extend(keys.into_iter().map(Into::into));
        self.value(value)
    }

    fn value(&mut self, v: &Value) -> Result<String> {
        match v.repr() {
            ValueRepr::Boolean(b, _) => Ok(boolean_str(*b).to_owned()),
            ValueRepr::Integer(i, fmt) => self.integer(*i, fmt, v.location()),
            ValueRepr::Floating(f, fmt) => Ok(self.floating(*f, fmt)),
            ValueRepr::String(s, fmt) => self.string(s, fmt, v.location()),
            ValueRepr::LocalDate(d, _) => Ok(local_date_str(*d)),
            ValueRepr::LocalTime(t, fmt) => {
                Ok(local_time_str(*t, fmt.has_seconds, fmt.subsecond_precision))
            }
            ValueRepr::LocalDatetime(dt, fmt) => Ok(local_datetime_str(*dt, fmt)),
            ValueRepr::OffsetDatetime(dt, fmt) => Ok(offset_datetime_str(dt, fmt)),
            ValueRepr::Array(elements, fmt) => self.array(elements, fmt, v.comments(), v.location()),
            ValueRepr::Table(entries, fmt) => {
                let mut out = String::new();
                if self.keys.is_empty() {
                    // The root table owns the document prologue.
                    out += &self.comment_block(v.comments(), fmt.indent_char);
                    if !out.is_empty() {
                        out.push('\n');
                    }
                }
                out += &self.table(entries, fmt, v.comments(), v.location())?;
                Ok(out)
            }
            ValueRepr::Empty => {
                if self.spec.ext_null_value {
                    Ok("null".to_owned())
                } else {
                    Err(Error::invalid_value(v.kind(), v.location()))
                }
            }
        }
    }

    fn integer(&self, i: i64, fmt: &IntegerFormat, loc: SourceLocation) -> Result<String> {
        match fmt.radix {
            IntegerRadix::Dec => {
                let digits = if fmt.width > 0 {
                    format!("{:0width$}", i, width = fmt.width)
                } else {
                    i.to_string()
                };
                let mut out = group_digits(&digits, fmt.spacer);
                if self.spec.ext_num_suffix && !fmt.suffix.is_empty() {
                    out.push('_');
                    out.push_str(&fmt.suffix);
                }
                Ok(out)
            }
            _ if i < 0 => Err(Error::negative_non_decimal(loc)),
            IntegerRadix::Hex => {
                let digits = if fmt.uppercase {
                    format!("{:0width$X}", i, width = fmt.width)
                } else {
                    format!("{:0width$x}", i, width = fmt.width)
                };
                Ok(format!("0x{}", group_digits(&digits, fmt.spacer)))
            }
            IntegerRadix::Oct => {
                let digits = format!("{:0width$o}", i, width = fmt.width);
                Ok(format!("0o{}", group_digits(&digits, fmt.spacer)))
            }
            IntegerRadix::Bin => Ok(format!(
                "0b{}",
                binary_digits(i, fmt.width, fmt.spacer)
            )),
        }
    }

    fn floating(&self, f: f64, fmt: &FloatFormat) -> String {
        let decimal_suffix = |mut s: String| {
            if self.spec.ext_num_suffix && !fmt.suffix.is_empty() {
                s.push('_');
                s.push_str(&fmt.suffix);
            }
            s
        };

        if f.is_nan() {
            let s = if f.is_sign_negative() { "-nan" } else { "nan" };
            return decimal_suffix(s.to_owned());
        }
        if f.is_infinite() {
            let s = if f.is_sign_negative() { "-inf" } else { "inf" };
            return decimal_suffix(s.to_owned());
        }

        match fmt.form {
            FloatForm::Default => {
                let mut s = if fmt.precision != 0 {
                    format!("{:.prec$}", f, prec = fmt.precision)
                } else {
                    format!("{}", f)
                };
                // Must not be mistakable for an integer.
                if !s.contains('.') && !s.contains('e') && !s.contains('E') {
                    s.push_str(".0");
                }
                decimal_suffix(s)
            }
            FloatForm::Fixed => {
                let mut s = if fmt.precision != 0 {
                    format!("{:.prec$}", f, prec = fmt.precision)
                } else {
                    format!("{}", f)
                };
                if !s.contains('.') {
                    s.push_str(".0");
                }
                decimal_suffix(s)
            }
            FloatForm::Scientific => {
                let s = if fmt.precision != 0 {
                    format!("{:.prec$e}", f, prec = fmt.precision)
                } else {
                    format!("{:e}", f)
                };
                decimal_suffix(s)
            }
            FloatForm::Hex => {
                // Suffixes are a decimal-only notation.
                if self.spec.ext_hex_float {
                    hex_float_str(f)
                } else {
                    format!("{:.16e}", f)
                }
            }
        }
    }

    fn string(&self, s: &str, fmt: &StringFormat, loc: SourceLocation) -> Result<String> {
        match fmt.form {
            StringForm::Basic => Ok(format!("\"{}\"", self.escape_basic(s))),
            StringForm::Literal => {
                if s.contains('\n') {
                    return Err(Error::invalid_literal_string(loc));
                }
                Ok(format!("'{}'", s))
            }
            StringForm::MultilineBasic => {
                let mut out = String::from("\"\"\"");
                if fmt.start_with_newline {
                    out.push('\n');
                }
                out += &self.escape_multiline_basic(s);
                out += "\"\"\"";
                Ok(out)
            }
            StringForm::MultilineLiteral => {
                let mut out = String::from("'''");
                if fmt.start_with_newline {
                    out.push('\n');
                }
                out += s;
                out += "'''";
                Ok(out)
            }
        }
    }

    fn escape_basic(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\u{08}' => out.push_str("\\b"),
                '\t' => out.push_str("\\t"),
                '\u{0C}' => out.push_str("\\f"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\u{1B}' if self.spec.v1_1_0_add_escape_sequence_e => out.push_str("\\e"),
                c if is_control(c) => out += &self.escape_control(c),
                c => out.push(c),
            }
        }
        out
    }

    fn escape_multiline_basic(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\u{08}' => out.push_str("\\b"),
                '\t' => out.push_str("\\t"),
                '\u{0C}' => out.push_str("\\f"),
                '\n' => out.push('\n'),
                '\r' => out.push_str("\\r"),
                '\u{1B}' if self.spec.v1_1_0_add_escape_sequence_e => out.push_str("\\e"),
                c if is_control(c) => out += &self.escape_control(c),
                c => out.push(c),
            }
        }
        // Three consecutive quotes would close the string early. Break every
        // run by escaping its third quote; at most two unescaped quotes can
        // then touch the closing delimiter, which the grammar allows.
        while let Some(pos) = out.find("\"\"\"") {
            out.replace_range(pos + 2..pos + 3, "\\\"");
        }
        out
    }

    fn escape_control(&self, c: char) -> String {
        if self.spec.v1_1_0_add_escape_sequence_x {
            format!("\\x{:02X}", c as u32)
        } else {
            format!("\\u{:04X}", c as u32)
        }
    }

    fn array(
        &mut self,
        elements: &[Value],
        fmt: &ArrayFormat,
        comments: &Comments,
        loc: SourceLocation,
    ) -> Result<String> {
        let mut form = fmt.form;
        if form == ArrayForm::Default {
            form = self.resolve_array_form(elements, comments)?;
        }
        // Header blocks cannot appear inside `[...]` or `{...}`.
        if self.force_inline && form == ArrayForm::ArrayOfTables {
            form = ArrayForm::Multiline;
        }

        match form {
            ArrayForm::ArrayOfTables => self.array_of_tables(elements, loc),
            ArrayForm::Oneline => self.oneline_array(elements),
            ArrayForm::Multiline | ArrayForm::Default => self.multiline_array(elements, fmt),
        }
    }

    /// Picks a concrete form for an array whose hint says `Default`.
    fn resolve_array_form(&self, elements: &[Value], comments: &Comments) -> Result<ArrayForm> {
        // `[[header]]` blocks cannot carry a comment on the array itself,
        // only on each table, so a commented array stays bracketed.
        if !self.keys.is_empty()
            && !elements.is_empty()
            && comments.is_empty()
            && elements.iter().all(Value::is_table)
        {
            return Ok(ArrayForm::ArrayOfTables);
        }

        let mut approx_len = 0usize;
        for e in elements {
            if !e.comments().is_empty() {
                return Ok(ArrayForm::Multiline);
            }
            match e.repr() {
                ValueRepr::Array(..)
                | ValueRepr::Table(..)
                | ValueRepr::OffsetDatetime(..)
                | ValueRepr::LocalDatetime(..) => return Ok(ArrayForm::Multiline),
                ValueRepr::Boolean(b, _) => approx_len += boolean_str(*b).len(),
                ValueRepr::Integer(i, f) => approx_len += self.integer(*i, f, e.location())?.len(),
                ValueRepr::Floating(fv, f) => approx_len += self.floating(*fv, f).len(),
                ValueRepr::String(s, f) => {
                    if matches!(
                        f.form,
                        StringForm::MultilineBasic | StringForm::MultilineLiteral
                    ) {
                        return Ok(ArrayForm::Multiline);
                    }
                    approx_len += 2 + self.string(s, f, e.location())?.len();
                }
                ValueRepr::LocalDate(..) => approx_len += 10,  // 1234-56-78
                ValueRepr::LocalTime(..) => approx_len += 15,  // 12:34:56.789012
                ValueRepr::Empty => {}
            }
            if approx_len > 60 {
                return Ok(ArrayForm::Multiline);
            }
            approx_len += 2; // `, `
        }
        Ok(ArrayForm::Oneline)
    }

    fn array_of_tables(&mut self, elements: &[Value], loc: SourceLocation) -> Result<String> {
        let path = match self.format_keys(&self.keys) {
            Some(path) => path,
            None => return Err(Error::missing_key("an array of tables", loc)),
        };

        let mut out = String::new();
        for e in elements {
            let (entries, tfmt) = match e.repr() {
                ValueRepr::Table(entries, tfmt) => (entries, *tfmt),
                _ => return Err(Error::invalid_value(e.kind(), e.location())),
            };

            self.current_indent += tfmt.name_indent;
            out += &self.comment_block(e.comments(), tfmt.indent_char);
            out += &self.indent(tfmt.indent_char);
            self.current_indent -= tfmt.name_indent;

            out += "[[";
            out += &path;
            out += "]]\n";

            out += &self.multiline_table_body(entries, &tfmt)?;
        }
        Ok(out)
    }

    fn oneline_array(&mut self, elements: &[Value]) -> Result<String> {
        // Element comments have nowhere to go on a single line.
        let prev = self.force_inline;
        self.force_inline = true;

        let mut out = String::from("[");
        let mut first = true;
        for e in elements {
            if !first {
                out += ", ";
            }
            first = false;
            out += &self.value(e)?;
        }
        out.push(']');

        self.force_inline = prev;
        Ok(out)
    }

    fn multiline_array(&mut self, elements: &[Value], fmt: &ArrayFormat) -> Result<String> {
        let prev = self.force_inline;

        let mut out = String::from("[\n");
        for e in elements {
            self.current_indent += fmt.body_indent;
            out += &self.comment_block(e.comments(), fmt.indent_char);
            out += &self.indent(fmt.indent_char);
            self.current_indent -= fmt.body_indent;

            self.force_inline = true;
            out += &self.value(e)?;
            out += ",\n";
        }
        self.force_inline = prev;

        self.current_indent += fmt.closing_indent;
        out += &self.indent(fmt.indent_char);
        self.current_indent -= fmt.closing_indent;

        out.push(']');
        Ok(out)
    }

    fn table(
        &mut self,
        entries: &Table,
        fmt: &TableFormat,
        comments: &Comments,
        loc: SourceLocation,
    ) -> Result<String> {
        if self.force_inline {
            return if fmt.form == TableForm::MultilineOneline {
                self.multiline_inline_table(entries, fmt)
            } else {
                self.inline_table(entries)
            };
        }

        match fmt.form {
            TableForm::Multiline => {
                let mut out = String::new();
                if let Some(path) = self.format_keys(&self.keys) {
                    self.current_indent += fmt.name_indent;
                    out += &self.comment_block(comments, fmt.indent_char);
                    out += &self.indent(fmt.indent_char);
                    self.current_indent -= fmt.name_indent;

                    out.push('[');
                    out += &path;
                    out += "]\n";
                }
                // No path means this is the root table: no header.
                out += &self.multiline_table_body(entries, fmt)?;
                Ok(out)
            }
            TableForm::Oneline => self.inline_table(entries),
            TableForm::MultilineOneline => self.multiline_inline_table(entries, fmt),
            TableForm::Dotted => {
                let last = match self.keys.last() {
                    Some(last) => last.clone(),
                    None => return Err(Error::missing_key("a dotted table", loc)),
                };
                let mut path = vec![last];
                self.dotted_table(entries, fmt, &mut path)
            }
            TableForm::Implicit => self.implicit_table(entries),
        }
    }

    /// Emits a table body: `key = value` lines first, then the entries that
    /// open their own `[section]` or `[[section]]` headers, separated by a
    /// blank line when both groups are present.
    fn multiline_table_body(&mut self, entries: &Table, fmt: &TableFormat) -> Result<String> {
        let mut leaves = String::new();
        self.current_indent += fmt.body_indent;
        for (key, val) in entries.iter() {
            if opens_own_header(val) {
                continue;
            }
            self.keys.push(key.clone());

            leaves += &self.comment_block(val.comments(), fmt.indent_char);
            leaves += &self.indent(fmt.indent_char);
            if matches!(val.repr(), ValueRepr::Table(_, f) if f.form == TableForm::Dotted) {
                // Dotted tables write their own `a.b.c = value` lines.
                leaves += &self.value(val)?;
            } else {
                leaves += &self.format_key(key);
                leaves += " = ";
                leaves += &self.value(val)?;
                leaves.push('\n');
            }

            self.keys.pop();
        }
        self.current_indent -= fmt.body_indent;

        let mut sections = String::new();
        for (key, val) in entries.iter() {
            if !opens_own_header(val) {
                continue;
            }
            self.keys.push(key.clone());
            sections += &self.value(val)?;
            self.keys.pop();
        }

        let mut out = leaves;
        if !out.is_empty() && !sections.is_empty() {
            out.push('\n');
        }
        out += &sections;
        Ok(out)
    }

    fn inline_table(&mut self, entries: &Table) -> Result<String> {
        // Comments have nowhere to go on a single line.
        let prev = self.force_inline;
        self.force_inline = true;

        let mut out = String::from("{");
        let mut first = true;
        for (key, val) in entries.iter() {
            if !first {
                out += ", ";
            }
            first = false;
            out += &self.format_key(key);
            out += " = ";
            out += &self.value(val)?;
        }
        out.push('}');

        self.force_inline = prev;
        Ok(out)
    }

    fn multiline_inline_table(&mut self, entries: &Table, fmt: &TableFormat) -> Result<String> {
        let prev = self.force_inline;
        self.force_inline = true;

        let mut out = String::from("{\n");
        self.current_indent += fmt.body_indent;
        for (key, val) in entries.iter() {
            out += &self.comment_block(val.comments(), fmt.indent_char);
            out += &self.indent(fmt.indent_char);
            out += &self.format_key(key);
            out += " = ";
            out += &self.value(val)?;
            out += ",\n";
        }
        self.current_indent -= fmt.body_indent;
        self.force_inline = prev;

        self.current_indent += fmt.closing_indent;
        out += &self.indent(fmt.indent_char);
        self.current_indent -= fmt.closing_indent;

        out.push('}');
        Ok(out)
    }

    /// Flattens nested tables into `a.b.c = value` lines.
    ///
    /// The descent passes through every subtable that is not inline; inline
    /// tables and scalars terminate a path and become the right-hand side.
    fn dotted_table(
        &mut self,
        entries: &Table,
        fmt: &TableFormat,
        path: &mut Vec<String>,
    ) -> Result<String> {
        let mut out = String::new();
        for (key, val) in entries.iter() {
            path.push(key.clone());

            let descend = matches!(
                val.repr(),
                ValueRepr::Table(_, f)
                    if !matches!(f.form, TableForm::Oneline | TableForm::MultilineOneline)
            );
            if descend {
                if let ValueRepr::Table(sub, subfmt) = val.repr() {
                    out += &self.dotted_table(sub, subfmt, path)?;
                }
            } else {
                out += &self.comment_block(val.comments(), fmt.indent_char);
                out += &self.indent(fmt.indent_char);
                if let Some(joined) = self.format_keys(path) {
                    out += &joined;
                }
                out += " = ";

                let prev = self.force_inline;
                self.force_inline = true;
                out += &self.value(val)?;
                self.force_inline = prev;

                out.push('\n');
            }

            path.pop();
        }
        Ok(out)
    }

    /// A table with no header of its own: every child must render with a
    /// full-path header, or the parent would have no way to appear at all.
    fn implicit_table(&mut self, entries: &Table) -> Result<String> {
        let mut out = String::new();
        for (key, val) in entries.iter() {
            match val.repr() {
                ValueRepr::Table(_, child) => {
                    if !matches!(child.form, TableForm::Multiline | TableForm::Implicit) {
                        return Err(Error::implicit_table_child(val.location()));
                    }
                }
                ValueRepr::Array(elements, _) if val.is_array_of_tables() => {
                    for e in elements {
                        match e.repr() {
                            ValueRepr::Table(_, child)
                                if matches!(
                                    child.form,
                                    TableForm::Multiline | TableForm::Implicit
                                ) => {}
                            _ => return Err(Error::implicit_table_child(e.location())),
                        }
                    }
                }
                _ => return Err(Error::implicit_table_child(val.location())),
            }

            self.keys.push(key.clone());
            let rendered = self.value(val)?;
            self.keys.pop();
            out += &rendered;
        }
        Ok(out)
    }

    fn comment_block(&self, comments: &Comments, indent_char: IndentChar) -> String {
        let lines = match comments.lines() {
            Some(lines) => lines,
            None => return String::new(),
        };
        let mut out = String::new();
        for line in lines {
            if line.is_empty() {
                continue;
            }
            out += &self.indent(indent_char);
            if !line.starts_with('#') {
                out.push('#');
            }
            out += line;
            if !line.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }

    fn indent(&self, indent_char: IndentChar) -> String {
        let width = self.current_indent.max(0) as usize;
        match indent_char {
            IndentChar::Space => " ".repeat(width),
            IndentChar::Tab => "\t".repeat(width),
            IndentChar::None => String::new(),
        }
    }

    fn format_key(&self, key: &str) -> String {
        if key.is_empty() {
            return "\"\"".to_owned();
        }
        if key.chars().all(|c| is_bare_key_char(c, &self.spec)) {
            return key.to_owned();
        }

        let mut out = String::from("\"");
        for c in key.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\u{08}' => out.push_str("\\b"),
                '\t' => out.push_str("\\t"),
                '\u{0C}' => out.push_str("\\f"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                c if is_control(c) => out += &self.escape_control(c),
                c => out.push(c),
            }
        }
        out.push('"');
        out
    }

    /// Joins a key path with dots, or `None` for the root.
    fn format_keys(&self, keys: &[String]) -> Option<String> {
        if keys.is_empty() {
            return None;
        }
        Some(
            keys.iter()
                .map(|k| self.format_key(k))
                .collect::<Vec<_>>()
                .join("."),
        )
    }
}

fn boolean_str(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

/// Inserts `_` separators every `spacer` digits, counted from the right and
/// never across a leading sign.
fn group_digits(s: &str, spacer: usize) -> String {
    if spacer == 0 {
        return s.to_owned();
    }
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => match s.strip_prefix('+') {
            Some(rest) => ("+", rest),
            None => ("", s),
        },
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / spacer);
    for (i, c) in digits.chars().rev().enumerate() {
        if i != 0 && i % spacer == 0 {
            grouped.push('_');
        }
        grouped.push(c);
    }

    let mut out = String::from(sign);
    out.extend(grouped.chars().rev());
    out
}

/// Binary digits of a non-negative value, least significant first in the
/// build, with spacers on `spacer`-bit boundaries and zero-extension out to
/// `width` bits.
fn binary_digits(mut x: i64, width: usize, spacer: usize) -> String {
    let mut digits = String::new();
    let mut bits = 0usize;
    while x != 0 {
        if spacer != 0 && bits != 0 && bits % spacer == 0 {
            digits.push('_');
        }
        digits.push(if x % 2 == 1 { '1' } else { '0' });
        x >>= 1;
        bits += 1;
    }
    while bits < width {
        if spacer != 0 && bits != 0 && bits % spacer == 0 {
            digits.push('_');
        }
        digits.push('0');
        bits += 1;
    }
    if digits.is_empty() {
        digits.push('0');
    }
    digits.chars().rev().collect()
}

/// C-style hex float, the shape `printf("%a")` produces.
fn hex_float_str(f: f64) -> String {
    let bits = f.to_bits();
    let sign = if bits >> 63 == 1 { "-" } else { "" };
    let exp_bits = ((bits >> 52) & 0x7ff) as i64;
    let frac = bits & ((1u64 << 52) - 1);

    if exp_bits == 0 && frac == 0 {
        return format!("{}0x0p+0", sign);
    }
    let (lead, exp) = if exp_bits == 0 {
        (0, -1022) // subnormal
    } else {
        (1, exp_bits - 1023)
    };

    let mut mantissa = format!("{:013x}", frac);
    while mantissa.ends_with('0') {
        mantissa.pop();
    }

    if mantissa.is_empty() {
        format!("{}0x{}p{:+}", sign, lead, exp)
    } else {
        format!("{}0x{}.{}p{:+}", sign, lead, mantissa, exp)
    }
}

fn local_date_str(d: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", d.year(), d.month(), d.day())
}

fn local_time_str(t: NaiveTime, has_seconds: bool, subsecond_precision: usize) -> String {
    let mut out = format!("{:02}:{:02}", t.hour(), t.minute());
    if has_seconds {
        out += &format!(":{:02}", t.second());
        if subsecond_precision != 0 {
            let nanos = format!("{:09}", t.nanosecond());
            out.push('.');
            out += &nanos[..subsecond_precision.min(9)];
        }
    }
    out
}

fn delimiter_char(delimiter: DatetimeDelimiter) -> char {
    match delimiter {
        DatetimeDelimiter::UpperT => 'T',
        DatetimeDelimiter::LowerT => 't',
        DatetimeDelimiter::Space => ' ',
    }
}

fn local_datetime_str(dt: NaiveDateTime, fmt: &crate::fmt::LocalDatetimeFormat) -> String {
    format!(
        "{}{}{}",
        local_date_str(dt.date()),
        delimiter_char(fmt.delimiter),
        local_time_str(dt.time(), fmt.has_seconds, fmt.subsecond_precision)
    )
}

fn offset_datetime_str(dt: &DateTime<FixedOffset>, fmt: &crate::fmt::OffsetDatetimeFormat) -> String {
    format!(
        "{}{}{}{}",
        local_date_str(dt.date_naive()),
        delimiter_char(fmt.delimiter),
        local_time_str(dt.time(), fmt.has_seconds, fmt.subsecond_precision),
        offset_str(*dt.offset())
    )
}

fn offset_str(offset: FixedOffset) -> String {
    let secs = offset.local_minus_utc();
    if secs == 0 {
        return "Z".to_owned();
    }
    let sign = if secs < 0 { '-' } else { '+' };
    let secs = secs.unsigned_abs();
    format!("{}{:02}:{:02}", sign, secs / 3600, (secs % 3600) / 60)
}

fn is_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0A}'..='\u{1F}' | '\u{7F}')
}

fn is_bare_key_char(c: char, spec: &TomlSpec) -> bool {
    if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
        return true;
    }
    if spec.version < TomlVersion::V1_1_0 {
        return false;
    }
    // TOML 1.1 widens bare keys to most letterlike Unicode.
    matches!(c,
        '\u{B2}' | '\u{B3}' | '\u{B9}'
        | '\u{BC}'..='\u{BE}'
        | '\u{C0}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{203F}'..='\u{2040}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2460}'..='\u{24FF}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

/// `true` for entries emitted in the second pass of a table body: header
/// tables and arrays that will render as `[[header]]` blocks.
///
/// An array of tables with a `Default` hint only becomes `[[header]]`
/// blocks when it carries no comments (comments cannot attach to a
/// `[[...]]` header), so a commented one stays in the first pass and gets
/// its `key = [...]` line.
fn opens_own_header(v: &Value) -> bool {
    let header_table = matches!(
        v.repr(),
        ValueRepr::Table(_, f)
            if !matches!(
                f.form,
                TableForm::Oneline | TableForm::MultilineOneline | TableForm::Dotted
            )
    );
    let header_array = v.is_array_of_tables()
        && matches!(
            v.repr(),
            ValueRepr::Array(_, f) if match f.form {
                ArrayForm::ArrayOfTables => true,
                ArrayForm::Default => v.comments().is_empty(),
                ArrayForm::Oneline | ArrayForm::Multiline => false,
            }
        );
    header_table || header_array
}
