//! Steering the rendering through formatting hints.
//!
//! Run with: cargo run --example formatting

use toml_fmt::{
    to_string, to_string_with_key, IntegerFormat, IntegerRadix, StringForm, TableForm, TomlSpec,
    Value,
};

fn main() -> Result<(), toml_fmt::Error> {
    // A file permission mask reads better in octal.
    let mut mode = Value::integer(0o644);
    mode.integer_fmt_mut().unwrap().radix = IntegerRadix::Oct;
    println!("mode = {}", to_string(&mode, TomlSpec::default())?);

    // A register mask reads better in grouped binary.
    let mut mask = Value::integer(0b1010_0001);
    *mask.integer_fmt_mut().unwrap() = IntegerFormat {
        radix: IntegerRadix::Bin,
        width: 8,
        spacer: 4,
        ..IntegerFormat::default()
    };
    println!("mask = {}", to_string(&mask, TomlSpec::default())?);

    // Windows paths want literal strings.
    let mut path = Value::string(r"C:\Users\alice");
    path.string_fmt_mut().unwrap().form = StringForm::Literal;
    println!("path = {}", to_string(&path, TomlSpec::default())?);

    // The same table as a header block, inline, or dotted keys.
    let point = toml_fmt::toml!({"x": 1, "y": 2});
    for form in [TableForm::Multiline, TableForm::Oneline, TableForm::Dotted] {
        let mut styled = point.clone();
        styled.table_fmt_mut().unwrap().form = form;
        println!("---\n{}", to_string_with_key("point", &styled, TomlSpec::default())?);
    }

    Ok(())
}
