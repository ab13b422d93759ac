use toml_fmt::{
    to_string, to_string_with_key, to_string_with_keys, toml, ArrayForm, Error, FloatForm,
    IndentChar, IntegerFormat, IntegerRadix, Table, TableForm, TomlSpec, Value,
};

fn render(value: &Value) -> String {
    to_string(value, TomlSpec::default()).unwrap()
}

#[test]
fn hex_integer_with_width_uppercase_and_grouping() {
    let mut v = Value::integer(255);
    *v.integer_fmt_mut().unwrap() = IntegerFormat {
        radix: IntegerRadix::Hex,
        width: 4,
        spacer: 2,
        uppercase: true,
        suffix: String::new(),
    };
    assert_eq!(render(&v), "0x00_FF");
}

#[test]
fn decimal_grouping_never_touches_the_sign() {
    let mut v = Value::integer(-42);
    v.integer_fmt_mut().unwrap().spacer = 3;
    assert_eq!(render(&v), "-42");

    let mut v = Value::integer(1234567);
    v.integer_fmt_mut().unwrap().spacer = 3;
    assert_eq!(render(&v), "1_234_567");
}

#[test]
fn float_default_form_never_looks_like_an_integer() {
    assert_eq!(render(&Value::floating(1.0)), "1.0");
    assert_eq!(render(&Value::floating(-f64::NAN)), "-nan");
    assert_eq!(render(&Value::floating(f64::INFINITY)), "inf");

    let mut v = Value::floating(100000.0);
    v.float_fmt_mut().unwrap().form = FloatForm::Scientific;
    let out = render(&v);
    assert!(out.contains('e'), "scientific output was {out}");
}

#[test]
fn dotted_tables_flatten_to_full_paths() {
    let mut c = toml!({"d": "x", "e": "y"});
    c.table_fmt_mut().unwrap().form = TableForm::Dotted;

    let mut b = Value::table([("c".to_string(), c)].into_iter().collect());
    b.table_fmt_mut().unwrap().form = TableForm::Dotted;

    let mut a = Value::table([("b".to_string(), b)].into_iter().collect());
    a.table_fmt_mut().unwrap().form = TableForm::Dotted;

    let root = Value::table([("a".to_string(), a)].into_iter().collect());
    assert_eq!(render(&root), "a.b.c.d = \"x\"\na.b.c.e = \"y\"\n");
}

#[test]
fn dotted_table_descends_into_inline_tables_as_leaves() {
    let mut inline = toml!({"x": 1});
    inline.table_fmt_mut().unwrap().form = TableForm::Oneline;

    let mut outer = Value::table([("point".to_string(), inline)].into_iter().collect());
    outer.table_fmt_mut().unwrap().form = TableForm::Dotted;

    let root = Value::table([("geo".to_string(), outer)].into_iter().collect());
    assert_eq!(render(&root), "geo.point = {x = 1}\n");
}

#[test]
fn short_scalar_arrays_stay_on_one_line() {
    let root = toml!({"xs": [1, 2, 3]});
    assert_eq!(render(&root), "xs = [1, 2, 3]\n");
}

#[test]
fn long_arrays_upgrade_to_multiline() {
    let long = "x".repeat(70);
    let root = Value::table(
        [(
            "xs".to_string(),
            Value::array(vec![Value::string(long.clone())]),
        )]
        .into_iter()
        .collect(),
    );
    assert_eq!(render(&root), format!("xs = [\n    \"{}\",\n]\n", long));
}

#[test]
fn arrays_with_multiline_strings_upgrade() {
    let mut s = Value::string("a\nb");
    s.string_fmt_mut().unwrap().form = toml_fmt::StringForm::MultilineBasic;
    let root = Value::table(
        [("xs".to_string(), Value::array(vec![s]))]
            .into_iter()
            .collect(),
    );
    let out = render(&root);
    assert!(out.starts_with("xs = [\n"), "got {out}");
}

#[test]
fn leaves_come_before_sections() {
    let root = toml!({
        "title": "demo",
        "server": {"host": "alpha"},
        "port": 8080,
    });
    assert_eq!(
        render(&root),
        "title = \"demo\"\nport = 8080\n\n[server]\nhost = \"alpha\"\n"
    );
}

#[test]
fn nested_sections_use_full_paths() {
    let root = toml!({"a": {"b": {"x": 1}}});
    assert_eq!(render(&root), "[a]\n[a.b]\nx = 1\n");
}

#[test]
fn arrays_of_tables_are_chosen_automatically() {
    let fruit = toml!([{"name": "apple"}, {"name": "banana"}]);
    let text = to_string_with_key("fruit", &fruit, TomlSpec::default()).unwrap();
    assert_eq!(
        text,
        "[[fruit]]\nname = \"apple\"\n[[fruit]]\nname = \"banana\"\n"
    );
}

#[test]
fn arrays_of_tables_under_a_key_path() {
    let arr = toml!([{"x": 1}]);
    let text = to_string_with_keys(["outer", "inner"], &arr, TomlSpec::default()).unwrap();
    assert_eq!(text, "[[outer.inner]]\nx = 1\n");
}

#[test]
fn array_of_tables_without_a_key_is_an_error() {
    let mut arr = toml!([{"a": 1}]);
    arr.array_fmt_mut().unwrap().form = ArrayForm::ArrayOfTables;
    assert!(matches!(
        to_string(&arr, TomlSpec::default()),
        Err(Error::MissingKey { .. })
    ));
}

#[test]
fn dotted_table_without_a_key_is_an_error() {
    let mut t = toml!({"x": 1});
    t.table_fmt_mut().unwrap().form = TableForm::Dotted;
    assert!(matches!(
        to_string(&t, TomlSpec::default()),
        Err(Error::MissingKey { .. })
    ));
}

#[test]
fn tables_inside_bracketed_arrays_render_inline() {
    let mut arr = toml!([{"x": 1}]);
    arr.array_fmt_mut().unwrap().form = ArrayForm::Oneline;
    let root = Value::table([("points".to_string(), arr)].into_iter().collect());
    assert_eq!(render(&root), "points = [{x = 1}]\n");

    let mut arr = toml!([{"x": 1}]);
    arr.array_fmt_mut().unwrap().form = ArrayForm::Multiline;
    let root = Value::table([("points".to_string(), arr)].into_iter().collect());
    assert_eq!(render(&root), "points = [\n    {x = 1},\n]\n");
}

#[test]
fn array_of_tables_downgrades_inside_an_inline_context() {
    let mut inner = toml!([{"a": 1}]);
    inner.array_fmt_mut().unwrap().form = ArrayForm::ArrayOfTables;
    let outer = Value::array(vec![inner]);

    let text = render(&outer);
    assert!(!text.contains("[["), "got {text}");
    assert!(text.contains("{a = 1}"), "got {text}");
}

#[test]
fn comments_render_above_their_value() {
    let mut entries = Table::new();
    entries.insert(
        "k".to_string(),
        Value::integer(1).with_comments(["# the k"]),
    );
    let root = Value::table(entries).with_comments(["document header"]);

    assert_eq!(render(&root), "#document header\n\n# the k\nk = 1\n");
}

#[test]
fn comments_inside_multiline_arrays() {
    let mut arr = Value::array(vec![Value::integer(1).with_comments(["one"])]);
    arr.array_fmt_mut().unwrap().form = ArrayForm::Multiline;
    let root = Value::table([("xs".to_string(), arr)].into_iter().collect());

    assert_eq!(render(&root), "xs = [\n    #one\n    1,\n]\n");
}

#[test]
fn commented_table_arrays_stay_bracketed() {
    // A [[header]] cannot carry the array's own comment, so the array keeps
    // its key = [...] line instead.
    let arr = toml!([{"a": 1}]).with_comments(["note"]);
    let root = Value::table([("xs".to_string(), arr)].into_iter().collect());

    let text = render(&root);
    assert!(!text.contains("[["), "got {text}");
    assert!(text.starts_with("#note\nxs = [\n"), "got {text}");
}

#[test]
fn implicit_tables_emit_no_header_of_their_own() {
    let mut app = toml!({"server": {"host": "alpha"}});
    app.table_fmt_mut().unwrap().form = TableForm::Implicit;
    let root = Value::table([("app".to_string(), app)].into_iter().collect());

    assert_eq!(render(&root), "[app.server]\nhost = \"alpha\"\n");
}

#[test]
fn implicit_tables_allow_arrays_of_header_tables() {
    let mut app = toml!({"server": [{"host": "alpha"}, {"host": "beta"}]});
    app.table_fmt_mut().unwrap().form = TableForm::Implicit;
    let root = Value::table([("app".to_string(), app)].into_iter().collect());

    assert_eq!(
        render(&root),
        "[[app.server]]\nhost = \"alpha\"\n[[app.server]]\nhost = \"beta\"\n"
    );
}

#[test]
fn implicit_tables_reject_scalar_children() {
    let mut app = toml!({"port": 1});
    app.table_fmt_mut().unwrap().form = TableForm::Implicit;
    let root = Value::table([("app".to_string(), app)].into_iter().collect());

    assert!(matches!(
        to_string(&root, TomlSpec::default()),
        Err(Error::ImplicitTableChild { .. })
    ));
}

#[test]
fn implicit_tables_reject_inline_children() {
    let mut inline = toml!({"x": 1});
    inline.table_fmt_mut().unwrap().form = TableForm::Oneline;
    let mut app = Value::table([("point".to_string(), inline)].into_iter().collect());
    app.table_fmt_mut().unwrap().form = TableForm::Implicit;
    let root = Value::table([("app".to_string(), app)].into_iter().collect());

    assert!(matches!(
        to_string(&root, TomlSpec::default()),
        Err(Error::ImplicitTableChild { .. })
    ));
}

#[test]
fn multiline_inline_tables_keep_one_entry_per_line() {
    let mut point = toml!({"x": 1, "y": 2});
    {
        let fmt = point.table_fmt_mut().unwrap();
        fmt.form = TableForm::MultilineOneline;
        fmt.body_indent = 4;
    }
    let root = Value::table([("point".to_string(), point)].into_iter().collect());

    assert_eq!(render(&root), "point = {\n    x = 1,\n    y = 2,\n}\n");
}

#[test]
fn non_bare_keys_are_quoted() {
    let mut entries = Table::new();
    entries.insert("needs quotes".to_string(), Value::integer(1));
    entries.insert(String::new(), Value::integer(2));
    let root = Value::table(entries);

    assert_eq!(render(&root), "\"needs quotes\" = 1\n\"\" = 2\n");
}

#[test]
fn quoted_keys_appear_in_headers_too() {
    let section = toml!({"x": 1});
    let text = to_string_with_key("two words", &section, TomlSpec::default()).unwrap();
    assert_eq!(text, "[\"two words\"]\nx = 1\n");
}

#[test]
fn empty_collections() {
    assert_eq!(render(&toml!({})), "");
    assert_eq!(render(&toml!({"xs": []})), "xs = []\n");
}

#[test]
fn indent_hints_shift_headers_and_bodies() {
    let mut server = toml!({"host": "alpha"});
    {
        let fmt = server.table_fmt_mut().unwrap();
        fmt.name_indent = 2;
        fmt.body_indent = 4;
    }
    let root = Value::table([("server".to_string(), server)].into_iter().collect());
    assert_eq!(render(&root), "  [server]\n    host = \"alpha\"\n");
}

#[test]
fn tab_and_suppressed_indentation() {
    let mut server = toml!({"host": "alpha"});
    {
        let fmt = server.table_fmt_mut().unwrap();
        fmt.name_indent = 1;
        fmt.body_indent = 1;
        fmt.indent_char = IndentChar::Tab;
    }
    let root = Value::table([("server".to_string(), server.clone())].into_iter().collect());
    assert_eq!(render(&root), "\t[server]\n\thost = \"alpha\"\n");

    server.table_fmt_mut().unwrap().indent_char = IndentChar::None;
    let root = Value::table([("server".to_string(), server)].into_iter().collect());
    assert_eq!(render(&root), "[server]\nhost = \"alpha\"\n");
}
