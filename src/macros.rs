/// Builds a [`Value`](crate::Value) tree from a JSON-like literal.
///
/// Tables use `{"key": value}` syntax, arrays use `[...]`, and scalars take
/// anything with a `From` conversion into `Value`. Everything gets default
/// formatting hints; adjust them afterwards through the `*_fmt_mut`
/// accessors if the rendering matters.
///
/// # Examples
///
/// ```rust
/// use toml_fmt::{toml, to_string, TomlSpec};
///
/// let value = toml!({
///     "title": "example",
///     "ports": [8000, 8001],
/// });
/// let text = to_string(&value, TomlSpec::default()).unwrap();
/// assert_eq!(text, "title = \"example\"\nports = [8000, 8001]\n");
/// ```
#[macro_export]
macro_rules! toml {
    (true) => {
        $crate::Value::boolean(true)
    };

    (false) => {
        $crate::Value::boolean(false)
    };

    ([]) => {
        $crate::Value::array(vec![])
    };

    ([ $($element:tt),* $(,)? ]) => {
        $crate::Value::array(vec![$($crate::toml!($element)),*])
    };

    ({}) => {
        $crate::Value::table($crate::Table::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut entries = $crate::Table::new();
        $(
            entries.insert($key.to_string(), $crate::toml!($value));
        )*
        $crate::Value::table(entries)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
