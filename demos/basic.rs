//! Building a document tree and rendering it as TOML.
//!
//! Run with: cargo run --example basic

use toml_fmt::{toml, to_string, TomlSpec};

fn main() -> Result<(), toml_fmt::Error> {
    let document = toml!({
        "title": "Service configuration",
        "debug": false,
        "limits": {
            "max_connections": 500,
            "timeout_seconds": 2.5,
        },
        "server": [
            {"host": "alpha", "port": 8001},
            {"host": "beta", "port": 8002},
        ],
    });

    let text = to_string(&document, TomlSpec::default())?;
    println!("{}", text);

    Ok(())
}
