//! The `Serialize` impl exposes semantic content only; formatting hints,
//! comments, and locations stay behind.

use chrono::{FixedOffset, NaiveDate};
use serde_json::json;
use toml_fmt::{toml, IntegerRadix, Value};

#[test]
fn tables_and_arrays_map_onto_the_serde_data_model() {
    let value = toml!({
        "name": "Alice",
        "age": 30,
        "scores": [1, 2.5],
        "active": true,
    });

    let j = serde_json::to_value(&value).unwrap();
    assert_eq!(
        j,
        json!({
            "name": "Alice",
            "age": 30,
            "scores": [1, 2.5],
            "active": true,
        })
    );
}

#[test]
fn formatting_hints_do_not_leak_into_serialization() {
    let mut v = Value::integer(255);
    v.integer_fmt_mut().unwrap().radix = IntegerRadix::Hex;

    let j = serde_json::to_value(&v).unwrap();
    assert_eq!(j, json!(255));
}

#[test]
fn comments_do_not_leak_into_serialization() {
    let v = Value::integer(1).with_comments(["hidden"]);
    assert_eq!(serde_json::to_value(&v).unwrap(), json!(1));
}

#[test]
fn datetimes_become_iso_strings() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    assert_eq!(
        serde_json::to_value(Value::local_date(date)).unwrap(),
        json!("2024-01-15")
    );

    let dt = date.and_hms_opt(10, 30, 0).unwrap();
    assert_eq!(
        serde_json::to_value(Value::local_datetime(dt)).unwrap(),
        json!("2024-01-15T10:30:00")
    );

    let offset = FixedOffset::east_opt(9 * 3600).unwrap();
    let odt = dt.and_local_timezone(offset).unwrap();
    assert_eq!(
        serde_json::to_value(Value::offset_datetime(odt)).unwrap(),
        json!("2024-01-15T10:30:00+09:00")
    );
}

#[test]
fn empty_becomes_null() {
    assert_eq!(serde_json::to_value(Value::empty()).unwrap(), json!(null));
}
