//! Flattener traversal properties.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use json_exporter_core::flatten::{collect, flatten, walk, Reading, INDEX_SEPARATOR, KEY_SEPARATOR};

fn names(v: &serde_json::Value) -> Vec<String> {
    collect(v).into_iter().map(|r| r.name).collect()
}

#[test]
fn separators_are_stable() {
    assert_eq!(INDEX_SEPARATOR, "__");
    assert_eq!(KEY_SEPARATOR, "::");
}

#[test]
fn booleans_coerce_to_one_and_zero() {
    assert_eq!(collect(&json!(true)), vec![Reading { name: String::new(), value: 1.0 }]);
    assert_eq!(collect(&json!(false)), vec![Reading { name: String::new(), value: 0.0 }]);
}

#[test]
fn strings_and_nulls_emit_nothing() {
    assert!(collect(&json!("text")).is_empty());
    assert!(collect(&json!(null)).is_empty());
    assert!(collect(&json!(["a", null, "b"])).is_empty());
}

#[test]
fn array_indices_are_ascending() {
    let arr: Vec<u32> = (0..12).collect();
    let got = collect(&json!({ "a": arr }));

    let expected: Vec<Reading> = (0..12u32)
        .map(|i| Reading { name: format!("a__{i}"), value: f64::from(i) })
        .collect();
    assert_eq!(got, expected);
}

#[test]
fn object_keys_join_with_double_colon() {
    assert_eq!(names(&json!({ "a": { "b": 1 } })), vec!["a::b"]);
    assert_eq!(names(&json!({ "a": { "b": { "c": 2 } } })), vec!["a::b::c"]);
}

#[test]
fn walk_honours_an_explicit_prefix() {
    let mut got = Vec::new();
    walk("root", &json!({ "k": [3] }), &mut |name: &str, value: f64| {
        got.push((name.to_owned(), value));
    });
    assert_eq!(got, vec![("root::k__0".to_owned(), 3.0)]);
}

#[test]
fn receiver_sees_every_scalar_once() {
    let doc = json!({
        "cpu": [0.5, 0.25],
        "mem": { "used": 10, "free": 20, "label": "x" },
        "ok": true
    });

    let mut count = 0usize;
    flatten(&doc, &mut |_: &str, _: f64| count += 1);
    assert_eq!(count, 5);
}

#[test]
fn flattening_is_idempotent() {
    let doc = json!({
        "a": [1, { "b": false, "c": [2.5, null] }],
        "d": { "e": { "f": -1 } }
    });

    let mut first = collect(&doc);
    let mut second = collect(&doc);
    first.sort_by(|l, r| l.name.cmp(&r.name));
    second.sort_by(|l, r| l.name.cmp(&r.name));
    assert_eq!(first, second);
}

#[test]
fn sibling_paths_do_not_leak_into_each_other() {
    let doc = json!({ "a": [1, 2], "b": { "c": [3] } });
    let mut got = names(&doc);
    got.sort();
    assert_eq!(got, vec!["a__0", "a__1", "b::c__0"]);
}
