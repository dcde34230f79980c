//! JSON flattener.
//!
//! Walks a parsed JSON tree and pushes one reading per numeric or boolean
//! leaf to a [`Receiver`]. Names are derived from the leaf's path:
//! - array elements append `__<index>` (indices ascending),
//! - object members append `::<key>`, except at the root where the key is used as-is.
//!
//! Strings and nulls produce no reading. `true`/`false` become `1.0`/`0.0`.
//! A bare scalar document yields a single reading with an empty name.
//!
//! The path is kept in one buffer that grows on descent and is truncated on
//! the way back up, so the walk allocates no intermediate names.

use std::fmt::Write;

use serde_json::Value;

/// Separator placed before an array index.
pub const INDEX_SEPARATOR: &str = "__";
/// Separator placed before an object key (omitted for root keys).
pub const KEY_SEPARATOR: &str = "::";

/// Sink for flattened readings.
pub trait Receiver {
    fn receive(&mut self, name: &str, value: f64);
}

impl<F> Receiver for F
where
    F: FnMut(&str, f64),
{
    fn receive(&mut self, name: &str, value: f64) {
        self(name, value)
    }
}

/// One flattened scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub name: String,
    pub value: f64,
}

/// Flatten `value` starting from the empty path.
pub fn flatten<R: Receiver + ?Sized>(value: &Value, receiver: &mut R) {
    walk("", value, receiver);
}

/// Flatten `value` as if it were found at `path`.
pub fn walk<R: Receiver + ?Sized>(path: &str, value: &Value, receiver: &mut R) {
    let mut buf = String::from(path);
    walk_into(&mut buf, value, receiver);
}

/// Flatten into an owned list, in delivery order.
pub fn collect(doc: &Value) -> Vec<Reading> {
    let mut out = Vec::new();
    flatten(doc, &mut |name: &str, value: f64| {
        out.push(Reading {
            name: name.to_owned(),
            value,
        })
    });
    out
}

fn walk_into<R: Receiver + ?Sized>(path: &mut String, value: &Value, receiver: &mut R) {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(v) => receiver.receive(path.as_str(), v),
            None => {
                tracing::warn!(path = %path, number = %n, "unrepresentable number, skipped");
            }
        },
        Value::Bool(b) => receiver.receive(path.as_str(), if *b { 1.0 } else { 0.0 }),
        Value::String(_) | Value::Null => {}
        Value::Array(items) => {
            let base = path.len();
            for (i, item) in items.iter().enumerate() {
                path.push_str(INDEX_SEPARATOR);
                // Writing to a String cannot fail.
                let _ = write!(path, "{i}");
                walk_into(path, item, receiver);
                path.truncate(base);
            }
        }
        Value::Object(map) => {
            let base = path.len();
            for (key, item) in map {
                if base > 0 {
                    path.push_str(KEY_SEPARATOR);
                }
                path.push_str(key);
                walk_into(path, item, receiver);
                path.truncate(base);
            }
        }
    }
}
