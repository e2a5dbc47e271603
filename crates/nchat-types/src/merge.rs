//! Generic recursive deep merge.
//!
//! Overrides are partial records: a JSON object (or a TOML table converted
//! to one) shaped like a subset of the target record. Merging rules:
//!
//! - object onto object merges key by key, recursively
//! - anything else (scalars, arrays, object onto non-object) replaces
//! - `null` in the override never replaces a base value
//!
//! Arrays are replaced wholesale, never merged element-wise.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{NchatError, Result};

/// Merge `overrides` onto `base`, returning a new value.
///
/// Neither input is modified.
pub fn deep_merge(base: &Value, overrides: &Value) -> Value {
    match (base, overrides) {
        (_, Value::Null) => base.clone(),
        (Value::Object(b), Value::Object(o)) => Value::Object(merge_maps(b, o)),
        (_, o) => strip_nulls(o),
    }
}

fn merge_maps(base: &Map<String, Value>, overrides: &Map<String, Value>) -> Map<String, Value> {
    let mut out = base.clone();
    for (key, ov) in overrides {
        if ov.is_null() {
            continue;
        }
        let merged = match base.get(key) {
            Some(bv) => deep_merge(bv, ov),
            None => strip_nulls(ov),
        };
        out.insert(key.clone(), merged);
    }
    out
}

// Fresh object subtrees must not carry nulls into the result either.
fn strip_nulls(v: &Value) -> Value {
    match v {
        Value::Object(m) => Value::Object(
            m.iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), strip_nulls(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Whether an override value carries no effective change.
pub fn is_empty_override(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Object(m) => m.values().all(is_empty_override),
        _ => false,
    }
}

/// Apply a partial override onto a typed record.
///
/// The record is serialized, merged, and deserialized back. A leaf of the
/// wrong type in `overrides` surfaces as [`NchatError::Override`].
pub fn merge_overrides<T>(base: &T, overrides: &Value) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    if is_empty_override(overrides) {
        let v = serde_json::to_value(base)?;
        return Ok(serde_json::from_value(v)?);
    }
    if !overrides.is_object() {
        return Err(NchatError::Override(format!(
            "override must be an object, got {}",
            kind_name(overrides)
        )));
    }
    let base_value = serde_json::to_value(base)?;
    let merged = deep_merge(&base_value, overrides);
    serde_json::from_value(merged).map_err(|e| NchatError::Override(e.to_string()))
}

/// Convert a TOML table into an override value.
pub fn toml_to_override(table: &toml::Table) -> Result<Value> {
    Ok(serde_json::to_value(table)?)
}

/// Parse override text written as TOML.
pub fn parse_toml_override(s: &str) -> Result<Value> {
    let table: toml::Table = toml::from_str(s)?;
    toml_to_override(&table)
}

fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn merge_with_empty_is_identity() {
        let x = json!({"a": {"b": 1, "c": [1, 2]}, "d": "x"});
        assert_eq!(deep_merge(&x, &json!({})), x);
    }

    #[test]
    fn merge_with_self_is_identity() {
        let x = json!({"a": {"b": 1, "c": [1, 2]}, "d": "x"});
        assert_eq!(deep_merge(&x, &x), x);
    }

    #[test]
    fn null_does_not_clobber() {
        let merged = deep_merge(&json!({"a": {"b": 1}}), &json!({"a": {"b": null}}));
        assert_eq!(merged["a"]["b"], 1);
        let merged = deep_merge(&json!({"a": {"b": 1}}), &json!({"a": null}));
        assert_eq!(merged, json!({"a": {"b": 1}}));
    }

    #[test]
    fn override_wins_and_siblings_survive() {
        let merged = deep_merge(&json!({"a": {"b": 1, "c": 2}}), &json!({"a": {"b": 9}}));
        assert_eq!(merged, json!({"a": {"b": 9, "c": 2}}));
    }

    #[test]
    fn arrays_are_replaced_not_merged() {
        let merged = deep_merge(&json!({"xs": [1, 2, 3]}), &json!({"xs": [9]}));
        assert_eq!(merged, json!({"xs": [9]}));
    }

    #[test]
    fn object_replaces_scalar() {
        let merged = deep_merge(&json!({"a": 1}), &json!({"a": {"b": 2, "c": null}}));
        assert_eq!(merged, json!({"a": {"b": 2}}));
    }

    #[test]
    fn new_keys_are_added() {
        let merged = deep_merge(&json!({"a": 1}), &json!({"b": {"c": true}}));
        assert_eq!(merged, json!({"a": 1, "b": {"c": true}}));
    }

    #[test]
    fn inputs_are_untouched() {
        let base = json!({"a": {"b": 1}});
        let ov = json!({"a": {"b": 2}});
        let _ = deep_merge(&base, &ov);
        assert_eq!(base, json!({"a": {"b": 1}}));
        assert_eq!(ov, json!({"a": {"b": 2}}));
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Inner {
        primary: String,
        edit_window: u64,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Outer {
        id: String,
        inner: Inner,
        tags: Vec<String>,
    }

    fn sample() -> Outer {
        Outer {
            id: "x".into(),
            inner: Inner {
                primary: "#000000".into(),
                edit_window: 900_000,
            },
            tags: vec!["a".into(), "b".into()],
        }
    }

    #[test]
    fn typed_merge_applies_partial() {
        let out = merge_overrides(&sample(), &json!({"inner": {"editWindow": 0}})).unwrap();
        assert_eq!(out.inner.edit_window, 0);
        assert_eq!(out.inner.primary, "#000000");
        assert_eq!(out.tags, vec!["a", "b"]);
    }

    #[test]
    fn typed_merge_empty_is_identity() {
        assert_eq!(merge_overrides(&sample(), &json!({})).unwrap(), sample());
        assert_eq!(merge_overrides(&sample(), &Value::Null).unwrap(), sample());
    }

    #[test]
    fn typed_merge_rejects_wrong_leaf_type() {
        let err = merge_overrides(&sample(), &json!({"inner": {"editWindow": "soon"}}));
        assert!(matches!(err, Err(NchatError::Override(_))));
        let err = merge_overrides(&sample(), &json!({"inner": {"editWindow": -5}}));
        assert!(matches!(err, Err(NchatError::Override(_))));
    }

    #[test]
    fn typed_merge_rejects_non_object() {
        let err = merge_overrides(&sample(), &json!([1, 2]));
        assert!(matches!(err, Err(NchatError::Override(_))));
    }

    #[test]
    fn toml_tables_become_overrides() {
        let ov = parse_toml_override(
            r##"
[inner]
primary = "#FFFFFF"
"##,
        )
        .unwrap();
        let out = merge_overrides(&sample(), &ov).unwrap();
        assert_eq!(out.inner.primary, "#FFFFFF");
    }

    #[test]
    fn malformed_toml_override_is_a_parse_error() {
        let err = parse_toml_override("[inner\nprimary = 1").unwrap_err();
        assert!(matches!(err, NchatError::TomlParse(_)));
    }

    #[test]
    fn empty_override_detection() {
        assert!(is_empty_override(&json!({})));
        assert!(is_empty_override(&json!({"a": {"b": null}})));
        assert!(!is_empty_override(&json!({"a": {"b": 0}})));
        assert!(!is_empty_override(&json!([])));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn leaf() -> impl Strategy<Value = Value> {
            prop_oneof![
                any::<bool>().prop_map(Value::from),
                any::<i32>().prop_map(Value::from),
                "[a-z]{0,6}".prop_map(Value::from),
            ]
        }

        fn tree() -> impl Strategy<Value = Value> {
            leaf().prop_recursive(3, 24, 4, |inner| {
                prop_oneof![
                    proptest::collection::vec(inner.clone(), 0..3).prop_map(Value::from),
                    proptest::collection::btree_map("[a-d]", inner, 0..4)
                        .prop_map(|m| Value::Object(m.into_iter().collect())),
                ]
            })
        }

        proptest! {
            #[test]
            fn merge_identity_empty(x in tree()) {
                prop_assume!(x.is_object());
                prop_assert_eq!(deep_merge(&x, &json!({})), x.clone());
            }

            #[test]
            fn merge_identity_self(x in tree()) {
                prop_assert_eq!(deep_merge(&x, &x), x.clone());
            }

            #[test]
            fn merge_is_idempotent(x in tree(), y in tree()) {
                let once = deep_merge(&x, &y);
                prop_assert_eq!(deep_merge(&once, &y), once.clone());
            }
        }
    }
}
