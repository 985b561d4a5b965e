//! Deep merge over JSON configuration trees
//!
//! Nested objects merge field by field; scalars, arrays and nulls from the
//! source replace whatever the target held. Neither input is modified.

use serde_json::{Map, Value};

/// Merge `source` onto `target`, returning a new tree.
///
/// If either side is not composite (an object or array) the target is
/// returned unchanged. Otherwise every entry of the source is assigned onto
/// a copy of the target: array elements under their index, object fields
/// under their key. Plain objects on both sides of an entry recurse.
pub fn deep_merge(target: &Value, source: &Value) -> Value {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            Value::Object(assign_fields(target_map, source_map.iter().map(|(key, value)| (key.clone(), value))))
        }
        (Value::Object(target_map), Value::Array(source_items)) => Value::Object(assign_fields(
            target_map,
            source_items.iter().enumerate().map(|(index, value)| (index.to_string(), value)),
        )),
        (Value::Array(target_items), Value::Array(source_items)) => {
            Value::Array(assign_elements(target_items, source_items.iter().enumerate()))
        }
        // Only index-shaped keys land in an array; other names have nowhere to go
        (Value::Array(target_items), Value::Object(source_map)) => Value::Array(assign_elements(
            target_items,
            source_map.iter().filter_map(|(key, value)| array_index(key).map(|index| (index, value))),
        )),
        _ => target.clone(),
    }
}

/// Whether the value is a plain (non-array, non-null) object
pub fn is_plain_object(value: &Value) -> bool {
    value.is_object()
}

fn merged_entry(existing: Option<&Value>, source_value: &Value) -> Value {
    match existing {
        Some(target_value) if is_plain_object(source_value) && is_plain_object(target_value) => {
            deep_merge(target_value, source_value)
        }
        _ => source_value.clone(),
    }
}

fn assign_fields<'a>(
    target: &Map<String, Value>,
    entries: impl Iterator<Item = (String, &'a Value)>,
) -> Map<String, Value> {
    let mut merged = target.clone();

    for (key, source_value) in entries {
        let replacement = merged_entry(merged.get(&key), source_value);
        merged.insert(key, replacement);
    }

    merged
}

/// Indices past the end extend the array, padding any gap with nulls
fn assign_elements<'a>(target: &[Value], entries: impl Iterator<Item = (usize, &'a Value)>) -> Vec<Value> {
    let mut merged = target.to_vec();

    for (index, source_value) in entries {
        let replacement = merged_entry(merged.get(index), source_value);
        if index >= merged.len() {
            merged.resize(index + 1, Value::Null);
        }
        merged[index] = replacement;
    }

    merged
}

/// Canonical decimal index below 2^32 - 1: `"0"`, `"7"`, `"12"`, but not `"07"` or `"+1"`
fn array_index(key: &str) -> Option<usize> {
    let canonical = key == "0" || (!key.starts_with('0') && !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()));
    if !canonical {
        return None;
    }
    key.parse::<u32>().ok().filter(|index| *index < u32::MAX).map(|index| index as usize)
}
