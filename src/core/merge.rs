//! Purpose: Deep-merge one JSON value tree into another in place.
//! Exports: `merge`, `merge_maps`, `merged`, `merge_all`.
//! Role: Overlay helper behind `Document::merge_from` and `jsontree merge`.
//! Invariants: Object vs object merges key-wise; any other collision is replaced by source.
//! Invariants: Keys present only in the target are never removed.
//! Invariants: Inserted values are deep copies; target never shares structure with source.
//! Notes: A non-object at either top level is a whole-value override, same as a key collision.
use serde_json::{Map, Value};

pub fn merge(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            merge_maps(target_map, source_map);
        }
        (target, source) => *target = source.clone(),
    }
}

pub fn merge_maps(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, incoming) in source {
        match target.get_mut(key) {
            Some(existing) if !existing.is_null() => merge(existing, incoming),
            // Null reads the same as absent.
            Some(existing) => *existing = incoming.clone(),
            None => {
                target.insert(key.clone(), incoming.clone());
            }
        }
    }
}

pub fn merged(target: &Value, source: &Value) -> Value {
    let mut out = target.clone();
    merge(&mut out, source);
    out
}

pub fn merge_all<'a, I>(target: &mut Value, sources: I)
where
    I: IntoIterator<Item = &'a Value>,
{
    for source in sources {
        merge(target, source);
    }
}
