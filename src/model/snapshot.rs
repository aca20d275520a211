// File: ./src/model/snapshot.rs
//! Snapshot (de)serialization.
//!
//! The snapshot is a JSON array of `{id, text, completed}` objects in display
//! order. Decoding is deliberately forgiving: anything that can be turned into
//! a valid item is kept, anything else is skipped with a log line, and only a
//! value that is not an array at all fails as a whole.
use super::item::{IdGenerator, Item, ItemId};
use anyhow::{Result, bail};
use serde_json::Value;
use std::collections::HashSet;

pub fn encode(items: &[Item]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

/// JavaScript-style truthiness, so snapshots written by looser tools
/// (`"completed": 1`, `"completed": "yes"`) still load.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn raw_id(value: Option<&Value>) -> Option<ItemId> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(ItemId::new(s.trim())),
        Value::Number(n) => Some(ItemId::new(n.to_string())),
        _ => None,
    }
}

/// Decodes a snapshot into items, repairing ids through `ids`.
///
/// Missing or duplicated ids are replaced by fresh ones from `ids`, which is
/// first advanced past every numeric id in the snapshot.
pub fn decode(raw: &str, ids: &mut IdGenerator) -> Result<Vec<Item>> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(entries) = value else {
        bail!("snapshot is not an array");
    };

    let mut taken = HashSet::new();
    for entry in &entries {
        if let Some(id) = raw_id(entry.get("id")) {
            ids.observe(&id);
            taken.insert(id);
        }
    }

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(entries.len());

    for (idx, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            log::warn!("Skipping snapshot entry {}: not an object", idx);
            continue;
        }

        let text = match entry.get("text").and_then(Value::as_str).map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => {
                log::warn!("Skipping snapshot entry {}: missing or blank text", idx);
                continue;
            }
        };

        let id = match raw_id(entry.get("id")) {
            Some(id) if !seen.contains(&id) => id,
            other => {
                let mut fresh = ids.next_id();
                while taken.contains(&fresh) {
                    fresh = ids.next_id();
                }
                taken.insert(fresh.clone());
                log::warn!(
                    "Snapshot entry {} has {} id; assigned {}",
                    idx,
                    if other.is_some() { "a duplicate" } else { "no usable" },
                    fresh
                );
                fresh
            }
        };
        seen.insert(id.clone());

        items.push(Item {
            id,
            text,
            completed: truthy(entry.get("completed")),
            editing: false,
        });
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_coercion() {
        let raw = r#"[
            {"id": "1", "text": "a", "completed": true},
            {"id": "2", "text": "b"},
            {"id": "3", "text": "c", "completed": 1},
            {"id": "4", "text": "d", "completed": 0},
            {"id": "5", "text": "e", "completed": "yes"},
            {"id": "6", "text": "f", "completed": ""},
            {"id": "7", "text": "g", "completed": null}
        ]"#;
        let items = decode(raw, &mut IdGenerator::new()).unwrap();
        let flags: Vec<bool> = items.iter().map(|i| i.completed).collect();
        assert_eq!(flags, vec![true, false, true, false, true, false, false]);
    }

    #[test]
    fn test_non_array_is_an_error() {
        assert!(decode(r#"{"id": "1"}"#, &mut IdGenerator::new()).is_err());
        assert!(decode("not json", &mut IdGenerator::new()).is_err());
        assert!(decode("null", &mut IdGenerator::new()).is_err());
    }

    #[test]
    fn test_duplicate_and_missing_ids_are_reassigned() {
        let raw = r#"[
            {"id": "100", "text": "first"},
            {"id": "100", "text": "second"},
            {"text": "third"},
            {"id": 42, "text": "numeric"}
        ]"#;
        let mut ids = IdGenerator::new();
        let items = decode(raw, &mut ids).unwrap();

        assert_eq!(items.len(), 4);
        assert_eq!(items[0].id, "100");
        assert_eq!(items[3].id, "42");

        let unique: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(unique.len(), 4);
        // Replacement ids sort after everything that was loaded.
        assert!(items[1].id.as_millis().unwrap() > 100);
        assert!(items[2].id.as_millis().unwrap() > 100);
    }

    #[test]
    fn test_duplicates_at_max_id_are_reassigned() {
        let max = i64::MAX.to_string();
        let raw = format!(
            r#"[{{"id":"{max}","text":"a"}},{{"id":"{max}","text":"b"}},{{"id":"{max}","text":"c"}}]"#
        );
        let items = decode(&raw, &mut IdGenerator::new()).unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id.as_str(), max);
        let unique: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_blank_and_malformed_entries_are_skipped() {
        let raw = r#"[
            {"id": "1", "text": "   "},
            "stray string",
            {"id": "2"},
            {"id": "3", "text": "  keep me  ", "editing": true, "extra": 5}
        ]"#;
        let items = decode(raw, &mut IdGenerator::new()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "keep me");
        assert!(!items[0].editing);
    }
}
