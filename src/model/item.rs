// File: ./src/model/item.rs
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque item identifier.
///
/// Ids are decimal millisecond timestamps handed out by [`IdGenerator`], so
/// they sort by creation time, but nothing outside the generator should rely
/// on their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, when it is one of ours (or a legacy timestamp).
    pub fn as_millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for ItemId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ItemId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Hands out strictly increasing ids.
///
/// Each id is `max(now_millis, last + 1)`: it tracks the wall clock while
/// creations are sparse and falls back to counting when several land in the
/// same millisecond, so uniqueness never depends on timing.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure every future id sorts after `id`.
    pub fn observe(&mut self, id: &ItemId) {
        if let Some(n) = id.as_millis() {
            self.last = self.last.max(n);
        }
    }

    pub fn next_id(&mut self) -> ItemId {
        self.next_at(Utc::now().timestamp_millis())
    }

    pub(crate) fn next_at(&mut self, now_millis: i64) -> ItemId {
        // A loaded id at i64::MAX leaves no numeric room; never hand it out twice.
        let Some(after_last) = self.last.checked_add(1) else {
            return ItemId(Uuid::new_v4().to_string());
        };
        let next = now_millis.max(after_last);
        self.last = next;
        ItemId(next.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// Edit mode is UI state; it is never written to the snapshot.
    #[serde(skip)]
    pub editing: bool,
}

impl Item {
    /// Builds a fresh, open item. `text` is expected to be trimmed already.
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            editing: false,
        }
    }

    pub fn checkbox_symbol(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_millisecond_ids_are_distinct_and_increasing() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(1_700_000_000_000);
        let b = ids.next_at(1_700_000_000_000);
        let c = ids.next_at(1_700_000_000_000);

        assert_eq!(a.as_str(), "1700000000000");
        assert_eq!(b.as_str(), "1700000000001");
        assert_eq!(c.as_str(), "1700000000002");
    }

    #[test]
    fn test_clock_going_backwards_still_increases() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(5_000);
        let b = ids.next_at(4_000);
        assert!(b.as_millis().unwrap() > a.as_millis().unwrap());
    }

    #[test]
    fn test_observe_seeds_past_loaded_ids() {
        let mut ids = IdGenerator::new();
        ids.observe(&ItemId::from("9000"));
        ids.observe(&ItemId::from("not-a-number"));
        assert_eq!(ids.next_at(100).as_str(), "9001");
    }

    #[test]
    fn test_exhausted_counter_still_yields_distinct_ids() {
        let mut ids = IdGenerator::new();
        let max = ItemId::new(i64::MAX.to_string());
        ids.observe(&max);

        let a = ids.next_at(100);
        let b = ids.next_at(100);
        assert_ne!(a, max);
        assert_ne!(b, max);
        assert_ne!(a, b);
    }

    #[test]
    fn test_editing_flag_is_not_serialized() {
        let mut item = Item::new(ItemId::from("1"), "buy milk");
        item.editing = true;
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"1","text":"buy milk","completed":false}"#);
    }
}
