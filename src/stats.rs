// File: ./src/stats.rs
//! Counts derived from the item collection.
use crate::model::Item;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub incomplete: usize,
}

impl Stats {
    pub fn from_items(items: &[Item]) -> Self {
        let completed = items.iter().filter(|i| i.completed).count();
        Self {
            total: items.len(),
            completed,
            incomplete: items.len() - completed,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "All: {}  Done: {}  Open: {}",
            self.total, self.completed, self.incomplete
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;

    fn item(id: &str, completed: bool) -> Item {
        let mut i = Item::new(ItemId::from(id), "x");
        i.completed = completed;
        i
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(Stats::from_items(&[]), Stats::default());
    }

    #[test]
    fn test_counts() {
        let items = vec![item("1", true), item("2", false), item("3", true)];
        let stats = Stats::from_items(&items);
        assert_eq!(
            stats,
            Stats {
                total: 3,
                completed: 2,
                incomplete: 1
            }
        );
        assert_eq!(stats.total, stats.completed + stats.incomplete);
        assert_eq!(stats.to_string(), "All: 3  Done: 2  Open: 1");
    }
}
