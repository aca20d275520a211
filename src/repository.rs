// File: ./src/repository.rs
//! The item repository: sole owner of the ordered item collection.
//!
//! Every mutating operation keeps three invariants:
//! - ids are unique,
//! - at most one item is in edit mode,
//! - no item has blank text.
//!
//! Operations never fail. Unknown ids and blank input are ignored, and any
//! successful mutation is written straight to the [`SnapshotStore`].
use crate::model::snapshot;
use crate::model::{IdGenerator, Item};
use crate::stats::Stats;
use crate::storage::SnapshotStore;

/// What an operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed and was persisted; the view needs a re-render.
    Applied,
    /// Nothing happened (blank input or stale id).
    Ignored,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

#[derive(Debug)]
pub struct ItemRepository {
    items: Vec<Item>,
    ids: IdGenerator,
    storage: SnapshotStore,
}

impl ItemRepository {
    /// Empty repository writing to `storage`. Nothing is read; see [`Self::open`].
    pub fn new(storage: SnapshotStore) -> Self {
        Self {
            items: Vec::new(),
            ids: IdGenerator::new(),
            storage,
        }
    }

    /// Repository populated from whatever `storage` currently holds.
    pub fn open(storage: SnapshotStore) -> Self {
        let raw = storage.load_raw();
        let mut repo = Self::new(storage);
        if let Some(raw) = raw {
            repo.load(&raw);
        }
        repo
    }

    /// Replaces the collection with a decoded snapshot.
    ///
    /// A snapshot that cannot be decoded leaves the list empty; the failure is
    /// logged and otherwise ignored.
    pub fn load(&mut self, raw: &str) {
        match snapshot::decode(raw, &mut self.ids) {
            Ok(items) => {
                log::info!("Loaded {} items", items.len());
                self.items = items;
            }
            Err(e) => {
                log::warn!("Failed to load saved items, starting empty: {:#}", e);
                self.items.clear();
            }
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn editing_item(&self) -> Option<&Item> {
        self.items.iter().find(|i| i.editing)
    }

    pub fn stats(&self) -> Stats {
        Stats::from_items(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    fn persist(&mut self) {
        self.storage.save(&self.items);
    }

    /// Appends a new item; blank input is ignored.
    pub fn create(&mut self, raw_text: &str) -> Outcome {
        let text = raw_text.trim();
        if text.is_empty() {
            return Outcome::Ignored;
        }

        let mut id = self.ids.next_id();
        while self.get(id.as_str()).is_some() {
            id = self.ids.next_id();
        }
        log::debug!("Creating item {}", id);
        self.items.push(Item::new(id, text));
        self.persist();
        Outcome::Applied
    }

    pub fn toggle(&mut self, id: &str) -> Outcome {
        let Some(item) = self.get_mut(id) else {
            log::debug!("Toggle on unknown item {}", id);
            return Outcome::Ignored;
        };
        item.completed = !item.completed;
        self.persist();
        Outcome::Applied
    }

    /// Puts `id` in edit mode and every other item out of it.
    ///
    /// An unknown id simply leaves nothing in edit mode.
    pub fn begin_edit(&mut self, id: &str) -> Outcome {
        for item in &mut self.items {
            item.editing = item.id == id;
        }
        self.persist();
        Outcome::Applied
    }

    /// Leaves edit mode on `id`, replacing its text unless the new text is blank.
    pub fn commit_edit(&mut self, id: &str, new_raw_text: &str) -> Outcome {
        let Some(item) = self.get_mut(id) else {
            log::debug!("Commit on unknown item {}", id);
            return Outcome::Ignored;
        };
        let text = new_raw_text.trim();
        if !text.is_empty() {
            item.text = text.to_string();
        }
        item.editing = false;
        self.persist();
        Outcome::Applied
    }
}
