// File: src/controller.rs
//! Central logic controller for list operations.
//! Every front end (TUI, CLI, HTML) sends its actions through here so that
//! each accepted mutation is persisted by the repository and followed by a
//! full re-render with fresh stats.
use crate::action::{ActionId, UserAction};
use crate::repository::{ItemRepository, Outcome};
use crate::stats::Stats;
use crate::storage::SnapshotStore;
use crate::view::Renderer;

pub struct ListController<R: Renderer> {
    repo: ItemRepository,
    renderer: R,
}

impl<R: Renderer> ListController<R> {
    /// Loads the saved list from `storage` and draws it once.
    pub fn new(storage: SnapshotStore, renderer: R) -> Self {
        Self::with_repository(ItemRepository::open(storage), renderer)
    }

    pub fn with_repository(repo: ItemRepository, renderer: R) -> Self {
        let mut controller = Self { repo, renderer };
        controller.render();
        controller
    }

    pub fn repository(&self) -> &ItemRepository {
        &self.repo
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn stats(&self) -> Stats {
        self.repo.stats()
    }

    pub fn render(&mut self) {
        let stats = self.repo.stats();
        self.renderer.render(self.repo.items(), &stats);
    }

    /// Runs one user action; re-renders when the state changed.
    pub fn dispatch(&mut self, action: UserAction) -> Outcome {
        log::debug!("Dispatching {:?}", action);
        let outcome = match &action {
            UserAction::Submit(text) => self.repo.create(text),
            UserAction::Toggle(id) => self.repo.toggle(id),
            UserAction::BeginEdit(id) => self.repo.begin_edit(id),
            UserAction::CommitEdit(id, text) => self.repo.commit_edit(id, text),
        };
        if outcome.is_applied() {
            self.render();
        }
        outcome
    }

    /// Entry point for views that address gestures by action name and row id.
    pub fn dispatch_addressed(
        &mut self,
        action: ActionId,
        item_id: &str,
        text: Option<&str>,
    ) -> Outcome {
        match action.resolve(item_id, text) {
            Some(action) => self.dispatch(action),
            None => {
                log::debug!("Ignoring '{}' on {}", action, item_id);
                Outcome::Ignored
            }
        }
    }
}
