// File: ./src/action.rs
// Inbound user gestures and the identifiers views use to address them.
use strum::{Display, EnumIter, EnumString};

/// Everything a front end may ask of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    Toggle(String),
    BeginEdit(String),
    CommitEdit(String, String),
}

/// Action names carried by rendered affordances (`data-action="toggle"`).
///
/// A view reports a gesture as an action id plus the id of the row it came
/// from and never touches the repository itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ActionId {
    Toggle,
    Edit,
    Save,
    Delete,
}

impl ActionId {
    /// Resolves an addressed gesture into a core action.
    ///
    /// `Delete` is rendered but has no core counterpart, so it resolves to
    /// `None`, as does `Save` without any submitted text.
    pub fn resolve(self, item_id: &str, text: Option<&str>) -> Option<UserAction> {
        let id = item_id.to_string();
        match self {
            ActionId::Toggle => Some(UserAction::Toggle(id)),
            ActionId::Edit => Some(UserAction::BeginEdit(id)),
            ActionId::Save => text.map(|t| UserAction::CommitEdit(id, t.to_string())),
            ActionId::Delete => None,
        }
    }
}
