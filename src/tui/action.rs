// Defines what a key press can ask of the TUI loop.
use crate::action::UserAction;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Forward to the list controller.
    List(UserAction),
    Quit,
}
