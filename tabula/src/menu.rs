//! Row-action and header-action menu descriptors.
//!
//! Menus are derived from table state on request. An item that cannot act
//! right now stays in the menu with `enabled: false`; items whose feature is
//! switched off are left out entirely.

use std::fmt;

use crate::sort::SortAction;

/// Action offered by a row's kebab menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Pin the row (or unpin it if already pinned).
    TogglePin,
    MoveUp,
    MoveDown,
}

/// Action offered by a data column's header menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    MoveLeft,
    MoveRight,
    Sort(SortAction),
}

/// One entry in a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem<A> {
    pub action: A,
    pub label: String,
    pub enabled: bool,
}

impl<A> MenuItem<A> {
    pub fn new(action: A, label: impl Into<String>, enabled: bool) -> Self {
        Self {
            action,
            label: label.into(),
            enabled,
        }
    }
}

/// A contextual menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<A> {
    pub items: Vec<MenuItem<A>>,
    /// Whether the trigger is always shown rather than only on hover.
    pub persistent: bool,
}

impl<A: Copy + PartialEq> Menu<A> {
    /// Find the item for an action.
    pub fn item(&self, action: A) -> Option<&MenuItem<A>> {
        self.items.iter().find(|item| item.action == action)
    }

    /// Whether the action is present and enabled.
    pub fn is_enabled(&self, action: A) -> bool {
        self.item(action).is_some_and(|item| item.enabled)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Menu of a single row.
pub type RowMenu = Menu<RowAction>;

/// Menu of a data column header.
pub type HeaderMenu = Menu<HeaderAction>;

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RowAction::TogglePin => "Pin",
            RowAction::MoveUp => "Move Up",
            RowAction::MoveDown => "Move Down",
        };
        f.write_str(label)
    }
}

impl fmt::Display for HeaderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HeaderAction::MoveLeft => "Move Left",
            HeaderAction::MoveRight => "Move Right",
            HeaderAction::Sort(SortAction::Ascending) => "Sort Ascending",
            HeaderAction::Sort(SortAction::Descending) => "Sort Descending",
            HeaderAction::Sort(SortAction::Clear) => "Clear Sort",
        };
        f.write_str(label)
    }
}
