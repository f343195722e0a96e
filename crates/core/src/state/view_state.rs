//! # View State
//!
//! The two pieces of mutable UI state (search query, selected user) and the
//! transitions that change them. Every transition is synchronous.

use crate::filter::ProductFilter;
use serde::{Deserialize, Serialize};

/// Interaction events emitted by the view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ViewAction {
    /// "All" user tab
    SelectAllUsers,
    /// A named user tab
    SelectUser(String),
    /// Search field changed (one event per keystroke)
    SetQuery(String),
    /// The × button inside the search field
    ClearQuery,
    /// "Reset all filters"; clears the query only, the user tab is kept
    ResetAll,
}

/// Filter state owned by the view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub query: String,
    /// Empty means the "All" tab
    pub selected_user_name: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one transition
    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::SelectAllUsers => self.selected_user_name.clear(),
            ViewAction::SelectUser(name) => self.selected_user_name = name,
            ViewAction::SetQuery(query) => self.query = query,
            ViewAction::ClearQuery => self.query.clear(),
            ViewAction::ResetAll => {
                self.query.clear();
                if !self.selected_user_name.is_empty() {
                    tracing::debug!(
                        user = %self.selected_user_name,
                        "Reset keeps the selected user tab"
                    );
                }
            }
        }
    }

    /// The × button is rendered only while there is something to clear
    pub fn clear_button_visible(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn all_users_selected(&self) -> bool {
        self.selected_user_name.is_empty()
    }

    pub fn is_user_selected(&self, name: &str) -> bool {
        !self.selected_user_name.is_empty() && self.selected_user_name == name
    }

    pub fn filter(&self) -> ProductFilter {
        ProductFilter::new(self.selected_user_name.clone(), self.query.clone())
    }
}
