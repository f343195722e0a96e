//! # Catalog Session
//!
//! Holds the enriched baseline (joined once) together with the view state.
//! The visible list is recomputed from the baseline on every render.

use super::view_state::{ViewAction, ViewState};
use crate::fixtures::FixtureStore;
use crate::models::{EnrichedProduct, User};
use crate::view::CatalogView;

/// One browsing session over a fixture store
pub struct CatalogSession<'a> {
    store: &'a FixtureStore,
    baseline: Vec<EnrichedProduct>,
    state: ViewState,
}

impl<'a> CatalogSession<'a> {
    pub fn new(store: &'a FixtureStore) -> Self {
        Self::with_state(store, ViewState::default())
    }

    /// Start from a pre-filled state (one-shot listings)
    pub fn with_state(store: &'a FixtureStore, state: ViewState) -> Self {
        let baseline = store.enriched();
        tracing::debug!(products = baseline.len(), "Built enriched baseline");
        Self {
            store,
            baseline,
            state,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn baseline(&self) -> &[EnrichedProduct] {
        &self.baseline
    }

    pub fn users(&self) -> &[User] {
        &self.store.users
    }

    pub fn store(&self) -> &FixtureStore {
        self.store
    }

    /// Products passing the current filters, in baseline order
    pub fn visible(&self) -> Vec<&EnrichedProduct> {
        self.state.filter().apply(&self.baseline)
    }

    /// Apply a transition and return the re-rendered view
    pub fn dispatch(&mut self, action: ViewAction) -> CatalogView {
        tracing::debug!(?action, "Dispatching view action");
        self.state.apply(action);
        self.view()
    }

    pub fn view(&self) -> CatalogView {
        CatalogView::build(self)
    }
}
