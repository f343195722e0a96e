//! # Catalog Core
//!
//! The "Brain" of the product catalog browser - fixtures, the join and filter
//! engines, and the view state that drives rendering.
//!
//! ## Architecture
//!
//! - `fixtures/` - Bundled users/categories/products, loaded once
//! - `join` - Resolves category and owner for every product
//! - `filter` - User and text predicates over the enriched list
//! - `state/` - View state machine and the browsing session
//! - `view/` - Presentation model plus text and HTML renderers
//! - `config` - `.catalog/config.json` and environment overrides
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_core::fixtures::FixtureStore;
//! use catalog_core::state::{CatalogSession, ViewAction};
//!
//! let store = FixtureStore::bundled()?;
//! let mut session = CatalogSession::new(store);
//! let view = session.dispatch(ViewAction::SetQuery("ap".into()));
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod join;
pub mod models;
pub mod state;
pub mod view;

pub use error::{CatalogError, Result};
