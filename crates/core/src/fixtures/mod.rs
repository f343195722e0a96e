//! # Fixture Store
//!
//! The three read-only collections (users, categories, products) the catalog
//! is built from. The bundled set is compiled in with `include_str!` and
//! parsed once per process; a directory with the same three files can be
//! loaded instead when the config points at one.

use crate::error::{CatalogError, Result};
use crate::join::enrich_products;
use crate::models::{Category, EnrichedProduct, Product, User};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

const BUNDLED_USERS: &str = include_str!("data/users.json");
const BUNDLED_CATEGORIES: &str = include_str!("data/categories.json");
const BUNDLED_PRODUCTS: &str = include_str!("data/products.json");

static BUNDLED: OnceLock<FixtureStore> = OnceLock::new();

/// A foreign key with no matching record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DanglingReference {
    /// `product.category_id` matches no category
    ProductCategory { product_id: u32, category_id: u32 },
    /// `category.owner_id` matches no user
    CategoryOwner { category_id: u32, owner_id: u32 },
}

impl std::fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProductCategory {
                product_id,
                category_id,
            } => write!(
                f,
                "product {} references missing category {}",
                product_id, category_id
            ),
            Self::CategoryOwner {
                category_id,
                owner_id,
            } => write!(
                f,
                "category {} references missing owner {}",
                category_id, owner_id
            ),
        }
    }
}

/// Immutable users/categories/products collections
#[derive(Debug, Clone, Default)]
pub struct FixtureStore {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl FixtureStore {
    /// The compiled-in fixtures, parsed on first use and shared afterwards
    pub fn bundled() -> Result<&'static FixtureStore> {
        if let Some(store) = BUNDLED.get() {
            return Ok(store);
        }

        let store = Self::from_json(BUNDLED_USERS, BUNDLED_CATEGORIES, BUNDLED_PRODUCTS)?;
        Ok(BUNDLED.get_or_init(|| store))
    }

    /// Parse and validate the three collections from JSON text
    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self> {
        let store = Self {
            users: parse(USERS_FILE, users)?,
            categories: parse(CATEGORIES_FILE, categories)?,
            products: parse(PRODUCTS_FILE, products)?,
        };
        store.validate()?;

        tracing::info!(
            users = store.users.len(),
            categories = store.categories.len(),
            products = store.products.len(),
            "Loaded catalog fixtures"
        );
        for dangling in store.dangling_references() {
            tracing::warn!("Dangling reference: {}", dangling);
        }

        Ok(store)
    }

    /// Load `users.json`, `categories.json` and `products.json` from a directory
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| CatalogError::Io { path, source })
        };

        Self::from_json(
            &read(USERS_FILE)?,
            &read(CATEGORIES_FILE)?,
            &read(PRODUCTS_FILE)?,
        )
    }

    /// Ids must be unique within each collection
    pub fn validate(&self) -> Result<()> {
        ensure_unique("user", self.users.iter().map(|u| u.id))?;
        ensure_unique("category", self.categories.iter().map(|c| c.id))?;
        ensure_unique("product", self.products.iter().map(|p| p.id))?;
        Ok(())
    }

    /// Foreign keys that resolve to nothing. These are tolerated, not errors.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();

        for product in &self.products {
            if self.category_by_id(product.category_id).is_none() {
                dangling.push(DanglingReference::ProductCategory {
                    product_id: product.id,
                    category_id: product.category_id,
                });
            }
        }

        for category in &self.categories {
            if self.user_by_id(category.owner_id).is_none() {
                dangling.push(DanglingReference::CategoryOwner {
                    category_id: category.id,
                    owner_id: category.owner_id,
                });
            }
        }

        dangling
    }

    pub fn user_by_id(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn category_by_id(&self, id: u32) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Exact, case-sensitive name match
    pub fn user_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name == name)
    }

    /// Run the join engine over this store
    pub fn enriched(&self) -> Vec<EnrichedProduct> {
        enrich_products(&self.users, &self.categories, &self.products)
    }
}

fn parse<T: DeserializeOwned>(file: &str, text: &str) -> Result<Vec<T>> {
    serde_json::from_str(text).map_err(|source| CatalogError::Parse {
        file: file.to_string(),
        source,
    })
}

fn ensure_unique(collection: &'static str, ids: impl Iterator<Item = u32>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { collection, id });
        }
    }
    Ok(())
}
