//! # Filter Engine
//!
//! Selects the visible subset of the enriched baseline: an exact user-name
//! match AND a case-insensitive substring match on the product name.
//! Relative order is preserved.

use crate::models::EnrichedProduct;
use serde::{Deserialize, Serialize};

/// Both filter predicates. Empty strings disable the respective predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Exact, case-sensitive owner name; empty means "all users"
    pub user_name: String,
    /// Substring of the product name, compared lower-cased
    pub query: String,
}

impl ProductFilter {
    pub fn new(user_name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            query: query.into(),
        }
    }

    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        self.matches_user(product) && self.matches_query(&self.query.to_lowercase(), product)
    }

    /// Apply to a list, lower-casing the query once
    pub fn apply<'a>(&self, products: &'a [EnrichedProduct]) -> Vec<&'a EnrichedProduct> {
        let query = self.query.to_lowercase();
        products
            .iter()
            .filter(|p| self.matches_user(p) && self.matches_query(&query, p))
            .collect()
    }

    fn matches_user(&self, product: &EnrichedProduct) -> bool {
        // An absent user never matches a non-empty filter
        self.user_name.is_empty() || product.user_name() == Some(self.user_name.as_str())
    }

    fn matches_query(&self, lowered_query: &str, product: &EnrichedProduct) -> bool {
        product.name.to_lowercase().contains(lowered_query)
    }
}

/// Filter `products` by owner name and free-text query
pub fn filter_products<'a>(
    products: &'a [EnrichedProduct],
    selected_user_name: &str,
    query: &str,
) -> Vec<&'a EnrichedProduct> {
    ProductFilter::new(selected_user_name, query).apply(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureStore;
    use crate::join::enrich_products;
    use crate::models::{Category, Product, Sex, User};

    fn scenario() -> Vec<EnrichedProduct> {
        let users = vec![User {
            id: 1,
            name: "Max".to_string(),
            sex: Sex::Male,
        }];
        let categories = vec![Category {
            id: 10,
            title: "Fruits".to_string(),
            icon: "🍎".to_string(),
            owner_id: 1,
        }];
        let products = vec![
            Product {
                id: 1,
                name: "Apple".to_string(),
                category_id: 10,
            },
            Product {
                id: 2,
                name: "Banana".to_string(),
                category_id: 99,
            },
        ];
        enrich_products(&users, &categories, &products)
    }

    fn ids(products: &[&EnrichedProduct]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let list = FixtureStore::bundled().unwrap().enriched();
        let filtered = filter_products(&list, "", "");
        assert_eq!(filtered.len(), list.len());
        assert!(filtered.iter().zip(list.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let list = scenario();
        assert_eq!(ids(&filter_products(&list, "", "ap")), vec![1]);
        assert_eq!(ids(&filter_products(&list, "", "AP")), vec![1]);
        assert_eq!(ids(&filter_products(&list, "", "nan")), vec![2]);
        assert!(filter_products(&list, "", "zzz").is_empty());
    }

    #[test]
    fn test_user_filter_excludes_absent_user() {
        let list = scenario();
        assert_eq!(ids(&filter_products(&list, "Max", "")), vec![1]);
        assert!(filter_products(&list, "Max", "banana").is_empty());
    }

    #[test]
    fn test_user_filter_is_case_sensitive() {
        let list = scenario();
        assert!(filter_products(&list, "max", "").is_empty());
    }

    #[test]
    fn test_user_filter_over_bundled_fixtures() {
        let store = FixtureStore::bundled().unwrap();
        let list = store.enriched();
        for user in &store.users {
            let filtered = filter_products(&list, &user.name, "");
            let expected: Vec<u32> = list
                .iter()
                .filter(|p| p.user_name() == Some(user.name.as_str()))
                .map(|p| p.id)
                .collect();
            assert_eq!(ids(&filtered), expected);
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let list = FixtureStore::bundled().unwrap().enriched();
        let filter = ProductFilter::new("Anna", "e");
        let once: Vec<EnrichedProduct> = filter.apply(&list).into_iter().cloned().collect();
        let twice: Vec<EnrichedProduct> = filter.apply(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_matches_agrees_with_apply() {
        let list = scenario();
        let filter = ProductFilter::new("", "APP");
        assert!(filter.matches(&list[0]));
        assert!(!filter.matches(&list[1]));
    }
}
