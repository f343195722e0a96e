//! # Join Engine
//!
//! Resolves each product's category and the category's owner into an
//! [`EnrichedProduct`]. Missing references become `None`; the join never fails.

use crate::models::{Category, EnrichedProduct, Product, User};

/// Enrich `products` in input order.
///
/// The owner is only looked up when the category resolved.
pub fn enrich_products(
    users: &[User],
    categories: &[Category],
    products: &[Product],
) -> Vec<EnrichedProduct> {
    products
        .iter()
        .map(|product| {
            let category = categories
                .iter()
                .find(|c| c.id == product.category_id)
                .cloned();
            let user = category
                .as_ref()
                .and_then(|c| users.iter().find(|u| u.id == c.owner_id))
                .cloned();

            EnrichedProduct {
                id: product.id,
                name: product.name.clone(),
                category_id: product.category_id,
                category,
                user,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn max() -> User {
        User {
            id: 1,
            name: "Max".to_string(),
            sex: Sex::Male,
        }
    }

    fn fruits(owner_id: u32) -> Category {
        Category {
            id: 10,
            title: "Fruits".to_string(),
            icon: "🍎".to_string(),
            owner_id,
        }
    }

    fn product(id: u32, name: &str, category_id: u32) -> Product {
        Product {
            id,
            name: name.to_string(),
            category_id,
        }
    }

    #[test]
    fn test_resolves_category_and_owner() {
        let enriched = enrich_products(
            &[max()],
            &[fruits(1)],
            &[product(1, "Apple", 10), product(2, "Banana", 99)],
        );

        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].category, Some(fruits(1)));
        assert_eq!(enriched[0].user, Some(max()));

        assert_eq!(enriched[1].id, 2);
        assert!(enriched[1].category.is_none());
        assert!(enriched[1].user.is_none());
    }

    #[test]
    fn test_dangling_owner_leaves_user_absent() {
        let enriched = enrich_products(&[max()], &[fruits(42)], &[product(1, "Apple", 10)]);
        assert!(enriched[0].category.is_some());
        assert!(enriched[0].user.is_none());
    }

    #[test]
    fn test_no_user_lookup_without_category() {
        // A user whose id happens to equal the dangling category id must not leak in
        let user = User { id: 99, ..max() };
        let enriched = enrich_products(&[user], &[fruits(1)], &[product(2, "Banana", 99)]);
        assert!(enriched[0].user.is_none());
    }

    #[test]
    fn test_preserves_input_order() {
        let products = vec![
            product(3, "Cherry", 10),
            product(1, "Apple", 10),
            product(2, "Banana", 10),
        ];
        let ids: Vec<u32> = enrich_products(&[max()], &[fruits(1)], &products)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(enrich_products(&[], &[], &[]).is_empty());
        let enriched = enrich_products(&[], &[], &[product(1, "Apple", 10)]);
        assert!(enriched[0].category.is_none());
    }
}
