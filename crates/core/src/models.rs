//! # Catalog Models
//!
//! Fixture records and the denormalized product view built from them.
//! Field names follow the camelCase layout of the fixture JSON.

use serde::{Deserialize, Serialize};

/// Sex of a user, used only to pick a display tone
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}

/// A catalog user (category owner)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
}

/// A product category, owned by a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub title: String,
    /// Glyph shown in front of the title (usually an emoji)
    pub icon: String,
    /// May reference a user that does not exist
    pub owner_id: u32,
}

/// A product as stored in the fixtures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// May reference a category that does not exist
    pub category_id: u32,
}

/// A product with its category and owning user resolved.
///
/// `category` is `None` for a dangling `category_id`; `user` is `None` when
/// either the category is missing or its `owner_id` is dangling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
    pub category: Option<Category>,
    pub user: Option<User>,
}

impl EnrichedProduct {
    /// `"<icon> - <title>"`, with both sides empty when the category is absent
    pub fn category_label(&self) -> String {
        match &self.category {
            Some(category) => format!("{} - {}", category.icon, category.title),
            None => " - ".to_string(),
        }
    }

    /// Name of the owning user, if resolved
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_field_names() {
        let category: Category =
            serde_json::from_str(r#"{"id":10,"title":"Fruits","icon":"🍎","ownerId":1}"#)
                .unwrap();
        assert_eq!(category.owner_id, 1);

        let product: Product =
            serde_json::from_str(r#"{"id":1,"name":"Apple","categoryId":10}"#).unwrap();
        assert_eq!(product.category_id, 10);

        let user: User = serde_json::from_str(r#"{"id":1,"name":"Anna","sex":"f"}"#).unwrap();
        assert_eq!(user.sex, Sex::Female);
    }

    #[test]
    fn test_unknown_sex_is_rejected() {
        let result = serde_json::from_str::<User>(r#"{"id":1,"name":"X","sex":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_category_label() {
        let mut product = EnrichedProduct {
            id: 1,
            name: "Apple".to_string(),
            category_id: 10,
            category: Some(Category {
                id: 10,
                title: "Fruits".to_string(),
                icon: "🍎".to_string(),
                owner_id: 1,
            }),
            user: None,
        };
        assert_eq!(product.category_label(), "🍎 - Fruits");

        product.category = None;
        assert_eq!(product.category_label(), " - ");
        assert_eq!(product.user_name(), None);
    }
}
