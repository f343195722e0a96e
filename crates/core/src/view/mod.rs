//! # Catalog View
//!
//! Presentation model for one render of the catalog page, independent of the
//! output medium. Renderers:
//!
//! - `text` - terminal panel and aligned table
//! - `html` - static page with the Bulma markup and `data-cy` hooks
//!
//! JSON output is the serde form of [`CatalogView`].

pub mod html;
pub mod text;

pub use html::render_html;
pub use text::{render_text, TextOptions};

use crate::models::{EnrichedProduct, Sex};
use crate::state::CatalogSession;
use serde::Serialize;

pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";
pub const PAGE_TITLE: &str = "Product Categories";

/// Visual tone of the user column
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserTone {
    Male,
    Female,
    None,
}

impl UserTone {
    pub fn from_sex(sex: Option<Sex>) -> Self {
        match sex {
            Some(Sex::Male) => UserTone::Male,
            Some(Sex::Female) => UserTone::Female,
            None => UserTone::None,
        }
    }

    /// Bulma class used by the page
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            UserTone::Male => Some("has-text-link"),
            UserTone::Female => Some("has-text-danger"),
            UserTone::None => None,
        }
    }
}

/// One entry of the user selector. `name` is empty for "All".
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserTab {
    pub label: String,
    pub name: String,
    pub active: bool,
}

/// Category button. Present for layout only; it filters nothing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryButton {
    pub id: u32,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchBox {
    pub value: String,
    pub clear_button: bool,
}

/// Table column header with its (unwired) sort glyph
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub sort_icon: &'static str,
}

pub const COLUMNS: [Column; 4] = [
    Column {
        title: "ID",
        sort_icon: "fa-sort",
    },
    Column {
        title: "Product",
        sort_icon: "fa-sort-down",
    },
    Column {
        title: "Category",
        sort_icon: "fa-sort-up",
    },
    Column {
        title: "User",
        sort_icon: "fa-sort",
    },
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProductRow {
    pub id: u32,
    pub name: String,
    pub category_label: String,
    /// Empty when the owner could not be resolved
    pub user_name: String,
    pub user_tone: UserTone,
}

impl From<&EnrichedProduct> for ProductRow {
    fn from(product: &EnrichedProduct) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category_label: product.category_label(),
            user_name: product.user_name().unwrap_or_default().to_string(),
            user_tone: UserTone::from_sex(product.user.as_ref().map(|u| u.sex)),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum TableBody {
    Rows(Vec<ProductRow>),
    NoMatches,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogView {
    pub title: &'static str,
    pub user_tabs: Vec<UserTab>,
    pub search: SearchBox,
    pub categories: Vec<CategoryButton>,
    pub columns: [Column; 4],
    pub body: TableBody,
}

impl CatalogView {
    pub fn build(session: &CatalogSession<'_>) -> Self {
        let state = session.state();

        let mut user_tabs = vec![UserTab {
            label: "All".to_string(),
            name: String::new(),
            active: state.all_users_selected(),
        }];
        user_tabs.extend(session.users().iter().map(|user| UserTab {
            label: user.name.clone(),
            name: user.name.clone(),
            active: state.is_user_selected(&user.name),
        }));

        let categories = session
            .store()
            .categories
            .iter()
            .map(|c| CategoryButton {
                id: c.id,
                title: c.title.clone(),
            })
            .collect();

        let rows: Vec<ProductRow> = session
            .visible()
            .into_iter()
            .map(ProductRow::from)
            .collect();
        let body = if rows.is_empty() {
            TableBody::NoMatches
        } else {
            TableBody::Rows(rows)
        };

        Self {
            title: PAGE_TITLE,
            user_tabs,
            search: SearchBox {
                value: state.query.clone(),
                clear_button: state.clear_button_visible(),
            },
            categories,
            columns: COLUMNS,
            body,
        }
    }

    pub fn rows(&self) -> &[ProductRow] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::NoMatches => &[],
        }
    }
}
