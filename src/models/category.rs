use serde::Deserialize;

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryId, CategoryName, TypeConstraintError};
use crate::models::wire::WireNumber;

/// Category as returned by `GET /categories/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: WireNumber,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "image", alias = "imageurl")]
    pub image_url: Option<String>,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(row: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(row.id.as_i32()?)?,
            name: CategoryName::new(row.name)?,
            description: row.description.filter(|d| !d.trim().is_empty()),
            image_url: row.image_url,
        })
    }
}

/// The list endpoint answers either a bare array or `{categories: [...]}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryList {
    Bare(Vec<Category>),
    Wrapped { categories: Vec<Category> },
}

impl CategoryList {
    pub fn into_rows(self) -> Vec<Category> {
        match self {
            CategoryList::Bare(rows) | CategoryList::Wrapped { categories: rows } => rows,
        }
    }
}
