use serde::Serialize;

use crate::domain::types::{CategoryId, CategoryName};
use crate::domain::upload::ImageUpload;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Payload for `POST /categories/admin/categories`.
#[derive(Clone, Debug)]
pub struct NewCategory {
    pub name: CategoryName,
    pub description: Option<String>,
    pub image: ImageUpload,
}
