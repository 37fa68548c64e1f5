use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use validator::Validate;

use crate::domain::category::NewCategory;
use crate::domain::types::CategoryName;
use crate::forms::FormError;
use crate::forms::uploads::read_image;

#[derive(MultipartForm)]
/// Multipart payload of the add-category modal.
pub struct AddCategoryForm {
    pub name: Text<String>,
    pub description: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub image: Option<TempFile>,
}

#[derive(Debug, Validate)]
pub struct CategoryFields {
    #[validate(length(
        min = 2,
        max = 50,
        message = "Category name must be between 2 and 50 characters"
    ))]
    pub name: String,
    #[validate(length(max = 500, message = "Description must be less than 500 characters"))]
    pub description: String,
}

impl CategoryFields {
    pub fn new(name: &str, description: Option<&str>) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.unwrap_or_default().trim().to_string(),
        }
    }
}

impl TryFrom<AddCategoryForm> for NewCategory {
    type Error = FormError;

    fn try_from(form: AddCategoryForm) -> Result<Self, Self::Error> {
        let fields = CategoryFields::new(
            &form.name,
            form.description.as_ref().map(|d| d.as_str()),
        );
        fields.validate()?;
        let image = read_image(form.image.as_ref())?;

        Ok(Self {
            name: CategoryName::new(fields.name)?,
            description: Some(fields.description).filter(|d| !d.is_empty()),
            image,
        })
    }
}
