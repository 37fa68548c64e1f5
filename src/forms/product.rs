use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use validator::Validate;

use crate::domain::product::{ImageChange, NewProduct, UpdateProduct};
use crate::domain::types::{CategoryId, ProductStatus, ProductTitle};
use crate::forms::FormError;
use crate::forms::uploads::{read_image, read_optional_image};

#[derive(MultipartForm)]
/// Multipart payload of the add-product page.
pub struct AddProductForm {
    pub title: Text<String>,
    pub description: Text<String>,
    pub category_id: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub image: Option<TempFile>,
}

#[derive(MultipartForm)]
/// Multipart payload of the edit-product modal.
pub struct EditProductForm {
    pub title: Text<String>,
    pub description: Text<String>,
    pub category_id: Option<Text<String>>,
    pub status: Option<Text<String>>,
    /// URL of the image currently stored, kept when no replacement is chosen.
    pub imageurl: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub image: Option<TempFile>,
}

#[derive(Debug, Validate)]
pub struct ProductFields {
    #[validate(length(
        min = 3,
        max = 100,
        message = "Product name must be between 3 and 100 characters"
    ))]
    pub title: String,
    #[validate(length(
        min = 10,
        max = 1000,
        message = "Description must be between 10 and 1000 characters"
    ))]
    pub description: String,
    pub category_id: Option<String>,
}

impl ProductFields {
    pub fn new(title: &str, description: &str, category_id: Option<&str>) -> Self {
        Self {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            category_id: category_id
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        }
    }

    /// Validates and returns title, description and category.
    pub fn parse(self) -> Result<(ProductTitle, String, CategoryId), FormError> {
        self.validate()?;
        let category_id = self
            .category_id
            .as_deref()
            .ok_or(FormError::MissingCategory)?
            .parse::<CategoryId>()
            .map_err(|_| FormError::MissingCategory)?;
        Ok((ProductTitle::new(self.title)?, self.description, category_id))
    }
}

fn text(value: &Option<Text<String>>) -> Option<&str> {
    value.as_ref().map(|v| v.as_str())
}

impl TryFrom<AddProductForm> for NewProduct {
    type Error = FormError;

    fn try_from(form: AddProductForm) -> Result<Self, Self::Error> {
        let (title, description, category_id) =
            ProductFields::new(&form.title, &form.description, text(&form.category_id)).parse()?;
        let image = read_image(form.image.as_ref())?;

        Ok(Self {
            title,
            description,
            category_id,
            image,
        })
    }
}

impl TryFrom<EditProductForm> for UpdateProduct {
    type Error = FormError;

    fn try_from(form: EditProductForm) -> Result<Self, Self::Error> {
        let (title, description, category_id) =
            ProductFields::new(&form.title, &form.description, text(&form.category_id)).parse()?;
        let status = match text(&form.status).map(str::trim) {
            Some(status) if !status.is_empty() => status.parse::<ProductStatus>()?,
            _ => ProductStatus::Active,
        };
        let image = match read_optional_image(form.image.as_ref())? {
            Some(image) => ImageChange::Replace(image),
            None => ImageChange::Keep(
                text(&form.imageurl)
                    .map(str::trim)
                    .filter(|url| !url.is_empty())
                    .map(str::to_string),
            ),
        };

        Ok(Self {
            title,
            description,
            category_id,
            status,
            image,
        })
    }
}
