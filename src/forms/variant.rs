use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use validator::Validate;

use crate::domain::types::{Amount, ProductId, SizeLabel, VariantName};
use crate::domain::upload::UploadError;
use crate::domain::variant::{NewVariant, SizeOption, UpdateVariant};
use crate::forms::FormError;
use crate::forms::uploads::read_images;

#[derive(MultipartForm)]
/// Multipart payload of the add-variant form. Size rows arrive as parallel
/// repeated `size`/`stock`/`price` fields.
pub struct AddVariantForm {
    pub product_id: Text<String>,
    pub name: Text<String>,
    pub description: Text<String>,
    pub size: Vec<Text<String>>,
    pub stock: Vec<Text<String>>,
    pub price: Vec<Text<String>>,
    pub is_best_selling: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub images: Vec<TempFile>,
}

#[derive(MultipartForm)]
/// Multipart payload of the edit-variant modal.
pub struct EditVariantForm {
    pub name: Text<String>,
    pub description: Text<String>,
    pub size: Vec<Text<String>>,
    pub stock: Vec<Text<String>>,
    pub price: Vec<Text<String>>,
    pub is_best_selling: Option<Text<String>>,
    /// Image URLs the admin chose to keep.
    pub existing_images: Vec<Text<String>>,
    #[multipart(limit = "10MB")]
    pub images: Vec<TempFile>,
}

#[derive(Debug, Validate)]
pub struct VariantFields {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

impl VariantFields {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
        }
    }
}

fn texts(values: &[Text<String>]) -> Vec<&str> {
    values.iter().map(|value| value.trim()).collect()
}

/// Zips the parallel size rows. Rows left completely blank are skipped; a
/// partially filled row is an error.
pub fn parse_size_options(
    sizes: &[&str],
    stocks: &[&str],
    prices: &[&str],
) -> Result<Vec<SizeOption>, FormError> {
    let rows = sizes.len().max(stocks.len()).max(prices.len());
    let mut options = Vec::new();

    for index in 0..rows {
        let size = sizes.get(index).copied().unwrap_or_default().trim();
        let stock = stocks.get(index).copied().unwrap_or_default().trim();
        let price = prices.get(index).copied().unwrap_or_default().trim();
        if size.is_empty() && stock.is_empty() && price.is_empty() {
            continue;
        }

        let row = index + 1;
        let invalid = |reason: &str| FormError::InvalidSizeOption {
            row,
            reason: reason.to_string(),
        };

        let size = SizeLabel::new(size).map_err(|_| invalid("size is required"))?;
        if stock.is_empty() {
            return Err(invalid("stock is required"));
        }
        let stock = stock
            .parse::<u32>()
            .map_err(|_| invalid("stock must be a whole number"))?;
        if price.is_empty() {
            return Err(invalid("price is required"));
        }
        let price = price
            .parse::<Amount>()
            .map_err(|_| invalid("price must be a non-negative number"))?;

        options.push(SizeOption { size, stock, price });
    }

    if options.is_empty() {
        return Err(FormError::MissingSizeOptions);
    }
    Ok(options)
}

fn checkbox(value: &Option<Text<String>>) -> bool {
    value
        .as_ref()
        .is_some_and(|v| matches!(v.trim(), "true" | "on" | "1"))
}

impl TryFrom<AddVariantForm> for NewVariant {
    type Error = FormError;

    fn try_from(form: AddVariantForm) -> Result<Self, Self::Error> {
        let fields = VariantFields::new(&form.name, &form.description);
        fields.validate()?;
        let size_options = parse_size_options(
            &texts(&form.size),
            &texts(&form.stock),
            &texts(&form.price),
        )?;
        let images = read_images(&form.images)?;
        if images.is_empty() {
            return Err(FormError::Upload(UploadError::Missing));
        }

        Ok(Self {
            product_id: form.product_id.parse::<ProductId>()?,
            name: VariantName::new(fields.name)?,
            description: fields.description,
            size_options,
            is_best_selling: checkbox(&form.is_best_selling),
            images,
        })
    }
}

impl TryFrom<EditVariantForm> for UpdateVariant {
    type Error = FormError;

    fn try_from(form: EditVariantForm) -> Result<Self, Self::Error> {
        let fields = VariantFields::new(&form.name, &form.description);
        fields.validate()?;
        let size_options = parse_size_options(
            &texts(&form.size),
            &texts(&form.stock),
            &texts(&form.price),
        )?;

        Ok(Self {
            name: VariantName::new(fields.name)?,
            description: fields.description,
            size_options,
            is_best_selling: checkbox(&form.is_best_selling),
            existing_images: texts(&form.existing_images)
                .into_iter()
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .collect(),
            images: read_images(&form.images)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::uploads::test_support::temp_file;

    fn texts_of(values: &[&str]) -> Vec<Text<String>> {
        values.iter().map(|v| Text(v.to_string())).collect()
    }

    #[test]
    fn blank_rows_are_skipped() {
        let options = parse_size_options(&["M", "", "L"], &["3", "", "0"], &["10", "", "12.5"])
            .unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].size.as_str(), "L");
        assert_eq!(options[1].price.get(), 12.5);
    }

    #[test]
    fn partial_rows_name_the_problem() {
        let err = parse_size_options(&["M"], &[""], &["10"]).unwrap_err();
        assert_eq!(err.user_message(), "Size option 1: stock is required");
        let err = parse_size_options(&["M"], &["-1"], &["10"]).unwrap_err();
        assert_eq!(err.user_message(), "Size option 1: stock must be a whole number");
    }

    #[test]
    fn at_least_one_size_is_required() {
        assert!(matches!(
            parse_size_options(&[""], &[""], &[""]),
            Err(FormError::MissingSizeOptions)
        ));
    }

    #[test]
    fn add_form_requires_an_image() {
        let form = AddVariantForm {
            product_id: Text("42".to_string()),
            name: Text("Blue".to_string()),
            description: Text("Soft cotton".to_string()),
            size: texts_of(&["M"]),
            stock: texts_of(&["2"]),
            price: texts_of(&["9.99"]),
            is_best_selling: Some(Text("on".to_string())),
            images: Vec::new(),
        };
        assert!(matches!(
            NewVariant::try_from(form),
            Err(FormError::Upload(UploadError::Missing))
        ));
    }

    #[test]
    fn add_form_becomes_new_variant() {
        let form = AddVariantForm {
            product_id: Text("42".to_string()),
            name: Text(" Blue ".to_string()),
            description: Text("Soft cotton".to_string()),
            size: texts_of(&["M"]),
            stock: texts_of(&["2"]),
            price: texts_of(&["9.99"]),
            is_best_selling: Some(Text("on".to_string())),
            images: vec![temp_file("a.png", "image/png", &[1])],
        };
        let variant = NewVariant::try_from(form).unwrap();
        assert_eq!(variant.product_id.get(), 42);
        assert_eq!(variant.name.as_str(), "Blue");
        assert!(variant.is_best_selling);
        assert_eq!(variant.images.len(), 1);
    }

    #[test]
    fn edit_form_keeps_listed_images() {
        let form = EditVariantForm {
            name: Text("Blue".to_string()),
            description: Text("Soft cotton".to_string()),
            size: texts_of(&["S"]),
            stock: texts_of(&["1"]),
            price: texts_of(&["5"]),
            is_best_selling: None,
            existing_images: texts_of(&["a.jpg", " "]),
            images: Vec::new(),
        };
        let update = UpdateVariant::try_from(form).unwrap();
        assert_eq!(update.existing_images, vec!["a.jpg".to_string()]);
        assert!(!update.is_best_selling);
    }
}
