//! Form definitions backing the dashboard routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;
use crate::domain::upload::UploadError;

pub mod category;
pub mod login;
pub mod order;
pub mod product;
pub mod uploads;
pub mod variant;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    Upload(#[from] UploadError),

    #[error("{0}")]
    TypeConstraint(#[from] TypeConstraintError),

    #[error("category is required")]
    MissingCategory,

    #[error("at least one size is required")]
    MissingSizeOptions,

    #[error("size option {row}: {reason}")]
    InvalidSizeOption { row: usize, reason: String },

    #[error("failed to read upload: {0}")]
    Io(#[from] std::io::Error),
}

impl FormError {
    /// Message shown to the admin in a flash toast.
    pub fn user_message(&self) -> String {
        match self {
            FormError::Validation(errors) => validation_message(errors),
            FormError::Upload(err) => capitalize(&err.to_string()),
            FormError::Io(_) => "Failed to read the uploaded file".to_string(),
            other => capitalize(&other.to_string()),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Joins the per-field messages, sorted by field name for a stable order.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("Invalid {field}"),
            })
        })
        .collect();

    if messages.is_empty() {
        "Form validation failed".to_string()
    } else {
        messages.join("; ")
    }
}
