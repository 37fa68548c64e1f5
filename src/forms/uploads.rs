//! Turning multipart temp files into in-memory image uploads.

use actix_multipart::form::tempfile::TempFile;

use crate::domain::upload::{ImageUpload, UploadError};
use crate::forms::FormError;

/// Browsers submit an empty part for a file input left blank.
fn is_blank(file: &TempFile) -> bool {
    file.size == 0 && file.file_name.as_deref().is_none_or(|name| name.trim().is_empty())
}

/// Reads a required image.
pub fn read_image(file: Option<&TempFile>) -> Result<ImageUpload, FormError> {
    read_optional_image(file)?.ok_or(FormError::Upload(UploadError::Missing))
}

/// Reads an image if one was actually chosen.
pub fn read_optional_image(file: Option<&TempFile>) -> Result<Option<ImageUpload>, FormError> {
    let Some(file) = file.filter(|file| !is_blank(file)) else {
        return Ok(None);
    };

    let content_type = file
        .content_type
        .as_ref()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_default();
    let bytes = std::fs::read(file.file.path())?;
    let upload = ImageUpload::new(
        file.file_name.clone().unwrap_or_default(),
        content_type,
        bytes,
    )?;
    Ok(Some(upload))
}

/// Reads every non-blank image of a repeated file field.
pub fn read_images(files: &[TempFile]) -> Result<Vec<ImageUpload>, FormError> {
    let mut images = Vec::new();
    for file in files {
        if let Some(image) = read_optional_image(Some(file))? {
            images.push(image);
        }
    }
    Ok(images)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Write;

    use actix_multipart::form::tempfile::TempFile;
    use actix_web::mime::Mime;
    use tempfile::NamedTempFile;

    /// A temp file as actix-multipart would hand it over.
    pub fn temp_file(name: &str, content_type: &str, bytes: &[u8]) -> TempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        TempFile {
            file,
            content_type: content_type.parse::<Mime>().ok(),
            file_name: Some(name.to_string()),
            size: bytes.len(),
        }
    }
}
