//! Image payloads forwarded to the backend as multipart parts.

use thiserror::Error;

/// Largest image the backend accepts.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("image is required")]
    Missing,
    #[error("file must be an image")]
    NotAnImage,
    #[error("image size must be less than 5MB")]
    TooLarge,
}

/// An uploaded image held in memory until it is sent upstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// Accepts non-empty `image/*` payloads up to [`MAX_IMAGE_BYTES`].
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, UploadError> {
        let content_type = content_type.into().trim().to_lowercase();
        if bytes.is_empty() {
            return Err(UploadError::Missing);
        }
        if !content_type.starts_with("image/") {
            return Err(UploadError::NotAnImage);
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(UploadError::TooLarge);
        }

        let file_name = file_name.into();
        let file_name = if file_name.trim().is_empty() {
            "image".to_string()
        } else {
            file_name
        };

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_small_images() {
        let upload = ImageUpload::new("a.png", "Image/PNG", vec![1, 2, 3]).unwrap();
        assert_eq!(upload.content_type(), "image/png");
        assert_eq!(upload.len(), 3);
    }

    #[test]
    fn rejects_non_images_and_oversized_files() {
        assert_eq!(
            ImageUpload::new("a.txt", "text/plain", vec![1]),
            Err(UploadError::NotAnImage)
        );
        assert_eq!(
            ImageUpload::new("a.png", "image/png", vec![0; MAX_IMAGE_BYTES + 1]),
            Err(UploadError::TooLarge)
        );
        assert_eq!(
            ImageUpload::new("a.png", "image/png", Vec::new()),
            Err(UploadError::Missing)
        );
    }

    #[test]
    fn blank_file_names_get_a_default() {
        let upload = ImageUpload::new(" ", "image/jpeg", vec![1]).unwrap();
        assert_eq!(upload.file_name(), "image");
    }
}
