use serde::Serialize;
use tracing::debug;

use crate::{
    constants::{ALLOWED_IMAGE_MIME_TYPES, MAX_IMAGE_BYTES},
    errors::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            "image/webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Webp => "image/webp",
        }
    }

    /// Extension used in the storage key. Always one of the probed extensions.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
        }
    }
}

/// A file picked in one of the admin forms, not yet checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub declared_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// An upload that passed the local type and size checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedImage {
    pub file_name: String,
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, declared_type: Option<String>, bytes: Vec<u8>) -> Self {
        ImageUpload {
            file_name: file_name.into(),
            declared_type,
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Checks size first, then the content type sniffed from the bytes. Bytes that
    /// cannot be recognised are rejected whatever the declared type says.
    pub fn validate(&self, field: &str) -> Result<ValidatedImage, AppError> {
        if self.bytes.is_empty() {
            return Err(AppError::validation(field, "Image file is empty"));
        }
        if self.size() > MAX_IMAGE_BYTES {
            return Err(AppError::validation(field, "Image size must be less than 5MB"));
        }

        let detected = infer::get(&self.bytes).map(|kind| kind.mime_type());
        if let (Some(detected), Some(declared)) = (detected, self.declared_type.as_deref()) {
            if ImageFormat::from_mime(detected) != ImageFormat::from_mime(declared) {
                debug!(file = %self.file_name, detected, declared, "Declared image type ignored");
            }
        }

        let format = detected
            .filter(|mime| ALLOWED_IMAGE_MIME_TYPES.contains(mime))
            .and_then(ImageFormat::from_mime)
            .ok_or_else(|| AppError::validation(field, "Please select a valid image file (JPEG, PNG, or WebP)"))?;

        Ok(ValidatedImage {
            file_name: self.file_name.clone(),
            format,
            bytes: self.bytes.clone(),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::{fixtures::*, *};

    #[test]
    fn png_bytes_are_accepted() {
        let upload = ImageUpload::new("logo.png", None, png(1024));
        let image = upload.validate("image").unwrap();
        assert_eq!(image.format, ImageFormat::Png);
        assert_eq!(image.format.extension(), "png");
    }

    #[test]
    fn sniffed_type_wins_over_declared_type() {
        let mut bytes = JPEG_MAGIC.to_vec();
        bytes.resize(64, 0);
        let upload = ImageUpload::new("photo.png", Some("image/png".into()), bytes);
        assert_eq!(upload.validate("image").unwrap().format, ImageFormat::Jpeg);
    }

    #[test]
    fn unrecognised_bytes_are_rejected_despite_declared_type() {
        let upload = ImageUpload::new("notes.png", Some("image/png".into()), b"just some text".to_vec());
        let err = upload.validate("image").unwrap_err();
        assert_eq!(err.user_message(""), "Please select a valid image file (JPEG, PNG, or WebP)");
    }

    #[test]
    fn gif_is_rejected() {
        let upload = ImageUpload::new("anim.gif", Some("image/gif".into()), GIF_MAGIC.to_vec());
        let err = upload.validate("image").unwrap_err();
        assert_eq!(err.user_message(""), "Please select a valid image file (JPEG, PNG, or WebP)");
    }

    #[test]
    fn six_megabytes_is_too_large() {
        let upload = ImageUpload::new("big.png", None, png(6 * 1024 * 1024));
        let err = upload.validate("image").unwrap_err();
        assert_eq!(err.user_message(""), "Image size must be less than 5MB");
    }

    #[test]
    fn exactly_the_cap_is_allowed() {
        let upload = ImageUpload::new("edge.png", None, png(MAX_IMAGE_BYTES));
        assert!(upload.validate("image").is_ok());
    }
}
