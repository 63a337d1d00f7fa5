//! Image upload collaborator. The core only needs the resulting string
//! (data URI or hosted URL) to store into `heroImage` or a gallery item.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unsupported content type: {0}")]
    UnsupportedType(String),

    #[error("empty upload")]
    Empty,
}

/// Accepts raw image bytes and returns the string to store in the record.
pub trait ImageUpload {
    fn store(&self, bytes: &[u8], content_type: &str) -> Result<String, UploadError>;
}

/// Inline storage: encodes the image as a `data:` URI, the same shape the
/// original editor produced from local file reads.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataUriUpload;

impl ImageUpload for DataUriUpload {
    fn store(&self, bytes: &[u8], content_type: &str) -> Result<String, UploadError> {
        if !content_type.starts_with("image/") {
            return Err(UploadError::UnsupportedType(content_type.to_string()));
        }
        if bytes.is_empty() {
            return Err(UploadError::Empty);
        }
        Ok(format!(
            "data:{content_type};base64,{}",
            STANDARD.encode(bytes)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_images_as_data_uris() {
        let uri = DataUriUpload.store(b"pngbytes", "image/png").unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(uri.ends_with(&STANDARD.encode(b"pngbytes")));
    }

    #[test]
    fn rejects_non_images() {
        let err = DataUriUpload.store(b"%PDF-", "application/pdf").unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedType(_)));
    }

    #[test]
    fn rejects_empty_payloads() {
        let err = DataUriUpload.store(b"", "image/png").unwrap_err();
        assert!(matches!(err, UploadError::Empty));
    }
}
