//! Content classification
//!
//! Maps a byte payload to a MIME type string. The vault only ever
//! consumes the output; detection itself is behind the [`Classifier`]
//! trait so it can be swapped in tests or replaced wholesale.

use thiserror::Error;

/// Errors from content classification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Cannot classify an empty payload")]
    Empty,

    #[error("Unrecognized content")]
    Unrecognized,
}

/// Content-type detection capability
///
/// Implementations must only inspect the payload - the same bytes are
/// persisted afterwards, so detection must not mutate or consume them.
pub trait Classifier: Send + Sync {
    /// Detect the full MIME type of the payload
    fn classify(&self, data: &[u8]) -> Result<String, ClassifyError>;
}

/// Magic-byte classifier backed by the `infer` signature database,
/// with a UTF-8 fallback to `text/plain` for textual content.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagicClassifier;

impl Classifier for MagicClassifier {
    fn classify(&self, data: &[u8]) -> Result<String, ClassifyError> {
        if data.is_empty() {
            return Err(ClassifyError::Empty);
        }

        if let Some(kind) = infer::get(data) {
            return Ok(kind.mime_type().to_string());
        }

        // No known signature: textual content is still classifiable
        if std::str::from_utf8(data).is_ok() {
            return Ok("text/plain".to_string());
        }

        Err(ClassifyError::Unrecognized)
    }
}

/// Top-level content-type class: the portion of the MIME type before `/`
///
/// This names the storage subdirectory for an item ("image/png" files
/// live under `image/`).
pub fn category_of(media_type: &str) -> &str {
    media_type.split('/').next().unwrap_or(media_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn test_classify_png() {
        let mime = MagicClassifier.classify(PNG_HEADER).unwrap();
        assert_eq!(mime, "image/png");
    }

    #[test]
    fn test_classify_jpeg() {
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
        data.resize(32, 0);
        assert_eq!(MagicClassifier.classify(&data).unwrap(), "image/jpeg");
    }

    #[test]
    fn test_classify_pdf() {
        let mime = MagicClassifier.classify(b"%PDF-1.7 rest of document").unwrap();
        assert_eq!(mime, "application/pdf");
    }

    #[test]
    fn test_classify_utf8_text() {
        let mime = MagicClassifier.classify(b"plain old notes\n").unwrap();
        assert_eq!(mime, "text/plain");
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(MagicClassifier.classify(b""), Err(ClassifyError::Empty));
    }

    #[test]
    fn test_classify_unrecognized_binary() {
        // Invalid UTF-8 with no known signature
        let data = [0xFE, 0xFF, 0x00, 0x01, 0x80, 0x81, 0x82, 0x83];
        assert_eq!(
            MagicClassifier.classify(&data),
            Err(ClassifyError::Unrecognized)
        );
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("image/png"), "image");
        assert_eq!(category_of("text/plain"), "text");
        assert_eq!(category_of("application/pdf"), "application");
        assert_eq!(category_of("weird"), "weird");
    }
}
