//! Size guards for embedded (data-URL) images.
//!
//! Team member photos and gallery images arrive inline in JSON bodies as
//! base64 data URLs. Oversized payloads are rejected at the boundary before
//! any row is written.

use crate::error::CoreError;

/// Upper bound for a single embedded image, in bytes of the data URL string.
pub const MAX_EMBEDDED_IMAGE_BYTES: usize = 4 * 1024 * 1024;

/// Reject a data-URL image that exceeds [`MAX_EMBEDDED_IMAGE_BYTES`].
pub fn validate_embedded_image(data_url: &str) -> Result<(), CoreError> {
    if data_url.len() > MAX_EMBEDDED_IMAGE_BYTES {
        return Err(CoreError::Validation(format!(
            "Embedded image is {} bytes; the limit is {} bytes",
            data_url.len(),
            MAX_EMBEDDED_IMAGE_BYTES
        )));
    }
    Ok(())
}

/// Validate every image in a gallery payload, reporting the first offender.
pub fn validate_embedded_images<'a, I>(images: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = &'a str>,
{
    for image in images {
        validate_embedded_image(image)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_image_passes() {
        assert!(validate_embedded_image("data:image/png;base64,aGVsbG8=").is_ok());
    }

    #[test]
    fn test_oversized_image_rejected() {
        let huge = "x".repeat(MAX_EMBEDDED_IMAGE_BYTES + 1);
        let err = validate_embedded_image(&huge).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_image_at_limit_passes() {
        let at_limit = "x".repeat(MAX_EMBEDDED_IMAGE_BYTES);
        assert!(validate_embedded_image(&at_limit).is_ok());
    }

    #[test]
    fn test_batch_reports_first_offender() {
        let huge = "x".repeat(MAX_EMBEDDED_IMAGE_BYTES + 1);
        let images = ["data:image/png;base64,ok", huge.as_str()];
        assert!(validate_embedded_images(images).is_err());
    }
}
