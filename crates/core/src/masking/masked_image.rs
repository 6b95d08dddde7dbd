use std::fs;
use std::path::Path;

use reqwest::Url;

use crate::backend::domain::backend_error::BackendError;
use crate::screen::outcome::{Banner, Summary, Tone};
use crate::shared::constants::MASKED_IMAGE_FILENAME;

/// A processed image published by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedImage {
    /// Absolute URL used both to display and to download the image.
    pub url: Url,
    pub message: Option<String>,
    /// Image content, when it was downloaded along with the result.
    pub bytes: Option<Vec<u8>>,
}

impl MaskedImage {
    pub fn download_name(&self) -> &'static str {
        MASKED_IMAGE_FILENAME
    }

    pub fn save_to(&self, path: &Path) -> Result<(), BackendError> {
        let bytes = self.bytes.as_ref().ok_or(BackendError::NotDownloaded)?;
        fs::write(path, bytes).map_err(|e| BackendError::Save {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::info!("Saved masked image to {}", path.display());
        Ok(())
    }
}

impl Summary for MaskedImage {
    fn banner(&self) -> Banner {
        let text = self
            .message
            .clone()
            .unwrap_or_else(|| "Masking complete".to_string());
        Banner::new(Tone::Success, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn masked(bytes: Option<Vec<u8>>) -> MaskedImage {
        MaskedImage {
            url: Url::parse("http://127.0.0.1:8000/media/x.png").unwrap(),
            message: None,
            bytes,
        }
    }

    #[test]
    fn test_save_writes_bytes() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join(masked(None).download_name());

        masked(Some(b"png".to_vec())).save_to(&dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"png");
    }

    #[test]
    fn test_save_without_bytes_fails() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("out.png");

        let result = masked(None).save_to(&dest);

        assert!(matches!(result, Err(BackendError::NotDownloaded)));
        assert!(!dest.exists());
    }

    #[test]
    fn test_download_name() {
        assert_eq!(masked(None).download_name(), "masked_image.png");
    }

    #[test]
    fn test_banner_falls_back_when_no_message() {
        assert_eq!(masked(None).banner(), Banner::new(Tone::Success, "Masking complete"));
    }
}
