use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::IMAGE_EXTENSIONS;

#[derive(Error, Debug)]
pub enum ImageFileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a recognised image")]
    Unrecognized { path: PathBuf },
}

/// An image loaded into memory, ready to be attached to a multipart upload.
#[derive(Debug, Clone)]
pub struct ImageFile {
    file_name: String,
    mime_type: &'static str,
    bytes: Vec<u8>,
}

impl ImageFile {
    /// Reads the file and sniffs its format from the content, not the extension.
    pub fn load(path: &Path) -> Result<Self, ImageFileError> {
        let bytes = fs::read(path).map_err(|e| ImageFileError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let format = image::guess_format(&bytes).map_err(|_| ImageFileError::Unrecognized {
            path: path.to_path_buf(),
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());

        log::debug!(
            "Loaded {} ({} bytes, {})",
            path.display(),
            bytes.len(),
            format.to_mime_type()
        );

        Ok(Self {
            file_name,
            mime_type: format.to_mime_type(),
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Extension check used to filter file pickers and CLI arguments.
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        image::RgbImage::new(4, 4).save(&path).unwrap();
        path
    }

    #[test]
    fn test_load_png_sniffs_mime_type() {
        let tmp = TempDir::new().unwrap();
        let path = write_png(tmp.path(), "face.png");

        let image = ImageFile::load(&path).unwrap();

        assert_eq!(image.file_name(), "face.png");
        assert_eq!(image.mime_type(), "image/png");
        assert!(!image.bytes().is_empty());
    }

    #[test]
    fn test_load_ignores_misleading_extension() {
        let tmp = TempDir::new().unwrap();
        let png = write_png(tmp.path(), "face.png");
        let renamed = tmp.path().join("face.jpg");
        fs::rename(&png, &renamed).unwrap();

        let image = ImageFile::load(&renamed).unwrap();

        assert_eq!(image.mime_type(), "image/png");
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let result = ImageFile::load(&tmp.path().join("missing.png"));
        assert!(matches!(result, Err(ImageFileError::Read { .. })));
    }

    #[test]
    fn test_load_non_image_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.png");
        fs::write(&path, b"definitely not pixels").unwrap();

        let result = ImageFile::load(&path);

        assert!(matches!(result, Err(ImageFileError::Unrecognized { .. })));
    }

    #[test]
    fn test_has_image_extension() {
        assert!(has_image_extension(Path::new("a/b/photo.JPG")));
        assert!(has_image_extension(Path::new("photo.webp")));
        assert!(!has_image_extension(Path::new("clip.mp4")));
        assert!(!has_image_extension(Path::new("no_extension")));
    }
}
