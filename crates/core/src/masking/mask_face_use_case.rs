use std::sync::Arc;

use reqwest::Url;
use serde::Deserialize;

use crate::backend::domain::backend_error::BackendError;
use crate::backend::domain::face_backend::FaceBackend;
use crate::masking::masked_image::MaskedImage;
use crate::masking::masking_form::MaskRequest;
use crate::shared::image_file::ImageFile;

#[derive(Debug, Deserialize)]
struct MaskReply {
    image_url: Option<String>,
    message: Option<String>,
}

/// Masking: load image → upload with mask type → resolve `image_url`
/// against the backend origin → optionally download the result.
///
/// The body is read even for error statuses, since the service explains
/// refusals (no matching face, bad image) in `message` with a 4xx/5xx.
pub struct MaskFaceUseCase {
    backend: Arc<dyn FaceBackend>,
    download: bool,
}

impl MaskFaceUseCase {
    pub fn new(backend: Arc<dyn FaceBackend>) -> Self {
        Self {
            backend,
            download: false,
        }
    }

    /// Also fetch the processed image so it can be shown or saved.
    pub fn with_download(mut self, download: bool) -> Self {
        self.download = download;
        self
    }

    pub fn execute(&self, request: &MaskRequest) -> Result<MaskedImage, BackendError> {
        let image = ImageFile::load(&request.image)?;
        log::info!(
            "Masking faces of '{}' with {}",
            request.user_id,
            request.mask_type.as_str()
        );

        let reply = self
            .backend
            .mask(&request.user_id, request.mask_type, &image)?;
        let body: MaskReply = match reply.json() {
            Ok(body) => body,
            Err(_) if !reply.is_success() => {
                return Err(BackendError::Status {
                    status: reply.status,
                })
            }
            Err(e) => return Err(e),
        };

        let Some(fragment) = body.image_url.filter(|u| !u.trim().is_empty()) else {
            let reason = match body.message {
                Some(message) => format!("Masking failed: {message}"),
                None => "Masking failed".to_string(),
            };
            return Err(BackendError::Rejected(reason));
        };

        let url = self.backend.config().resolve_reference(&fragment)?;
        log::debug!("Masked image published at {url}");

        let bytes = if self.download {
            match self.fetch(&url) {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    log::warn!("Could not download {url}: {e}");
                    None
                }
            }
        } else {
            None
        };

        Ok(MaskedImage {
            url,
            message: body.message,
            bytes,
        })
    }

    /// Downloads a published image.
    pub fn fetch(&self, url: &Url) -> Result<Vec<u8>, BackendError> {
        let reply = self.backend.fetch(url)?;
        if !reply.is_success() {
            return Err(BackendError::Status {
                status: reply.status,
            });
        }
        Ok(reply.body)
    }
}
