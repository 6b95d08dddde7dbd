use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::backend::domain::backend_error::BackendError;
use crate::masking::mask_type::MaskType;
use crate::shared::config::BackendConfig;
use crate::shared::image_file::ImageFile;
use crate::shared::user_id::UserId;

/// Raw HTTP answer: status plus body. Interpreting it is up to each use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl BackendReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, BackendError> {
        serde_json::from_slice(&self.body).map_err(BackendError::Decode)
    }
}

/// Domain interface for the remote face service.
///
/// Calls block until the service answers, so callers run them off the UI thread.
pub trait FaceBackend: Send + Sync {
    fn config(&self) -> &BackendConfig;

    fn register(&self, user_id: &UserId, images: &[ImageFile]) -> Result<BackendReply, BackendError>;

    fn verify(&self, user_id: &UserId, image: &ImageFile) -> Result<BackendReply, BackendError>;

    fn mask(
        &self,
        user_id: &UserId,
        mask_type: MaskType,
        image: &ImageFile,
    ) -> Result<BackendReply, BackendError>;

    /// Plain GET, used to download processed images.
    fn fetch(&self, url: &Url) -> Result<BackendReply, BackendError>;
}
