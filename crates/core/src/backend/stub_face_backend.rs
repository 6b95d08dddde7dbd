//! Scripted [`FaceBackend`] for use-case tests.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use reqwest::Url;

use crate::backend::domain::backend_error::BackendError;
use crate::backend::domain::face_backend::{BackendReply, FaceBackend};
use crate::masking::mask_type::MaskType;
use crate::shared::config::BackendConfig;
use crate::shared::image_file::ImageFile;
use crate::shared::user_id::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Register { user_id: String, files: Vec<String> },
    Verify { user_id: String, file: String },
    Mask { user_id: String, mask_type: MaskType, file: String },
    Fetch(String),
}

pub struct StubFaceBackend {
    config: BackendConfig,
    replies: Mutex<VecDeque<Result<BackendReply, BackendError>>>,
    pub calls: Arc<Mutex<Vec<Call>>>,
}

impl StubFaceBackend {
    pub fn new(replies: Vec<Result<BackendReply, BackendError>>) -> Self {
        Self {
            config: BackendConfig::new("http://faces.test:8000").unwrap(),
            replies: Mutex::new(replies.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(BackendReply::new(status, body.as_bytes()))])
    }

    fn next(&self, call: Call) -> Result<BackendReply, BackendError> {
        self.calls.lock().unwrap().push(call);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left")
    }
}

impl FaceBackend for StubFaceBackend {
    fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn register(&self, user_id: &UserId, images: &[ImageFile]) -> Result<BackendReply, BackendError> {
        self.next(Call::Register {
            user_id: user_id.to_string(),
            files: images.iter().map(|i| i.file_name().to_string()).collect(),
        })
    }

    fn verify(&self, user_id: &UserId, image: &ImageFile) -> Result<BackendReply, BackendError> {
        self.next(Call::Verify {
            user_id: user_id.to_string(),
            file: image.file_name().to_string(),
        })
    }

    fn mask(
        &self,
        user_id: &UserId,
        mask_type: MaskType,
        image: &ImageFile,
    ) -> Result<BackendReply, BackendError> {
        self.next(Call::Mask {
            user_id: user_id.to_string(),
            mask_type,
            file: image.file_name().to_string(),
        })
    }

    fn fetch(&self, url: &Url) -> Result<BackendReply, BackendError> {
        self.next(Call::Fetch(url.to_string()))
    }
}

/// Writes a tiny valid PNG.
pub fn png_fixture(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::new(2, 2).save(&path).unwrap();
    path
}

pub fn user(id: &str) -> UserId {
    UserId::parse(id).unwrap()
}
