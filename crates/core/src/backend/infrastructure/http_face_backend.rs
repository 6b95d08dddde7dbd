use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use reqwest::Url;

use crate::backend::domain::backend_error::BackendError;
use crate::backend::domain::face_backend::{BackendReply, FaceBackend};
use crate::masking::mask_type::MaskType;
use crate::shared::config::BackendConfig;
use crate::shared::constants::{MASKING_PATH, REGISTER_PATH, VERIFY_PATH};
use crate::shared::image_file::ImageFile;
use crate::shared::user_id::UserId;

/// [`FaceBackend`] over HTTP multipart uploads.
pub struct HttpFaceBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpFaceBackend {
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| BackendError::Transport {
            url: config.base_url().to_string(),
            source: e,
        })?;
        Ok(Self { client, config })
    }

    fn post(&self, path: &str, form: Form) -> Result<BackendReply, BackendError> {
        let url = self.config.resolve_reference(path)?;
        log::info!("POST {url}");
        let response = self
            .client
            .post(url.clone())
            .multipart(form)
            .send()
            .map_err(|e| transport(&url, e))?;
        read_reply(&url, response)
    }
}

impl FaceBackend for HttpFaceBackend {
    fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn register(&self, user_id: &UserId, images: &[ImageFile]) -> Result<BackendReply, BackendError> {
        let mut form = Form::new().text("user_id", user_id.to_string());
        for image in images {
            form = form.part("face_images", image_part(image)?);
        }
        self.post(REGISTER_PATH, form)
    }

    fn verify(&self, user_id: &UserId, image: &ImageFile) -> Result<BackendReply, BackendError> {
        let form = Form::new()
            .part("face_image", image_part(image)?)
            .text("user_id", user_id.to_string());
        self.post(VERIFY_PATH, form)
    }

    fn mask(
        &self,
        user_id: &UserId,
        mask_type: MaskType,
        image: &ImageFile,
    ) -> Result<BackendReply, BackendError> {
        let form = Form::new()
            .text("user_id", user_id.to_string())
            .text("mask_type", mask_type.as_str())
            .part("image", image_part(image)?);
        self.post(MASKING_PATH, form)
    }

    fn fetch(&self, url: &Url) -> Result<BackendReply, BackendError> {
        log::info!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| transport(url, e))?;
        read_reply(url, response)
    }
}

fn image_part(image: &ImageFile) -> Result<Part, BackendError> {
    Part::bytes(image.bytes().to_vec())
        .file_name(image.file_name().to_string())
        .mime_str(image.mime_type())
        .map_err(|e| BackendError::Transport {
            url: image.file_name().to_string(),
            source: e,
        })
}

fn read_reply(url: &Url, response: Response) -> Result<BackendReply, BackendError> {
    let status = response.status().as_u16();
    let body = response.bytes().map_err(|e| transport(url, e))?;
    log::debug!("{url} answered HTTP {status} ({} bytes)", body.len());
    Ok(BackendReply::new(status, body.to_vec()))
}

fn transport(url: &Url, source: reqwest::Error) -> BackendError {
    BackendError::Transport {
        url: url.to_string(),
        source,
    }
}
