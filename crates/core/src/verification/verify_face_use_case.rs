use std::sync::Arc;

use serde::Deserialize;

use crate::backend::domain::backend_error::BackendError;
use crate::backend::domain::face_backend::FaceBackend;
use crate::shared::image_file::ImageFile;
use crate::verification::verdict::Verdict;
use crate::verification::verification_form::VerifyRequest;

#[derive(Debug, Deserialize)]
struct VerifyReply {
    status: Option<String>,
    message: Option<String>,
}

/// Verification: load image → upload → interpret `{status, message}`.
///
/// Any non-2xx status is an error regardless of body; a 2xx reply always
/// yields a verdict, accepted only when `status == "success"`.
pub struct VerifyFaceUseCase {
    backend: Arc<dyn FaceBackend>,
}

impl VerifyFaceUseCase {
    pub fn new(backend: Arc<dyn FaceBackend>) -> Self {
        Self { backend }
    }

    pub fn execute(&self, request: &VerifyRequest) -> Result<Verdict, BackendError> {
        let image = ImageFile::load(&request.image)?;
        log::info!("Verifying face of '{}'", request.user_id);

        let reply = self.backend.verify(&request.user_id, &image)?;
        if !reply.is_success() {
            return Err(BackendError::Status {
                status: reply.status,
            });
        }

        let body: VerifyReply = reply.json()?;
        Ok(Verdict {
            accepted: body.status.as_deref() == Some("success"),
            message: body.message.unwrap_or_default(),
        })
    }
}
