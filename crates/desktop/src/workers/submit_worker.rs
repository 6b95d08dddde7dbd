use std::sync::Arc;

use facegate_core::backend::domain::backend_error::BackendError;
use facegate_core::backend::domain::face_backend::FaceBackend;
use facegate_core::backend::infrastructure::http_face_backend::HttpFaceBackend;
use facegate_core::masking::mask_face_use_case::MaskFaceUseCase;
use facegate_core::masking::masked_image::MaskedImage;
use facegate_core::masking::masking_form::MaskRequest;
use facegate_core::registration::receipt::Registration;
use facegate_core::registration::register_face_use_case::RegisterFaceUseCase;
use facegate_core::registration::registration_form::RegisterRequest;
use facegate_core::screen::screen_state::Ticket;
use facegate_core::screen::submission::Submission;
use facegate_core::shared::config::BackendConfig;
use facegate_core::verification::verdict::Verdict;
use facegate_core::verification::verification_form::VerifyRequest;
use facegate_core::verification::verify_face_use_case::VerifyFaceUseCase;

// The blocking HTTP client must never be created or dropped on the UI
// thread (it runs inside the async executor), so each job builds its own.

fn connect(config: BackendConfig) -> Result<Arc<dyn FaceBackend>, BackendError> {
    let backend: Arc<dyn FaceBackend> = Arc::new(HttpFaceBackend::new(config)?);
    Ok(backend)
}

pub fn register(
    config: BackendConfig,
    ticket: Ticket,
    request: RegisterRequest,
) -> Submission<Registration> {
    Submission::spawn(ticket, move || {
        RegisterFaceUseCase::new(connect(config)?).execute(&request)
    })
}

pub fn verify(config: BackendConfig, ticket: Ticket, request: VerifyRequest) -> Submission<Verdict> {
    Submission::spawn(ticket, move || {
        VerifyFaceUseCase::new(connect(config)?).execute(&request)
    })
}

/// Masking also downloads the result so it can be previewed and saved.
pub fn mask(config: BackendConfig, ticket: Ticket, request: MaskRequest) -> Submission<MaskedImage> {
    Submission::spawn(ticket, move || {
        MaskFaceUseCase::new(connect(config)?)
            .with_download(true)
            .execute(&request)
    })
}
