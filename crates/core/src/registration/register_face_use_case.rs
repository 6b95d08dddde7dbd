use std::sync::Arc;

use serde::Deserialize;

use crate::backend::domain::backend_error::BackendError;
use crate::backend::domain::face_backend::FaceBackend;
use crate::registration::receipt::Registration;
use crate::registration::registration_form::RegisterRequest;
use crate::shared::constants::MAX_REGISTRATION_IMAGES;
use crate::shared::image_file::ImageFile;

#[derive(Debug, Deserialize)]
struct RegisterReply {
    status: Option<String>,
    message: Option<String>,
    embedding_path: Option<String>,
}

/// Registration: load every image → upload as repeated `face_images` parts.
pub struct RegisterFaceUseCase {
    backend: Arc<dyn FaceBackend>,
}

impl RegisterFaceUseCase {
    pub fn new(backend: Arc<dyn FaceBackend>) -> Self {
        Self { backend }
    }

    pub fn execute(&self, request: &RegisterRequest) -> Result<Registration, BackendError> {
        let images = request
            .images
            .iter()
            .map(|path| ImageFile::load(path))
            .collect::<Result<Vec<_>, _>>()?;

        if images.len() > MAX_REGISTRATION_IMAGES {
            log::warn!(
                "{} images selected; the service uses at most {MAX_REGISTRATION_IMAGES} faces",
                images.len()
            );
        }
        log::info!("Registering '{}' from {} image(s)", request.user_id, images.len());

        let reply = self.backend.register(&request.user_id, &images)?;
        let body: RegisterReply = match reply.json() {
            Ok(body) => body,
            Err(_) if !reply.is_success() => {
                return Err(BackendError::Status {
                    status: reply.status,
                })
            }
            Err(e) => return Err(e),
        };

        let refused = !reply.is_success() || body.status.as_deref() == Some("error");
        if refused {
            return Err(match body.message {
                Some(message) => BackendError::Rejected(message),
                None if !reply.is_success() => BackendError::Status {
                    status: reply.status,
                },
                None => BackendError::Rejected("Registration was refused".to_string()),
            });
        }

        Ok(Registration {
            message: body
                .message
                .unwrap_or_else(|| format!("{} registered", request.user_id)),
            embedding_path: body.embedding_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::stub_face_backend::{png_fixture, user, Call, StubFaceBackend};
    use crate::registration::registration_form::RegistrationForm;
    use crate::screen::outcome::{Banner, Tone};
    use crate::screen::screen_state::ScreenState;
    use rstest::rstest;
    use tempfile::TempDir;

    fn request(tmp: &TempDir, names: &[&str]) -> RegisterRequest {
        RegisterRequest {
            user_id: user("alice"),
            images: names.iter().map(|n| png_fixture(tmp.path(), n)).collect(),
        }
    }

    #[test]
    fn test_uploads_all_images() {
        let tmp = TempDir::new().unwrap();
        let backend = StubFaceBackend::replying(
            200,
            r#"{"message":"alice registered!","embedding_path":"/srv/embeddings/alice_embedding.json"}"#,
        );
        let calls = backend.calls.clone();
        let uc = RegisterFaceUseCase::new(Arc::new(backend));

        let registration = uc.execute(&request(&tmp, &["a.png", "b.png", "c.png"])).unwrap();

        assert_eq!(registration.message, "alice registered!");
        assert_eq!(
            registration.embedding_path.as_deref(),
            Some("/srv/embeddings/alice_embedding.json")
        );
        assert_eq!(
            calls.lock().unwrap()[0],
            Call::Register {
                user_id: "alice".into(),
                files: vec!["a.png".into(), "b.png".into(), "c.png".into()]
            }
        );
    }

    #[test]
    fn test_missing_message_gets_default() {
        let tmp = TempDir::new().unwrap();
        let uc = RegisterFaceUseCase::new(Arc::new(StubFaceBackend::replying(200, "{}")));

        let registration = uc.execute(&request(&tmp, &["a.png"])).unwrap();

        assert_eq!(registration.message, "alice registered");
    }

    #[rstest]
    #[case::bad_request(400, r#"{"status":"error","message":"no face detected"}"#)]
    #[case::error_in_ok(200, r#"{"status":"error","message":"no face detected"}"#)]
    fn test_refusal_carries_payload_message(#[case] status: u16, #[case] body: &str) {
        let tmp = TempDir::new().unwrap();
        let uc = RegisterFaceUseCase::new(Arc::new(StubFaceBackend::replying(status, body)));

        match uc.execute(&request(&tmp, &["a.png"])) {
            Err(BackendError::Rejected(message)) => assert_eq!(message, "no face detected"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_error_without_message_is_status() {
        let tmp = TempDir::new().unwrap();
        let uc = RegisterFaceUseCase::new(Arc::new(StubFaceBackend::replying(500, "Internal Server Error")));

        assert!(matches!(
            uc.execute(&request(&tmp, &["a.png"])),
            Err(BackendError::Status { status: 500 })
        ));
    }

    #[test]
    fn test_one_unreadable_image_aborts_before_upload() {
        let tmp = TempDir::new().unwrap();
        let backend = StubFaceBackend::new(vec![]);
        let calls = backend.calls.clone();
        let uc = RegisterFaceUseCase::new(Arc::new(backend));
        let mut req = request(&tmp, &["a.png"]);
        req.images.push(tmp.path().join("missing.png"));

        assert!(matches!(uc.execute(&req), Err(BackendError::Image(_))));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_screen_renders_success_message() {
        let tmp = TempDir::new().unwrap();
        let uc = RegisterFaceUseCase::new(Arc::new(StubFaceBackend::replying(
            200,
            r#"{"message":"alice registered!"}"#,
        )));
        let mut screen = ScreenState::new(RegistrationForm {
            user_id: "alice".into(),
            images: vec![png_fixture(tmp.path(), "a.png")],
        });

        let (ticket, req) = screen.submit().unwrap();
        screen.resolve(ticket, uc.execute(&req));

        assert_eq!(
            screen.banner(),
            Some(Banner::new(Tone::Success, "alice registered!"))
        );
    }

    #[test]
    fn test_screen_without_images_sends_nothing() {
        let mut screen = ScreenState::new(RegistrationForm {
            user_id: "alice".into(),
            images: vec![],
        });

        assert!(screen.submit().is_none());
        assert_eq!(screen.notice(), Some("Select an image first."));
    }
}
