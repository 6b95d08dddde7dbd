use std::path::PathBuf;

use crate::screen::form::{Form, ValidationError};
use crate::shared::user_id::UserId;
use crate::verification::verdict::Verdict;

#[derive(Debug, Clone, Default)]
pub struct VerificationForm {
    pub user_id: String,
    pub image: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyRequest {
    pub user_id: UserId,
    pub image: PathBuf,
}

impl Form for VerificationForm {
    type Request = VerifyRequest;
    type Success = Verdict;
    const BUSY_LABEL: &'static str = "Verifying\u{2026}";
    const FAILURE_MESSAGE: &'static str = "Face verification failed";

    fn validate(&self) -> Result<VerifyRequest, ValidationError> {
        let image = self.image.clone().ok_or(ValidationError::MissingImage)?;
        let user_id = UserId::parse(&self.user_id).ok_or(ValidationError::MissingUserId)?;
        Ok(VerifyRequest { user_id, image })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_is_checked_first() {
        let form = VerificationForm::default();
        assert_eq!(form.validate(), Err(ValidationError::MissingImage));
    }

    #[test]
    fn test_whitespace_user_id_is_missing() {
        let form = VerificationForm {
            user_id: " \t".into(),
            image: Some(PathBuf::from("me.jpg")),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingUserId));
    }

    #[test]
    fn test_valid_form_builds_request() {
        let form = VerificationForm {
            user_id: " alice ".into(),
            image: Some(PathBuf::from("me.jpg")),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.user_id.as_str(), "alice");
        assert_eq!(request.image, PathBuf::from("me.jpg"));
    }
}
