use std::path::PathBuf;

use crate::registration::receipt::Registration;
use crate::screen::form::{Form, ValidationError};
use crate::shared::user_id::UserId;

/// Registration takes several shots of the same face.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub user_id: String,
    pub images: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    pub user_id: UserId,
    pub images: Vec<PathBuf>,
}

impl Form for RegistrationForm {
    type Request = RegisterRequest;
    type Success = Registration;
    const BUSY_LABEL: &'static str = "Registering\u{2026}";
    const FAILURE_MESSAGE: &'static str = "Face registration failed";

    fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        if self.images.is_empty() {
            return Err(ValidationError::MissingImage);
        }
        let user_id = UserId::parse(&self.user_id).ok_or(ValidationError::MissingUserId)?;
        Ok(RegisterRequest {
            user_id,
            images: self.images.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_at_least_one_image() {
        let form = RegistrationForm {
            user_id: "alice".into(),
            images: vec![],
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingImage));
    }

    #[test]
    fn test_requires_user_id() {
        let form = RegistrationForm {
            user_id: String::new(),
            images: vec![PathBuf::from("a.png")],
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingUserId));
    }

    #[test]
    fn test_keeps_image_order() {
        let form = RegistrationForm {
            user_id: "alice".into(),
            images: vec![PathBuf::from("b.png"), PathBuf::from("a.png")],
        };
        assert_eq!(
            form.validate().unwrap().images,
            vec![PathBuf::from("b.png"), PathBuf::from("a.png")]
        );
    }
}
