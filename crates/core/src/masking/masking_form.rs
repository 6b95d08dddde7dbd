use std::path::PathBuf;

use crate::masking::mask_type::MaskType;
use crate::masking::masked_image::MaskedImage;
use crate::screen::form::{Form, ValidationError};
use crate::shared::user_id::UserId;

#[derive(Debug, Clone, Default)]
pub struct MaskingForm {
    pub user_id: String,
    pub image: Option<PathBuf>,
    pub mask_type: MaskType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskRequest {
    pub user_id: UserId,
    pub image: PathBuf,
    pub mask_type: MaskType,
}

impl Form for MaskingForm {
    type Request = MaskRequest;
    type Success = MaskedImage;
    const BUSY_LABEL: &'static str = "Masking\u{2026}";
    const FAILURE_MESSAGE: &'static str = "Server error";

    fn validate(&self) -> Result<MaskRequest, ValidationError> {
        let image = self.image.clone().ok_or(ValidationError::MissingImage)?;
        let user_id = UserId::parse(&self.user_id).ok_or(ValidationError::MissingUserId)?;
        Ok(MaskRequest {
            user_id,
            image,
            mask_type: self.mask_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_black() {
        assert_eq!(MaskingForm::default().mask_type, MaskType::Black);
    }

    #[test]
    fn test_missing_image() {
        let form = MaskingForm {
            user_id: "alice".into(),
            ..MaskingForm::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingImage));
    }

    #[test]
    fn test_request_carries_mask_type() {
        let form = MaskingForm {
            user_id: "alice".into(),
            image: Some(PathBuf::from("group.jpg")),
            mask_type: MaskType::Tiger,
        };
        assert_eq!(form.validate().unwrap().mask_type, MaskType::Tiger);
    }
}
