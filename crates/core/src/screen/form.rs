use thiserror::Error;

use crate::screen::outcome::Summary;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Select an image first.")]
    MissingImage,
    #[error("Enter a user ID.")]
    MissingUserId,
}

/// Editable inputs of one screen.
pub trait Form {
    /// Validated inputs handed to the submitter.
    type Request: Send + 'static;
    type Success: Summary + Send + 'static;

    /// Label on the submit control while a request is outstanding.
    const BUSY_LABEL: &'static str;
    /// Shown for any failure whose payload carries no message of its own.
    const FAILURE_MESSAGE: &'static str;

    fn validate(&self) -> Result<Self::Request, ValidationError>;
}
