use std::path::PathBuf;

use thiserror::Error;

use crate::shared::config::ConfigError;
use crate::shared::image_file::ImageFileError;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("server responded with HTTP {status}")]
    Status { status: u16 },
    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),
    /// The service answered but refused the request; the text comes from the payload.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Image(#[from] ImageFileError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("the masked image has not been downloaded")]
    NotDownloaded,
    #[error("failed to write {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("the request worker stopped unexpectedly")]
    Interrupted,
}

impl BackendError {
    /// Text shown to the user. Payload messages pass through; everything
    /// else collapses to the screen's generic failure message.
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            BackendError::Rejected(message) => message.clone(),
            _ => generic.to_string(),
        }
    }
}
