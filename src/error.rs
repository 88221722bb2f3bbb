use thiserror::Error;

use crate::input::InputError;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("interview not found: {0}")]
    InterviewNotFound(String),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to serialize report: {0}")]
    Render(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
