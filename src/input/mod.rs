use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod store;

use crate::model::{FeedbackRecord, InterviewRecord};

pub use store::FsFeedbackStore;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid identifier: {0:?}")]
    InvalidId(String),
    #[error("missing input: {0}")]
    MissingInput(String),
}

/// Retrieval collaborator that supplies interview and feedback records.
pub trait FeedbackSource {
    fn interview_by_id(&self, id: &str) -> Result<Option<InterviewRecord>, InputError>;

    fn feedback_by_interview(
        &self,
        interview_id: &str,
        user_id: &str,
    ) -> Result<Option<FeedbackRecord>, InputError>;
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_json(path, &buf)
}

pub fn parse_json<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<T, InputError> {
    serde_json::from_str(contents).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a single feedback record; `-` reads standard input.
pub fn load_feedback_file(path: &Path) -> Result<FeedbackRecord, InputError> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| InputError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        return parse_json(path, &buf);
    }
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    tracing::info!("reading feedback record from {}", path.display());
    read_json(path)
}

/// Rejects identifiers that could escape the store directory.
pub fn validate_id(id: &str) -> Result<&str, InputError> {
    let bad = id.is_empty()
        || id == "."
        || id.contains("..")
        || id.contains('/')
        || id.contains('\\')
        || id.contains('\0');
    if bad {
        return Err(InputError::InvalidId(id.to_string()));
    }
    Ok(id)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
