use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::input::{FeedbackSource, InputError, read_json, validate_id};
use crate::model::{FeedbackRecord, InterviewRecord};

const INTERVIEWS_DIR: &str = "interviews";
const FEEDBACK_DIR: &str = "feedback";

/// Directory-backed record store:
/// `<root>/interviews/<id>.json[.gz]` and `<root>/feedback/*.json[.gz]`.
#[derive(Debug, Clone)]
pub struct FsFeedbackStore {
    root: PathBuf,
}

impl FsFeedbackStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn interview_path(&self, id: &str) -> Option<PathBuf> {
        let dir = self.root.join(INTERVIEWS_DIR);
        [format!("{id}.json"), format!("{id}.json.gz")]
            .into_iter()
            .map(|name| dir.join(name))
            .find(|p| p.is_file())
    }

    fn feedback_files(&self) -> Result<Vec<PathBuf>, InputError> {
        let dir = self.root.join(FEEDBACK_DIR);
        if !dir.is_dir() {
            debug!("no feedback directory at {}", dir.display());
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&dir).map_err(|source| InputError::Io {
            path: dir.clone(),
            source,
        })?;
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| InputError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() && is_json_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl FeedbackSource for FsFeedbackStore {
    fn interview_by_id(&self, id: &str) -> Result<Option<InterviewRecord>, InputError> {
        let id = validate_id(id)?;
        let Some(path) = self.interview_path(id) else {
            return Ok(None);
        };
        let mut record: InterviewRecord = read_json(&path)?;
        if record.id.as_deref().is_none_or(str::is_empty) {
            record.id = Some(id.to_string());
        }
        Ok(Some(record))
    }

    fn feedback_by_interview(
        &self,
        interview_id: &str,
        user_id: &str,
    ) -> Result<Option<FeedbackRecord>, InputError> {
        validate_id(interview_id)?;
        for path in self.feedback_files()? {
            let record: FeedbackRecord = match read_json(&path) {
                Ok(r) => r,
                Err(err) => {
                    warn!("skipping unreadable feedback file: {err}");
                    continue;
                }
            };
            if record.belongs_to(interview_id, user_id) {
                debug!("feedback for {interview_id} found in {}", path.display());
                return Ok(Some(record));
            }
        }
        Ok(None)
    }
}

fn is_json_file(path: &Path) -> bool {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    name.ends_with(".json") || name.ends_with(".json.gz")
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/store.rs"]
mod tests;
