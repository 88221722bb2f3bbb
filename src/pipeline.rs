use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::{NormalizeConfig, OutputFormat, RenderConfig};
use crate::error::FeedbackError;
use crate::input::{FeedbackSource, load_feedback_file};
use crate::normalize::normalize_category_scores;
use crate::report::json::{render_breakdown_json, render_feedback_json};
use crate::report::text::render_feedback_text;
use crate::report::{FeedbackView, build_feedback_view};

pub const TEXT_REPORT: &str = "feedback.txt";
pub const JSON_REPORT: &str = "feedback.json";

pub fn load_view(
    source: &dyn FeedbackSource,
    interview_id: &str,
    user_id: &str,
) -> Result<FeedbackView, FeedbackError> {
    let interview = source
        .interview_by_id(interview_id)?
        .ok_or_else(|| FeedbackError::InterviewNotFound(interview_id.to_string()))?;

    let feedback = source.feedback_by_interview(interview_id, user_id)?;
    if feedback.is_none() {
        warn!("no feedback recorded for interview {interview_id} and user {user_id}");
    }

    Ok(build_feedback_view(&interview, feedback.as_ref()))
}

/// Renders one interview's feedback. Returns the stdout payload, if any.
pub fn run_render(
    config: &RenderConfig,
    source: &dyn FeedbackSource,
) -> Result<Option<String>, FeedbackError> {
    let view = load_view(source, &config.interview_id, &config.user_id)?;
    info!(
        "rendering feedback for interview {} ({} categories)",
        config.interview_id,
        view.breakdown.len()
    );

    match &config.out_dir {
        Some(dir) => {
            let written = write_reports(&view, dir)?;
            for path in &written {
                info!("wrote {}", path.display());
            }
            Ok(None)
        }
        None => {
            let rendered = match config.format {
                OutputFormat::Text => render_feedback_text(&view),
                OutputFormat::Json => render_feedback_json(&view)?,
            };
            Ok(Some(rendered))
        }
    }
}

pub fn write_reports(view: &FeedbackView, out_dir: &Path) -> Result<Vec<PathBuf>, FeedbackError> {
    fs::create_dir_all(out_dir).map_err(|source| FeedbackError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let text_path = out_dir.join(TEXT_REPORT);
    write_text(&text_path, &render_feedback_text(view))?;

    let json_path = out_dir.join(JSON_REPORT);
    write_text(&json_path, &render_feedback_json(view)?)?;

    Ok(vec![text_path, json_path])
}

pub fn run_normalize(config: &NormalizeConfig) -> Result<String, FeedbackError> {
    let record = load_feedback_file(&config.input)?;
    let breakdown = normalize_category_scores(record.category_scores());
    Ok(render_breakdown_json(&breakdown)?)
}

fn write_text(path: &Path, contents: &str) -> Result<(), FeedbackError> {
    fs::write(path, contents).map_err(|source| FeedbackError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/pipeline/tests.rs"]
mod tests;
