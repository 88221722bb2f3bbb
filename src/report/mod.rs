use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

pub mod json;
pub mod text;

use crate::model::category::NOT_AVAILABLE;
use crate::model::{Breakdown, FeedbackRecord, InterviewRecord, Score};
use crate::normalize::normalize_category_scores;

pub const DATE_FORMAT: &str = "%b %-d, %Y %-I:%M %p";
pub const DASHBOARD_LINK: &str = "/";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

/// Everything the feedback page displays, with defaults already applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackView {
    pub interview_id: String,
    pub title: String,
    pub overall_impression: Score,
    pub date: String,
    pub final_assessment: String,
    pub breakdown: Breakdown,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub dashboard: NavLink,
    pub retake: NavLink,
}

pub fn build_feedback_view(
    interview: &InterviewRecord,
    feedback: Option<&FeedbackRecord>,
) -> FeedbackView {
    let interview_id = interview.id.as_deref().unwrap_or_default();
    let role = interview.role.as_deref().unwrap_or_default();
    let title = format!(
        "Feedback on the Interview - {} Interview",
        capitalize_words(role)
    );

    let overall_impression = feedback
        .map(|fb| Score::from_value(fb.total_score.as_ref()))
        .unwrap_or(Score::NotAvailable);
    let date = format_created_at(feedback.and_then(|fb| fb.created_at.as_deref()));
    let final_assessment = feedback
        .and_then(|fb| fb.final_assessment.clone())
        .unwrap_or_default();
    let breakdown = feedback
        .map(|fb| normalize_category_scores(fb.category_scores()))
        .unwrap_or_default();
    let strengths = feedback
        .and_then(|fb| fb.strengths.clone())
        .unwrap_or_default();
    let areas = feedback
        .and_then(|fb| fb.areas_for_improvement.clone())
        .unwrap_or_default();

    FeedbackView {
        interview_id: interview_id.to_string(),
        title,
        overall_impression,
        date,
        final_assessment,
        breakdown,
        strengths,
        areas_for_improvement: areas,
        dashboard: NavLink {
            label: "Back to dashboard",
            href: DASHBOARD_LINK.to_string(),
        },
        retake: NavLink {
            label: "Retake Interview",
            href: format!("/interview/{interview_id}"),
        },
    }
}

/// Formats a record timestamp as e.g. `Mar 4, 2025 9:05 PM`, or "N/A".
pub fn format_created_at(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn capitalize_words(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if at_word_start && ch.is_alphanumeric() {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
            if ch.is_whitespace() {
                at_word_start = true;
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
