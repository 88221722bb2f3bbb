use crate::model::Breakdown;
use crate::report::FeedbackView;

pub fn render_feedback_json(view: &FeedbackView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}

pub fn render_breakdown_json(breakdown: &Breakdown) -> serde_json::Result<String> {
    serde_json::to_string_pretty(breakdown)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
