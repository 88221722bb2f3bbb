use crate::report::FeedbackView;

pub fn render_feedback_text(view: &FeedbackView) -> String {
    let mut out = String::new();

    out.push_str(&view.title);
    out.push('\n');
    out.push_str(&"=".repeat(view.title.chars().count()));
    out.push_str("\n\n");

    out.push_str(&format!(
        "Overall Impression: {}/100\n",
        view.overall_impression
    ));
    out.push_str(&format!("Date: {}\n\n", view.date));

    if !view.final_assessment.is_empty() {
        out.push_str(&view.final_assessment);
        out.push_str("\n\n");
    }

    out.push_str("Breakdown of the Interview:\n");
    for (idx, entry) in view.breakdown.entries().iter().enumerate() {
        out.push_str(&format!(
            "{}. {} ({}/100)\n",
            idx + 1,
            entry.name,
            entry.score
        ));
        if !entry.comment.is_empty() {
            out.push_str(&format!("   {}\n", entry.comment));
        }
    }
    out.push('\n');

    push_list(&mut out, "Strengths", &view.strengths);
    push_list(&mut out, "Areas for Improvement", &view.areas_for_improvement);

    out.push_str(&format!("{}: {}\n", view.dashboard.label, view.dashboard.href));
    out.push_str(&format!("{}: {}\n", view.retake.label, view.retake.href));

    out
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    out.push_str(heading);
    out.push('\n');
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
    out.push('\n');
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
