use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub interview_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub total_score: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub final_assessment: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub strengths: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub areas_for_improvement: Option<Vec<String>>,
    #[serde(default)]
    pub category_scores: Option<Value>,
}

impl FeedbackRecord {
    pub fn category_scores(&self) -> CategoryScores<'_> {
        CategoryScores::classify(self.category_scores.as_ref())
    }

    pub fn belongs_to(&self, interview_id: &str, user_id: &str) -> bool {
        self.interview_id.as_deref() == Some(interview_id)
            && self.user_id.as_deref() == Some(user_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub techstack: Option<Vec<String>>,
}

/// Shape of a raw `categoryScores` payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoryScores<'a> {
    Absent,
    List(&'a [Value]),
    Mapping(&'a Map<String, Value>),
    Other,
}

impl<'a> CategoryScores<'a> {
    pub fn classify(raw: Option<&'a Value>) -> Self {
        match raw {
            None => CategoryScores::Absent,
            Some(v) if !is_truthy(v) => CategoryScores::Absent,
            Some(Value::Array(items)) => CategoryScores::List(items),
            Some(Value::Object(map)) => CategoryScores::Mapping(map),
            Some(_) => CategoryScores::Other,
        }
    }
}

/// Loose truthiness as applied by the producers of these records:
/// null, false, zero and the empty string count as missing.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/feedback.rs"]
mod tests;
