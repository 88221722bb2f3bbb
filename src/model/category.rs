use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    CommunicationSkills,
    TechnicalKnowledge,
    ProblemSolving,
    CulturalFit,
    ConfidenceAndClarity,
}

pub fn category_order() -> &'static [Category] {
    &[
        Category::CommunicationSkills,
        Category::TechnicalKnowledge,
        Category::ProblemSolving,
        Category::CulturalFit,
        Category::ConfidenceAndClarity,
    ]
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::CommunicationSkills => "Communication Skills",
            Category::TechnicalKnowledge => "Technical Knowledge",
            Category::ProblemSolving => "Problem Solving",
            Category::CulturalFit => "Cultural Fit",
            Category::ConfidenceAndClarity => "Confidence and Clarity",
        }
    }

    /// Lowercased leading word of the label, used for loose key matching.
    pub fn lead_word(self) -> String {
        self.name()
            .split(' ')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

/// A displayed score: a number, free text, or the "N/A" placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Score {
    Points(Number),
    Text(String),
    NotAvailable,
}

impl Score {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(n)) => Score::Points(n.clone()),
            Some(Value::String(s)) if s == NOT_AVAILABLE => Score::NotAvailable,
            Some(Value::String(s)) => Score::Text(s.clone()),
            _ => Score::NotAvailable,
        }
    }

    pub fn points(value: impl Into<Number>) -> Self {
        Score::Points(value.into())
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Points(n) => write!(f, "{n}"),
            Score::Text(s) => f.write_str(s),
            Score::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Score::Points(n) => n.serialize(serializer),
            Score::Text(s) => serializer.serialize_str(s),
            Score::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScoreEntry {
    pub name: String,
    pub score: Score,
    pub comment: String,
}

impl CategoryScoreEntry {
    pub fn placeholder(category: Category) -> Self {
        Self {
            name: category.name().to_string(),
            score: Score::NotAvailable,
            comment: String::new(),
        }
    }

    /// Reads `score` and `comment` out of an arbitrary payload value,
    /// substituting display defaults for anything missing or mistyped.
    pub fn from_parts(name: String, payload: &Value) -> Self {
        Self {
            name,
            score: Score::from_value(payload.get("score")),
            comment: display_text(payload.get("comment")),
        }
    }

    /// Lenient reading of an element that is already list-shaped.
    pub fn from_list_item(item: &Value) -> Self {
        Self::from_parts(display_text(item.get("name")), item)
    }
}

/// Normalized category scores. List payloads are kept verbatim; mapping
/// payloads are resolved into one entry per canonical category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Breakdown {
    Passthrough(Vec<Value>),
    Resolved(Vec<CategoryScoreEntry>),
}

impl Default for Breakdown {
    fn default() -> Self {
        Breakdown::Resolved(Vec::new())
    }
}

impl Breakdown {
    pub fn len(&self) -> usize {
        match self {
            Breakdown::Passthrough(items) => items.len(),
            Breakdown::Resolved(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display rows; verbatim list items are read leniently.
    pub fn entries(&self) -> Vec<CategoryScoreEntry> {
        match self {
            Breakdown::Passthrough(items) => {
                items.iter().map(CategoryScoreEntry::from_list_item).collect()
            }
            Breakdown::Resolved(entries) => entries.clone(),
        }
    }
}

pub fn display_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/category.rs"]
mod tests;
