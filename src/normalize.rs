use serde_json::{Map, Value};
use tracing::debug;

use crate::model::category::{Breakdown, Category, CategoryScoreEntry, category_order};
use crate::model::feedback::{CategoryScores, is_truthy};

/// Reshapes a raw `categoryScores` payload into display entries.
///
/// Lists pass through untouched. Mappings are resolved against the
/// canonical categories, in canonical order, trying an exact key, then a
/// case-insensitive key, then the first key containing the category's lead
/// word. Unresolved categories get an "N/A" placeholder. Anything else
/// yields nothing.
pub fn normalize_category_scores(raw: CategoryScores<'_>) -> Breakdown {
    match raw {
        CategoryScores::Absent | CategoryScores::Other => Breakdown::default(),
        CategoryScores::List(items) => Breakdown::Passthrough(items.to_vec()),
        CategoryScores::Mapping(map) => Breakdown::Resolved(
            category_order()
                .iter()
                .map(|&category| resolve_category(map, category))
                .collect(),
        ),
    }
}

pub fn normalize_value(raw: Option<&Value>) -> Breakdown {
    normalize_category_scores(CategoryScores::classify(raw))
}

fn resolve_category(map: &Map<String, Value>, category: Category) -> CategoryScoreEntry {
    let name = category.name();

    if let Some(payload) = map.get(name).filter(|v| is_truthy(v)) {
        return CategoryScoreEntry::from_parts(name.to_string(), payload);
    }

    let lowered = name.to_lowercase();
    if let Some((key, payload)) = map.iter().find(|(k, _)| k.to_lowercase() == lowered) {
        debug!(category = name, key = key.as_str(), "case-insensitive category match");
        return CategoryScoreEntry::from_parts(key.clone(), payload);
    }

    let lead = category.lead_word();
    if let Some((key, payload)) = map.iter().find(|(k, _)| k.to_lowercase().contains(&lead)) {
        debug!(category = name, key = key.as_str(), "partial category match");
        return CategoryScoreEntry::from_parts(key.clone(), payload);
    }

    debug!(category = name, "category missing; using placeholder");
    CategoryScoreEntry::placeholder(category)
}

#[cfg(test)]
#[path = "../tests/src_inline/normalize/tests.rs"]
mod tests;
