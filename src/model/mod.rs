pub mod category;
pub mod feedback;

pub use category::{Breakdown, Category, CategoryScoreEntry, Score, category_order};
pub use feedback::{CategoryScores, FeedbackRecord, InterviewRecord};
