pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod report;

pub use error::FeedbackError;
pub use model::{Breakdown, CategoryScoreEntry, CategoryScores, FeedbackRecord, InterviewRecord, Score};
pub use normalize::{normalize_category_scores, normalize_value};
