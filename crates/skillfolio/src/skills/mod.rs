mod catalog;
pub mod domain;
mod relevance;

pub use catalog::{SkillCatalog, EVALUATION_NOTES, SKILL_KEYWORDS};
pub use domain::{EvaluationNotes, RubricCriterion, ScoreRange, SkillDefinition, SCORE_RANGE};
pub use relevance::{
    filter_relevant, published_posts, sort_newest_first, SkillKeywordTable, RELATED_POST_LIMIT,
};
