use crate::skills::{EvaluationNotes, RubricCriterion, ScoreRange};
use serde::Serialize;

/// A post as it appears in a list: home page, skill page, related posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummaryView {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub formatted_date: String,
    pub tags: Vec<String>,
    pub summary: String,
    pub href: String,
}

/// One axis of the skills radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbilityPoint {
    pub subject: &'static str,
    pub score: u8,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub title: String,
    pub description: String,
    pub ability_chart: Vec<AbilityPoint>,
    pub latest_posts: Vec<PostSummaryView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillListingEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub score: u8,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillPageView {
    pub key: &'static str,
    pub name: &'static str,
    pub score: u8,
    pub introduction: Vec<&'static str>,
    pub related_posts: Vec<PostSummaryView>,
    pub rubric: Vec<RubricCriterion>,
    pub score_range: ScoreRange,
    pub evaluation: EvaluationNotes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewEntry {
    pub slug: String,
    pub title: String,
    pub href: String,
    pub active: bool,
}

/// The selected post in the preview pane. `body` is the unrendered source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivePostView {
    pub slug: String,
    pub title: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub tags: Vec<String>,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogPreviewView {
    pub posts: Vec<PreviewEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<ActivePostView>,
}
