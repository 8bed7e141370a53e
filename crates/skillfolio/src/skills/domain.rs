use serde::Serialize;

/// One competency area shown on the radar chart and as its own detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillDefinition {
    /// Route segment, e.g. `finetuning` for `/skills/finetuning`.
    pub key: &'static str,
    /// Display name; also the key into the shared keyword table.
    pub name: &'static str,
    /// Self-assessed ability score, 0 to 100.
    pub score: u8,
    pub introduction: &'static [&'static str],
    pub rubric: &'static [RubricCriterion],
}

impl SkillDefinition {
    pub fn url(&self) -> String {
        format!("/skills/{}", self.key)
    }
}

/// A named scoring criterion listed on a skill page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RubricCriterion {
    pub label: &'static str,
    pub detail: &'static str,
}

/// How the scores were produced; identical across every skill page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvaluationNotes {
    pub summary: &'static str,
    pub models: &'static str,
    pub basis: &'static str,
    pub dimensions: &'static str,
    pub cadence: &'static str,
    pub disclaimer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

pub const SCORE_RANGE: ScoreRange = ScoreRange { min: 0, max: 100 };
