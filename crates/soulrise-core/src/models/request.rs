use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::quiz::QuizAnswers;

/// A single unit of work for the plan generator: the quiz answers plus the
/// goals the user picked during onboarding.
///
/// `goals` may be empty, meaning no stated preference. Duplicates are
/// tolerated; see [`GenerationRequest::distinct_goals`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GenerationRequest {
    pub quiz_answers: QuizAnswers,
    #[serde(default)]
    pub goals: Vec<String>,
}

impl GenerationRequest {
    pub fn new(quiz_answers: QuizAnswers, goals: Vec<String>) -> Self {
        Self {
            quiz_answers,
            goals,
        }
    }

    /// Non-blank goals, trimmed, each listed once in first-seen order.
    pub fn distinct_goals(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.goals.len());
        for goal in &self.goals {
            let goal = goal.trim();
            if !goal.is_empty() && !seen.contains(&goal) {
                seen.push(goal);
            }
        }
        seen
    }
}
