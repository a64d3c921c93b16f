use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Wire names of the plan fields, in display order.
pub const PLAN_FIELDS: [&str; 6] = [
    "dailyIntention",
    "mainAction",
    "complementaryAction",
    "ritual",
    "affirmation",
    "weeklyFocus",
];

/// The daily guidance produced from a user's quiz answers and goals.
///
/// All six fields are required and must contain text. Unknown keys are
/// rejected when deserializing so that an off-schema model reply never
/// passes as a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[ts(export)]
pub struct PersonalizedPlan {
    pub daily_intention: String,
    pub main_action: String,
    pub complementary_action: String,
    pub ritual: String,
    pub affirmation: String,
    pub weekly_focus: String,
}

impl PersonalizedPlan {
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            (PLAN_FIELDS[0], &self.daily_intention),
            (PLAN_FIELDS[1], &self.main_action),
            (PLAN_FIELDS[2], &self.complementary_action),
            (PLAN_FIELDS[3], &self.ritual),
            (PLAN_FIELDS[4], &self.affirmation),
            (PLAN_FIELDS[5], &self.weekly_focus),
        ]
    }

    /// Reject a plan with any blank field. Values are checked, never rewritten.
    pub fn validate(&self) -> Result<(), CoreError> {
        let blank: Vec<&'static str> = self
            .entries()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();

        if blank.is_empty() {
            Ok(())
        } else {
            Err(CoreError::IncompletePlan(blank))
        }
    }
}

/// A generated plan as delivered to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GeneratedPlan {
    pub plan: PersonalizedPlan,
    pub generated_at: jiff::Timestamp,
}
