use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Answers collected by the onboarding quiz, one per question.
///
/// Every field is required. Fields missing from a wire payload, or sent as
/// `null`, deserialize to an empty string so that [`QuizAnswers::validate`]
/// can report them all at once instead of failing on the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct QuizAnswers {
    #[serde(deserialize_with = "null_as_empty")]
    pub gender: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub motivation: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub emotional_state: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub routine: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub time_available: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub spirituality: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub lacking: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub commitment: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl QuizAnswers {
    /// All answers paired with their wire name, in question order.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("gender", &self.gender),
            ("motivation", &self.motivation),
            ("emotionalState", &self.emotional_state),
            ("routine", &self.routine),
            ("timeAvailable", &self.time_available),
            ("spirituality", &self.spirituality),
            ("lacking", &self.lacking),
            ("commitment", &self.commitment),
        ]
    }

    /// Wire names of every blank answer. Whitespace-only counts as blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::MissingAnswers(missing))
        }
    }
}
