//! JSON schema of the plan, handed to the model as a tool input schema.

use serde_json::{Map, Value, json};
use soulrise_core::models::plan::PLAN_FIELDS;

/// Name of the tool the model is forced to call with the finished plan.
pub const PLAN_TOOL_NAME: &str = "record_personalized_plan";

pub const PLAN_TOOL_DESCRIPTION: &str =
    "Record the user's personalized daily plan. Every field is required.";

/// Field descriptions, in the order of [`PLAN_FIELDS`].
const FIELD_DESCRIPTIONS: [&str; 6] = [
    "One sentence naming the intention the user carries through today.",
    "The single most important concrete action for today.",
    "A smaller action that supports the main action.",
    "A short devotional ritual that fits the user's available time.",
    "A first-person affirmation the user can repeat.",
    "The theme the user focuses on this week.",
];

/// Build the plan schema. Pure: every call returns the same value.
pub fn plan_schema() -> Value {
    let properties: Map<String, Value> = PLAN_FIELDS
        .iter()
        .zip(FIELD_DESCRIPTIONS)
        .map(|(name, description)| {
            (
                name.to_string(),
                json!({
                    "type": "string",
                    "minLength": 1,
                    "description": description,
                }),
            )
        })
        .collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": PLAN_FIELDS,
        "additionalProperties": false,
    })
}
