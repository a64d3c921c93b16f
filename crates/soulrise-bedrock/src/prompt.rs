//! Prompt construction for plan generation.
//!
//! The prompt is a pure function of the request and the output language:
//! identical inputs always produce byte-identical prompts.

use soulrise_core::models::request::GenerationRequest;

use crate::schema::PLAN_TOOL_NAME;

/// The instruction payload sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanPrompt {
    pub system: String,
    pub user: String,
}

/// Question labels shown to the model, in the order of
/// [`QuizAnswers::entries`](soulrise_core::models::quiz::QuizAnswers::entries).
const QUESTION_LABELS: [&str; 8] = [
    "Gender",
    "Main motivation for starting",
    "Current emotional state",
    "Daily routine",
    "Time available per day",
    "Spiritual background",
    "What feels lacking right now",
    "Commitment level",
];

fn system_prompt(language: &str) -> String {
    format!(
        "You are the daily guide of SoulRise, a devotional habit app. \
Using the user's onboarding answers and goals, write a personalized plan for today. \
Keep every field short, warm, and practical, and respect the time the user has available. \
Write every field in the language identified by the tag {language}. \
Return the plan only by calling the {PLAN_TOOL_NAME} tool with all six fields filled: \
dailyIntention, mainAction, complementaryAction, ritual, affirmation, weeklyFocus. \
Do not add any other fields or commentary."
    )
}

/// Escape the characters that would let user text break out of its tag.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn user_message(request: &GenerationRequest) -> String {
    let mut message = String::from("<quiz_answers>\n");

    for (label, (_, value)) in QUESTION_LABELS.iter().zip(request.quiz_answers.entries()) {
        message.push_str(&format!(
            "<answer question=\"{label}\">{}</answer>\n",
            escape(value.trim())
        ));
    }

    message.push_str("</quiz_answers>\n");

    let goals = request.distinct_goals();
    if goals.is_empty() {
        message.push_str("<goals>No stated preference.</goals>");
    } else {
        message.push_str("<goals>\n");
        for goal in goals {
            message.push_str(&format!("<goal>{}</goal>\n", escape(goal)));
        }
        message.push_str("</goals>");
    }

    message
}

/// Build the prompt for a request.
pub fn build_prompt(request: &GenerationRequest, language: &str) -> PlanPrompt {
    PlanPrompt {
        system: system_prompt(language),
        user: user_message(request),
    }
}
