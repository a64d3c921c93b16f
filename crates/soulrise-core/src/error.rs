use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required quiz answers: {}", .0.join(", "))]
    MissingAnswers(Vec<&'static str>),

    #[error("missing required plan fields: {}", .0.join(", "))]
    IncompletePlan(Vec<&'static str>),
}
