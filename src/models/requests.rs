use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::TraitVector;

/// One submitted questionnaire answer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnswerInput {
    #[validate(length(min = 1))]
    #[serde(alias = "question_id", rename = "questionId")]
    pub question_id: String,
    /// Likert value on the 1-5 scale.
    #[validate(range(min = 1, max = 5))]
    pub value: u8,
}

/// Request to aggregate raw questionnaire answers into a trait vector.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(nested)]
    #[serde(default)]
    pub answers: Vec<AnswerInput>,
}

/// Request to match a trait vector against the figure corpus.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(nested)]
    pub scores: TraitVector,
    /// How many ranked entries to return. Defaults and caps come from
    /// service configuration.
    #[serde(default)]
    pub limit: Option<u16>,
}
