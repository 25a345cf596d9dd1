use serde::{Deserialize, Serialize};

use crate::models::domain::{Personality, Question, Talents, TraitVector};

/// One ranked corpus entry as returned to clients. Flattened copy of the
/// profile's display metadata plus its score against the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredFigure {
    pub id: String,
    pub name: String,
    pub era: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub quote: String,
    #[serde(rename = "typeCode")]
    pub type_code: String,
    pub personality: Personality,
    pub talents: Talents,
    #[serde(rename = "suitableCareers")]
    pub suitable_careers: Vec<String>,
    pub distance: f64,
    /// 0-100, one decimal place.
    #[serde(rename = "similarityPercent")]
    pub similarity_percent: f64,
}

/// Response for the score endpoint: the aggregated vector the client is
/// expected to persist and post back to the match endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub scores: TraitVector,
    #[serde(rename = "typeCode")]
    pub type_code: String,
}

/// Full diagnosis bundle for the results view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    #[serde(rename = "diagnosisId")]
    pub diagnosis_id: String,
    #[serde(rename = "typeCode")]
    pub type_code: String,
    /// Best match first; bounded by the request/configured limit.
    pub matches: Vec<ScoredFigure>,
    pub partner: Option<ScoredFigure>,
    pub rival: Option<ScoredFigure>,
    #[serde(rename = "recommendedSkills")]
    pub recommended_skills: Vec<String>,
    #[serde(rename = "totalFigures")]
    pub total_figures: usize,
}

/// Response for the question catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

/// Response for the category listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "figuresLoaded")]
    pub figures_loaded: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
