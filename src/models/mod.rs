// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AxisTarget, Direction, Personality, PersonalityAxis, Question, RawAnswer, ReferenceProfile,
    ResonanceWeights, TalentAxis, Talents, TraitVector, AXIS_MAX, AXIS_MIDPOINT, AXIS_MIN,
    AXIS_NEUTRAL,
};
pub use requests::{AnswerInput, MatchRequest, ScoreRequest};
pub use responses::{
    CategoriesResponse, ErrorResponse, HealthResponse, MatchResponse, QuestionsResponse,
    ScoreResponse, ScoredFigure,
};
