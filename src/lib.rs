//! Pantheon Algo - Matching service for the Pantheon historical-figure diagnosis app
//!
//! This library provides the profile matching engine behind the Pantheon app:
//! questionnaire aggregation, weighted trait-space ranking of a curated
//! figure corpus, and the partner / rival / skill recommendations derived
//! from the ranking.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    aggregate, recommend_skills, select_partner, select_rival, MatchResult, Matcher,
};
pub use models::{
    Personality, PersonalityAxis, RawAnswer, ReferenceProfile, ResonanceWeights, TalentAxis,
    Talents, TraitVector,
};
pub use services::{CorpusStore, QuestionCatalog};
