use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::models::{ReferenceProfile, TraitVector, AXIS_MAX, AXIS_MIN};

/// Errors that can occur while loading the figure corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse corpus file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Corpus file {0} contains no usable profiles")]
    Empty(String),
}

/// The reference corpus: curated historical figures loaded once at
/// startup and shared read-only for the rest of the process lifetime.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    profiles: Arc<Vec<ReferenceProfile>>,
}

impl CorpusStore {
    /// Load and sanity-check the corpus from a JSON file.
    ///
    /// Entries with any axis outside the 1-10 scale are skipped with a
    /// warning; later entries reusing an id are dropped in favor of the
    /// first occurrence. A file that yields zero usable profiles is an
    /// error since the service cannot match against nothing.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let parsed: Vec<ReferenceProfile> = serde_json::from_str(&raw)?;
        let total = parsed.len();

        let mut profiles: Vec<ReferenceProfile> = Vec::with_capacity(total);
        for profile in parsed {
            if !in_scale(&TraitVector {
                personality: profile.personality,
                talents: profile.talents,
            }) {
                tracing::warn!("Skipping corpus entry {} with out-of-scale axis", profile.id);
                continue;
            }
            if profiles.iter().any(|p| p.id == profile.id) {
                tracing::warn!("Skipping duplicate corpus id {}", profile.id);
                continue;
            }
            profiles.push(profile);
        }

        if profiles.is_empty() {
            return Err(CorpusError::Empty(path.display().to_string()));
        }

        tracing::info!(
            "Loaded {} figures from {} ({} raw entries)",
            profiles.len(),
            path.display(),
            total
        );

        Ok(Self {
            profiles: Arc::new(profiles),
        })
    }

    /// Build a store from already-validated profiles. Used by tests.
    pub fn from_profiles(profiles: Vec<ReferenceProfile>) -> Self {
        Self {
            profiles: Arc::new(profiles),
        }
    }

    pub fn profiles(&self) -> Arc<Vec<ReferenceProfile>> {
        Arc::clone(&self.profiles)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for profile in self.profiles.iter() {
            if !categories.contains(&profile.category) {
                categories.push(profile.category.clone());
            }
        }
        categories
    }
}

fn in_scale(vector: &TraitVector) -> bool {
    vector
        .personality
        .values()
        .iter()
        .chain(vector.talents.values().iter())
        .all(|&v| (AXIS_MIN..=AXIS_MAX).contains(&v))
}
