use std::sync::Arc;

use crate::core::distance::{combined_distance, similarity_percent};
use crate::models::{ReferenceProfile, ResonanceWeights, TraitVector};

/// One scored corpus entry. Borrowed from the matcher's corpus; produced
/// fresh on every ranking and never persisted.
#[derive(Debug, Clone, Copy)]
pub struct MatchResult<'a> {
    pub profile: &'a ReferenceProfile,
    pub distance: f64,
    pub similarity_percent: f64,
}

/// Ranks the figure corpus against a user's trait vector.
///
/// The corpus is handed over at construction and shared read-only for the
/// life of the process; ranking itself is a pure single pass plus a sort.
#[derive(Debug, Clone)]
pub struct Matcher {
    corpus: Arc<Vec<ReferenceProfile>>,
    weights: ResonanceWeights,
}

impl Matcher {
    pub fn new(corpus: Arc<Vec<ReferenceProfile>>, weights: ResonanceWeights) -> Self {
        Self { corpus, weights }
    }

    pub fn with_default_weights(corpus: Arc<Vec<ReferenceProfile>>) -> Self {
        Self::new(corpus, ResonanceWeights::default())
    }

    pub fn corpus(&self) -> &[ReferenceProfile] {
        &self.corpus
    }

    /// Score every corpus entry against `user` and return the full list
    /// sorted ascending by distance. The sort is stable, so equal
    /// distances keep corpus order and the first-listed figure wins ties.
    /// No entry is filtered out; an empty corpus yields an empty list.
    pub fn rank(&self, user: &TraitVector) -> Vec<MatchResult<'_>> {
        let mut results: Vec<MatchResult<'_>> = self
            .corpus
            .iter()
            .map(|profile| {
                let vector = TraitVector {
                    personality: profile.personality,
                    talents: profile.talents,
                };
                let distance = combined_distance(user, &vector, &self.weights);
                MatchResult {
                    profile,
                    distance,
                    similarity_percent: similarity_percent(distance),
                }
            })
            .collect();

        results.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Personality, Talents};

    fn profile(id: &str, talents: Talents) -> ReferenceProfile {
        ReferenceProfile {
            id: id.to_string(),
            name: format!("Figure {}", id),
            era: "19th Century".to_string(),
            title: "Test figure".to_string(),
            category: "Scientists & inventors".to_string(),
            description: String::new(),
            quote: String::new(),
            type_code: "INTJ".to_string(),
            personality: Personality::default(),
            talents,
            suitable_careers: vec![],
        }
    }

    fn corpus(profiles: Vec<ReferenceProfile>) -> Arc<Vec<ReferenceProfile>> {
        Arc::new(profiles)
    }

    #[test]
    fn test_rank_is_total_and_sorted() {
        let far = Talents {
            strategic: 10.0,
            charisma: 10.0,
            ..Talents::default()
        };
        let near = Talents {
            strategic: 6.0,
            ..Talents::default()
        };
        let matcher = Matcher::with_default_weights(corpus(vec![
            profile("far", far),
            profile("near", near),
        ]));

        let ranked = matcher.rank(&TraitVector::neutral());

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].profile.id, "near");
        assert_eq!(ranked[1].profile.id, "far");
        assert!(ranked[0].distance <= ranked[1].distance);
    }

    #[test]
    fn test_rank_empty_corpus() {
        let matcher = Matcher::with_default_weights(corpus(vec![]));
        assert!(matcher.rank(&TraitVector::neutral()).is_empty());
    }

    #[test]
    fn test_equal_distances_keep_corpus_order() {
        let same = Talents {
            empathy: 9.0,
            ..Talents::default()
        };
        let matcher = Matcher::with_default_weights(corpus(vec![
            profile("first", same),
            profile("second", same),
        ]));

        let ranked = matcher.rank(&TraitVector::neutral());
        assert_eq!(ranked[0].distance, ranked[1].distance);
        assert_eq!(ranked[0].profile.id, "first");
        assert_eq!(ranked[1].profile.id, "second");
    }

    #[test]
    fn test_rank_is_deterministic() {
        let a = Talents {
            analysis: 8.0,
            ..Talents::default()
        };
        let b = Talents {
            ideation: 3.0,
            ..Talents::default()
        };
        let matcher =
            Matcher::with_default_weights(corpus(vec![profile("a", a), profile("b", b)]));

        let mut user = TraitVector::neutral();
        user.personality.ei = 7.0;

        let first = matcher.rank(&user);
        let second = matcher.rank(&user);

        assert_eq!(first.len(), second.len());
        for (x, y) in first.iter().zip(&second) {
            assert_eq!(x.profile.id, y.profile.id);
            assert_eq!(x.distance, y.distance);
            assert_eq!(x.similarity_percent, y.similarity_percent);
        }
    }
}
