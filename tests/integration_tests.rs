// Integration tests for Pantheon Algo

use std::collections::HashSet;
use std::sync::Arc;

use pantheon_algo::core::{aggregate, recommend_skills, select_partner, select_rival, Matcher};
use pantheon_algo::models::{
    Personality, RawAnswer, ReferenceProfile, TalentAxis, Talents, TraitVector,
};
use pantheon_algo::services::{CorpusStore, QuestionCatalog};

fn figure(id: &str, category: &str, personality: Personality, talents: Talents) -> ReferenceProfile {
    ReferenceProfile {
        id: id.to_string(),
        name: format!("Figure {}", id),
        era: "Test era".to_string(),
        title: format!("Title of {}", id),
        category: category.to_string(),
        description: "A figure used in tests.".to_string(),
        quote: "Quoted.".to_string(),
        type_code: personality.type_code(),
        personality,
        talents,
        suitable_careers: vec!["Tester".to_string()],
    }
}

fn diverse_corpus() -> Arc<Vec<ReferenceProfile>> {
    Arc::new(vec![
        figure(
            "strategist",
            "World leaders & politicians",
            Personality {
                ei: 7.0,
                sn: 6.0,
                tf: 8.0,
                jp: 8.0,
            },
            Talents {
                strategic: 10.0,
                analysis: 8.0,
                ..Talents::default()
            },
        ),
        figure(
            "empath",
            "Philosophers & thinkers",
            Personality {
                ei: 4.0,
                sn: 5.0,
                tf: 2.0,
                jp: 5.0,
            },
            Talents {
                empathy: 10.0,
                charisma: 7.0,
                ..Talents::default()
            },
        ),
        figure(
            "opposite",
            "Artists & creators",
            Personality {
                ei: 10.0,
                sn: 10.0,
                tf: 10.0,
                jp: 10.0,
            },
            Talents {
                strategic: 10.0,
                ideation: 10.0,
                execution: 10.0,
                influence: 10.0,
                empathy: 10.0,
                analysis: 10.0,
                adaptability: 10.0,
                resilience: 10.0,
                visionary: 10.0,
                charisma: 10.0,
            },
        ),
        figure(
            "neutralist",
            "Philosophers & thinkers",
            Personality::default(),
            Talents::default(),
        ),
    ])
}

fn introverted_user() -> TraitVector {
    let mut user = TraitVector::neutral();
    user.personality.ei = 2.0;
    user.personality.tf = 3.0;
    user.talents.empathy = 8.0;
    user.talents.strategic = 3.0;
    user
}

#[test]
fn test_end_to_end_questionnaire_to_result() {
    let catalog = QuestionCatalog::builtin();

    // A mildly introverted, empathetic answer sheet
    let answers: Vec<RawAnswer> = vec![
        ("p1", 2),
        ("p2", 4),
        ("p3", 3),
        ("p4", 3),
        ("p5", 2),
        ("p6", 5),
        ("p7", 3),
        ("p8", 3),
        ("t1", 2),
        ("t2", 3),
        ("t3", 3),
        ("t4", 2),
        ("t5", 5),
        ("t6", 3),
        ("t7", 3),
        ("t8", 4),
        ("t9", 3),
        ("t10", 3),
    ]
    .into_iter()
    .map(|(id, value)| RawAnswer {
        question_id: id.to_string(),
        value,
    })
    .collect();

    let scores = aggregate(&answers, catalog.by_id());
    assert!(scores.personality.ei < 5.5, "answers lean introverted");
    assert!(scores.talents.empathy > scores.talents.strategic);

    let matcher = Matcher::with_default_weights(diverse_corpus());
    let ranked = matcher.rank(&scores);

    assert_eq!(ranked.len(), 4);
    assert_eq!(ranked[0].profile.id, "empath");

    let rival = select_rival(&ranked).unwrap();
    assert_eq!(rival.profile.id, "opposite");

    let partner = select_partner(&scores, &ranked);
    assert!(partner.is_some());

    let skills = recommend_skills(&ranked[0].profile.talents);
    assert!(!skills.is_empty() && skills.len() <= 6);
}

#[test]
fn test_ranking_totality_and_uniqueness() {
    let matcher = Matcher::with_default_weights(diverse_corpus());
    let ranked = matcher.rank(&introverted_user());

    assert_eq!(ranked.len(), matcher.corpus().len());

    let ids: HashSet<&str> = ranked.iter().map(|m| m.profile.id.as_str()).collect();
    assert_eq!(ids.len(), ranked.len());
    for profile in matcher.corpus() {
        assert!(ids.contains(profile.id.as_str()));
    }
}

#[test]
fn test_ranking_determinism() {
    let matcher = Matcher::with_default_weights(diverse_corpus());
    let user = introverted_user();

    let first = matcher.rank(&user);
    let second = matcher.rank(&user);

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.profile.id, b.profile.id);
        assert_eq!(a.distance, b.distance);
        assert_eq!(a.similarity_percent, b.similarity_percent);
    }
}

#[test]
fn test_ranking_sorted_by_similarity() {
    let matcher = Matcher::with_default_weights(diverse_corpus());
    let ranked = matcher.rank(&introverted_user());

    for pair in ranked.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
        assert!(pair[0].similarity_percent >= pair[1].similarity_percent);
    }
}

#[test]
fn test_rival_has_maximum_distance() {
    let matcher = Matcher::with_default_weights(diverse_corpus());
    let ranked = matcher.rank(&introverted_user());

    let rival = select_rival(&ranked).unwrap();
    let max_distance = ranked
        .iter()
        .map(|m| m.distance)
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(rival.distance, max_distance);
}

#[test]
fn test_partner_fallback_for_balanced_user() {
    let matcher = Matcher::with_default_weights(diverse_corpus());

    let mut user = TraitVector::neutral();
    for axis in TalentAxis::ALL {
        *user.talents.get_mut(axis) = 6.0;
    }

    let ranked = matcher.rank(&user);
    let partner = select_partner(&user, &ranked).unwrap();
    assert_eq!(partner.profile.id, ranked[1].profile.id);
}

#[test]
fn test_partner_prefers_complement_over_similarity() {
    // P2 sits closer in raw trait space, but P1 covers the user's weak
    // strategic axis and wins the partner pick.
    let p1 = figure(
        "p1",
        "Scientists & inventors",
        Personality::default(),
        Talents {
            strategic: 10.0,
            ..Talents::default()
        },
    );
    let p2 = figure(
        "p2",
        "Scientists & inventors",
        Personality::default(),
        Talents {
            strategic: 2.0,
            ..Talents::default()
        },
    );
    let matcher = Matcher::with_default_weights(Arc::new(vec![p1, p2]));

    let mut user = TraitVector::neutral();
    user.talents.strategic = 3.0;

    let ranked = matcher.rank(&user);
    assert_eq!(ranked[0].profile.id, "p2");
    assert!(ranked[0].distance < ranked[1].distance);

    let partner = select_partner(&user, &ranked).unwrap();
    assert_eq!(partner.profile.id, "p1");
}

#[test]
fn test_empty_corpus_degrades_gracefully() {
    let matcher = Matcher::with_default_weights(Arc::new(vec![]));
    let user = TraitVector::neutral();

    let ranked = matcher.rank(&user);
    assert!(ranked.is_empty());
    assert!(select_partner(&user, &ranked).is_none());
    assert!(select_rival(&ranked).is_none());
}

#[test]
fn test_shipped_corpus_loads() {
    let store = CorpusStore::load("data/figures.json").expect("shipped corpus should load");
    assert!(store.len() >= 10);
    assert_eq!(store.categories().len(), 6);

    // Every entry ranks against a neutral user
    let matcher = Matcher::with_default_weights(store.profiles());
    let ranked = matcher.rank(&TraitVector::neutral());
    assert_eq!(ranked.len(), store.len());
    for m in &ranked {
        assert!(m.similarity_percent >= 0.0 && m.similarity_percent <= 100.0);
        assert!(m.distance >= 0.0);
    }
}
