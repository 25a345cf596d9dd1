use crate::models::{Personality, PersonalityAxis, ResonanceWeights, TalentAxis, Talents, TraitVector, AXIS_MAX, AXIS_MIN};

/// Widest possible gap on a single axis (opposite extremes of the 1-10 scale).
const AXIS_SPAN: f64 = AXIS_MAX - AXIS_MIN;

/// Euclidean distance over one axis group.
#[inline]
fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Theoretical maximum distance for a group of `axis_count` axes: every
/// axis at opposite extremes. Derived from the axis count rather than
/// written out, so it tracks the axis sets.
#[inline]
pub fn max_group_distance(axis_count: usize) -> f64 {
    (axis_count as f64 * AXIS_SPAN * AXIS_SPAN).sqrt()
}

/// Raw Euclidean distance over the four personality axes.
#[inline]
pub fn personality_distance(a: &Personality, b: &Personality) -> f64 {
    euclidean(&a.values(), &b.values())
}

/// Raw Euclidean distance over the ten talent axes.
#[inline]
pub fn talent_distance(a: &Talents, b: &Talents) -> f64 {
    euclidean(&a.values(), &b.values())
}

/// Combined dissimilarity of two trait vectors in [0, 1].
///
/// Each group's raw distance is normalized by that group's theoretical
/// maximum, then the two are blended with the configured weights. The
/// personality group carries more influence on resonance than talent.
pub fn combined_distance(a: &TraitVector, b: &TraitVector, weights: &ResonanceWeights) -> f64 {
    let p_max = max_group_distance(PersonalityAxis::ALL.len());
    let t_max = max_group_distance(TalentAxis::ALL.len());

    let p_norm = personality_distance(&a.personality, &b.personality) / p_max;
    let t_norm = talent_distance(&a.talents, &b.talents) / t_max;

    p_norm * weights.personality + t_norm * weights.talent
}

/// Map a combined distance to a similarity percentage: 0 distance is
/// 100%, a full-scale distance floors at 0%. Rounded to one decimal.
pub fn similarity_percent(combined_distance: f64) -> f64 {
    let pct = ((1.0 - combined_distance) * 100.0).max(0.0);
    (pct * 10.0).round() / 10.0
}
