use crate::core::matcher::MatchResult;
use crate::models::{TalentAxis, TraitVector};

/// A talent axis strictly below this value counts as a weak spot worth
/// complementing.
pub const WEAK_TALENT_THRESHOLD: f64 = 6.0;

/// How deep into the ranking the partner search looks. The window starts
/// after the best match so the pick keeps baseline compatibility without
/// collapsing into the identity match.
pub const PARTNER_POOL_SIZE: usize = 30;

/// A candidate only earns complement credit on a weak axis when its own
/// score there is at least this strong.
pub const COMPLEMENT_THRESHOLD: f64 = 7.0;

/// Multiplier applied to a qualifying axis score when accumulating the
/// complement score.
pub const COMPLEMENT_BONUS: f64 = 2.0;

/// Weight of the distance penalty that keeps the partner relatable
/// instead of purely gap-filling.
pub const DISTANCE_PENALTY: f64 = 10.0;

/// Pick a complementary partner: the candidate in the top slice of the
/// ranking that scores strongest on the axes where the user is weak.
///
/// A user with no weak axes gets the second-ranked match as a neutral
/// fallback, as does a pool where no candidate beats the floor. Exact
/// duplicates of the user (distance 0) are never proposed. Returns `None`
/// when the ranking has fewer than two entries.
pub fn select_partner<'a>(
    user: &TraitVector,
    ranked: &[MatchResult<'a>],
) -> Option<MatchResult<'a>> {
    if ranked.len() < 2 {
        return None;
    }

    let weak_axes: Vec<TalentAxis> = TalentAxis::ALL
        .into_iter()
        .filter(|&axis| user.talents.get(axis) < WEAK_TALENT_THRESHOLD)
        .collect();

    if weak_axes.is_empty() {
        return Some(ranked[1]);
    }

    let pool_end = (1 + PARTNER_POOL_SIZE).min(ranked.len());
    let mut best: Option<MatchResult<'a>> = None;
    let mut best_score = -1.0;

    for candidate in &ranked[1..pool_end] {
        if candidate.distance == 0.0 {
            continue;
        }

        let mut complement_score = 0.0;
        for &axis in &weak_axes {
            let score = candidate.profile.talents.get(axis);
            if score >= COMPLEMENT_THRESHOLD {
                complement_score += score * COMPLEMENT_BONUS;
            }
        }

        let final_score = complement_score - candidate.distance * DISTANCE_PENALTY;
        if final_score > best_score {
            best_score = final_score;
            best = Some(*candidate);
        }
    }

    best.or(Some(ranked[1]))
}

/// The antithetical match: the single least-similar corpus entry, i.e.
/// the tail of the ranking. `None` only when the corpus is empty.
pub fn select_rival<'a>(ranked: &[MatchResult<'a>]) -> Option<MatchResult<'a>> {
    ranked.last().copied()
}
