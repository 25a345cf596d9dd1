use std::collections::HashMap;

use crate::models::{AxisTarget, Direction, Question, RawAnswer, TraitVector};

/// Reduce raw questionnaire answers to one trait vector.
///
/// Each Likert value v in {1..5} contributes `v * 2` to its target axis
/// (range 2-10); reversed questions flip the contribution to `12 - v * 2`
/// so agreement lands on the low end of the axis. Contributions hitting
/// the same axis fold into a running mean in arrival order:
///
/// ```text
/// mean' = (mean * count + value) / (count + 1)
/// ```
///
/// The incremental recurrence is kept as-is rather than a closed-form
/// average so repeated runs reproduce the historical rounding exactly.
/// Axes no answer touches stay at the neutral default of 5.
///
/// Answers referencing unknown question ids are skipped. Likert values
/// outside 1-5 are the caller's responsibility; the HTTP layer rejects
/// them before aggregation.
pub fn aggregate(answers: &[RawAnswer], catalog: &HashMap<String, Question>) -> TraitVector {
    let mut vector = TraitVector::neutral();
    let mut counts: HashMap<AxisTarget, u32> = HashMap::new();

    for answer in answers {
        let Some(question) = catalog.get(&answer.question_id) else {
            continue;
        };

        let mut value = f64::from(answer.value) * 2.0;
        if question.direction == Direction::Reversed {
            value = 12.0 - value;
        }

        let slot = match question.target {
            AxisTarget::Personality(axis) => vector.personality.get_mut(axis),
            AxisTarget::Talent(axis) => vector.talents.get_mut(axis),
        };

        let count = counts.entry(question.target).or_insert(0);
        if *count == 0 {
            // First contribution replaces the neutral seed
            *slot = value;
        } else {
            *slot = (*slot * f64::from(*count) + value) / f64::from(*count + 1);
        }
        *count += 1;
    }

    vector
}
