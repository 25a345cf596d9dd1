use std::cmp::Ordering;

use crate::models::{TalentAxis, Talents};

/// How many leading talent axes feed the recommendation.
pub const TOP_TALENT_COUNT: usize = 3;

/// How many catalog skills each leading axis contributes.
pub const SKILLS_PER_TALENT: usize = 2;

/// Static catalog: learnable skills per talent axis, strongest
/// recommendations first.
fn skills_for(axis: TalentAxis) -> &'static [&'static str] {
    match axis {
        TalentAxis::Strategic => &[
            "Strategic thinking",
            "Game theory",
            "KPI design and roadmapping",
            "Mind mapping",
        ],
        TalentAxis::Ideation => &[
            "Design thinking",
            "Brainstorming techniques",
            "Lateral thinking",
            "Zero-to-one thinking",
        ],
        TalentAxis::Execution => &[
            "Getting Things Done (GTD)",
            "Task management",
            "Agile development",
            "Time management",
        ],
        TalentAxis::Influence => &[
            "Negotiation",
            "Public speaking",
            "Storytelling",
            "Psychology of persuasion",
        ],
        TalentAxis::Empathy => &[
            "Active listening",
            "Coaching",
            "Emotional intelligence training",
            "Nonviolent communication",
        ],
        TalentAxis::Analysis => &[
            "Logical thinking",
            "Data analysis (SQL/Python)",
            "Foundations of statistics",
            "Critical thinking",
        ],
        TalentAxis::Adaptability => &[
            "Unlearning",
            "Resilience training",
            "Situational leadership",
            "Improv theater",
        ],
        TalentAxis::Resilience => &[
            "Stress management",
            "Mindfulness meditation",
            "Cognitive behavioral therapy basics",
            "Learning from failure",
        ],
        TalentAxis::Visionary => &[
            "Futures forecasting",
            "Visionary leadership",
            "Sci-fi prototyping",
            "Trend analysis",
        ],
        TalentAxis::Charisma => &[
            "Personal branding",
            "Art of statecraft",
            "Nonverbal communication",
            "Leadership theory",
        ],
    }
}

/// Recommend skills from a talent profile: take the top three axes by
/// value (canonical axis order breaks ties), contribute the first two
/// catalog skills per axis, and drop duplicates while keeping first-seen
/// order. At most six entries.
pub fn recommend_skills(talents: &Talents) -> Vec<&'static str> {
    let mut ranked: Vec<(TalentAxis, f64)> = TalentAxis::ALL
        .iter()
        .map(|&axis| (axis, talents.get(axis)))
        .collect();

    // Stable sort: ties keep canonical axis order
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut skills: Vec<&'static str> = Vec::with_capacity(TOP_TALENT_COUNT * SKILLS_PER_TALENT);
    for (axis, _) in ranked.into_iter().take(TOP_TALENT_COUNT) {
        for &skill in skills_for(axis).iter().take(SKILLS_PER_TALENT) {
            if !skills.contains(&skill) {
                skills.push(skill);
            }
        }
    }

    skills
}
