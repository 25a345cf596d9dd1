use serde::{Deserialize, Serialize};
use validator::Validate;

/// Neutral midpoint of every 1-10 axis. Values at or above it read as the
/// high pole of the axis (E, N, T, J for the personality group).
pub const AXIS_MIDPOINT: f64 = 5.5;

/// Default axis value when no questionnaire answer touches the axis.
pub const AXIS_NEUTRAL: f64 = 5.0;

/// Lowest and highest legal values for any axis.
pub const AXIS_MIN: f64 = 1.0;
pub const AXIS_MAX: f64 = 10.0;

/// Personality axes (four MBTI-style spectra).
///
/// Low end / high end per axis:
/// - `ei`: Introvert (1) <-> Extrovert (10)
/// - `sn`: Sensing (1) <-> Intuition (10)
/// - `tf`: Feeling (1) <-> Thinking (10)
/// - `jp`: Perceiving (1) <-> Judging (10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityAxis {
    Ei,
    Sn,
    Tf,
    Jp,
}

impl PersonalityAxis {
    /// Canonical axis order, used for iteration everywhere so distances
    /// and tie-breaks stay deterministic.
    pub const ALL: [PersonalityAxis; 4] = [
        PersonalityAxis::Ei,
        PersonalityAxis::Sn,
        PersonalityAxis::Tf,
        PersonalityAxis::Jp,
    ];
}

/// Talent axes (ten independent capability dimensions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TalentAxis {
    Strategic,
    Ideation,
    Execution,
    Influence,
    Empathy,
    Analysis,
    Adaptability,
    Resilience,
    Visionary,
    Charisma,
}

impl TalentAxis {
    /// Canonical axis order, also the tie-break order for skill
    /// recommendation.
    pub const ALL: [TalentAxis; 10] = [
        TalentAxis::Strategic,
        TalentAxis::Ideation,
        TalentAxis::Execution,
        TalentAxis::Influence,
        TalentAxis::Empathy,
        TalentAxis::Analysis,
        TalentAxis::Adaptability,
        TalentAxis::Resilience,
        TalentAxis::Visionary,
        TalentAxis::Charisma,
    ];
}

/// Scores on the four personality spectra, each in [1, 10].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Personality {
    #[validate(range(min = 1.0, max = 10.0))]
    pub ei: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub sn: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub tf: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub jp: f64,
}

impl Personality {
    pub fn get(&self, axis: PersonalityAxis) -> f64 {
        match axis {
            PersonalityAxis::Ei => self.ei,
            PersonalityAxis::Sn => self.sn,
            PersonalityAxis::Tf => self.tf,
            PersonalityAxis::Jp => self.jp,
        }
    }

    pub fn get_mut(&mut self, axis: PersonalityAxis) -> &mut f64 {
        match axis {
            PersonalityAxis::Ei => &mut self.ei,
            PersonalityAxis::Sn => &mut self.sn,
            PersonalityAxis::Tf => &mut self.tf,
            PersonalityAxis::Jp => &mut self.jp,
        }
    }

    /// Axis values in canonical order.
    pub fn values(&self) -> [f64; 4] {
        [self.ei, self.sn, self.tf, self.jp]
    }

    /// Derive the four-letter type code. Each axis contributes its high
    /// letter at or above the 5.5 midpoint, its low letter below.
    pub fn type_code(&self) -> String {
        let mut code = String::with_capacity(4);
        code.push(if self.ei >= AXIS_MIDPOINT { 'E' } else { 'I' });
        code.push(if self.sn >= AXIS_MIDPOINT { 'N' } else { 'S' });
        code.push(if self.tf >= AXIS_MIDPOINT { 'T' } else { 'F' });
        code.push(if self.jp >= AXIS_MIDPOINT { 'J' } else { 'P' });
        code
    }
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            ei: AXIS_NEUTRAL,
            sn: AXIS_NEUTRAL,
            tf: AXIS_NEUTRAL,
            jp: AXIS_NEUTRAL,
        }
    }
}

/// Scores on the ten talent dimensions, each in [1, 10].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Talents {
    #[validate(range(min = 1.0, max = 10.0))]
    pub strategic: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub ideation: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub execution: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub influence: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub empathy: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub analysis: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub adaptability: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub resilience: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub visionary: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub charisma: f64,
}

impl Talents {
    pub fn get(&self, axis: TalentAxis) -> f64 {
        match axis {
            TalentAxis::Strategic => self.strategic,
            TalentAxis::Ideation => self.ideation,
            TalentAxis::Execution => self.execution,
            TalentAxis::Influence => self.influence,
            TalentAxis::Empathy => self.empathy,
            TalentAxis::Analysis => self.analysis,
            TalentAxis::Adaptability => self.adaptability,
            TalentAxis::Resilience => self.resilience,
            TalentAxis::Visionary => self.visionary,
            TalentAxis::Charisma => self.charisma,
        }
    }

    pub fn get_mut(&mut self, axis: TalentAxis) -> &mut f64 {
        match axis {
            TalentAxis::Strategic => &mut self.strategic,
            TalentAxis::Ideation => &mut self.ideation,
            TalentAxis::Execution => &mut self.execution,
            TalentAxis::Influence => &mut self.influence,
            TalentAxis::Empathy => &mut self.empathy,
            TalentAxis::Analysis => &mut self.analysis,
            TalentAxis::Adaptability => &mut self.adaptability,
            TalentAxis::Resilience => &mut self.resilience,
            TalentAxis::Visionary => &mut self.visionary,
            TalentAxis::Charisma => &mut self.charisma,
        }
    }

    /// Axis values in canonical order.
    pub fn values(&self) -> [f64; 10] {
        [
            self.strategic,
            self.ideation,
            self.execution,
            self.influence,
            self.empathy,
            self.analysis,
            self.adaptability,
            self.resilience,
            self.visionary,
            self.charisma,
        ]
    }
}

impl Default for Talents {
    fn default() -> Self {
        Self {
            strategic: AXIS_NEUTRAL,
            ideation: AXIS_NEUTRAL,
            execution: AXIS_NEUTRAL,
            influence: AXIS_NEUTRAL,
            empathy: AXIS_NEUTRAL,
            analysis: AXIS_NEUTRAL,
            adaptability: AXIS_NEUTRAL,
            resilience: AXIS_NEUTRAL,
            visionary: AXIS_NEUTRAL,
            charisma: AXIS_NEUTRAL,
        }
    }
}

/// The shared trait-space position: one personality group plus one talent
/// group. Both the user's questionnaire result and every corpus entry are
/// described by this shape, so the axis sets always line up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct TraitVector {
    #[validate(nested)]
    pub personality: Personality,
    #[validate(nested)]
    pub talents: Talents,
}

impl TraitVector {
    /// A vector with every axis at the neutral default.
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// One curated corpus entry. Loaded once at startup, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceProfile {
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
    #[serde(rename = "suitableCareers", default)]
    pub suitable_careers: Vec<String>,
}

/// Whether a question's Likert scale runs with or against its target axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Direct,
    Reversed,
}

/// The axis a question feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "group", content = "axis")]
pub enum AxisTarget {
    Personality(PersonalityAxis),
    Talent(TalentAxis),
}

/// One questionnaire item: static metadata owned by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(flatten)]
    pub target: AxisTarget,
    pub direction: Direction,
}

/// One questionnaire response. Ephemeral: consumed during aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAnswer {
    #[serde(rename = "questionId")]
    pub question_id: String,
    /// Likert value, 1 (disagree) to 5 (agree).
    pub value: u8,
}

/// Relative influence of the two axis groups on the combined distance.
#[derive(Debug, Clone, Copy)]
pub struct ResonanceWeights {
    pub personality: f64,
    pub talent: f64,
}

impl Default for ResonanceWeights {
    fn default() -> Self {
        Self {
            personality: 0.6,
            talent: 0.4,
        }
    }
}
