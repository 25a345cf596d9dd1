use std::collections::HashMap;

use crate::models::{AxisTarget, Direction, PersonalityAxis, Question, TalentAxis};

/// The built-in questionnaire: 18 items covering the four personality
/// spectra (one direct and one reversed question each) and the ten talent
/// dimensions (one direct question each). Static configuration owned by
/// the service, served to clients as-is.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    by_id: HashMap<String, Question>,
}

impl QuestionCatalog {
    pub fn builtin() -> Self {
        let questions = builtin_questions();
        let by_id = questions
            .iter()
            .map(|q| (q.id.clone(), q.clone()))
            .collect();
        Self { questions, by_id }
    }

    /// Catalog in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Id-indexed view for aggregation.
    pub fn by_id(&self) -> &HashMap<String, Question> {
        &self.by_id
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn q(id: &str, target: AxisTarget, direction: Direction, text: &str) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        target,
        direction,
    }
}

fn builtin_questions() -> Vec<Question> {
    use AxisTarget::{Personality, Talent};
    use Direction::{Direct, Reversed};

    vec![
        q(
            "p1",
            Personality(PersonalityAxis::Ei),
            Direct,
            "At parties and social events, I actively strike up conversations with many people.",
        ),
        q(
            "p2",
            Personality(PersonalityAxis::Ei),
            Reversed,
            "I feel stressed when I do not get time to myself.",
        ),
        q(
            "p3",
            Personality(PersonalityAxis::Sn),
            Direct,
            "I am drawn to future possibilities and ideas more than to concrete facts.",
        ),
        q(
            "p4",
            Personality(PersonalityAxis::Sn),
            Reversed,
            "I like to move things forward realistically, one steady step at a time.",
        ),
        q(
            "p5",
            Personality(PersonalityAxis::Tf),
            Direct,
            "When making a decision, I put logical consistency first.",
        ),
        q(
            "p6",
            Personality(PersonalityAxis::Tf),
            Reversed,
            "I give top priority to other people's feelings and the harmony of the group.",
        ),
        q(
            "p7",
            Personality(PersonalityAxis::Jp),
            Direct,
            "I like to follow the plan and settle matters clearly, one way or the other.",
        ),
        q(
            "p8",
            Personality(PersonalityAxis::Jp),
            Reversed,
            "I am good at adapting flexibly to whatever the situation brings.",
        ),
        q(
            "t1",
            Talent(TalentAxis::Strategic),
            Direct,
            "Faced with a complex problem, I quickly see the best route to a solution.",
        ),
        q(
            "t2",
            Talent(TalentAxis::Ideation),
            Direct,
            "I am good at connecting seemingly unrelated things into new ideas.",
        ),
        q(
            "t3",
            Talent(TalentAxis::Execution),
            Direct,
            "Once I commit to a goal, I see it through no matter the obstacles.",
        ),
        q(
            "t4",
            Talent(TalentAxis::Influence),
            Direct,
            "I find it rewarding to move people with my opinions and lead a team.",
        ),
        q(
            "t5",
            Talent(TalentAxis::Empathy),
            Direct,
            "I pick up on unspoken feelings and pain in others as if they were my own.",
        ),
        q(
            "t6",
            Talent(TalentAxis::Analysis),
            Direct,
            "I like to calmly analyze root causes from data and evidence.",
        ),
        q(
            "t7",
            Talent(TalentAxis::Adaptability),
            Direct,
            "Sudden changes of plan or unexpected trouble do not throw me off.",
        ),
        q(
            "t8",
            Talent(TalentAxis::Resilience),
            Direct,
            "I bounce back quickly from failure or criticism and turn it into fuel.",
        ),
        q(
            "t9",
            Talent(TalentAxis::Visionary),
            Direct,
            "I can vividly picture the world years or decades ahead and talk about it.",
        ),
        q(
            "t10",
            Talent(TalentAxis::Charisma),
            Direct,
            "People I meet for the first time often take a liking to me.",
        ),
    ]
}
