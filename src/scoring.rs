use crate::models::{Question, SubjectRecord};

pub const EXCELLENT_THRESHOLD: u8 = 80;
pub const GOOD_THRESHOLD: u8 = 50;

/// Mastery band of a score. Both the end-of-quiz message and the
/// recommendations use these inclusive boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Tier {
    pub fn from_score(score: u8) -> Tier {
        if score >= EXCELLENT_THRESHOLD {
            Tier::Excellent
        } else if score >= GOOD_THRESHOLD {
            Tier::Good
        } else {
            Tier::NeedsImprovement
        }
    }

    pub fn quiz_message(self) -> &'static str {
        match self {
            Tier::Excellent => "🌟 Excellent! You're ready for harder topics.",
            Tier::Good => "✅ Good effort! Revise and retry for better results.",
            Tier::NeedsImprovement => "⚠️ Needs improvement. Review study material and retry.",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Tier::Excellent => "Advance to complex topics or practical applications.",
            Tier::Good => "Revise core concepts and practice medium-level exercises.",
            Tier::NeedsImprovement => "Revisit basics and go through easier study material.",
        }
    }
}

/// Free text ignores case and surrounding whitespace, a choice must match
/// the option string exactly. Empty answers never count.
pub fn is_correct(question: &Question, answer: &str) -> bool {
    match question {
        Question::MultipleChoice { answer: expected, .. } => {
            !answer.is_empty() && answer == expected
        }
        Question::FreeText { answer: expected, .. } => {
            let given = answer.trim();
            !given.is_empty() && given.to_lowercase() == expected.trim().to_lowercase()
        }
    }
}

/// `round(100 * correct / total)`, halves rounding up.
pub fn attempt_score(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    ((200 * correct + total) / (2 * total)) as u8
}

/// `floor((previous + attempt) / 2)`.
pub fn blend(previous: u8, attempt: u8) -> u8 {
    ((u16::from(previous.min(100)) + u16::from(attempt.min(100))) / 2) as u8
}

impl SubjectRecord {
    pub fn record_attempt(&mut self, attempt_score: u8) {
        self.attempts = self.attempts.saturating_add(1);
        self.score = blend(self.score, attempt_score);
    }

    pub fn tier(&self) -> Tier {
        Tier::from_score(self.score)
    }
}

pub fn completion_message(score: u8) -> String {
    format!(
        "Your Score: {}%\n\n{}",
        score,
        Tier::from_score(score).quiz_message()
    )
}
