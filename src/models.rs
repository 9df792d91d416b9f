use crate::error::TutorError;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One question of a subject's bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    MultipleChoice {
        prompt: String,
        options: Vec<String>,
        answer: String,
    },
    FreeText {
        prompt: String,
        answer: String,
    },
}

impl Question {
    pub fn prompt(&self) -> &str {
        match self {
            Question::MultipleChoice { prompt, .. } | Question::FreeText { prompt, .. } => prompt,
        }
    }

    pub fn expected_answer(&self) -> &str {
        match self {
            Question::MultipleChoice { answer, .. } | Question::FreeText { answer, .. } => answer,
        }
    }

    pub fn options(&self) -> &[String] {
        match self {
            Question::MultipleChoice { options, .. } => options,
            Question::FreeText { .. } => &[],
        }
    }
}

/// Persisted running average and attempt counter of a subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub score: u8,
    pub attempts: u32,
}

/// A study document attached during this run. Never persisted.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub path: PathBuf,
    pub subject: String,
    pub attached_at: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Study,
    Quiz,
    Performance,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Study, Tab::Quiz, Tab::Performance];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Study => "📘 Study",
            Tab::Quiz => "🧠 Quiz",
            Tab::Performance => "📊 Performance",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Study => 0,
            Tab::Quiz => 1,
            Tab::Performance => 2,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceView {
    BarChart,
    PieChart,
    KnowledgeGraph,
    Recommendations,
}

impl PerformanceView {
    pub const ALL: [PerformanceView; 4] = [
        PerformanceView::BarChart,
        PerformanceView::PieChart,
        PerformanceView::KnowledgeGraph,
        PerformanceView::Recommendations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PerformanceView::BarChart => "Show Bar Chart",
            PerformanceView::PieChart => "Show Pie Chart",
            PerformanceView::KnowledgeGraph => "Show Knowledge Graph",
            PerformanceView::Recommendations => "Show Recommendations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Modal message box drawn on top of the current tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub severity: Severity,
    pub title: String,
    pub body: String,
}

impl Dialog {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn from_error(err: &TutorError) -> Self {
        let severity = if err.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        };
        Self {
            severity,
            title: err.title().to_string(),
            body: capitalize(&err.to_string()),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Splash,
    Main,
    BrowsingFiles,
    QuizQuitConfirm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_tagged_json() {
        let json = r##"{"type":"free_text","prompt":"What symbol starts a comment?","answer":"#"}"##;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.prompt(), "What symbol starts a comment?");
        assert_eq!(question.expected_answer(), "#");
        assert!(question.options().is_empty());
    }

    #[test]
    fn test_question_unknown_type_rejected() {
        let json = r#"{"type":"essay","prompt":"Q","answer":"A"}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Study.next(), Tab::Quiz);
        assert_eq!(Tab::Performance.next(), Tab::Study);
        assert_eq!(Tab::Study.previous(), Tab::Performance);
    }

    #[test]
    fn test_dialog_from_error() {
        let dialog = Dialog::from_error(&TutorError::NoSelection("a file to open"));
        assert_eq!(dialog.severity, Severity::Warning);
        assert_eq!(dialog.title, "No Selection");
        assert_eq!(dialog.body, "Please select a file to open first");
    }
}
