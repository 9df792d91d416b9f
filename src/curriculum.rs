use crate::error::TutorError;
use crate::models::Question;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

const EMBEDDED_CURRICULUM: &str = include_str!("data/curriculum.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub questions: Vec<Question>,
}

/// Subjects, their question banks and the knowledge graph topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

impl Curriculum {
    /// The table compiled into the binary.
    pub fn embedded() -> Result<Self, TutorError> {
        Self::from_json(EMBEDDED_CURRICULUM)
    }

    pub fn from_json(json: &str) -> Result<Self, TutorError> {
        let curriculum: Curriculum =
            serde_json::from_str(json).map_err(|e| TutorError::InvalidCurriculum(e.to_string()))?;
        curriculum.validate()?;
        Ok(curriculum)
    }

    /// Reads `path` if it exists. `Ok(None)` means no override file is present.
    pub fn load_override(path: &Path) -> Result<Option<Self>, TutorError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn subject_names(&self) -> Vec<&str> {
        self.subjects.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn subject(&self, name: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.subjects.iter().position(|s| s.name == name)
    }

    /// Edges as pairs of subject indices.
    pub fn edge_indices(&self) -> Vec<(usize, usize)> {
        self.edges
            .iter()
            .filter_map(|(a, b)| Some((self.position(a)?, self.position(b)?)))
            .collect()
    }

    fn validate(&self) -> Result<(), TutorError> {
        let invalid = |msg: String| Err(TutorError::InvalidCurriculum(msg));

        if self.subjects.is_empty() {
            return invalid("no subjects defined".to_string());
        }

        let mut seen = HashSet::new();
        for subject in &self.subjects {
            if subject.name.trim().is_empty() {
                return invalid("subject with a blank name".to_string());
            }
            if !seen.insert(subject.name.as_str()) {
                return invalid(format!("subject '{}' defined twice", subject.name));
            }
            if subject.questions.is_empty() {
                return invalid(format!("subject '{}' has no questions", subject.name));
            }
            for question in &subject.questions {
                match question {
                    Question::MultipleChoice {
                        prompt,
                        options,
                        answer,
                    } => {
                        if !options.contains(answer) {
                            return invalid(format!(
                                "answer '{}' of \"{}\" is not one of its options",
                                answer, prompt
                            ));
                        }
                    }
                    Question::FreeText { prompt, answer } => {
                        if answer.trim().is_empty() {
                            return invalid(format!("\"{}\" has a blank answer", prompt));
                        }
                    }
                }
            }
        }

        for (a, b) in &self.edges {
            if a == b {
                return invalid(format!("edge from '{}' to itself", a));
            }
            for end in [a, b] {
                if !seen.contains(end.as_str()) {
                    return invalid(format!("edge names unknown subject '{}'", end));
                }
            }
        }

        Ok(())
    }
}
