use crate::error::TutorError;
use crate::models::SubjectRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Flat subject → record mapping, stored as one JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreBook {
    records: BTreeMap<String, SubjectRecord>,
}

impl ScoreBook {
    /// Every subject starts at score 0 with no attempts.
    pub fn fresh<'a>(subjects: impl IntoIterator<Item = &'a str>) -> Self {
        let mut book = Self::default();
        book.ensure_subjects(subjects);
        book
    }

    /// Adds missing subjects at 0/0. Returns whether anything was added.
    pub fn ensure_subjects<'a>(&mut self, subjects: impl IntoIterator<Item = &'a str>) -> bool {
        let mut added = false;
        for subject in subjects {
            if !self.records.contains_key(subject) {
                self.records
                    .insert(subject.to_string(), SubjectRecord::default());
                added = true;
            }
        }
        added
    }

    pub fn get(&self, subject: &str) -> SubjectRecord {
        self.records.get(subject).copied().unwrap_or_default()
    }

    pub fn record_attempt(&mut self, subject: &str, attempt_score: u8) -> SubjectRecord {
        let record = self.records.entry(subject.to_string()).or_default();
        record.record_attempt(attempt_score);
        *record
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubjectRecord)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn validate(&self) -> Result<(), TutorError> {
        for (subject, record) in &self.records {
            if record.score > 100 {
                return Err(TutorError::InvalidPersistedState(format!(
                    "score {} of '{}' is outside 0-100",
                    record.score, subject
                )));
            }
        }
        Ok(())
    }
}

pub fn load(path: &Path) -> Result<ScoreBook, TutorError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(TutorError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    let book: ScoreBook = serde_json::from_str(&content)
        .map_err(|e| TutorError::InvalidPersistedState(e.to_string()))?;
    book.validate()?;
    Ok(book)
}

/// Overwrites `path` with the whole book, indented with four spaces.
pub fn save(path: &Path, book: &ScoreBook) -> Result<(), TutorError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    book.serialize(&mut serializer)
        .map_err(|e| TutorError::InvalidPersistedState(e.to_string()))?;
    fs::write(path, buffer)?;
    Ok(())
}

/// Loads the book at `path`, creating it with fresh records on first run.
/// Subjects missing from an existing file are added in memory only.
pub fn load_or_init(path: &Path, subjects: &[&str]) -> Result<ScoreBook, TutorError> {
    match load(path) {
        Ok(mut book) => {
            if book.ensure_subjects(subjects.iter().copied()) {
                log::info!("added new subjects to scores from {}", path.display());
            }
            Ok(book)
        }
        Err(TutorError::FileNotFound(_)) => {
            let book = ScoreBook::fresh(subjects.iter().copied());
            save(path, &book)?;
            log::info!("initialized {}", path.display());
            Ok(book)
        }
        Err(e) => Err(e),
    }
}
