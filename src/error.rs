use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while the tutor is running.
///
/// None of these are fatal: the UI turns each one into a dialog and the user
/// retries the action.
#[derive(Debug, Error)]
pub enum TutorError {
    /// A file that was expected on disk is not there.
    #[error("the file path no longer exists:\n{}", .0.display())]
    FileNotFound(PathBuf),

    /// An action needs a selected item but nothing is selected.
    #[error("please select {0} first")]
    NoSelection(&'static str),

    /// The score file exists but cannot be understood.
    #[error("score file is invalid: {0}")]
    InvalidPersistedState(String),

    /// The curriculum table failed validation.
    #[error("curriculum is invalid: {0}")]
    InvalidCurriculum(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TutorError {
    pub fn title(&self) -> &'static str {
        match self {
            TutorError::FileNotFound(_) => "File Not Found",
            TutorError::NoSelection(_) => "No Selection",
            TutorError::InvalidPersistedState(_) => "Invalid Score File",
            TutorError::InvalidCurriculum(_) => "Invalid Curriculum",
            TutorError::Io(_) => "I/O Error",
        }
    }

    /// Missing selections are user slips, the rest are real failures.
    pub fn is_warning(&self) -> bool {
        matches!(self, TutorError::NoSelection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message_includes_path() {
        let err = TutorError::FileNotFound(PathBuf::from("/tmp/notes.pdf"));
        assert!(err.to_string().contains("/tmp/notes.pdf"));
        assert_eq!(err.title(), "File Not Found");
        assert!(!err.is_warning());
    }

    #[test]
    fn test_no_selection_is_warning() {
        let err = TutorError::NoSelection("a file to open");
        assert_eq!(err.to_string(), "please select a file to open first");
        assert!(err.is_warning());
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TutorError = io.into();
        assert!(matches!(err, TutorError::Io(_)));
        assert_eq!(err.to_string(), "denied");
    }
}
