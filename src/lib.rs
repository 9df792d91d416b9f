pub mod app;
pub mod attachments;
pub mod charts;
pub mod curriculum;
pub mod error;
pub mod logger;
pub mod models;
pub mod progress;
pub mod scoring;
pub mod session;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use app::App;
pub use curriculum::{Curriculum, Subject};
pub use error::TutorError;
pub use models::{AppState, Attachment, Dialog, PerformanceView, Question, SubjectRecord, Tab};
pub use progress::{ScoreBook, load, load_or_init, save};
pub use scoring::{Tier, attempt_score, blend, is_correct};
pub use session::{QuizProgress, QuizSession, handle_quiz_input};
pub use ui::draw;
