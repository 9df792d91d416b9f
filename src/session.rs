use crate::models::{AppState, Question};
use crate::scoring::{attempt_score, is_correct};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use rand::seq::SliceRandom;

/// One run through a subject's questions.
#[derive(Debug)]
pub struct QuizSession {
    pub subject: String,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub correct: usize,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub selected_option: Option<usize>,
    pub input_scroll_y: u16,
}

/// What a key press did to the session.
#[derive(Debug, PartialEq, Eq)]
pub enum QuizProgress {
    Continue,
    Finished { score: u8 },
}

impl QuizSession {
    /// Shuffles the bank so every question comes up once, in random order.
    pub fn start<R: Rng + ?Sized>(subject: &str, bank: &[Question], rng: &mut R) -> Self {
        let mut questions = bank.to_vec();
        questions.shuffle(rng);
        Self {
            subject: subject.to_string(),
            questions,
            current_index: 0,
            correct: 0,
            input_buffer: String::new(),
            cursor_position: 0,
            selected_option: None,
            input_scroll_y: 0,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    pub fn score(&self) -> u8 {
        attempt_score(self.correct, self.total())
    }

    /// The answer that Enter would submit right now.
    pub fn pending_answer(&self) -> String {
        match self.current_question() {
            Some(Question::MultipleChoice { options, .. }) => self
                .selected_option
                .and_then(|i| options.get(i))
                .cloned()
                .unwrap_or_default(),
            Some(Question::FreeText { .. }) => self.input_buffer.clone(),
            None => String::new(),
        }
    }

    /// Grades `answer` against the current question and moves on.
    pub fn submit(&mut self, answer: &str) -> QuizProgress {
        if let Some(question) = self.current_question() {
            if is_correct(question, answer) {
                self.correct += 1;
            }
            self.current_index += 1;
        }
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.selected_option = None;
        self.input_scroll_y = 0;

        if self.is_finished() {
            QuizProgress::Finished {
                score: self.score(),
            }
        } else {
            QuizProgress::Continue
        }
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options().len())
    }

    fn select_next_option(&mut self) {
        let count = self.option_count();
        if count == 0 {
            return;
        }
        self.selected_option = Some(match self.selected_option {
            Some(i) if i + 1 < count => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    fn select_previous_option(&mut self) {
        if self.option_count() == 0 {
            return;
        }
        self.selected_option = Some(self.selected_option.map_or(0, |i| i.saturating_sub(1)));
    }
}

pub fn handle_quiz_input(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
) -> QuizProgress {
    if key.code == KeyCode::Esc {
        *app_state = AppState::QuizQuitConfirm;
        return QuizProgress::Continue;
    }

    match session.current_question() {
        Some(Question::MultipleChoice { .. }) => match key.code {
            KeyCode::Down => session.select_next_option(),
            KeyCode::Up => session.select_previous_option(),
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10)
                    && digit >= 1
                    && (digit as usize) <= session.option_count()
                {
                    session.selected_option = Some(digit as usize - 1);
                }
            }
            KeyCode::Enter => {
                let answer = session.pending_answer();
                return session.submit(&answer);
            }
            _ => {}
        },
        Some(Question::FreeText { .. }) => match key.code {
            KeyCode::Enter => {
                let answer = session.pending_answer();
                return session.submit(&answer);
            }
            KeyCode::Left => {
                session.cursor_position = session.cursor_position.saturating_sub(1);
            }
            KeyCode::Right => {
                if session.cursor_position < session.input_buffer.chars().count() {
                    session.cursor_position += 1;
                }
            }
            KeyCode::Home => session.cursor_position = 0,
            KeyCode::End => session.cursor_position = session.input_buffer.chars().count(),
            KeyCode::Backspace => {
                if session.cursor_position > 0 {
                    let at = byte_offset(&session.input_buffer, session.cursor_position - 1);
                    session.input_buffer.remove(at);
                    session.cursor_position -= 1;
                }
            }
            KeyCode::Delete => {
                if session.cursor_position < session.input_buffer.chars().count() {
                    let at = byte_offset(&session.input_buffer, session.cursor_position);
                    session.input_buffer.remove(at);
                }
            }
            KeyCode::Char(c) => {
                let at = byte_offset(&session.input_buffer, session.cursor_position);
                session.input_buffer.insert(at, c);
                session.cursor_position += 1;
            }
            _ => {}
        },
        None => {}
    }

    QuizProgress::Continue
}

pub fn handle_quit_confirmation(key: KeyEvent, app_state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            *app_state = AppState::Main;
            true
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            *app_state = AppState::Main;
            false
        }
        _ => false,
    }
}

/// Cursor positions count characters, `String` edits need bytes.
fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(i, _)| i)
}
