use crate::attachments::{BrowserAction, FileBrowser, StudyShelf, launch};
use crate::curriculum::Curriculum;
use crate::error::TutorError;
use crate::models::{AppState, Dialog, PerformanceView, Tab};
use crate::progress::{self, ScoreBook};
use crate::scoring::completion_message;
use crate::session::{QuizProgress, QuizSession, handle_quit_confirmation, handle_quiz_input};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

pub const DATA_FILE: &str = "data.json";
pub const CURRICULUM_FILE: &str = "curriculum.json";
pub const LOG_FILE: &str = "tutor.log";

/// Splash gauge step per tick.
pub const SPLASH_STEP: u16 = 2;

/// Everything the UI reads and the key handlers mutate.
#[derive(Debug)]
pub struct App {
    pub curriculum: Curriculum,
    pub scores: ScoreBook,
    pub data_path: PathBuf,
    pub browse_root: PathBuf,
    pub state: AppState,
    pub tab: Tab,
    pub splash_progress: u16,
    pub study_subject: usize,
    pub shelf: StudyShelf,
    pub browser: Option<FileBrowser>,
    pub quiz_subject: usize,
    pub quiz: Option<QuizSession>,
    pub performance_view: usize,
    pub dialogs: VecDeque<Dialog>,
    pub should_quit: bool,
}

impl App {
    pub fn new(curriculum: Curriculum, scores: ScoreBook, work_dir: &Path) -> Self {
        Self {
            curriculum,
            scores,
            data_path: work_dir.join(DATA_FILE),
            browse_root: work_dir.to_path_buf(),
            state: AppState::Splash,
            tab: Tab::Study,
            splash_progress: 0,
            study_subject: 0,
            shelf: StudyShelf::default(),
            browser: None,
            quiz_subject: 0,
            quiz: None,
            performance_view: 0,
            dialogs: VecDeque::new(),
            should_quit: false,
        }
    }

    /// Loads the curriculum and scores from `work_dir`. Bad files become
    /// dialogs and the app falls back to built-in or fresh data.
    pub fn bootstrap(work_dir: &Path) -> Result<Self, TutorError> {
        let mut problems = Vec::new();

        let curriculum = match Curriculum::load_override(&work_dir.join(CURRICULUM_FILE)) {
            Ok(Some(curriculum)) => {
                log::info!("using {} from {}", CURRICULUM_FILE, work_dir.display());
                curriculum
            }
            Ok(None) => Curriculum::embedded()?,
            Err(e) => {
                problems.push(e);
                Curriculum::embedded()?
            }
        };

        let data_path = work_dir.join(DATA_FILE);
        let names = curriculum.subject_names();
        let scores = match progress::load_or_init(&data_path, &names) {
            Ok(scores) => scores,
            Err(e) => {
                problems.push(e);
                ScoreBook::fresh(names.iter().copied())
            }
        };

        let mut app = Self::new(curriculum, scores, work_dir);
        for problem in problems {
            app.report(problem);
        }
        Ok(app)
    }

    pub fn subject_name(&self, index: usize) -> &str {
        self.curriculum
            .subjects
            .get(index)
            .map_or("", |s| s.name.as_str())
    }

    pub fn performance_view(&self) -> PerformanceView {
        PerformanceView::ALL[self.performance_view % PerformanceView::ALL.len()]
    }

    pub fn report(&mut self, err: TutorError) {
        log::warn!("{}: {}", err.title(), err);
        self.dialogs.push_back(Dialog::from_error(&err));
    }

    pub fn on_tick(&mut self) {
        if self.state == AppState::Splash {
            self.splash_progress = (self.splash_progress + SPLASH_STEP).min(100);
            if self.splash_progress >= 100 {
                self.state = AppState::Main;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.state == AppState::Splash {
            self.splash_progress = 100;
            self.state = AppState::Main;
            return;
        }
        if !self.dialogs.is_empty() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dialogs.pop_front();
            }
            return;
        }

        match self.state {
            AppState::BrowsingFiles => self.handle_browser_key(key),
            AppState::QuizQuitConfirm => {
                if handle_quit_confirmation(key, &mut self.state)
                    && let Some(quiz) = self.quiz.take()
                {
                    log::info!(
                        "abandoned {} quiz after {} of {} questions",
                        quiz.subject,
                        quiz.current_index,
                        quiz.total()
                    );
                }
            }
            AppState::Main => match key.code {
                KeyCode::Tab => self.tab = self.tab.next(),
                KeyCode::BackTab => self.tab = self.tab.previous(),
                _ => match self.tab {
                    Tab::Study => self.handle_study_key(key),
                    Tab::Quiz => self.handle_quiz_key(key),
                    Tab::Performance => self.handle_performance_key(key),
                },
            },
            AppState::Splash => {}
        }
    }

    fn handle_study_key(&mut self, key: KeyEvent) {
        let subjects = self.curriculum.subjects.len();
        match key.code {
            KeyCode::Left => self.study_subject = self.study_subject.saturating_sub(1),
            KeyCode::Right => {
                if self.study_subject + 1 < subjects {
                    self.study_subject += 1;
                }
            }
            KeyCode::Up => self.shelf.select_previous(),
            KeyCode::Down => self.shelf.select_next(),
            KeyCode::Char('a') => self.open_browser(),
            KeyCode::Enter | KeyCode::Char('o') => self.open_selected_file(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn open_browser(&mut self) {
        match FileBrowser::open(&self.browse_root) {
            Ok(browser) => {
                self.browser = Some(browser);
                self.state = AppState::BrowsingFiles;
            }
            Err(e) => self.report(e),
        }
    }

    fn handle_browser_key(&mut self, key: KeyEvent) {
        let Some(browser) = self.browser.as_mut() else {
            self.state = AppState::Main;
            return;
        };

        let outcome = match key.code {
            KeyCode::Up => {
                browser.select_previous();
                Ok(BrowserAction::None)
            }
            KeyCode::Down => {
                browser.select_next();
                Ok(BrowserAction::None)
            }
            KeyCode::Backspace | KeyCode::Left => browser.go_up().map(|_| BrowserAction::None),
            KeyCode::Enter | KeyCode::Right => browser.activate(),
            KeyCode::Esc => {
                self.browser = None;
                self.state = AppState::Main;
                return;
            }
            _ => Ok(BrowserAction::None),
        };

        match outcome {
            Ok(BrowserAction::None) => {}
            Ok(BrowserAction::Pick(path)) => {
                if let Some(browser) = self.browser.take() {
                    self.browse_root = browser.dir;
                }
                self.state = AppState::Main;
                self.attach_file(&path);
            }
            Err(e) => self.report(e),
        }
    }

    pub fn attach_file(&mut self, path: &Path) {
        let subject = self.subject_name(self.study_subject).to_string();
        match self.shelf.attach(path, &subject) {
            Ok(attachment) => {
                log::info!("attached {} for {}", attachment.path.display(), subject);
                let body = format!(
                    "File '{}' attached successfully for study!",
                    attachment.file_name
                );
                self.dialogs.push_back(Dialog::info("✅ File Added", body));
            }
            Err(e) => self.report(e),
        }
    }

    pub fn open_selected_file(&mut self) {
        let result = self.shelf.openable().and_then(|attachment| {
            log::info!("opening {}", attachment.path.display());
            launch(&attachment.path)
        });
        if let Err(e) = result {
            self.report(e);
        }
    }

    fn handle_quiz_key(&mut self, key: KeyEvent) {
        if let Some(quiz) = self.quiz.as_mut() {
            if let QuizProgress::Finished { score } = handle_quiz_input(quiz, key, &mut self.state)
            {
                self.finish_quiz(score);
            }
            return;
        }

        let subjects = self.curriculum.subjects.len();
        match key.code {
            KeyCode::Up => self.quiz_subject = self.quiz_subject.saturating_sub(1),
            KeyCode::Down => {
                if self.quiz_subject + 1 < subjects {
                    self.quiz_subject += 1;
                }
            }
            KeyCode::Enter => self.start_quiz(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    pub fn start_quiz(&mut self) {
        let Some(subject) = self.curriculum.subjects.get(self.quiz_subject) else {
            self.report(TutorError::NoSelection("a subject"));
            return;
        };
        let session = QuizSession::start(&subject.name, &subject.questions, &mut rand::thread_rng());
        log::info!(
            "started {} quiz with {} questions",
            session.subject,
            session.total()
        );
        self.quiz = Some(session);
    }

    /// Blends the attempt into the subject record and rewrites the score file.
    pub fn finish_quiz(&mut self, score: u8) {
        let Some(quiz) = self.quiz.take() else {
            return;
        };
        let record = self.scores.record_attempt(&quiz.subject, score);
        log::info!(
            "finished {} quiz: {}% ({} of {}), running score {}, attempts {}",
            quiz.subject,
            score,
            quiz.correct,
            quiz.total(),
            record.score,
            record.attempts
        );

        self.dialogs
            .push_back(Dialog::info("Quiz Completed", completion_message(score)));
        if let Err(e) = progress::save(&self.data_path, &self.scores) {
            self.report(e);
        }
    }

    fn handle_performance_key(&mut self, key: KeyEvent) {
        let views = PerformanceView::ALL.len();
        match key.code {
            KeyCode::Up => self.performance_view = self.performance_view.saturating_sub(1),
            KeyCode::Down => {
                if self.performance_view + 1 < views {
                    self.performance_view += 1;
                }
            }
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10)
                    && digit >= 1
                    && (digit as usize) <= views
                {
                    self.performance_view = digit as usize - 1;
                } else if c == 'q' {
                    self.should_quit = true;
                }
            }
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }
}
