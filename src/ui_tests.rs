#[cfg(test)]
mod ui_render_tests {
    use crate::app::App;
    use crate::models::{AppState, Question, Tab};
    use crate::session::QuizSession;
    use crate::ui::draw;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend, layout::Position};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let mut screen = String::new();
        for row in buffer.content.chunks(width) {
            for cell in row {
                screen.push_str(cell.symbol());
            }
            screen.push('\n');
        }
        screen
    }

    fn ready_app(dir: &std::path::Path) -> App {
        let mut app = App::bootstrap(dir).unwrap();
        app.state = AppState::Main;
        app
    }

    #[test]
    fn test_splash_screen() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::bootstrap(dir.path()).unwrap();
        for _ in 0..10 {
            app.on_tick();
        }
        let screen = render(&mut app);
        assert!(screen.contains("Intelligent Tutoring System"));
        assert!(screen.contains("AI Edition"));
        assert!(screen.contains("20%"));
    }

    #[test]
    fn test_study_tab_lists_attachments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("week1.pdf");
        std::fs::write(&path, b"").unwrap();

        let mut app = ready_app(dir.path());
        let screen = render(&mut app);
        assert!(screen.contains("Upload & Manage Study Material"));
        assert!(screen.contains("AI Tools"));
        assert!(screen.contains("No study files attached"));

        app.attach_file(&path);
        app.dialogs.clear();
        let screen = render(&mut app);
        assert!(screen.contains("[AI Tools]  week1.pdf"));
        assert!(screen.contains("Today "));
    }

    #[test]
    fn test_file_browser_popup() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("lecture.pptx"), b"").unwrap();
        std::fs::write(dir.path().join("ignored.txt"), b"").unwrap();

        let mut app = ready_app(dir.path());
        app.handle_key(press(KeyCode::Char('a')));
        let screen = render(&mut app);
        assert!(screen.contains("Attach Study File"));
        assert!(screen.contains("lecture.pptx"));
        assert!(!screen.contains("ignored.txt"));
        assert!(screen.contains("*.pdf *.docx *.pptx"));
    }

    #[test]
    fn test_quiz_tab_picker_and_question() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = ready_app(dir.path());
        app.tab = Tab::Quiz;

        let screen = render(&mut app);
        assert!(screen.contains("Choose a Subject to Begin Quiz"));
        assert!(screen.contains("Python Programming"));
        assert!(screen.contains("0 attempts"));

        app.handle_key(press(KeyCode::Enter));
        let prompt = app
            .quiz
            .as_ref()
            .unwrap()
            .current_question()
            .unwrap()
            .prompt()
            .to_string();
        let screen = render(&mut app);
        assert!(screen.contains("Question 1 / 3 - AI Tools"));
        assert!(screen.contains(&format!("Q1. {}", prompt)));
    }

    #[test]
    fn test_quit_confirmation_popup() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = ready_app(dir.path());
        app.tab = Tab::Quiz;
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Esc));

        let screen = render(&mut app);
        assert!(screen.contains("Abandon Quiz"));
        assert!(screen.contains("This attempt will not be scored."));
    }

    #[test]
    fn test_completion_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = ready_app(dir.path());
        app.tab = Tab::Quiz;
        app.handle_key(press(KeyCode::Enter));
        for _ in 0..3 {
            app.handle_key(press(KeyCode::Enter));
        }

        let screen = render(&mut app);
        assert!(screen.contains("Quiz Completed"));
        assert!(screen.contains("Your Score: 0%"));
        assert!(screen.contains("Needs improvement"));
    }

    #[test]
    fn test_performance_views() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = ready_app(dir.path());
        app.scores.record_attempt("AI Tools", 100);
        app.scores.record_attempt("AI Tools", 100);
        app.scores.record_attempt("AI Tools", 100);
        app.tab = Tab::Performance;

        let screen = render(&mut app);
        assert!(screen.contains("Performance Overview"));
        assert!(screen.contains("Performance by Subject"));
        assert!(screen.contains("87%"));

        app.handle_key(press(KeyCode::Char('2')));
        let screen = render(&mut app);
        assert!(screen.contains("Overall Knowledge Distribution"));
        assert!(screen.contains("Legend"));

        app.handle_key(press(KeyCode::Char('3')));
        let screen = render(&mut app);
        assert!(screen.contains("Student Mastery Levels"));
        assert!(screen.contains("ADBMS (0%)"));

        app.handle_key(press(KeyCode::Char('4')));
        let screen = render(&mut app);
        assert!(screen.contains("Personalized Study Recommendations"));
        assert!(screen.contains("Advance to complex topics"));
        assert!(screen.contains("Revisit basics"));
    }

    #[test]
    fn test_error_dialog_on_corrupt_scores() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.json"), "[]").unwrap();
        let mut app = ready_app(dir.path());

        let screen = render(&mut app);
        assert!(screen.contains("Invalid Score File"));
        app.handle_key(press(KeyCode::Enter));
        let screen = render(&mut app);
        assert!(!screen.contains("Invalid Score File"));
    }

    /// Types `text` into a free-text question and returns where the cursor is drawn.
    fn cursor_after_typing(text: &str) -> Position {
        let dir = tempfile::tempdir().unwrap();
        let mut app = ready_app(dir.path());
        app.tab = Tab::Quiz;
        let bank = vec![Question::FreeText {
            prompt: "Answer in full.".to_string(),
            answer: "unused".to_string(),
        }];
        let mut rng = StdRng::seed_from_u64(0);
        app.quiz = Some(QuizSession::start("Languages", &bank, &mut rng));
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }

        let mut terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        terminal.get_cursor_position().unwrap()
    }

    #[test]
    fn test_cursor_after_wide_characters() {
        // Four double-width glyphs starting at column 2.
        assert_eq!(cursor_after_typing("中文答案"), Position::new(10, 13));
    }

    #[test]
    fn test_cursor_after_wrapped_word() {
        let cursor = cursor_after_typing("advanced database management systems answer");
        assert_eq!(cursor, Position::new(8, 14));
    }
}
