mod dialog;
pub mod layout;
mod performance;
mod quiz;
mod splash;
mod study;

pub use dialog::draw_dialog;
pub use layout::{calculate_app_chunks, calculate_quiz_chunks, centered_rect};
pub use performance::draw_performance;
pub use quiz::{draw_quit_confirmation, draw_quiz_tab};
pub use splash::draw_splash;
pub use study::{draw_browser, draw_study, format_attached_at};

use crate::app::App;
use crate::models::{AppState, Tab};
use crate::scoring::Tier;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    if app.state == AppState::Splash {
        draw_splash(f, app.splash_progress);
        return;
    }

    let layout = calculate_app_chunks(f.area());
    draw_tabs(f, app.tab, layout.tabs_area);

    match app.tab {
        Tab::Study => draw_study(f, app, layout.body_area),
        Tab::Quiz => draw_quiz_tab(f, app, layout.body_area),
        Tab::Performance => draw_performance(f, app, layout.body_area),
    }
    draw_help(f, app, layout.help_area);

    match app.state {
        AppState::BrowsingFiles => {
            if let Some(browser) = &app.browser {
                draw_browser(f, browser);
            }
        }
        AppState::QuizQuitConfirm => draw_quit_confirmation(f),
        AppState::Main | AppState::Splash => {}
    }

    if let Some(dialog) = app.dialogs.front() {
        draw_dialog(f, dialog);
    }
}

fn draw_tabs(f: &mut Frame, current: Tab, area: Rect) {
    let tabs = Tabs::new(Tab::ALL.iter().map(|tab| tab.title()))
        .select(current.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Intelligent Tutoring System — AI Edition"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
    f.render_widget(tabs, area);
}

fn draw_help(f: &mut Frame, app: &App, area: Rect) {
    let hints: &[(&str, &str)] = match (app.state == AppState::BrowsingFiles, app.tab) {
        (true, _) => &[
            ("↑/↓", "Navigate"),
            ("Enter", "Open/Attach"),
            ("Backspace", "Up a Folder"),
            ("Esc", "Cancel"),
        ],
        (false, Tab::Study) => &[
            ("←/→", "Subject"),
            ("↑/↓", "Select File"),
            ("a", "Attach"),
            ("Enter/o", "Open"),
            ("Tab", "Switch"),
            ("q", "Quit"),
        ],
        (false, Tab::Quiz) if app.quiz.is_some() => &[
            ("↑/↓/1-9", "Choose"),
            ("Enter", "Submit"),
            ("Esc", "Abandon"),
            ("Ctrl+C", "Exit App"),
        ],
        (false, Tab::Quiz) => &[
            ("↑/↓", "Subject"),
            ("Enter", "Start Quiz"),
            ("Tab", "Switch"),
            ("q", "Quit"),
        ],
        (false, Tab::Performance) => &[
            ("↑/↓/1-4", "View"),
            ("Tab", "Switch"),
            ("q", "Quit"),
        ],
    };

    let help = Paragraph::new(key_hints(hints))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

/// `key` in bold cyan followed by its action, for every pair.
pub(crate) fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let spans: Vec<Span<'static>> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(
                    key.to_string(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::from(format!(" {}  ", action)),
            ]
        })
        .collect();
    Line::from(spans)
}

pub(crate) fn highlight_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

pub fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Excellent => Color::Green,
        Tier::Good => Color::Rgb(255, 165, 0),
        Tier::NeedsImprovement => Color::Red,
    }
}
