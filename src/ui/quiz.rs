use super::layout::{calculate_quiz_chunks, centered_rect};
use super::{highlight_style, key_hints, tier_color};
use crate::app::App;
use crate::models::Question;
use crate::session::QuizSession;
use crate::utils::{calculate_wrapped_cursor_position, wrap_input};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

pub fn draw_quiz_tab(f: &mut Frame, app: &mut App, area: Rect) {
    if let Some(session) = app.quiz.as_mut() {
        draw_question(f, session, area);
        return;
    }
    draw_subject_picker(f, app, area);
}

fn draw_subject_picker(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .curriculum
        .subjects
        .iter()
        .enumerate()
        .map(|(i, subject)| {
            let record = app.scores.get(&subject.name);
            let marker = if i == app.quiz_subject { "▶ " } else { "  " };
            let name_style = if i == app.quiz_subject {
                highlight_style()
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{:<24}", marker, subject.name), name_style),
                Span::styled(
                    format!("{:>3}%", record.score),
                    Style::default().fg(tier_color(record.tier())),
                ),
                Span::styled(
                    format!("  {} attempts  {} questions", record.attempts, subject.questions.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("🧠 Choose a Subject to Begin Quiz:")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, area);
}

fn draw_question(f: &mut Frame, session: &mut QuizSession, area: Rect) {
    let layout = calculate_quiz_chunks(area);
    let Some(question) = session.current_question().cloned() else {
        return;
    };
    let number = session.current_index + 1;

    let header = Paragraph::new(format!(
        "Question {} / {} - {}",
        number,
        session.total(),
        session.subject
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let prompt = Paragraph::new(Text::from(format!("Q{}. {}", number, question.prompt())))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(prompt, layout.question_area);

    match &question {
        Question::MultipleChoice { options, .. } => {
            draw_options(f, options, session.selected_option, layout.answer_area)
        }
        Question::FreeText { .. } => draw_answer_input(f, session, layout.answer_area),
    }
}

fn draw_options(f: &mut Frame, options: &[String], selected: Option<usize>, area: Rect) {
    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let chosen = selected == Some(i);
            let radio = if chosen { "(•)" } else { "( )" };
            let style = if chosen {
                highlight_style()
            } else {
                Style::default()
            };
            ListItem::new(format!("{} {}. {}", radio, i + 1, option)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Choose One (Press Enter to submit)"),
    );
    f.render_widget(list, area);
}

fn draw_answer_input(f: &mut Frame, session: &mut QuizSession, area: Rect) {
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let text_width = area.width.saturating_sub(2).max(1) as usize;

    // Rows are wrapped here, not by the paragraph, so the cursor math matches the screen.
    let content = if session.input_buffer.is_empty() {
        Text::from(Span::styled(
            "[Type your answer here...]",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Text::from(
            wrap_input(&session.input_buffer, text_width)
                .into_iter()
                .map(|line| Line::from(line.text))
                .collect::<Vec<_>>(),
        )
    };
    let (cursor_line, cursor_col) = calculate_wrapped_cursor_position(
        &session.input_buffer,
        session.cursor_position,
        text_width,
    );

    let mut scroll = session.input_scroll_y as usize;
    if cursor_line < scroll {
        scroll = cursor_line;
    } else if cursor_line >= scroll + visible_height {
        scroll = cursor_line + 1 - visible_height;
    }
    session.input_scroll_y = scroll as u16;

    let answer = Paragraph::new(content)
        .scroll((session.input_scroll_y, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Your Answer (Press Enter to submit)"),
        );
    f.render_widget(answer, area);

    let cursor_x = area.x + 1 + cursor_col as u16;
    let cursor_y = area.y + 1 + (cursor_line as u16).saturating_sub(session.input_scroll_y);
    f.set_cursor_position((cursor_x, cursor_y));
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let area = centered_rect(60, 11, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Abandon Quiz")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave this quiz?\nThis attempt will not be scored.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help = Paragraph::new(key_hints(&[
        ("y", "Yes (Abandon)"),
        ("n", "No (Continue Quiz)"),
        ("Ctrl+C", "Exit App"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
