use super::layout::centered_rect;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
};

const SPLASH_BG: Color = Color::Rgb(173, 216, 230);
const NAVY: Color = Color::Rgb(0, 0, 128);
const TROUGH: Color = Color::Rgb(0xDF, 0xF3, 0xFF);

pub fn draw_splash(f: &mut Frame, progress: u16) {
    let area = centered_rect(60, 14, f.area());

    let frame = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(NAVY))
        .style(Style::default().bg(SPLASH_BG));
    f.render_widget(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(Line::from("Intelligent Tutoring System"))
        .style(Style::default().fg(NAVY).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[1]);

    let subtitle = Paragraph::new("AI Edition")
        .style(Style::default().fg(Color::Blue))
        .alignment(Alignment::Center);
    f.render_widget(subtitle, chunks[2]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(NAVY).bg(TROUGH))
        .percent(progress.min(100));
    f.render_widget(gauge, chunks[4]);
}
