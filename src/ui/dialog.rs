use super::key_hints;
use super::layout::centered_rect;
use crate::models::{Dialog, Severity};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const DIALOG_WIDTH: u16 = 60;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    }
}

/// Rough wrapped height of `body` inside a box of `width` columns.
fn body_height(body: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    body.lines()
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum::<usize>()
        .min(u16::MAX as usize) as u16
}

pub fn draw_dialog(f: &mut Frame, dialog: &Dialog) {
    let inner_width = DIALOG_WIDTH.saturating_sub(4);
    let height = body_height(&dialog.body, inner_width) + 2 + 3;
    let area = centered_rect(DIALOG_WIDTH, height, f.area());
    f.render_widget(Clear, area);

    let color = severity_color(dialog.severity);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let body = Paragraph::new(dialog.body.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(dialog.title.as_str())
                .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        );
    f.render_widget(body, chunks[0]);

    let help = Paragraph::new(key_hints(&[("Enter", "OK")]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_height_counts_wraps_and_blank_lines() {
        assert_eq!(body_height("Your Score: 100%\n\nExcellent!", 56), 3);
        assert_eq!(body_height(&"x".repeat(120), 56), 3);
    }
}
