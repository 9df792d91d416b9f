use super::layout::centered_rect;
use super::{highlight_style, placeholder_style};
use crate::app::App;
use crate::attachments::{DOCUMENT_EXTENSIONS, FileBrowser};
use crate::models::Attachment;
use crate::utils::truncate_string;
use chrono::{DateTime, Local};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

const DATE_FORMAT_TODAY: &str = "Today %H:%M";
const DATE_FORMAT_YESTERDAY: &str = "Yesterday %H:%M";
const DATE_FORMAT_OTHER: &str = "%Y-%m-%d";

pub fn format_attached_at(attached_at: &DateTime<Local>) -> String {
    let today = Local::now().date_naive();
    let date = attached_at.date_naive();

    if date == today {
        attached_at.format(DATE_FORMAT_TODAY).to_string()
    } else if date == today - chrono::Duration::days(1) {
        attached_at.format(DATE_FORMAT_YESTERDAY).to_string()
    } else {
        attached_at.format(DATE_FORMAT_OTHER).to_string()
    }
}

fn format_attachment(attachment: &Attachment) -> String {
    format!(
        "{}  [{}]  {}",
        format_attached_at(&attachment.attached_at),
        attachment.subject,
        attachment.file_name
    )
}

pub fn draw_study(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let selector = Paragraph::new(Line::from(vec![
        Span::from("Select Subject:  "),
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.subject_name(app.study_subject).to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("📚 Upload & Manage Study Material"),
    );
    f.render_widget(selector, chunks[0]);

    let items: Vec<ListItem> = if app.shelf.items().is_empty() {
        vec![ListItem::new("No study files attached. Press 'a' to attach one.").style(placeholder_style())]
    } else {
        let width = chunks[1].width.saturating_sub(2) as usize;
        app.shelf
            .items()
            .iter()
            .enumerate()
            .map(|(i, attachment)| {
                let text = truncate_string(&format_attachment(attachment), width);
                let style = if Some(i) == app.shelf.selected() {
                    highlight_style()
                } else {
                    Style::default()
                };
                ListItem::new(text).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Study Files")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, chunks[1]);
}

pub fn draw_browser(f: &mut Frame, browser: &FileBrowser) {
    let area = centered_rect(70, 20, f.area());
    f.render_widget(Clear, area);

    let visible = area.height.saturating_sub(2) as usize;
    let offset = (browser.selected + 1).saturating_sub(visible);
    let width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = if browser.entries.is_empty() {
        vec![ListItem::new("Nothing to attach here").style(placeholder_style())]
    } else {
        browser
            .entries
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, entry)| {
                let style = if i == browser.selected {
                    highlight_style()
                } else {
                    Style::default()
                };
                ListItem::new(truncate_string(&entry.label(), width)).style(style)
            })
            .collect()
    };

    let filter = format!(
        " Documents ({}) ",
        DOCUMENT_EXTENSIONS
            .iter()
            .map(|ext| format!("*.{}", ext))
            .collect::<Vec<_>>()
            .join(" ")
    );
    let title = format!(
        " 📎 Attach Study File: {} ",
        truncate_string(&browser.dir.display().to_string(), width.saturating_sub(26))
    );

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title)
            .title_bottom(Line::from(filter).alignment(Alignment::Right)),
    );
    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_attached_today() {
        let now = Local::now();
        assert!(format_attached_at(&now).starts_with("Today "));
    }

    #[test]
    fn test_format_attached_yesterday() {
        let yesterday = Local::now() - chrono::Duration::days(1);
        assert!(format_attached_at(&yesterday).starts_with("Yesterday "));
    }

    #[test]
    fn test_format_attached_older() {
        let older = Local::now() - chrono::Duration::days(30);
        let text = format_attached_at(&older);
        assert_eq!(text, older.format("%Y-%m-%d").to_string());
    }
}
