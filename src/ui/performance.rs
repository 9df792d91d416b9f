use super::layout::calculate_split_chunks;
use super::{highlight_style, tier_color};
use crate::app::App;
use crate::charts::{bar_series, knowledge_graph, pie_slices, recommendations};
use crate::models::PerformanceView;
use crate::scoring::Tier;
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span, Text},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph, Wrap,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};
use std::f64::consts::TAU;

/// Bar and slice colors, cycled per subject.
pub const PALETTE: [Color; 3] = [
    Color::Rgb(0x5A, 0x9B, 0xD5),
    Color::Rgb(0x66, 0xCC, 0x99),
    Color::Rgb(0xFF, 0xCC, 0x66),
];

const MENU_WIDTH: u16 = 28;
const PIE_STEP: f64 = 0.01;
const NODE_RADIUS: f64 = 0.2;

fn palette(i: usize) -> Color {
    PALETTE[i % PALETTE.len()]
}

pub fn draw_performance(f: &mut Frame, app: &App, area: Rect) {
    let layout = calculate_split_chunks(area, MENU_WIDTH);
    let current = app.performance_view();

    let items: Vec<ListItem> = PerformanceView::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let style = if *view == current {
                highlight_style()
            } else {
                Style::default()
            };
            ListItem::new(format!("{}. {}", i + 1, view.label())).style(style)
        })
        .collect();
    let menu = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("📊 Performance Overview")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(menu, layout.menu_area);

    match current {
        PerformanceView::BarChart => draw_bar_chart(f, app, layout.content_area),
        PerformanceView::PieChart => draw_pie_chart(f, app, layout.content_area),
        PerformanceView::KnowledgeGraph => draw_knowledge_graph(f, app, layout.content_area),
        PerformanceView::Recommendations => draw_recommendations(f, app, layout.content_area),
    }
}

fn draw_bar_chart(f: &mut Frame, app: &App, area: Rect) {
    let series = bar_series(&app.curriculum, &app.scores);
    let count = series.len().max(1) as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_gap = 2;
    let bar_width = (inner_width.saturating_sub(bar_gap * count) / count).clamp(3, 20);

    let bars: Vec<Bar> = series
        .iter()
        .enumerate()
        .map(|(i, (name, score))| {
            Bar::default()
                .value(u64::from(*score))
                .text_value(format!("{}%", score))
                .label(Line::from(truncate_string(name, bar_width as usize)))
                .style(Style::default().fg(palette(i)))
                .value_style(Style::default().fg(Color::Black).bg(palette(i)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Performance by Subject")
                .title_bottom(Line::from(" Average Score (%) by Subjects ").alignment(Alignment::Center)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(100);
    f.render_widget(chart, area);
}

/// Canvas x half-span that keeps circles round, terminal cells being about
/// twice as tall as wide.
fn aspect_x_span(area: Rect, y_span: f64) -> f64 {
    let width = f64::from(area.width.saturating_sub(2).max(1));
    let height = f64::from(area.height.saturating_sub(2).max(1));
    y_span * width / (2.0 * height)
}

fn draw_pie_chart(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(34)])
        .split(area);

    let slices = pie_slices(&app.curriculum, &app.scores);
    let y_span = 1.2;
    let x_span = aspect_x_span(chunks[0], y_span);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Overall Knowledge Distribution"),
        )
        .marker(Marker::Braille)
        .x_bounds([-x_span, x_span])
        .y_bounds([-y_span, y_span])
        .paint(|ctx| {
            let mut angle = 0.0;
            while angle < TAU {
                if let Some(i) = slices.iter().position(|slice| slice.contains(angle)) {
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: angle.cos(),
                        y2: angle.sin(),
                        color: palette(i),
                    });
                }
                angle += PIE_STEP;
            }
            ctx.layer();
            for slice in &slices {
                let label = format!("{:.1}%", slice.percent);
                let mid = slice.mid_angle();
                ctx.print(
                    0.6 * mid.cos(),
                    0.6 * mid.sin(),
                    Span::styled(
                        label,
                        Style::default()
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });
    f.render_widget(canvas, chunks[0]);

    let legend: Vec<Line> = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(palette(i))),
                Span::from(format!("{:<22}", truncate_string(&slice.label, 22))),
                Span::from(format!("{:>5.1}%", slice.percent)),
            ])
        })
        .collect();
    let legend = Paragraph::new(legend).block(Block::default().borders(Borders::ALL).title("Legend"));
    f.render_widget(legend, chunks[1]);
}

fn draw_knowledge_graph(f: &mut Frame, app: &App, area: Rect) {
    let graph = knowledge_graph(&app.curriculum, &app.scores);
    let y_span = 1.5;
    let x_span = aspect_x_span(area, y_span);
    let char_width = 2.0 * x_span / f64::from(area.width.saturating_sub(2).max(1));

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Knowledge Graph — Student Mastery Levels")
                .title_bottom(Line::from(vec![
                    Span::styled(" ● ≥80 ", Style::default().fg(tier_color(Tier::Excellent))),
                    Span::styled(" ● ≥50 ", Style::default().fg(tier_color(Tier::Good))),
                    Span::styled(
                        " ● <50 ",
                        Style::default().fg(tier_color(Tier::NeedsImprovement)),
                    ),
                ])),
        )
        .marker(Marker::Braille)
        .x_bounds([-x_span, x_span])
        .y_bounds([-y_span, y_span])
        .paint(|ctx| {
            for (a, b) in &graph.edges {
                let (from, to) = (&graph.nodes[*a], &graph.nodes[*b]);
                ctx.draw(&CanvasLine {
                    x1: from.x,
                    y1: from.y,
                    x2: to.x,
                    y2: to.y,
                    color: Color::Gray,
                });
            }
            ctx.layer();
            for node in &graph.nodes {
                let mut radius = NODE_RADIUS;
                while radius > 0.0 {
                    ctx.draw(&Circle {
                        x: node.x,
                        y: node.y,
                        radius,
                        color: tier_color(node.tier),
                    });
                    radius -= 0.02;
                }
            }
            ctx.layer();
            for node in &graph.nodes {
                let label = format!("{} ({}%)", node.name, node.score);
                let x = node.x - char_width * label.chars().count() as f64 / 2.0;
                let y = node.y - NODE_RADIUS - 0.15;
                ctx.print(
                    x,
                    y,
                    Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
                );
            }
        });
    f.render_widget(canvas, area);
}

fn draw_recommendations(f: &mut Frame, app: &App, area: Rect) {
    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        "📖 Personalized Study Recommendations:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));

    for (subject, recommendation) in recommendations(&app.curriculum, &app.scores) {
        let tier = app.scores.get(&subject).tier();
        text.push_line(Line::from(vec![
            Span::styled(
                format!("{}: ", subject),
                Style::default()
                    .fg(tier_color(tier))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(recommendation),
        ]));
    }

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Recommendations"));
    f.render_widget(paragraph, area);
}
