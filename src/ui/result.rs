use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.session().score();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(1.0)
        .label("");
    frame.render_widget(gauge, chunks[0]);

    render_score_summary(frame, chunks[2], score);
    render_controls(frame, chunks[4]);
}

fn render_score_summary(frame: &mut Frame, area: Rect, score: u32) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🏆 挑戰成功！",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("本次得分：{}", score),
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(""),
        Line::from("你已經掌握移動與方向的表達了！".fg(Color::Gray)),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Magenta)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r 再來一局 (重新抽題)  ·  tab study  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
