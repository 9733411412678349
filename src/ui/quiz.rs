use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::{App, Feedback};

const OPTION_LABELS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Ok(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], session.progress());
    render_counter(frame, chunks[1], session.current_index(), session.len());
    render_prompt(frame, chunks[2], question.prompt());
    render_options(frame, chunks[3], question.options(), app.selected_option());
    render_feedback(frame, chunks[4], app.feedback());
    render_controls(frame, chunks[5], question.item.has_audio());
}

fn render_progress(frame: &mut Frame, area: Rect, progress: f64) {
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(progress.clamp(0.0, 1.0))
        .label("");
    frame.render_widget(widget, area);
}

fn render_counter(frame: &mut Frame, area: Rect, index: usize, total: usize) {
    let widget = Paragraph::new(format!("Question {} / {}", index + 1, total))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String], selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Magenta).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: Option<&Feedback>) {
    let line = match feedback {
        None => Line::from(""),
        Some(Feedback::Correct) => Line::from(Span::styled(
            "🎉 答對了！",
            Style::default().fg(Color::Green).bold(),
        )),
        Some(Feedback::Incorrect { hint }) => Line::from(Span::styled(
            format!("不對喔！提示：{}", hint),
            Style::default().fg(Color::Red),
        )),
    };
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

fn render_controls(frame: &mut Frame, area: Rect, has_audio: bool) {
    let text = if has_audio {
        "j/k navigate  ·  enter submit  ·  a listen  ·  r redraw  ·  tab study  ·  q quit"
    } else {
        "j/k navigate  ·  enter submit  ·  r redraw  ·  tab study  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
