mod quiz;
mod result;
mod study;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::App;
use crate::audio::AudioStatus;
use crate::data::unit31::{SUBTITLE, TITLE};
use crate::models::Tab;

const TAB_TITLES: [&str; 2] = ["📚 詞彙與句型", "🎲 隨機挑戰"];

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0]);
    render_tabs(frame, chunks[1], app.tab);

    match app.tab {
        Tab::Study => study::render(frame, chunks[2], app),
        Tab::Quiz => {
            let complete = app.session().is_complete();
            if complete {
                result::render(frame, chunks[2], app);
            } else {
                quiz::render(frame, chunks[2], app);
            }
        }
    }

    render_audio_status(frame, chunks[3], app.audio_status());
}

fn render_title(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(TITLE, Style::default().fg(Color::Magenta).bold())),
        Line::from(SUBTITLE.fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, tab: Tab) {
    let widget = Tabs::new(TAB_TITLES)
        .select(tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Magenta).bold())
        .divider("·")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn render_audio_status(frame: &mut Frame, area: Rect, status: &AudioStatus) {
    let line = match status {
        AudioStatus::Idle => Line::from(""),
        AudioStatus::Speaking(text) => Line::from(format!("🔊 {}", text).fg(Color::Magenta)),
        AudioStatus::Played(text) => Line::from(format!("🔊 {}", text).fg(Color::DarkGray)),
        AudioStatus::Unavailable => Line::from("🔇 (語音生成暫時無法使用)".fg(Color::DarkGray)),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}
