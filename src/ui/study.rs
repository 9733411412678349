use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph},
};

use crate::app::{App, StudyEntry};
use crate::data::unit31::VOCABULARY;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
        .margin(1)
        .split(area);

    let (lines, selected_line) = build_lines(app);
    let scroll = scroll_offset(selected_line, chunks[0].height);

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll, 0));
    frame.render_widget(widget, chunks[0]);

    render_controls(frame, chunks[1]);
}

/// Lines for every study entry plus the line index of the selected one.
fn build_lines(app: &App) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut selected_line = 0;

    lines.push(section_heading("📝 核心單字 (構詞分析)"));

    for index in 0..app.study_entry_count() {
        let Some(entry) = app.study_entry(index) else {
            break;
        };
        let is_selected = index == app.study_cursor();

        if index == VOCABULARY.len() {
            lines.push(Line::from(""));
            lines.push(section_heading("🗣️ 實用句型"));
        }

        if is_selected {
            selected_line = lines.len();
        }

        let marker_style = if is_selected {
            Style::default().fg(Color::Magenta).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = Span::styled(if is_selected { " > " } else { "   " }, marker_style);

        match entry {
            StudyEntry::Vocab(card) => {
                lines.push(Line::from(vec![
                    marker,
                    Span::raw(format!("{} ", card.icon)),
                    Span::styled(card.amis, Style::default().fg(Color::Magenta).bold()),
                    Span::styled(format!("  {}", card.chinese), Style::default().fg(Color::Gray)),
                    Span::styled(format!("  [{}]", card.morph), Style::default().fg(Color::LightMagenta)),
                    Span::styled(format!("  src: {}", card.source), Style::default().fg(Color::DarkGray).italic()),
                ]));
            }
            StudyEntry::Sentence(sentence) => {
                lines.push(Line::from(vec![
                    marker,
                    Span::raw(format!("{} ", sentence.icon)),
                    Span::styled(sentence.amis, Style::default().fg(Color::Magenta).bold()),
                ]));
                lines.push(Line::from(vec![
                    Span::raw("      "),
                    Span::styled(sentence.chinese, Style::default().fg(Color::Gray)),
                    Span::styled(format!("  src: {}", sentence.source), Style::default().fg(Color::DarkGray).italic()),
                ]));
            }
        }
    }

    (lines, selected_line)
}

fn section_heading(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, Style::default().fg(Color::Cyan).bold()))
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  p play  ·  tab quiz  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

/// Keep the selected line roughly centred in a view `height` lines tall.
fn scroll_offset(selected_line: usize, height: u16) -> u16 {
    let offset = selected_line.saturating_sub(usize::from(height) / 2);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_centres_selection() {
        assert_eq!(scroll_offset(0, 20), 0);
        assert_eq!(scroll_offset(30, 20), 20);
    }

    #[test]
    fn test_scroll_saturates_instead_of_truncating() {
        assert_eq!(scroll_offset(usize::from(u16::MAX) + 100, 10), u16::MAX);
    }
}
