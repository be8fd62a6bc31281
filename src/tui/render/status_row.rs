use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Key hints for the current mode
fn hint(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "a add  e edit  space done  d delete  f filter  t theme  ? help  q quit",
        Mode::Add => "Enter add  Tab priority  Esc back",
        Mode::Edit => "Enter save  Tab priority  Esc cancel",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let bg = theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(ref msg) = app.status {
        spans.push(Span::styled(
            format!(" {}", msg),
            Style::default().fg(theme.red).bg(bg),
        ));
    } else {
        let mode_label = match app.mode {
            Mode::Navigate => "",
            Mode::Add => " ADD",
            Mode::Edit => " EDIT",
        };
        spans.push(Span::styled(
            mode_label,
            Style::default().fg(theme.highlight).bg(bg),
        ));
        if app.show_key_hints {
            let hint = hint(app.mode);
            let content_width = mode_label.chars().count();
            let hint_width = hint.chars().count();
            if content_width + hint_width < width {
                let padding = width - content_width - hint_width;
                spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
                spans.push(Span::styled(hint, Style::default().fg(theme.dim).bg(bg)));
            }
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
