use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const BINDINGS: &[(&str, &str)] = &[
    ("j/k \u{2191}/\u{2193}", "move"),
    ("g/G", "first / last"),
    ("a i", "add task"),
    ("e Enter", "edit task"),
    ("space x", "toggle done"),
    ("d Del", "delete task"),
    ("f", "cycle filter"),
    ("1 2 3", "all / completed / pending"),
    ("t", "toggle dark mode"),
    ("Tab S-Tab", "change priority (add/edit)"),
    ("Enter", "add / save (add/edit)"),
    ("Esc", "leave form / cancel edit"),
    ("q C-c", "quit"),
];

/// Centered key reference
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let bg = theme.background;

    let width = 46.min(area.width);
    let height = (BINDINGS.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<12}", keys),
                    Style::default()
                        .fg(theme.highlight)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(theme.text).bg(bg)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim).bg(bg))
        .title(Span::styled(" Keys ", Style::default().fg(theme.text_bright).bg(bg)));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        popup,
    );
}
