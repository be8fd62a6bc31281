use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::FilterMode;
use crate::tui::app::App;

/// Filter buttons with counts; the active one is highlighted
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let bg = theme.background;
    let counts = app.board.counts();
    let active = app.board.filter();

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for (i, mode) in FilterMode::ALL.into_iter().enumerate() {
        let label = format!(" {} {} ({}) ", i + 1, mode.label(), counts.for_filter(mode));
        let style = if mode == active {
            Style::default()
                .fg(theme.background)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).bg(bg)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_counts_per_filter() {
        let mut app = test_app();
        let id = app.board.add_task("a", Priority::Low).unwrap();
        app.board.add_task("b", Priority::Low);
        app.board.toggle_complete(id).unwrap();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_filter_bar(frame, &app, area);
        });
        assert!(output.contains("1 All (2)"));
        assert!(output.contains("2 Completed (1)"));
        assert!(output.contains("3 Pending (1)"));
    }
}
