use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::display_width;

const TITLE: &str = " Manage Your Tasks";

/// Label of the theme toggle: names the mode it switches *to*
pub fn theme_toggle_label(dark_mode: bool) -> &'static str {
    if dark_mode { "Light Mode" } else { "Dark Mode" }
}

/// Title on the left, theme toggle on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let bg = theme.background;
    let toggle = format!("[t] {} ", theme_toggle_label(app.board.dark_mode()));

    let mut spans = vec![Span::styled(
        TITLE,
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let used = display_width(TITLE) + display_width(&toggle);
    let width = area.width as usize;
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        spans.push(Span::styled(toggle, Style::default().fg(theme.dim).bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
