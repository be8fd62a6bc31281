use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Priority;
use crate::tui::app::{App, Mode};
use crate::tui::theme::Theme;
use crate::util::unicode::{display_width, scroll_window, truncate_to_width};

const PLACEHOLDER: &str = "Add a new task...";

/// Priority selector as shown in the form and in an edited row: `‹Medium›`
pub(super) fn priority_selector<'a>(theme: &Theme, priority: Priority, focused: bool) -> Vec<Span<'a>> {
    let arrow_style = if focused {
        Style::default().fg(theme.highlight).bg(theme.background)
    } else {
        Style::default().fg(theme.dim).bg(theme.background)
    };
    vec![
        Span::styled("\u{2039}", arrow_style),
        Span::styled(
            priority.label(),
            Style::default()
                .fg(theme.priority_color(priority))
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("\u{203A}", arrow_style),
    ]
}

/// Bordered input line with the task text and its priority selector
pub fn render_add_form(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let bg = theme.background;
    let focused = app.mode == Mode::Add;
    let border = if focused { theme.highlight } else { theme.dim };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(bg))
        .title(Span::styled(" New task ", Style::default().fg(border).bg(bg)))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = &app.board.input;
    let selector_label = format!("Priority: \u{2039}{}\u{203A}", input.priority.label());
    let text_width = (inner.width as usize).saturating_sub(display_width(&selector_label) + 2);

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    let mut cursor_col = 0;
    let shown = if input.text.is_empty() && !focused {
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(theme.dim).bg(bg).add_modifier(Modifier::ITALIC),
        ));
        display_width(PLACEHOLDER)
    } else {
        let text = if focused {
            let (window, col) = scroll_window(&input.text, app.edit_cursor, text_width);
            cursor_col = col;
            window.to_string()
        } else {
            truncate_to_width(&input.text, text_width)
        };
        let w = display_width(&text);
        spans.push(Span::styled(text, Style::default().fg(theme.text_bright).bg(bg)));
        w
    };
    let padding = (inner.width as usize).saturating_sub(1 + shown + display_width(&selector_label) + 1);
    spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
    spans.push(Span::styled("Priority: ", Style::default().fg(theme.dim).bg(bg)));
    spans.extend(priority_selector(theme, input.priority, focused));

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    if focused && inner.height > 0 {
        frame.set_cursor_position((inner.x + 1 + cursor_col as u16, inner.y));
    }
}
