use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{FilterMode, Task};
use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, scroll_window, truncate_to_width};

use super::add_form::priority_selector;

/// Width of `▸ [x] ` before the task text
const PREFIX_WIDTH: usize = 6;

fn checkbox(completed: bool) -> &'static str {
    if completed { "[x] " } else { "[ ] " }
}

/// Render the filtered task list
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible_height = area.height as usize;
    let len = app.board.filter_tasks().len();

    // Keep the cursor row on screen
    app.clamp_cursor();
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }
    app.scroll_offset = app.scroll_offset.min(len.saturating_sub(1));

    let app = &*app;
    let theme = app.theme();
    let bg = theme.background;

    if len == 0 {
        let msg = if app.board.tasks().is_empty() || app.board.filter() == FilterMode::All {
            " No tasks"
        } else {
            " No matching tasks"
        };
        let empty = Paragraph::new(msg).style(Style::default().fg(theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let tasks = app.board.filter_tasks();
    let width = area.width as usize;
    let end = len.min(app.scroll_offset + visible_height);
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);
    let mut cursor_pos: Option<(u16, u16)> = None;

    for (row, task) in tasks[app.scroll_offset..end].iter().enumerate() {
        let idx = app.scroll_offset + row;
        let is_cursor = idx == app.cursor;
        let row_bg = if is_cursor { theme.selection_bg } else { bg };
        let editing = app.board.is_editing(task.id);

        let mut spans = vec![
            Span::styled(
                if is_cursor { "\u{25B8} " } else { "  " },
                Style::default().fg(theme.highlight).bg(row_bg),
            ),
            Span::styled(
                checkbox(task.completed),
                Style::default()
                    .fg(if task.completed { theme.green } else { theme.text })
                    .bg(row_bg),
            ),
        ];

        let (text, priority, label_width) = match app.board.edit_session() {
            Some(session) if editing => {
                let label = format!("Priority: \u{2039}{}\u{203A} ", session.draft.priority.label());
                (session.draft.text.as_str(), session.draft.priority, display_width(&label))
            }
            _ => {
                let label = format!("Priority: {} ", task.priority.label());
                (task.text.as_str(), task.priority, display_width(&label))
            }
        };

        let text_budget = width.saturating_sub(PREFIX_WIDTH + label_width + 1);
        let shown = if editing && app.mode == Mode::Edit {
            let (window, col) = scroll_window(text, app.edit_cursor, text_budget);
            cursor_pos = Some((area.x + (PREFIX_WIDTH + col) as u16, area.y + row as u16));
            window.to_string()
        } else {
            truncate_to_width(text, text_budget)
        };
        let shown_width = display_width(&shown);
        spans.push(Span::styled(shown, text_style(app, task, editing, row_bg)));

        let padding = width.saturating_sub(PREFIX_WIDTH + shown_width + label_width);
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(row_bg)));
        spans.push(Span::styled(
            "Priority: ",
            Style::default().fg(theme.dim).bg(row_bg),
        ));
        if editing {
            spans.extend(priority_selector(theme, priority, true));
        } else {
            spans.push(Span::styled(
                priority.label(),
                Style::default()
                    .fg(theme.priority_color(priority))
                    .bg(row_bg),
            ));
        }
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
    if let Some(pos) = cursor_pos {
        frame.set_cursor_position(pos);
    }
}

fn text_style(app: &App, task: &Task, editing: bool, row_bg: ratatui::style::Color) -> Style {
    let theme = app.theme();
    if editing {
        Style::default()
            .fg(theme.text_bright)
            .bg(row_bg)
            .add_modifier(Modifier::UNDERLINED)
    } else if task.completed {
        Style::default()
            .fg(theme.done)
            .bg(row_bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
            .fg(theme.text_bright)
            .bg(row_bg)
            .add_modifier(Modifier::BOLD)
    }
}
