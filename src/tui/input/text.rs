use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Single-line text entry shared by the add form and the edit session
pub(super) fn handle_text(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => leave(app),
        KeyCode::Enter => submit(app),
        KeyCode::Tab => {
            if let Some(p) = app.active_priority_mut() {
                *p = p.cycle();
            }
        }
        KeyCode::BackTab => {
            if let Some(p) = app.active_priority_mut() {
                *p = p.cycle_back();
            }
        }
        KeyCode::Left => {
            if let Some(prev) = app
                .active_text()
                .and_then(|t| prev_grapheme_boundary(t, app.edit_cursor))
            {
                app.edit_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = app
                .active_text()
                .and_then(|t| next_grapheme_boundary(t, app.edit_cursor))
            {
                app.edit_cursor = next;
            }
        }
        KeyCode::Home => app.edit_cursor = 0,
        KeyCode::End => app.edit_cursor = app.active_text().map_or(0, str::len),
        KeyCode::Backspace => {
            let cursor = app.edit_cursor;
            if let Some(text) = app.active_text_mut()
                && let Some(prev) = prev_grapheme_boundary(text, cursor)
            {
                text.replace_range(prev..cursor, "");
                app.edit_cursor = prev;
            }
        }
        KeyCode::Delete => {
            let cursor = app.edit_cursor;
            if let Some(text) = app.active_text_mut()
                && let Some(next) = next_grapheme_boundary(text, cursor)
            {
                text.replace_range(cursor..next, "");
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let cursor = app.edit_cursor;
            if let Some(text) = app.active_text_mut() {
                text.replace_range(..cursor, "");
                app.edit_cursor = 0;
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let cursor = app.edit_cursor;
            if let Some(text) = app.active_text_mut() {
                text.insert(cursor, c);
                app.edit_cursor = cursor + c.len_utf8();
            }
        }
        _ => {}
    }
}

fn leave(app: &mut App) {
    if app.mode == Mode::Edit {
        app.board.cancel_edit();
    }
    app.mode = Mode::Navigate;
}

fn submit(app: &mut App) {
    match app.mode {
        Mode::Add => {
            // Blank text is silently ignored; the form stays open
            if let Some(id) = app.board.submit_input() {
                app.edit_cursor = 0;
                app.select(id);
            }
        }
        Mode::Edit => {
            let Some(id) = app.board.edit_session().map(|s| s.task_id) else {
                app.mode = Mode::Navigate;
                return;
            };
            match app.board.save_edit(id) {
                Ok(true) => {
                    app.mode = Mode::Navigate;
                    app.select(id);
                }
                Ok(false) => {}
                Err(e) => {
                    app.mode = Mode::Navigate;
                    app.report(e);
                }
            }
        }
        Mode::Navigate => {}
    }
}
