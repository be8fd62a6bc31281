use crossterm::event::{KeyCode, KeyEvent};

use crate::model::FilterMode;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Down | KeyCode::Char('j') => {
            let len = app.board.filter_tasks().len();
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => app.cursor = app.cursor.saturating_sub(1),
        KeyCode::Home | KeyCode::Char('g') => app.cursor = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.cursor = app.board.filter_tasks().len().saturating_sub(1);
        }

        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.mode = Mode::Add;
            app.edit_cursor = app.board.input.text.len();
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.selected_id()
                && let Err(e) = app.board.toggle_complete(id)
            {
                app.report(e);
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.selected_id() {
                match app.board.start_edit(id) {
                    Ok(()) => {
                        app.mode = Mode::Edit;
                        app.edit_cursor = app.active_text().map_or(0, str::len);
                    }
                    Err(e) => app.report(e),
                }
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_id()
                && let Err(e) = app.board.remove_task(id)
            {
                app.report(e);
            }
        }

        KeyCode::Char('f') => app.board.set_filter(app.board.filter().next()),
        KeyCode::Char('1') => app.board.set_filter(FilterMode::All),
        KeyCode::Char('2') => app.board.set_filter(FilterMode::Completed),
        KeyCode::Char('3') => app.board.set_filter(FilterMode::Pending),

        KeyCode::Char('t') => app.toggle_dark_mode(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::io::settings::{DARK_MODE_KEY, MemoryStore};
    use crate::model::{BoardConfig, FilterMode, Priority};
    use crate::tui::app::{App, Mode};
    use crate::tui::input::test_keys::*;

    fn app_with(items: &[&str]) -> App {
        let mut app = App::new(Box::new(MemoryStore::new()), &BoardConfig::default());
        for item in items {
            app.board.add_task(*item, Priority::Medium);
        }
        app
    }

    #[test]
    fn cursor_moves_within_bounds() {
        let mut app = app_with(&["a", "b"]);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor, 1);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn space_toggles_selected() {
        let mut app = app_with(&["a", "b"]);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        let done: Vec<bool> = app.board.tasks().iter().map(|t| t.completed).collect();
        assert_eq!(done, vec![false, true]);
    }

    #[test]
    fn delete_removes_selected_and_clamps() {
        let mut app = app_with(&["a", "b"]);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.board.tasks().len(), 1);
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Char('d'));
        assert!(app.board.tasks().is_empty());
        // Nothing selected: no-op
        press(&mut app, KeyCode::Char('d'));
        assert!(app.status.is_none());
    }

    #[test]
    fn delete_acts_on_filtered_row() {
        let mut app = app_with(&["a", "b", "c"]);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.board.filter(), FilterMode::Pending);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        let left: Vec<&str> = app.board.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(left, vec!["a", "b"]);
    }

    #[test]
    fn filter_keys() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.board.filter(), FilterMode::Completed);
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.board.filter(), FilterMode::Pending);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.board.filter(), FilterMode::All);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.board.filter(), FilterMode::Completed);
    }

    #[test]
    fn edit_key_opens_session_for_selected() {
        let mut app = app_with(&["a", "bb"]);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode, Mode::Edit);
        let session = app.board.edit_session().unwrap();
        assert_eq!(session.draft.text, "bb");
        assert_eq!(app.edit_cursor, 2);
    }

    #[test]
    fn edit_on_empty_list_stays_in_navigate() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn theme_key_toggles_and_persists() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('t'));
        assert!(app.board.dark_mode());
        assert_eq!(app.settings.get(DARK_MODE_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn quit_key() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
