mod navigate;
mod text;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use navigate::handle_navigate;
use text::handle_text;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status = None;

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Add | Mode::Edit => handle_text(app, key),
    }
    app.clamp_cursor();
}


#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;
    use crate::io::settings::MemoryStore;
    use crate::model::BoardConfig;

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = App::new(Box::new(MemoryStore::new()), &BoardConfig::default());
        app.mode = Mode::Add;
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn help_overlay_swallows_one_key() {
        let mut app = App::new(Box::new(MemoryStore::new()), &BoardConfig::default());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn status_clears_on_next_key() {
        let mut app = App::new(Box::new(MemoryStore::new()), &BoardConfig::default());
        app.status = Some("boom".into());
        press(&mut app, KeyCode::Char('j'));
        assert!(app.status.is_none());
    }
}
