use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::settings::{SettingsStore, open_store};
use crate::model::{BoardConfig, Priority, TaskId};
use crate::ops::board::{BoardError, TaskBoard};

use super::input;
use super::render;
use super::theme::{Theme, ThemeSet};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the add form
    Add,
    /// Typing into the edit session's draft
    Edit,
}

/// Main application state: the board plus everything the terminal needs
pub struct App {
    pub board: TaskBoard,
    pub settings: Box<dyn SettingsStore>,
    pub themes: ThemeSet,
    pub show_key_hints: bool,
    pub mode: Mode,
    /// Cursor row in the filtered view
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// Byte offset of the text cursor in the active field (Add/Edit)
    pub edit_cursor: usize,
    pub show_help: bool,
    /// One-shot message for the status row, cleared on the next key
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Build the app, reading the dark-mode flag from `settings`
    pub fn new(settings: Box<dyn SettingsStore>, config: &BoardConfig) -> Self {
        let board = TaskBoard::load(&*settings);
        App {
            board,
            settings,
            themes: ThemeSet::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            mode: Mode::Navigate,
            cursor: 0,
            scroll_offset: 0,
            edit_cursor: 0,
            show_help: false,
            status: None,
            should_quit: false,
        }
    }

    /// Theme for the current dark-mode flag
    pub fn theme(&self) -> &Theme {
        self.themes.for_mode(self.board.dark_mode())
    }

    /// Ids of the rows currently shown, in display order
    pub fn visible_ids(&self) -> Vec<TaskId> {
        self.board.filter_tasks().iter().map(|t| t.id).collect()
    }

    /// Id of the task under the cursor
    pub fn selected_id(&self) -> Option<TaskId> {
        self.visible_ids().get(self.cursor).copied()
    }

    /// Keep the cursor inside the filtered view
    pub fn clamp_cursor(&mut self) {
        let len = self.board.filter_tasks().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Move the cursor onto a specific task, if it is visible
    pub fn select(&mut self, id: TaskId) {
        if let Some(pos) = self.visible_ids().iter().position(|v| *v == id) {
            self.cursor = pos;
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.board.toggle_dark_mode(&mut *self.settings);
    }

    /// The text being typed into in Add/Edit mode
    pub fn active_text(&self) -> Option<&str> {
        match self.mode {
            Mode::Add => Some(self.board.input.text.as_str()),
            Mode::Edit => self.board.edit_session().map(|s| s.draft.text.as_str()),
            Mode::Navigate => None,
        }
    }

    pub fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.mode {
            Mode::Add => Some(&mut self.board.input.text),
            Mode::Edit => self.board.edit_session_mut().map(|s| &mut s.draft.text),
            Mode::Navigate => None,
        }
    }

    pub fn active_priority_mut(&mut self) -> Option<&mut Priority> {
        match self.mode {
            Mode::Add => Some(&mut self.board.input.priority),
            Mode::Edit => self.board.edit_session_mut().map(|s| &mut s.draft.priority),
            Mode::Navigate => None,
        }
    }

    /// Surface a board error in the status row
    pub fn report(&mut self, err: BoardError) {
        tracing::warn!(error = %err, "board operation failed");
        self.status = Some(err.to_string());
    }
}

/// Run the TUI application
pub fn run(config_dir: &Path, ephemeral: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = read_config(config_dir)?;
    let mut app = App::new(open_store(config_dir, ephemeral), &config);
    tracing::info!(
        config_dir = %config_dir.display(),
        dark_mode = app.board.dark_mode(),
        ephemeral,
        "starting tui"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
