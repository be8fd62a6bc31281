use tracing::{debug, info, warn};

use crate::io::settings::{DARK_MODE_KEY, SettingsStore, get_flag, set_flag};
use crate::model::preference::{DisplayPreference, FilterMode};
use crate::model::task::{EditSession, Priority, Task, TaskDraft, TaskId, TaskList, is_blank};

/// Error type for board operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("task {0} is not being edited")]
    NotEditing(TaskId),
}

/// Task counts shown next to the filter buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskCounts {
    pub fn for_filter(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.total,
            FilterMode::Completed => self.completed,
            FilterMode::Pending => self.pending,
        }
    }
}

/// The whole to-do board: tasks, the add form, the edit slot and view settings
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: TaskList,
    /// Add form contents
    pub input: TaskDraft,
    edit: Option<EditSession>,
    preference: DisplayPreference,
}

impl TaskBoard {
    /// Empty board in light mode
    pub fn new() -> Self {
        TaskBoard::default()
    }

    /// Empty board whose dark-mode flag is read once from `store`
    pub fn load(store: &dyn SettingsStore) -> Self {
        let mut board = TaskBoard::new();
        board.preference.dark_mode = get_flag(store, DARK_MODE_KEY);
        board
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn filter(&self) -> FilterMode {
        self.preference.filter
    }

    pub fn dark_mode(&self) -> bool {
        self.preference.dark_mode
    }

    // -----------------------------------------------------------------------
    // Task CRUD
    // -----------------------------------------------------------------------

    /// Append a task. Whitespace-only text is discarded (returns `None`).
    /// On success the add form is reset.
    pub fn add_task(&mut self, text: impl Into<String>, priority: Priority) -> Option<TaskId> {
        let text = text.into();
        if is_blank(&text) {
            return None;
        }
        let id = self.tasks.push(text, priority);
        self.input = TaskDraft::default();
        debug!(%id, %priority, "task added");
        Some(id)
    }

    /// Add a task from the add form's current contents
    pub fn submit_input(&mut self) -> Option<TaskId> {
        let draft = std::mem::take(&mut self.input);
        let id = self.add_task(draft.text.clone(), draft.priority);
        if id.is_none() {
            self.input = draft;
        }
        id
    }

    /// Remove a task. Closes the edit session if it was for this task.
    pub fn remove_task(&mut self, id: TaskId) -> Result<Task, BoardError> {
        let task = self.tasks.remove(id).ok_or(BoardError::NotFound(id))?;
        if self.edit.as_ref().is_some_and(|e| e.task_id == id) {
            self.edit = None;
        }
        debug!(%id, "task removed");
        Ok(task)
    }

    /// Flip `completed`. Returns the new value.
    pub fn toggle_complete(&mut self, id: TaskId) -> Result<bool, BoardError> {
        let task = self.tasks.get_mut(id).ok_or(BoardError::NotFound(id))?;
        task.completed = !task.completed;
        debug!(%id, completed = task.completed, "task toggled");
        Ok(task.completed)
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Open the edit slot for a task, replacing any open session
    pub fn start_edit(&mut self, id: TaskId) -> Result<(), BoardError> {
        let task = self.tasks.get(id).ok_or(BoardError::NotFound(id))?;
        self.edit = Some(EditSession {
            task_id: id,
            draft: TaskDraft {
                text: task.text.clone(),
                priority: task.priority,
            },
        });
        Ok(())
    }

    /// Write the draft back and close the session.
    ///
    /// Uses the same rule as `add_task`: a whitespace-only draft is not
    /// written, the session stays open and `Ok(false)` is returned.
    pub fn save_edit(&mut self, id: TaskId) -> Result<bool, BoardError> {
        let session = match &self.edit {
            Some(s) if s.task_id == id => s,
            _ => return Err(BoardError::NotEditing(id)),
        };
        if session.draft.is_blank() {
            return Ok(false);
        }
        let draft = session.draft.clone();
        let task = self.tasks.get_mut(id).ok_or(BoardError::NotFound(id))?;
        task.text = draft.text;
        task.priority = draft.priority;
        self.edit = None;
        debug!(%id, "task edited");
        Ok(true)
    }

    /// Close the edit slot without writing
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn edit_session_mut(&mut self) -> Option<&mut EditSession> {
        self.edit.as_mut()
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.edit.as_ref().is_some_and(|e| e.task_id == id)
    }

    // -----------------------------------------------------------------------
    // View
    // -----------------------------------------------------------------------

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.preference.filter = mode;
    }

    /// Flip dark mode and persist the new value to `store`.
    /// A failed write is logged; the in-memory value changes regardless.
    pub fn toggle_dark_mode(&mut self, store: &mut dyn SettingsStore) -> bool {
        let dark = !self.preference.dark_mode;
        self.preference.dark_mode = dark;
        if let Err(e) = set_flag(store, DARK_MODE_KEY, dark) {
            warn!(error = %e, "could not persist dark mode");
        }
        info!(dark_mode = dark, "theme changed");
        dark
    }

    /// Tasks matching the current filter, in list order
    pub fn filter_tasks(&self) -> Vec<&Task> {
        let mode = self.preference.filter;
        self.tasks.iter().filter(|t| mode.matches(t)).collect()
    }

    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskCounts {
            total: self.tasks.len(),
            completed,
            pending: self.tasks.len() - completed,
        }
    }
}
