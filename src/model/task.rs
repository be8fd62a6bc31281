use std::fmt;
use std::str::FromStr;

/// Stable task identifier, assigned once at creation and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Display label, as shown in the priority selector
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Next option in the selector: High → Medium → Low → High
    pub fn cycle(self) -> Priority {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::High,
        }
    }

    /// Previous option in the selector
    pub fn cycle_back(self) -> Priority {
        match self {
            Priority::High => Priority::Low,
            Priority::Medium => Priority::High,
            Priority::Low => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a priority or filter name doesn't parse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" | "h" => Ok(Priority::High),
            "medium" | "m" => Ok(Priority::Medium),
            "low" | "l" => Ok(Priority::Low),
            _ => Err(ParseEnumError {
                kind: "priority",
                value: s.to_string(),
            }),
        }
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub priority: Priority,
    pub completed: bool,
}

/// Contents of the add form (or any not-yet-committed task text)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub text: String,
    pub priority: Priority,
}

impl TaskDraft {
    /// Whether the draft would be accepted as task text
    pub fn is_blank(&self) -> bool {
        is_blank(&self.text)
    }
}

/// Task text is rejected when it is empty after trimming
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// The single in-progress edit of one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: TaskId,
    pub draft: TaskDraft,
}

/// Ordered task list. Owns the id counter so ids stay unique per list.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    /// Append a new, not-completed task and return its id
    pub fn push(&mut self, text: String, priority: Priority) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.push(Task {
            id,
            text,
            priority,
            completed: false,
        });
        id
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Position of a task in insertion order
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.position(id)?;
        Some(self.tasks.remove(idx))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parse_accepts_names_and_initials() {
        assert_eq!("High".parse::<Priority>(), Ok(Priority::High));
        assert_eq!("medium".parse::<Priority>(), Ok(Priority::Medium));
        assert_eq!(" L ".parse::<Priority>(), Ok(Priority::Low));
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(err.to_string(), "invalid priority: urgent");
    }

    #[test]
    fn priority_cycle_visits_every_option() {
        let mut p = Priority::High;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(p);
            p = p.cycle();
        }
        assert_eq!(seen, Priority::ALL.to_vec());
        assert_eq!(p, Priority::High);
        assert_eq!(Priority::High.cycle_back(), Priority::Low);
        assert_eq!(Priority::Low.cycle_back().cycle(), Priority::Low);
    }

    #[test]
    fn default_draft_is_empty_medium() {
        let draft = TaskDraft::default();
        assert_eq!(draft.text, "");
        assert_eq!(draft.priority, Priority::Medium);
        assert!(draft.is_blank());
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut list = TaskList::new();
        let a = list.push("a".into(), Priority::Low);
        let b = list.push("b".into(), Priority::Low);
        list.remove(b);
        let c = list.push("c".into(), Priority::Low);
        assert_ne!(b, c);
        assert_eq!(list.position(a), Some(0));
        assert_eq!(list.position(c), Some(1));
        assert!(list.get(b).is_none());
    }

    #[test]
    fn blank_detection_trims_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank("  \t\n"));
        assert!(!is_blank(" x "));
    }
}
