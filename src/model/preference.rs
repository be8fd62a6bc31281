use std::fmt;
use std::str::FromStr;

use super::task::{ParseEnumError, Task};

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    Pending,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Completed, FilterMode::Pending];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Completed => task.completed,
            FilterMode::Pending => !task.completed,
        }
    }

    /// Button label in the filter bar
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Completed => "Completed",
            FilterMode::Pending => "Pending",
        }
    }

    pub fn next(self) -> FilterMode {
        match self {
            FilterMode::All => FilterMode::Completed,
            FilterMode::Completed => FilterMode::Pending,
            FilterMode::Pending => FilterMode::All,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FilterMode::All => "all",
            FilterMode::Completed => "completed",
            FilterMode::Pending => "pending",
        };
        f.write_str(s)
    }
}

impl FromStr for FilterMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "completed" => Ok(FilterMode::Completed),
            "pending" => Ok(FilterMode::Pending),
            _ => Err(ParseEnumError {
                kind: "filter",
                value: s.to_string(),
            }),
        }
    }
}

/// View settings. Only `dark_mode` outlives the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayPreference {
    pub filter: FilterMode,
    pub dark_mode: bool,
}
