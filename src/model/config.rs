use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides for the light theme (`[ui.light]`)
    #[serde(default)]
    pub light: HashMap<String, String>,
    /// Hex color overrides for the dark theme (`[ui.dark]`)
    #[serde(default)]
    pub dark: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            light: HashMap::new(),
            dark: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: BoardConfig = toml::from_str("").unwrap();
        assert!(config.ui.show_key_hints);
        assert!(config.ui.light.is_empty());
        assert!(config.ui.dark.is_empty());
    }

    #[test]
    fn color_tables_parse() {
        let config: BoardConfig = toml::from_str(
            r##"
[ui]
show_key_hints = false

[ui.dark]
highlight = "#FB4196"
"##,
        )
        .unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.dark.get("highlight").map(String::as_str), Some("#FB4196"));
    }
}
