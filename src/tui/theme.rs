use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{Priority, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub selection_bg: Color,
    pub done: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            done: Color::Rgb(0x5A, 0x56, 0x80),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xF7, 0xF5, 0xFF),
            text: Color::Rgb(0x2E, 0x28, 0x4A),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            highlight: Color::Rgb(0xC2, 0x18, 0x5B),
            dim: Color::Rgb(0x8A, 0x85, 0xA8),
            red: Color::Rgb(0xC6, 0x28, 0x28),
            yellow: Color::Rgb(0xB2, 0x6A, 0x00),
            green: Color::Rgb(0x2E, 0x7D, 0x32),
            selection_bg: Color::Rgb(0xE4, 0xDC, 0xF7),
            done: Color::Rgb(0xA8, 0xA3, 0xC4),
        }
    }

    /// Apply `[ui.light]` / `[ui.dark]` hex overrides. Unknown keys and
    /// unparseable colors are ignored.
    fn with_overrides(mut self, colors: &HashMap<String, String>) -> Self {
        for (key, value) in colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => self.background = color,
                "text" => self.text = color,
                "text_bright" => self.text_bright = color,
                "highlight" => self.highlight = color,
                "dim" => self.dim = color,
                "red" => self.red = color,
                "yellow" => self.yellow = color,
                "green" => self.green = color,
                "selection_bg" => self.selection_bg = color,
                "done" => self.done = color,
                _ => {}
            }
        }
        self
    }

    /// Label color for a priority
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.red,
            Priority::Medium => self.yellow,
            Priority::Low => self.green,
        }
    }
}

/// Both palettes; the board's dark-mode flag picks one per frame
#[derive(Debug, Clone)]
pub struct ThemeSet {
    pub light: Theme,
    pub dark: Theme,
}

impl Default for ThemeSet {
    fn default() -> Self {
        ThemeSet {
            light: Theme::light(),
            dark: Theme::dark(),
        }
    }
}

impl ThemeSet {
    pub fn from_config(ui: &UiConfig) -> Self {
        ThemeSet {
            light: Theme::light().with_overrides(&ui.light),
            dark: Theme::dark().with_overrides(&ui.dark),
        }
    }

    pub fn for_mode(&self, dark_mode: bool) -> &Theme {
        if dark_mode { &self.dark } else { &self.light }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF4444"), Some(Color::Rgb(0xFF, 0x44, 0x44)));
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn overrides_apply_per_mode() {
        let mut ui = UiConfig::default();
        ui.dark.insert("background".into(), "#000000".into());
        ui.light.insert("highlight".into(), "#112233".into());
        ui.light.insert("nonsense".into(), "#112233".into());

        let themes = ThemeSet::from_config(&ui);
        assert_eq!(themes.dark.background, Color::Rgb(0, 0, 0));
        assert_eq!(themes.light.background, Theme::light().background);
        assert_eq!(themes.light.highlight, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(themes.dark.highlight, Theme::dark().highlight);
    }

    #[test]
    fn for_mode_picks_palette() {
        let themes = ThemeSet::default();
        assert_eq!(themes.for_mode(true), &Theme::dark());
        assert_eq!(themes.for_mode(false), &Theme::light());
    }

    #[test]
    fn priority_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.priority_color(Priority::High), theme.red);
        assert_eq!(theme.priority_color(Priority::Low), theme.green);
    }
}
