use crate::app::config::AppConfig;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,
    pub text: Color,
    pub subtext: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),
            surface: Color::Rgb(49, 50, 68),
            overlay: Color::Rgb(108, 112, 134),
            text: Color::Rgb(205, 214, 244),
            subtext: Color::Rgb(166, 173, 200),
            red: Color::Rgb(243, 139, 168),
            green: Color::Rgb(166, 227, 161),
            yellow: Color::Rgb(249, 226, 175),
            blue: Color::Rgb(137, 180, 250),
            magenta: Color::Rgb(203, 166, 247),
        }
    }
}

// Helper for serialization/deserialization
#[derive(Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

pub fn load_current_theme() -> Theme {
    load_theme_from(&AppConfig::get_theme_path())
}

pub fn load_theme_from(path: &Path) -> Theme {
    if path.exists() {
        if let Ok(content) = fs::read_to_string(path) {
            // Nested [theme] table first
            if let Ok(wrapper) = toml::from_str::<ThemeFile>(&content) {
                return wrapper.theme;
            }
            // Fallback: flat file
            if let Ok(theme) = toml::from_str::<Theme>(&content) {
                return theme;
            }
        }
        tracing::warn!(path = %path.display(), "unreadable theme file, using default");
    } else {
        // Auto-create default theme file if it doesn't exist
        let wrapper = ThemeFile {
            theme: Theme::default(),
        };
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(toml_str) = toml::to_string_pretty(&wrapper) {
            let _ = fs::write(path, toml_str);
        }
    }

    Theme::default()
}
