use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    // Global
    pub quit: String,
    pub toggle_keyhints: String,

    // Description
    pub toggle_description: String,
    pub scroll_up: String,
    pub scroll_up_alt: String,
    pub scroll_down: String,
    pub scroll_down_alt: String,

    // Links
    pub link_prev: String,
    pub link_prev_alt: String,
    pub link_next: String,
    pub link_next_alt: String,
    pub open_link: String,

    // Tokens
    pub token_next: String,
    pub token_prev: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            toggle_keyhints: "?".to_string(),

            toggle_description: "Space".to_string(),
            scroll_up: "k".to_string(),
            scroll_up_alt: "Up".to_string(),
            scroll_down: "j".to_string(),
            scroll_down_alt: "Down".to_string(),

            link_prev: "h".to_string(),
            link_prev_alt: "Left".to_string(),
            link_next: "l".to_string(),
            link_next_alt: "Right".to_string(),
            open_link: "Enter".to_string(),

            token_next: "Tab".to_string(),
            token_prev: "BackTab".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn matches(&self, event: KeyEvent, key_str: &str) -> bool {
        match key_str {
            "Space" => event.code == KeyCode::Char(' '),
            "Enter" => event.code == KeyCode::Enter,
            "Backspace" => event.code == KeyCode::Backspace,
            "Esc" => event.code == KeyCode::Esc,
            "Tab" => event.code == KeyCode::Tab,
            "BackTab" => event.code == KeyCode::BackTab,
            "Up" => event.code == KeyCode::Up,
            "Down" => event.code == KeyCode::Down,
            "Left" => event.code == KeyCode::Left,
            "Right" => event.code == KeyCode::Right,
            s if s.chars().count() == 1 => {
                if let Some(ch) = s.chars().next() {
                    // Uppercase bindings also accept shift + lowercase
                    if ch.is_uppercase() {
                        event.code == KeyCode::Char(ch)
                            || (event.code == KeyCode::Char(ch.to_ascii_lowercase())
                                && event.modifiers.contains(KeyModifiers::SHIFT))
                    } else {
                        event.code == KeyCode::Char(ch)
                    }
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    // Helper for UI display
    pub fn display(&self, key_str: &str) -> String {
        match key_str {
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "BackTab" => "S-Tab".to_string(),
            "Backspace" => "Bksp".to_string(),
            _ => key_str.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_named_keys() {
        let keys = KeyConfig::default();
        assert!(keys.matches(key(KeyCode::Char(' ')), &keys.toggle_description));
        assert!(keys.matches(key(KeyCode::Enter), &keys.open_link));
        assert!(keys.matches(key(KeyCode::BackTab), &keys.token_prev));
        assert!(!keys.matches(key(KeyCode::Tab), &keys.token_prev));
    }

    #[test]
    fn test_uppercase_accepts_shift() {
        let keys = KeyConfig::default();
        let shifted = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::SHIFT);
        assert!(keys.matches(shifted, "X"));
        assert!(!keys.matches(key(KeyCode::Char('x')), "X"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let keys: KeyConfig = toml::from_str("quit = \"x\"\n").unwrap();
        assert_eq!(keys.quit, "x");
        assert_eq!(keys.toggle_description, "Space");
    }

    #[test]
    fn test_display() {
        let keys = KeyConfig::default();
        assert_eq!(keys.display("BackTab"), "S-Tab");
        assert_eq!(keys.display("q"), "q");
    }
}
