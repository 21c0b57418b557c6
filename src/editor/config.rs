use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub key_bindings: KeyBindings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub add_frame: String,
    pub duplicate_frame: String,
    pub delete_frame: String,
    pub clear_frame: String,
    pub next_frame: String,
    pub prev_frame: String,
    pub play_toggle: String,
    pub speed_up: String,
    pub speed_down: String,
    pub swap_color: String,
    pub toggle_tool: String,
    pub fullscreen: String,
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            add_frame: "a".into(),
            duplicate_frame: "d".into(),
            delete_frame: "Backspace".into(),
            clear_frame: "c".into(),
            next_frame: "Right".into(),
            prev_frame: "Left".into(),
            play_toggle: "Space".into(),
            speed_up: "+".into(),
            speed_down: "-".into(),
            swap_color: "x".into(),
            toggle_tool: "t".into(),
            fullscreen: "F11".into(),
            quit: "q".into(),
        }
    }
}

impl EditorConfig {
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: invalid editor config ({e}), using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    fn config_path() -> std::path::PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        let mut path = std::path::PathBuf::from(home);
        path.push(".config");
        path.push("flipbook");
        path.push("editor.json");
        path
    }
}

/// Check whether a crossterm `KeyEvent` matches a binding string from
/// config.
pub fn matches_binding(binding: &str, event: &KeyEvent) -> bool {
    // Handle Ctrl- prefix
    if let Some(rest) = binding.strip_prefix("Ctrl-") {
        if !event.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        return match rest.chars().next() {
            Some(c) => event.code == KeyCode::Char(c),
            None => false,
        };
    }

    // Plain bindings must not fire while Ctrl or Alt is held.
    if event.modifiers.contains(KeyModifiers::CONTROL)
        || event.modifiers.contains(KeyModifiers::ALT)
    {
        return false;
    }

    match binding {
        "Right" => event.code == KeyCode::Right,
        "Left" => event.code == KeyCode::Left,
        "Up" => event.code == KeyCode::Up,
        "Down" => event.code == KeyCode::Down,
        "Enter" => event.code == KeyCode::Enter,
        "Esc" => event.code == KeyCode::Esc,
        "Space" => event.code == KeyCode::Char(' '),
        "Tab" => event.code == KeyCode::Tab,
        "Backspace" => event.code == KeyCode::Backspace,
        s => {
            // F-key binding: "F1" through "F12".
            if let Some(rest) = s.strip_prefix('F') {
                if let Ok(n) = rest.parse::<u8>() {
                    return event.code == KeyCode::F(n);
                }
            }
            // Single character binding
            match s.chars().next() {
                Some(c) => event.code == KeyCode::Char(c),
                None => false,
            }
        }
    }
}
