//! Two-valued colour theme persisted under [`THEME_KEY`].

use std::fmt;

use tracing::warn;

use crate::storage::{KeyValueStore, THEME_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Read a persisted value. Missing or unknown values fall back to dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon for the toggle button: the sun offers light mode, the moon dark.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fa-solid fa-sun",
            Theme::Light => "fa-solid fa-moon",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted theme, or dark when nothing (readable) is stored.
pub fn load_theme<S: KeyValueStore>(storage: &S) -> Theme {
    match storage.get_item(THEME_KEY) {
        Ok(value) => Theme::from_stored(value.as_deref()),
        Err(_) => Theme::default(),
    }
}

pub fn save_theme<S: KeyValueStore>(storage: &S, theme: Theme) {
    if let Err(e) = storage.set_item(THEME_KEY, theme.as_str()) {
        warn!("Failed to persist theme: {}", e);
    }
}

/// Flip `current`, persist the result and return it.
pub fn toggle_theme<S: KeyValueStore>(storage: &S, current: Theme) -> Theme {
    let next = current.toggled();
    save_theme(storage, next);
    next
}

/// Inline script applying the persisted theme before the WASM bundle loads,
/// so the page never flashes the wrong colours.
pub const THEME_SCRIPT: &str = r#"
(function(){
    var t = localStorage.getItem('theme') === 'light' ? 'light' : 'dark';
    document.documentElement.setAttribute('data-theme', t);
})();
"#;
