use crate::error::ThemeError;
use crate::persist::{PreferenceStore, THEME_KEY};
use serde::Serialize;
use std::str::FromStr;
use strum::{Display, EnumString, IntoStaticStr};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Gruvbox,
    Nord,
    Solarized,
    Matrix,
    Catppuccin,
}

impl ThemeName {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn palette(self) -> &'static Palette {
        // REGISTRY holds every variant
        &REGISTRY
            .iter()
            .find(|t| t.id == self)
            .unwrap_or(&REGISTRY[0])
            .palette
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Palette {
    pub bg: &'static str,
    pub bg_hard: &'static str,
    pub fg: &'static str,
    pub gray: &'static str,
    pub red: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub blue: &'static str,
    pub purple: &'static str,
    pub aqua: &'static str,
    pub orange: &'static str,
}

pub struct Theme {
    pub id: ThemeName,
    pub palette: Palette,
}

/// Registered themes in enumeration (and cycling) order.
pub static REGISTRY: [Theme; 5] = [
    Theme {
        id: ThemeName::Gruvbox,
        palette: Palette {
            bg: "#282828",
            bg_hard: "#1d2021",
            fg: "#ebdbb2",
            gray: "#928374",
            red: "#fb4934",
            green: "#b8bb26",
            yellow: "#fabd2f",
            blue: "#83a598",
            purple: "#d3869b",
            aqua: "#8ec07c",
            orange: "#fe8019",
        },
    },
    Theme {
        id: ThemeName::Nord,
        palette: Palette {
            bg: "#2e3440",
            bg_hard: "#242933",
            fg: "#d8dee9",
            gray: "#4c566a",
            red: "#bf616a",
            green: "#a3be8c",
            yellow: "#ebcb8b",
            blue: "#81a1c1",
            purple: "#b48ead",
            aqua: "#88c0d0",
            orange: "#d08770",
        },
    },
    Theme {
        id: ThemeName::Solarized,
        palette: Palette {
            bg: "#002b36",
            bg_hard: "#001e26",
            fg: "#839496",
            gray: "#586e75",
            red: "#dc322f",
            green: "#859900",
            yellow: "#b58900",
            blue: "#268bd2",
            purple: "#6c71c4",
            aqua: "#2aa198",
            orange: "#cb4b16",
        },
    },
    Theme {
        id: ThemeName::Matrix,
        palette: Palette {
            bg: "#000000",
            bg_hard: "#000000",
            fg: "#00ff41",
            gray: "#008f11",
            red: "#ff3030",
            green: "#00ff41",
            yellow: "#b7ff00",
            blue: "#00d8a0",
            purple: "#39ff14",
            aqua: "#00ffaa",
            orange: "#aaff00",
        },
    },
    Theme {
        id: ThemeName::Catppuccin,
        palette: Palette {
            bg: "#1e1e2e",
            bg_hard: "#11111b",
            fg: "#cdd6f4",
            gray: "#6c7086",
            red: "#f38ba8",
            green: "#a6e3a1",
            yellow: "#f9e2af",
            blue: "#89b4fa",
            purple: "#cba6f7",
            aqua: "#94e2d5",
            orange: "#fab387",
        },
    },
];

/// Case-sensitive lookup by identifier.
pub fn lookup(id: &str) -> Option<&'static Theme> {
    let name = ThemeName::from_str(id).ok()?;
    REGISTRY.iter().find(|t| t.id == name)
}

pub fn enumerate() -> impl Iterator<Item = ThemeName> {
    REGISTRY.iter().map(|t| t.id)
}

type ChangeHook = Box<dyn FnMut(ThemeName)>;

/// The current theme plus everything that has to happen when it changes.
pub struct ThemeState {
    current: ThemeName,
    store: Box<dyn PreferenceStore>,
    on_change: Option<ChangeHook>,
}

impl ThemeState {
    /// Restore the saved preference, falling back to the default theme when
    /// nothing (or something unknown) is stored.
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let current = match store.load(THEME_KEY) {
            Ok(Some(saved)) => match lookup(&saved) {
                Some(theme) => theme.id,
                None => {
                    log::warn!("ignoring unknown saved theme '{}'", saved);
                    ThemeName::default()
                }
            },
            Ok(None) => ThemeName::default(),
            Err(e) => {
                log::warn!("theme preference unreadable: {}", e);
                ThemeName::default()
            }
        };
        ThemeState {
            current,
            store,
            on_change: None,
        }
    }

    pub fn current(&self) -> ThemeName {
        self.current
    }

    pub fn on_change(&mut self, hook: impl FnMut(ThemeName) + 'static) {
        self.on_change = Some(Box::new(hook));
    }

    pub fn set_by_name(&mut self, id: &str) -> Result<ThemeName, ThemeError> {
        let theme = lookup(id).ok_or_else(|| ThemeError::NotFound(id.to_string()))?;
        self.set(theme.id);
        Ok(theme.id)
    }

    /// Update, persist and notify. A failed write is logged and otherwise
    /// ignored; the in-memory theme still changes.
    pub fn set(&mut self, theme: ThemeName) {
        self.current = theme;
        if let Err(e) = self.store.save(THEME_KEY, theme.as_str()) {
            log::warn!("could not persist theme '{}': {}", theme, e);
        }
        if let Some(hook) = self.on_change.as_mut() {
            hook(theme);
        }
        log::debug!("theme set to {}", theme);
    }

    /// Advance to the next registered theme, wrapping at the end.
    pub fn cycle(&mut self) -> ThemeName {
        let idx = REGISTRY
            .iter()
            .position(|t| t.id == self.current)
            .unwrap_or(0);
        let next = REGISTRY[(idx + 1) % REGISTRY.len()].id;
        self.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PersistError;
    use crate::persist::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, PersistError> {
            Err(PersistError::Unavailable)
        }
        fn save(&mut self, key: &str, _value: &str) -> Result<(), PersistError> {
            Err(PersistError::Write(key.to_string()))
        }
    }

    #[test]
    fn test_enumeration_order() {
        let names: Vec<_> = enumerate().map(ThemeName::as_str).collect();
        assert_eq!(names, ["gruvbox", "nord", "solarized", "matrix", "catppuccin"]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(lookup("nord").is_some());
        assert!(lookup("Nord").is_none());
        assert!(lookup("bogus").is_none());
    }

    #[test]
    fn test_load_saved_preference() {
        let state = ThemeState::load(Box::new(MemoryStore::with(THEME_KEY, "matrix")));
        assert_eq!(state.current(), ThemeName::Matrix);
    }

    #[test]
    fn test_load_falls_back_to_default() {
        let state = ThemeState::load(Box::new(MemoryStore::with(THEME_KEY, "neon")));
        assert_eq!(state.current(), ThemeName::Gruvbox);
        let state = ThemeState::load(Box::new(BrokenStore));
        assert_eq!(state.current(), ThemeName::Gruvbox);
    }

    #[test]
    fn test_set_persists_and_notifies() {
        let store = MemoryStore::new();
        let mut state = ThemeState::load(Box::new(store.clone()));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        state.on_change(move |t| sink.borrow_mut().push(t));

        assert_eq!(state.set_by_name("nord"), Ok(ThemeName::Nord));
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("nord"));
        assert_eq!(*seen.borrow(), vec![ThemeName::Nord]);
    }

    #[test]
    fn test_unknown_name_leaves_state() {
        let store = MemoryStore::new();
        let mut state = ThemeState::load(Box::new(store.clone()));
        let err = state.set_by_name("bogus").unwrap_err();
        assert_eq!(err.to_string(), "Theme 'bogus' not found");
        assert_eq!(state.current(), ThemeName::Gruvbox);
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn test_failed_write_still_switches() {
        let mut state = ThemeState::load(Box::new(BrokenStore));
        state.set(ThemeName::Solarized);
        assert_eq!(state.current(), ThemeName::Solarized);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut state = ThemeState::load(Box::new(MemoryStore::with(THEME_KEY, "matrix")));
        assert_eq!(state.cycle(), ThemeName::Catppuccin);
        assert_eq!(state.cycle(), ThemeName::Gruvbox);
    }
}
