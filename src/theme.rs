use crate::storage::KeyValueStore;
use crate::types::ThemeMode;

pub const THEME_STORAGE_KEY: &str = "dctm_theme";

pub struct ThemeDefinition {
    pub css: &'static str,
    pub root_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            root_class: "",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            root_class: "light-theme",
        },
    }
}

/// Theme preference persisted under [`THEME_STORAGE_KEY`].
pub struct ThemeStore {
    store: Box<dyn KeyValueStore>,
}

impl ThemeStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Missing or unrecognised values read as dark.
    pub fn load(&self) -> ThemeMode {
        self.store
            .get(THEME_STORAGE_KEY)
            .and_then(|raw| ThemeMode::parse(&raw))
            .unwrap_or_default()
    }

    pub fn save(&self, mode: ThemeMode) {
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, mode.as_str()) {
            tracing::warn!("failed to persist theme: {err}");
        }
    }

    pub fn toggle(&self, current: ThemeMode) -> ThemeMode {
        let next = current.toggled();
        self.save(next);
        next
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0f1115;
    --color-bg-secondary: #171a21;
    --color-text-primary: #f2f4f8;
    --color-text-muted: #9aa3b2;
    --color-border: #2a2f3a;
    --color-user-bubble-bg: #3b82f6;
    --color-user-bubble-text: #ffffff;
    --color-bot-bubble-bg: #1f2430;
    --color-bot-bubble-text: #f2f4f8;
    --color-chip-bg: #232938;
    --color-chip-text: #d6dbe6;
    --color-timestamp: #7c8596;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #f7f8fa;
    --color-bg-secondary: #ffffff;
    --color-text-primary: #14171f;
    --color-text-muted: #5b6475;
    --color-border: #d9dde5;
    --color-user-bubble-bg: #2563eb;
    --color-user-bubble-text: #ffffff;
    --color-bot-bubble-bg: #ffffff;
    --color-bot-bubble-text: #14171f;
    --color-chip-bg: #eef1f6;
    --color-chip-text: #2b3342;
    --color-timestamp: #7a8394;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn defaults_to_dark() {
        let themes = ThemeStore::new(Box::new(MemoryStore::default()));
        assert_eq!(themes.load(), ThemeMode::Dark);
    }

    #[test]
    fn ignores_unknown_values() {
        let store = MemoryStore::default();
        store.set(THEME_STORAGE_KEY, "sepia").unwrap();
        let themes = ThemeStore::new(Box::new(store));
        assert_eq!(themes.load(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_persists_next_mode() {
        let themes = ThemeStore::new(Box::new(MemoryStore::default()));
        assert_eq!(themes.toggle(ThemeMode::Dark), ThemeMode::Light);
        assert_eq!(themes.load(), ThemeMode::Light);
        assert_eq!(themes.toggle(ThemeMode::Light), ThemeMode::Dark);
        assert_eq!(themes.load(), ThemeMode::Dark);
    }

    #[test]
    fn light_theme_sets_root_class() {
        assert_eq!(theme_definition(ThemeMode::Light).root_class, "light-theme");
        assert_eq!(theme_definition(ThemeMode::Dark).root_class, "");
    }
}
