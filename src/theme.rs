//! Light/dark colour themes, persisted alongside the interface language.
use std::sync::Arc;

use parking_lot::RwLock;

use crate::lang::MessageKey;
use crate::store::{PreferenceStore, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle button: names the theme it switches *to*.
    pub fn toggle_label(self) -> MessageKey {
        match self {
            Theme::Light => MessageKey::ThemeDark,
            Theme::Dark => MessageKey::ThemeLight,
        }
    }

    /// CSS custom properties for this theme, scoped to `:root`.
    pub fn css_tokens(self) -> &'static str {
        match self {
            Theme::Light => LIGHT_TOKENS,
            Theme::Dark => DARK_TOKENS,
        }
    }
}

const LIGHT_TOKENS: &str = r#":root {
    color-scheme: light;
    --color-bg: #f6f7f9;
    --color-bg-alt: #eef0f3;
    --color-panel: #ffffff;
    --color-panel-alt: #f2f4f7;
    --color-border: #dde1e6;
    --color-border-hover: #c3c9d1;
    --color-text: #1c1f23;
    --color-text-dim: #687078;
    --color-accent: #3d82f7;
    --color-accent-hover: #2f6fe0;
    --color-danger: #d9534f;
    --color-success: #2e8b57;
}"#;

const DARK_TOKENS: &str = r#":root {
    color-scheme: dark;
    --color-bg: #111213;
    --color-bg-alt: #161718;
    --color-panel: #1d1f21;
    --color-panel-alt: #222527;
    --color-border: #272a2d;
    --color-border-hover: #33373b;
    --color-text: #dddddd;
    --color-text-dim: #9aa0a6;
    --color-accent: #3d82f7;
    --color-accent-hover: #4d8eff;
    --color-danger: #d9534f;
    --color-success: #3fb36f;
}"#;

/// Shared theme preference. Clones share state.
#[derive(Clone)]
pub struct ThemeState {
    current: Arc<RwLock<Theme>>,
    store: Arc<dyn PreferenceStore>,
}

impl ThemeState {
    pub fn init(store: Arc<dyn PreferenceStore>) -> Self {
        let theme = store.get(THEME_KEY).as_deref().and_then(Theme::parse).unwrap_or_default();
        Self { current: Arc::new(RwLock::new(theme)), store }
    }

    pub fn current(&self) -> Theme {
        *self.current.read()
    }

    pub fn set(&self, theme: Theme) {
        *self.current.write() = theme;
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            tracing::warn!(theme = theme.as_str(), error = %e, "failed to persist theme");
        }
        tracing::debug!(theme = theme.as_str(), "theme changed");
    }

    /// Flip light/dark and return the new theme.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.set(next);
        next
    }
}
