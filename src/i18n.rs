//! Session locale state: active interface language, lookups and direction.
use std::sync::Arc;

use parking_lot::RwLock;

use crate::lang::{Dictionary, MessageKey};
use crate::locale::{direction_of, InvalidLocale, TextDirection, UiLocaleCode};
use crate::store::{PreferenceStore, LOCALE_KEY};

/// Handle to the one locale state of a UI session. Clones share state.
#[derive(Clone)]
pub struct LocaleContext {
    active: Arc<RwLock<UiLocaleCode>>,
    store: Arc<dyn PreferenceStore>,
    dict: &'static Dictionary,
}

impl LocaleContext {
    /// Restore the persisted locale, `en` when absent or unrecognized.
    pub fn init(store: Arc<dyn PreferenceStore>) -> Self {
        Self::with_dictionary(store, Dictionary::embedded())
    }

    pub fn with_dictionary(store: Arc<dyn PreferenceStore>, dict: &'static Dictionary) -> Self {
        let active = match store.get(LOCALE_KEY) {
            Some(raw) => raw.parse::<UiLocaleCode>().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "persisted locale ignored");
                UiLocaleCode::default()
            }),
            None => UiLocaleCode::default(),
        };
        tracing::debug!(locale = %active, "locale context initialized");
        Self { active: Arc::new(RwLock::new(active)), store, dict }
    }

    pub fn active_locale(&self) -> UiLocaleCode {
        *self.active.read()
    }

    /// Switch the interface language and persist it. A failed write is logged;
    /// the in-memory switch still takes effect.
    pub fn set_active_locale(&self, code: UiLocaleCode) {
        *self.active.write() = code;
        if let Err(e) = self.store.set(LOCALE_KEY, code.as_str()) {
            tracing::warn!(locale = %code, error = %e, "failed to persist interface language");
        }
        tracing::debug!(locale = %code, "interface language changed");
    }

    /// String entry point for untyped callers (select widgets, CLI flags).
    pub fn set_active_locale_str(&self, raw: &str) -> Result<UiLocaleCode, InvalidLocale> {
        let code = raw.parse::<UiLocaleCode>()?;
        self.set_active_locale(code);
        Ok(code)
    }

    pub fn lookup_message(&self, key: MessageKey) -> String {
        self.dict.tr(self.active_locale(), key)
    }

    /// Short alias used throughout the view code.
    pub fn t(&self, key: MessageKey) -> String {
        self.lookup_message(key)
    }

    pub fn direction(&self) -> TextDirection {
        direction_of(self.active_locale())
    }
}
