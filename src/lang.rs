//! JSON-based message dictionaries with an English fallback.
use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::locale::UiLocaleCode;

/// Raw dictionary sources, one JSON object per interface locale.
pub static EMBEDDED_LANGS: &[(UiLocaleCode, &str)] = &[
    (UiLocaleCode::En, include_str!("../lang/en.json")),
    (UiLocaleCode::He, include_str!("../lang/he.json")),
    (UiLocaleCode::Ru, include_str!("../lang/ru.json")),
];

/// Locale every other table falls back to.
pub const FALLBACK_LOCALE: UiLocaleCode = UiLocaleCode::En;

/// Every piece of interface text the app renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AppTitle,
    AppDescription,
    From,
    To,
    SelectLanguage,
    SearchLanguages,
    NoLanguageFound,
    EnterText,
    TranslationWillAppear,
    Characters,
    Translate,
    Translating,
    Copy,
    Copied,
    SwapLanguages,
    ToggleTheme,
    Dismiss,
    NoTextToTranslate,
    PleaseEnterText,
    TranslationComplete,
    TranslationSuccess,
    TranslationFailed,
    TranslationError,
    CopiedToClipboard,
    CopiedDescription,
    ClipboardUnavailable,
    CopyFailed,
    TranslationFrom,
    TranslationTo,
    PreviewNotice,
    ThemeLight,
    ThemeDark,
    LanguageSwitcher,
}

impl MessageKey {
    pub const ALL: [MessageKey; 33] = [
        MessageKey::AppTitle,
        MessageKey::AppDescription,
        MessageKey::From,
        MessageKey::To,
        MessageKey::SelectLanguage,
        MessageKey::SearchLanguages,
        MessageKey::NoLanguageFound,
        MessageKey::EnterText,
        MessageKey::TranslationWillAppear,
        MessageKey::Characters,
        MessageKey::Translate,
        MessageKey::Translating,
        MessageKey::Copy,
        MessageKey::Copied,
        MessageKey::SwapLanguages,
        MessageKey::ToggleTheme,
        MessageKey::Dismiss,
        MessageKey::NoTextToTranslate,
        MessageKey::PleaseEnterText,
        MessageKey::TranslationComplete,
        MessageKey::TranslationSuccess,
        MessageKey::TranslationFailed,
        MessageKey::TranslationError,
        MessageKey::CopiedToClipboard,
        MessageKey::CopiedDescription,
        MessageKey::ClipboardUnavailable,
        MessageKey::CopyFailed,
        MessageKey::TranslationFrom,
        MessageKey::TranslationTo,
        MessageKey::PreviewNotice,
        MessageKey::ThemeLight,
        MessageKey::ThemeDark,
        MessageKey::LanguageSwitcher,
    ];

    /// Identifier used in the JSON tables; also the last-resort display text.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::AppTitle => "app.title",
            MessageKey::AppDescription => "app.description",
            MessageKey::From => "selector.from",
            MessageKey::To => "selector.to",
            MessageKey::SelectLanguage => "selector.select_language",
            MessageKey::SearchLanguages => "selector.search_languages",
            MessageKey::NoLanguageFound => "selector.no_language_found",
            MessageKey::EnterText => "pane.enter_text",
            MessageKey::TranslationWillAppear => "pane.translation_will_appear",
            MessageKey::Characters => "pane.characters",
            MessageKey::Translate => "action.translate",
            MessageKey::Translating => "action.translating",
            MessageKey::Copy => "action.copy",
            MessageKey::Copied => "action.copied",
            MessageKey::SwapLanguages => "action.swap_languages",
            MessageKey::ToggleTheme => "action.toggle_theme",
            MessageKey::Dismiss => "action.dismiss",
            MessageKey::NoTextToTranslate => "toast.no_text_to_translate",
            MessageKey::PleaseEnterText => "toast.please_enter_text",
            MessageKey::TranslationComplete => "toast.translation_complete",
            MessageKey::TranslationSuccess => "toast.translation_success",
            MessageKey::TranslationFailed => "toast.translation_failed",
            MessageKey::TranslationError => "toast.translation_error",
            MessageKey::CopiedToClipboard => "toast.copied_to_clipboard",
            MessageKey::CopiedDescription => "toast.copied_description",
            MessageKey::ClipboardUnavailable => "toast.clipboard_unavailable",
            MessageKey::CopyFailed => "toast.copy_failed",
            MessageKey::TranslationFrom => "preview.translation_from",
            MessageKey::TranslationTo => "preview.translation_to",
            MessageKey::PreviewNotice => "preview.notice",
            MessageKey::ThemeLight => "theme.light",
            MessageKey::ThemeDark => "theme.dark",
            MessageKey::LanguageSwitcher => "lang.switcher",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LangMap(HashMap<String, String>);

impl LangMap {
    /// Non-empty entry for `key`; empty strings count as untranslated.
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str).filter(|s| !s.is_empty())
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// All locale tables, keyed by interface locale.
#[derive(Debug, Default)]
pub struct Dictionary {
    tables: HashMap<UiLocaleCode, LangMap>,
}

static EMBEDDED: Lazy<Dictionary> = Lazy::new(|| Dictionary::from_sources(EMBEDDED_LANGS));

impl Dictionary {
    /// Dictionary compiled into the binary, parsed on first use.
    pub fn embedded() -> &'static Dictionary {
        &EMBEDDED
    }

    /// Build from raw JSON sources. A table that fails to parse is logged and
    /// left out, which makes every lookup for that locale fall back to English.
    pub fn from_sources(sources: &[(UiLocaleCode, &str)]) -> Self {
        let mut tables = HashMap::new();
        for (code, raw) in sources {
            match serde_json::from_str::<LangMap>(raw) {
                Ok(map) => {
                    tracing::debug!(locale = %code, entries = map.len(), "loaded message table");
                    tables.insert(*code, map);
                }
                Err(e) => tracing::warn!(locale = %code, error = %e, "skipping malformed message table"),
            }
        }
        let dict = Self { tables };
        for (code, key) in dict.dead_keys() {
            tracing::warn!(locale = %code, key = %key, "message key missing from the English table is unreachable");
        }
        for code in dict.tables.keys().filter(|c| **c != FALLBACK_LOCALE) {
            let missing = dict.missing_keys(*code);
            if !missing.is_empty() {
                tracing::debug!(locale = %code, missing = missing.len(), "partial message table, English fills the gaps");
            }
        }
        dict
    }

    /// Resolve `key` for `locale`: exact entry, then English, then the key itself.
    pub fn lookup(&self, locale: UiLocaleCode, key: &str) -> String {
        self.tables
            .get(&locale)
            .and_then(|m| m.get(key))
            .or_else(|| self.tables.get(&FALLBACK_LOCALE).and_then(|m| m.get(key)))
            .unwrap_or(key)
            .to_string()
    }

    pub fn tr(&self, locale: UiLocaleCode, key: MessageKey) -> String {
        self.lookup(locale, key.as_str())
    }

    /// Keys defined by `locale` itself, without fallback.
    pub fn has_entry(&self, locale: UiLocaleCode, key: &str) -> bool {
        self.tables.get(&locale).and_then(|m| m.get(key)).is_some()
    }

    /// (locale, key) pairs present in a non-English table but absent from English.
    pub fn dead_keys(&self) -> Vec<(UiLocaleCode, String)> {
        let Some(base) = self.tables.get(&FALLBACK_LOCALE) else { return vec![] };
        let mut out: Vec<(UiLocaleCode, String)> = self
            .tables
            .iter()
            .filter(|(code, _)| **code != FALLBACK_LOCALE)
            .flat_map(|(code, map)| {
                map.keys().filter(move |k| base.get(k).is_none()).map(move |k| (*code, k.to_string()))
            })
            .collect();
        out.sort_by(|a, b| (a.0.as_str(), &a.1).cmp(&(b.0.as_str(), &b.1)));
        out
    }

    /// Keys `locale` leaves to the English fallback.
    pub fn missing_keys(&self, locale: UiLocaleCode) -> Vec<MessageKey> {
        MessageKey::ALL.iter().copied().filter(|k| !self.has_entry(locale, k.as_str())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::list_ui_locales;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn partial() -> Dictionary {
        Dictionary::from_sources(&[
            (UiLocaleCode::En, r#"{"greeting":"Hello","farewell":"Bye"}"#),
            (UiLocaleCode::He, r#"{"greeting":"שלום","typo.key":"x"}"#),
            (UiLocaleCode::Ru, r#"{"greeting":"","farewell":"Пока"}"#),
        ])
    }

    #[test]
    fn english_defines_every_key() {
        let dict = Dictionary::embedded();
        for key in MessageKey::ALL {
            assert!(dict.has_entry(UiLocaleCode::En, key.as_str()), "en lacks {}", key.as_str());
            assert!(!dict.tr(UiLocaleCode::En, key).is_empty());
        }
    }

    #[test]
    fn english_has_no_keys_outside_the_closed_set() {
        let dict = Dictionary::embedded();
        let en = &dict.tables[&UiLocaleCode::En];
        for k in en.keys() {
            assert!(MessageKey::ALL.iter().any(|m| m.as_str() == k), "stray key {k}");
        }
        assert_eq!(en.len(), MessageKey::ALL.len());
    }

    #[test]
    fn embedded_tables_have_no_dead_keys() {
        assert_eq!(Dictionary::embedded().dead_keys(), vec![]);
    }

    #[test]
    fn exact_entry_wins() {
        assert_eq!(partial().lookup(UiLocaleCode::He, "greeting"), "שלום");
        assert_eq!(Dictionary::embedded().tr(UiLocaleCode::Ru, MessageKey::Translate), "Перевести");
    }

    #[test]
    fn omitted_key_falls_back_to_english() {
        let dict = partial();
        assert_eq!(dict.lookup(UiLocaleCode::He, "farewell"), dict.lookup(UiLocaleCode::En, "farewell"));
        // empty string is treated as untranslated
        assert_eq!(dict.lookup(UiLocaleCode::Ru, "greeting"), "Hello");
    }

    #[test]
    fn embedded_partial_locales_match_english() {
        let dict = Dictionary::embedded();
        for l in list_ui_locales() {
            for key in dict.missing_keys(l.code) {
                assert_eq!(dict.tr(l.code, key), dict.tr(UiLocaleCode::En, key));
            }
        }
        assert_eq!(dict.missing_keys(UiLocaleCode::He), vec![MessageKey::ClipboardUnavailable]);
    }

    #[test]
    fn unknown_key_renders_as_itself() {
        let dict = Dictionary::embedded();
        assert_eq!(dict.lookup(UiLocaleCode::He, "nope.missing"), "nope.missing");
    }

    #[test]
    fn dead_keys_are_reported_not_served() {
        let dict = partial();
        assert_eq!(dict.dead_keys(), vec![(UiLocaleCode::He, "typo.key".to_string())]);
        assert_eq!(dict.lookup(UiLocaleCode::He, "typo.key"), "x");
        assert_eq!(dict.lookup(UiLocaleCode::Ru, "typo.key"), "typo.key");
    }

    #[test]
    fn malformed_table_degrades_to_english() {
        let dict = Dictionary::from_sources(&[
            (UiLocaleCode::En, r#"{"greeting":"Hello"}"#),
            (UiLocaleCode::Ru, "{not json"),
        ]);
        assert_eq!(dict.lookup(UiLocaleCode::Ru, "greeting"), "Hello");
    }

    proptest! {
        #[test]
        fn literal_fallback_for_any_unknown_key(key in "[a-z_]{1,12}\\.zz_[a-z]{1,8}") {
            let dict = Dictionary::embedded();
            for l in list_ui_locales() {
                prop_assert_eq!(dict.lookup(l.code, &key), key.clone());
            }
        }
    }
}
