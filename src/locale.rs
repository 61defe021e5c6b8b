//! UI chrome locales and their text direction.
use std::fmt;
use std::str::FromStr;

/// One of the languages the interface itself can be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UiLocaleCode {
    #[default]
    En,
    He,
    Ru,
}

impl UiLocaleCode {
    pub fn as_str(self) -> &'static str {
        match self {
            UiLocaleCode::En => "en",
            UiLocaleCode::He => "he",
            UiLocaleCode::Ru => "ru",
        }
    }
}

impl fmt::Display for UiLocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string is not one of the known UI locale codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown interface language `{0}` (expected en, he or ru)")]
pub struct InvalidLocale(pub String);

impl FromStr for UiLocaleCode {
    type Err = InvalidLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(UiLocaleCode::En),
            "he" => Ok(UiLocaleCode::He),
            "ru" => Ok(UiLocaleCode::Ru),
            _ => Err(InvalidLocale(s.to_string())),
        }
    }
}

/// Text flow of a locale; drives the `dir` attribute of the page root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLocale {
    pub code: UiLocaleCode,
    pub name: &'static str,
    pub native_name: &'static str,
    pub dir: TextDirection,
}

const UI_LOCALES: [UiLocale; 3] = [
    UiLocale { code: UiLocaleCode::En, name: "English", native_name: "English", dir: TextDirection::Ltr },
    UiLocale { code: UiLocaleCode::He, name: "Hebrew", native_name: "עברית", dir: TextDirection::Rtl },
    UiLocale { code: UiLocaleCode::Ru, name: "Russian", native_name: "Русский", dir: TextDirection::Ltr },
];

/// All interface locales in switcher order.
pub fn list_ui_locales() -> &'static [UiLocale] {
    &UI_LOCALES
}

pub fn find_ui_locale(code: UiLocaleCode) -> Option<&'static UiLocale> {
    UI_LOCALES.iter().find(|l| l.code == code)
}

/// Direction for `code`, left-to-right when the catalog has no row for it.
pub fn direction_of(code: UiLocaleCode) -> TextDirection {
    find_ui_locale(code).map(|l| l.dir).unwrap_or_default()
}
