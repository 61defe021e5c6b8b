//! Content languages offered in the source/target pickers.

/// A language text can be translated from or into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLanguage {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

const fn lang(code: &'static str, name: &'static str, native_name: &'static str) -> ContentLanguage {
    ContentLanguage { code, name, native_name }
}

const LANGUAGES: [ContentLanguage; 21] = [
    lang("en", "English", "English"),
    lang("es", "Spanish", "Español"),
    lang("fr", "French", "Français"),
    lang("de", "German", "Deutsch"),
    lang("it", "Italian", "Italiano"),
    lang("pt", "Portuguese", "Português"),
    lang("ru", "Russian", "Русский"),
    lang("he", "Hebrew", "עברית"),
    lang("zh", "Chinese", "中文"),
    lang("ja", "Japanese", "日本語"),
    lang("ko", "Korean", "한국어"),
    lang("ar", "Arabic", "العربية"),
    lang("hi", "Hindi", "हिन्दी"),
    lang("nl", "Dutch", "Nederlands"),
    lang("pl", "Polish", "Polski"),
    lang("tr", "Turkish", "Türkçe"),
    lang("vi", "Vietnamese", "Tiếng Việt"),
    lang("th", "Thai", "ไทย"),
    lang("sv", "Swedish", "Svenska"),
    lang("uk", "Ukrainian", "Українська"),
    lang("el", "Greek", "Ελληνικά"),
];

/// Every content language, in picker order.
pub fn list_content_languages() -> &'static [ContentLanguage] {
    &LANGUAGES
}

pub fn find_content_language(code: &str) -> Option<&'static ContentLanguage> {
    LANGUAGES.iter().find(|l| l.code == code)
}

/// Drop the entry whose code is `code` so a picker can't offer the language
/// already chosen on the other side.
pub fn exclude_language<'a>(languages: &[&'a ContentLanguage], code: &str) -> Vec<&'a ContentLanguage> {
    languages.iter().copied().filter(|l| l.code != code).collect()
}

/// Case-insensitive match against code, English name and native name.
/// A blank query keeps everything.
pub fn filter_languages<'a>(languages: &[&'a ContentLanguage], query: &str) -> Vec<&'a ContentLanguage> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return languages.to_vec();
    }
    languages
        .iter()
        .copied()
        .filter(|l| {
            l.code.eq_ignore_ascii_case(&q)
                || l.name.to_lowercase().contains(&q)
                || l.native_name.to_lowercase().contains(&q)
        })
        .collect()
}

/// Options for one picker: everything minus the opposite selection, narrowed by the search box.
pub fn picker_options(exclude: &str, query: &str) -> Vec<&'static ContentLanguage> {
    let all: Vec<&'static ContentLanguage> = list_content_languages().iter().collect();
    filter_languages(&exclude_language(&all, exclude), query)
}

/// Make sure the current `selected` language stays listed (in catalog order)
/// even when the search box filtered it out, so the widget never displays an
/// entry other than the one actually chosen.
pub fn keep_selected(options: &[&'static ContentLanguage], selected: &str) -> Vec<&'static ContentLanguage> {
    if options.iter().any(|l| l.code == selected) {
        return options.to_vec();
    }
    list_content_languages()
        .iter()
        .filter(|l| l.code == selected || options.iter().any(|o| o.code == l.code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn all() -> Vec<&'static ContentLanguage> {
        list_content_languages().iter().collect()
    }

    #[test]
    fn catalog_has_unique_codes() {
        let mut codes: Vec<_> = list_content_languages().iter().map(|l| l.code).collect();
        assert_eq!(codes.len(), 21);
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 21);
    }

    #[test]
    fn exclude_removes_exactly_one() {
        let out = exclude_language(&all(), "es");
        assert_eq!(out.len(), 20);
        assert!(out.iter().all(|l| l.code != "es"));
        assert_eq!(out[0].code, "en");
        assert_eq!(out[1].code, "fr");
    }

    #[test]
    fn exclude_unknown_is_identity() {
        assert_eq!(exclude_language(&all(), "xx"), all());
    }

    #[test]
    fn filter_matches_names_and_codes() {
        let hits: Vec<_> = filter_languages(&all(), "deut").iter().map(|l| l.code).collect();
        assert_eq!(hits, vec!["de"]);
        let hits: Vec<_> = filter_languages(&all(), "JA").iter().map(|l| l.code).collect();
        assert_eq!(hits, vec!["ja"]);
        assert!(filter_languages(&all(), "klingon").is_empty());
        assert_eq!(filter_languages(&all(), "  ").len(), 21);
    }

    #[test]
    fn picker_never_offers_opposite_side() {
        let opts = picker_options("en", "eng");
        assert!(opts.is_empty());
        assert_eq!(find_content_language("es").map(|l| l.name), Some("Spanish"));
    }

    #[test]
    fn filtered_out_selection_stays_listed() {
        // Target picker on "es", searching for German.
        let matches = picker_options("en", "deut");
        let codes: Vec<_> = keep_selected(&matches, "es").iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["es", "de"]);

        let codes: Vec<_> = keep_selected(&picker_options("en", "span"), "es").iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["es"]);
        assert_eq!(keep_selected(&[], "es").len(), 1);
        assert!(keep_selected(&[], "xx").is_empty());
    }
}
