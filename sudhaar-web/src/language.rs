use std::collections::HashMap;

/// Language the app starts in.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([(
        DEFAULT_LANGUAGE,
        LanguageInfo {
            code: DEFAULT_LANGUAGE,
            translation: include_str!("../translations/en.json"),
            native_name: "English",
        },
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_bundled() {
        let languages = supported_languages();
        let english = languages.get(DEFAULT_LANGUAGE).cloned();
        assert_eq!(english.map(|info| info.code), Some("en"));
    }

    #[test]
    fn test_translation_bundle_is_valid_json() {
        for info in supported_languages().values() {
            let parsed: serde_json::Value = serde_json::from_str(info.translation)
                .unwrap_or_else(|err| panic!("{} bundle: {err}", info.native_name));
            assert!(parsed.get("app").is_some());
        }
    }
}
