use crate::card::LocalizedString;

/// Language every manifest is expected to carry.
pub const FALLBACK_LANG: &str = "en";

/// Resolve a localized field: the requested language, then `en`, then nothing.
///
/// Empty translations count as missing, so an empty `nl` entry still falls
/// back to `en`.
pub fn resolve<'a>(field: Option<&'a LocalizedString>, lang: &str) -> Option<&'a str> {
    let field = field?;
    field
        .get(lang)
        .filter(|text| !text.is_empty())
        .or_else(|| field.get(FALLBACK_LANG).filter(|text| !text.is_empty()))
}

/// Walk several localized fields in order, resolving each one with [`resolve`],
/// and return the first hit.
pub fn resolve_first<'a>(fields: &[Option<&'a LocalizedString>], lang: &str) -> Option<&'a str> {
    fields.iter().find_map(|field| resolve(*field, lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeting() -> LocalizedString {
        LocalizedString::from([("en", "Hello"), ("nl", "Hallo")])
    }

    #[test]
    fn test_requested_language_wins() {
        assert_eq!(resolve(Some(&greeting()), "nl"), Some("Hallo"));
    }

    #[test]
    fn test_falls_back_to_english() {
        assert_eq!(resolve(Some(&greeting()), "de"), Some("Hello"));
    }

    #[test]
    fn test_missing_everywhere_is_none() {
        let only_dutch = LocalizedString::from([("nl", "Hallo")]);
        assert_eq!(resolve(Some(&only_dutch), "de"), None);
        assert_eq!(resolve(None, "en"), None);
        assert_eq!(resolve(Some(&LocalizedString::new()), "en"), None);
    }

    #[test]
    fn test_empty_translation_counts_as_missing() {
        let field = LocalizedString::from([("en", "Hello"), ("nl", "")]);
        assert_eq!(resolve(Some(&field), "nl"), Some("Hello"));
    }

    #[test]
    fn test_resolve_first_respects_field_order() {
        let title = LocalizedString::from([("en", "Title")]);
        let placeholder = LocalizedString::from([("nl", "Plaatshouder")]);

        // title.en beats placeholder.nl even when nl is requested
        assert_eq!(
            resolve_first(&[Some(&title), Some(&placeholder)], "nl"),
            Some("Title")
        );
        assert_eq!(resolve_first(&[None, Some(&placeholder)], "nl"), Some("Plaatshouder"));
        assert_eq!(resolve_first(&[None, None], "nl"), None);
    }
}
