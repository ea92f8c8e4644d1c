//! URL slugs derived from people's names.

/// Derive the URL slug for a full name.
///
/// Lowercases, drops everything except `a-z`, whitespace and `-`, then joins
/// the remaining words with single hyphens. Team lookups depend on this being
/// reproducible, so it must stay byte-for-byte stable.
pub fn slugify(full_name: &str) -> String {
    let kept: String = full_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace() || *c == '-')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Slug for a person given as first and last name.
pub fn member_slug(first_name: &str, last_name: &str) -> String {
    slugify(&format!("{first_name} {last_name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slugify_basic_name() {
        assert_eq!(slugify("Nurlan Kussainov"), "nurlan-kussainov");
        assert_eq!(member_slug("Azhar", "Babayeva"), "azhar-babayeva");
    }

    #[test]
    fn test_slugify_strips_punctuation_and_digits() {
        assert_eq!(slugify("O'Brien  Smith 3rd"), "obrien-smith-rd");
        assert_eq!(slugify("Jean-Luc Picard"), "jean-luc-picard");
    }

    #[test]
    fn test_slugify_collapses_and_trims_whitespace() {
        assert_eq!(slugify("  Altay \t  Mamanbayev \n"), "altay-mamanbayev");
    }

    #[test]
    fn test_slugify_drops_non_latin_letters() {
        assert_eq!(slugify("Нурлан Kussainov"), "kussainov");
        assert_eq!(slugify("Нурлан"), "");
    }

    proptest! {
        #[test]
        fn prop_slugify_is_idempotent(name in "\\PC{0,40}") {
            let once = slugify(&name);
            prop_assert_eq!(slugify(&once), once.clone());
        }

        #[test]
        fn prop_slug_alphabet(name in "\\PC{0,40}") {
            let slug = slugify(&name);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c == '-'));
            prop_assert!(!slug.contains(char::is_whitespace));
        }
    }
}
