//! Case-insensitive substring search used by the bank list and the FAQ.

/// Whether `haystack` contains `query`, ignoring case.
///
/// An empty query matches everything.
pub fn contains_ignore_case(haystack: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&query.to_lowercase())
}

/// Whether any of the given fields contains `query`, ignoring case.
pub fn any_contains<'a>(fields: impl IntoIterator<Item = &'a str>, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ignore_case() {
        assert!(contains_ignore_case("Emirates NBD", "nbd"));
        assert!(contains_ignore_case("Emirates NBD", "EMIRATES"));
        assert!(!contains_ignore_case("Emirates NBD", "hsbc"));
    }

    #[test]
    fn test_flag_glyphs() {
        assert!(any_contains(["Al Rajhi Bank", "🇸🇦"], "🇸🇦"));
        assert!(!any_contains(["HSBC UAE", "🇦🇪"], "🇸🇦"));
    }

    proptest! {
        #[test]
        fn test_empty_query_matches(haystack in ".{0,40}") {
            prop_assert!(contains_ignore_case(&haystack, ""));
        }

        #[test]
        fn test_substring_always_found(prefix in "[a-zA-Z ]{0,10}", needle in "[a-zA-Z]{1,10}", suffix in "[a-zA-Z ]{0,10}") {
            let haystack = format!("{prefix}{needle}{suffix}");
            prop_assert!(contains_ignore_case(&haystack, &needle.to_uppercase()));
            prop_assert!(contains_ignore_case(&haystack.to_uppercase(), &needle));
        }
    }
}
