//! Substring filter over the country list.

use crate::model::Country;

/// Countries whose common name contains `text`, ignoring case.
///
/// Keeps the order of `countries`. An empty `text` matches nothing.
pub fn filter_countries(countries: &[Country], text: &str) -> Vec<Country> {
    if text.is_empty() {
        return Vec::new();
    }

    let needle = text.to_lowercase();
    countries
        .iter()
        .filter(|country| country.common_name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn countries(names: &[&str]) -> Vec<Country> {
        names.iter().map(|name| Country::new(*name, "")).collect()
    }

    fn names(countries: &[Country]) -> Vec<&str> {
        countries.iter().map(Country::common_name).collect()
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        let list = countries(&["France", "Germany"]);
        assert!(filter_countries(&list, "").is_empty());
    }

    #[test]
    fn test_preserves_list_order() {
        let list = countries(&["France", "Germany", "Guinea"]);
        assert_eq!(names(&filter_countries(&list, "Gu")), ["Guinea"]);
        assert_eq!(names(&filter_countries(&list, "G")), ["Germany", "Guinea"]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let list = countries(&["United Kingdom", "United States", "Uganda"]);
        assert_eq!(
            names(&filter_countries(&list, "UNITED")),
            ["United Kingdom", "United States"]
        );
        assert_eq!(names(&filter_countries(&list, "dom")), ["United Kingdom"]);
        assert_eq!(names(&filter_countries(&list, "an")), ["Uganda"]);
    }

    #[test]
    fn test_no_matches() {
        let list = countries(&["France"]);
        assert!(filter_countries(&list, "xyz").is_empty());
        assert!(filter_countries(&[], "fr").is_empty());
    }

    #[test]
    fn test_non_ascii() {
        let list = countries(&["Curaçao", "Réunion"]);
        assert_eq!(names(&filter_countries(&list, "ÇA")), ["Curaçao"]);
        assert_eq!(names(&filter_countries(&list, "réu")), ["Réunion"]);
    }

    fn arb_names() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[A-Za-zÇçÉé ]{1,8}", 0..12)
    }

    proptest! {
        /// The subset is exactly the case-insensitive matches, in list order.
        #[test]
        fn prop_matches_lowercase_substring(raw in arb_names(), query in "[A-Za-zÇçé]{0,3}") {
            let list: Vec<Country> = raw.iter().map(|n| Country::new(n.as_str(), "")).collect();
            let expected: Vec<&str> = if query.is_empty() {
                Vec::new()
            } else {
                let needle = query.to_lowercase();
                raw.iter()
                    .filter(|n| n.to_lowercase().contains(&needle))
                    .map(String::as_str)
                    .collect()
            };

            let subset = filter_countries(&list, &query);
            prop_assert_eq!(names(&subset), expected);
        }

        /// Empty text never matches, whatever the list holds.
        #[test]
        fn prop_empty_query_is_empty(raw in arb_names()) {
            let list: Vec<Country> = raw.iter().map(|n| Country::new(n.as_str(), "")).collect();
            prop_assert!(filter_countries(&list, "").is_empty());
        }

        /// Changing only the case of the query changes nothing.
        #[test]
        fn prop_query_case_is_ignored(raw in arb_names(), query in "[a-z]{1,3}") {
            let list: Vec<Country> = raw.iter().map(|n| Country::new(n.as_str(), "")).collect();
            prop_assert_eq!(
                filter_countries(&list, &query),
                filter_countries(&list, &query.to_uppercase())
            );
        }
    }
}
