// 🔤 Text Normalization - comparison keys for user-entered text
//
// Every lookup in the catalog (duplicate detection, search, continent
// matching) compares normalized forms. Display always uses the stored
// canonical form, never the normalized one.

/// Build the comparison key for a string: lowercase it and strip the
/// accents from the five Spanish vowels (á é í ó ú).
///
/// No other character is altered, so `normalize` is idempotent.
///
/// Example: "PERÚ" → "peru", "América" → "america"
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}

/// Two strings are logically equal iff their normalized forms are identical.
pub fn logically_equal(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// `haystack` logically contains `needle` iff the normalized needle is a
/// substring of the normalized haystack.
pub fn logically_contains(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}

/// Render a label in title case: first letter of each word uppercased, the
/// rest lowercased, words joined by single spaces.
///
/// Example: "  costa   rica " → "Costa Rica"
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("PERU"), "peru");
        assert_eq!(normalize("Asia"), "asia");
    }

    #[test]
    fn test_normalize_strips_accented_vowels() {
        assert_eq!(normalize("Perú"), "peru");
        assert_eq!(normalize("América"), "america");
        assert_eq!(normalize("África"), "africa");
        assert_eq!(normalize("Oceanía"), "oceania");
        assert_eq!(normalize("Antártida"), "antartida");
    }

    #[test]
    fn test_normalize_leaves_other_characters_alone() {
        assert_eq!(normalize("Côte d'Ivoire"), "côte d'ivoire");
        assert_eq!(normalize("ñandú 42"), "ñandu 42");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = ["PERÚ", "América", "  Côte d'Ivoire ", "ñ", "", "a é í"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_logically_equal_ignores_case_and_accents() {
        assert!(logically_equal("Perú", "PERU"));
        assert!(logically_equal("áfrica", "AFRICA"));
        assert!(!logically_equal("Peru", "Paraguay"));
    }

    #[test]
    fn test_logically_contains() {
        assert!(logically_contains("República Dominicana", "dominicana"));
        assert!(logically_contains("Perú", "ERÚ"));
        assert!(!logically_contains("Chile", "Perú"));

        // Empty needle matches everything
        assert!(logically_contains("Chile", ""));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("costa rica"), "Costa Rica");
        assert_eq!(title_case("  costa   rica "), "Costa Rica");
        assert_eq!(title_case("PERÚ"), "Perú");
        assert_eq!(title_case("bosnia y herzegovina"), "Bosnia Y Herzegovina");
        assert_eq!(title_case(""), "");
    }
}
