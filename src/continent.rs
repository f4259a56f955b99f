// 🌎 Continent - the closed set of canonical continent labels
//
// The catalog stores continents in canonical form (accented, capitalized)
// no matter how the user typed them. The enum IS the lookup table: there is
// no free-text continent anywhere past the prompt layer.

use crate::normalize::normalize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    #[serde(rename = "América")]
    America,

    #[serde(rename = "Europa")]
    Europa,

    #[serde(rename = "Asia")]
    Asia,

    #[serde(rename = "África")]
    Africa,

    #[serde(rename = "Oceanía")]
    Oceania,

    #[serde(rename = "Antártida")]
    Antartida,
}

impl Continent {
    /// Every canonical continent, in display order.
    pub const ALL: [Continent; 6] = [
        Continent::America,
        Continent::Europa,
        Continent::Asia,
        Continent::Africa,
        Continent::Oceania,
        Continent::Antartida,
    ];

    /// Canonical label used for storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::America => "América",
            Continent::Europa => "Europa",
            Continent::Asia => "Asia",
            Continent::Africa => "África",
            Continent::Oceania => "Oceanía",
            Continent::Antartida => "Antártida",
        }
    }

    /// Resolve user input to a canonical continent.
    ///
    /// Matching is case- and accent-insensitive, so "africa", "ÁFRICA" and
    /// "áfrica" all resolve to `Continent::Africa`. Unknown names return
    /// `None`; the caller decides how to report that.
    pub fn from_input(input: &str) -> Option<Continent> {
        let key = normalize(input.trim());
        Continent::ALL
            .into_iter()
            .find(|continent| normalize(continent.as_str()) == key)
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_labels() {
        assert_eq!(Continent::America.as_str(), "América");
        assert_eq!(Continent::Africa.as_str(), "África");
        assert_eq!(Continent::Oceania.as_str(), "Oceanía");
        assert_eq!(Continent::Antartida.as_str(), "Antártida");
        assert_eq!(Continent::Europa.as_str(), "Europa");
        assert_eq!(Continent::Asia.as_str(), "Asia");
    }

    #[test]
    fn test_from_input_accepts_any_spelling() {
        assert_eq!(Continent::from_input("América"), Some(Continent::America));
        assert_eq!(Continent::from_input("america"), Some(Continent::America));
        assert_eq!(Continent::from_input("AMERICA"), Some(Continent::America));
        assert_eq!(Continent::from_input("áfrica"), Some(Continent::Africa));
        assert_eq!(Continent::from_input("AFRICA"), Some(Continent::Africa));
        assert_eq!(Continent::from_input("  oceania  "), Some(Continent::Oceania));
        assert_eq!(Continent::from_input("antartida"), Some(Continent::Antartida));
    }

    #[test]
    fn test_from_input_rejects_unknown_names() {
        assert_eq!(Continent::from_input("Atlántida"), None);
        assert_eq!(Continent::from_input("europe"), None);
        assert_eq!(Continent::from_input(""), None);
    }

    #[test]
    fn test_every_canonical_label_round_trips_through_from_input() {
        for continent in Continent::ALL {
            assert_eq!(Continent::from_input(continent.as_str()), Some(continent));
        }
    }

    #[test]
    fn test_display_matches_canonical_label() {
        assert_eq!(format!("{}", Continent::Oceania), "Oceanía");
    }
}
