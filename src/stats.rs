// 📊 Stats Engine - aggregate figures over the catalog sequence
//
// Callers check for an empty catalog and report it before coming here;
// these functions answer with `None` / an empty map on empty input instead
// of inventing values.

use crate::continent::Continent;
use crate::country::Country;
use std::collections::HashMap;

/// Records with the smallest and largest population, in one linear pass.
///
/// Both accumulators start on the first element; ties resolve to the
/// first-encountered record, so a single-record catalog returns that record
/// as both min and max.
pub fn min_max_by_population(countries: &[Country]) -> Option<(&Country, &Country)> {
    let first = countries.first()?;

    let mut min = first;
    let mut max = first;

    for country in &countries[1..] {
        if country.population < min.population {
            min = country;
        }
        if country.population > max.population {
            max = country;
        }
    }

    Some((min, max))
}

/// Mean population, truncated toward zero.
pub fn average_population(countries: &[Country]) -> u64 {
    average_of(countries, |country| country.population)
}

/// Mean area in square kilometers, truncated toward zero.
pub fn average_area(countries: &[Country]) -> u64 {
    average_of(countries, |country| country.area)
}

fn average_of(countries: &[Country], value: impl Fn(&Country) -> u64) -> u64 {
    if countries.is_empty() {
        return 0;
    }

    // Sum in u128 so a catalog of u64-sized values cannot overflow
    let sum: u128 = countries.iter().map(|country| value(country) as u128).sum();
    (sum / countries.len() as u128) as u64
}

/// How many records sit on each continent.
///
/// Every continent present in the sequence appears with count ≥ 1; absent
/// continents are not in the map. Iteration order is not guaranteed.
pub fn count_by_continent(countries: &[Country]) -> HashMap<Continent, usize> {
    let mut counts = HashMap::new();

    for country in countries {
        *counts.entry(country.continent).or_insert(0) += 1;
    }

    counts
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, population: u64, area: u64, continent: Continent) -> Country {
        Country::new(name, population, area, continent)
    }

    #[test]
    fn test_min_max_on_single_record() {
        let countries = vec![country("Perú", 34_000_000, 1_285_216, Continent::America)];

        let (min, max) = min_max_by_population(&countries).unwrap();
        assert_eq!(min.name, "Perú");
        assert_eq!(max.name, "Perú");
    }

    #[test]
    fn test_min_max_finds_extremes() {
        let countries = vec![
            country("Chile", 19_000_000, 756_102, Continent::America),
            country("Japón", 125_000_000, 377_975, Continent::Asia),
            country("Uruguay", 3_400_000, 176_215, Continent::America),
        ];

        let (min, max) = min_max_by_population(&countries).unwrap();
        assert_eq!(min.name, "Uruguay");
        assert_eq!(max.name, "Japón");
    }

    #[test]
    fn test_min_max_ties_resolve_to_first_encountered() {
        let countries = vec![
            country("A", 10, 1, Continent::Europa),
            country("B", 10, 2, Continent::Asia),
            country("C", 10, 3, Continent::Africa),
        ];

        let (min, max) = min_max_by_population(&countries).unwrap();
        assert_eq!(min.name, "A");
        assert_eq!(max.name, "A");
    }

    #[test]
    fn test_min_max_on_empty_sequence() {
        assert!(min_max_by_population(&[]).is_none());
    }

    #[test]
    fn test_average_population_truncates() {
        // (10 + 20 + 5) / 3 = 11.67 → 11
        let countries = vec![
            country("A", 10, 5, Continent::Europa),
            country("B", 20, 5, Continent::Asia),
            country("C", 5, 5, Continent::Europa),
        ];

        assert_eq!(average_population(&countries), 11);
    }

    #[test]
    fn test_average_area_truncates() {
        // (7 + 8) / 2 = 7.5 → 7
        let countries = vec![
            country("A", 1, 7, Continent::Europa),
            country("B", 2, 8, Continent::Asia),
        ];

        assert_eq!(average_area(&countries), 7);
    }

    #[test]
    fn test_count_by_continent() {
        let countries = vec![
            country("A", 10, 5, Continent::Europa),
            country("B", 20, 5, Continent::Asia),
            country("C", 5, 5, Continent::Europa),
        ];

        let counts = count_by_continent(&countries);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&Continent::Europa], 2);
        assert_eq!(counts[&Continent::Asia], 1);
        assert!(!counts.contains_key(&Continent::Africa));
    }

    #[test]
    fn test_count_by_continent_on_empty_sequence() {
        assert!(count_by_continent(&[]).is_empty());
    }
}
