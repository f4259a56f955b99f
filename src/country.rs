// 🗂️ Country Catalog - the in-memory record store
//
// A country's identity is its normalized name: "Perú", "peru" and "PERU"
// are all the same record. The catalog owns the ordered sequence; every
// mutation goes through it so the uniqueness invariant can never be broken
// from outside.

use crate::continent::Continent;
use crate::normalize::{logically_equal, normalize};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// COUNTRY RECORD
// ============================================================================

/// One catalog record. Serde renames match the on-disk CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Display name, title-cased, unique under normalized comparison
    #[serde(rename = "NOMBRE")]
    pub name: String,

    #[serde(rename = "POBLACION")]
    pub population: u64,

    /// Square kilometers
    #[serde(rename = "SUPERFICIE")]
    pub area: u64,

    /// Canonical continent, never free text
    #[serde(rename = "CONTINENTE")]
    pub continent: Continent,
}

impl Country {
    pub fn new(name: impl Into<String>, population: u64, area: u64, continent: Continent) -> Self {
        Country {
            name: name.into(),
            population,
            area,
            continent,
        }
    }

    /// Comparison key for this record's name.
    pub fn name_key(&self) -> String {
        normalize(&self.name)
    }
}

// ============================================================================
// CATALOG ERRORS
// ============================================================================

/// Domain outcomes the caller must check. These report to the user and
/// abort the current operation; they never abort the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("a country named \"{0}\" is already in the catalog")]
    DuplicateName(String),

    #[error("no country named \"{0}\" in the catalog")]
    NotFound(String),
}

// ============================================================================
// COUNTRY CATALOG
// ============================================================================

/// Ordered sequence of country records for the current session.
///
/// Insertion order is preserved; persistence writes rows in this order and
/// the query engine keeps it when filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

impl CountryCatalog {
    pub fn new() -> Self {
        CountryCatalog {
            countries: Vec::new(),
        }
    }

    /// Build a catalog from already-loaded records (the persistence layer
    /// calls this after a successful load).
    pub fn from_countries(countries: Vec<Country>) -> Self {
        CountryCatalog { countries }
    }

    /// Find a record by name, ignoring case and accents.
    ///
    /// Linear scan; first match in sequence order wins (uniqueness means
    /// there is never more than one).
    pub fn find_by_name(&self, name: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|country| logically_equal(&country.name, name))
    }

    /// Append a new record, rejecting any case/accent variant of an
    /// existing name. On rejection the sequence is untouched.
    pub fn add(&mut self, candidate: Country) -> Result<(), CatalogError> {
        if self.find_by_name(&candidate.name).is_some() {
            return Err(CatalogError::DuplicateName(candidate.name));
        }

        self.countries.push(candidate);
        Ok(())
    }

    /// Update population and area of an existing record in place.
    ///
    /// Name and continent are immutable once a record exists. A miss
    /// performs no mutation.
    pub fn update(&mut self, name: &str, population: u64, area: u64) -> Result<(), CatalogError> {
        let country = self
            .countries
            .iter_mut()
            .find(|country| logically_equal(&country.name, name))
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))?;

        country.population = population;
        country.area = area;
        Ok(())
    }

    /// The full sequence, in insertion order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
