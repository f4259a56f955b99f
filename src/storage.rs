// 💾 Storage - flat CSV file persistence for the catalog
//
// The file carries a four-column header (NOMBRE, POBLACION, SUPERFICIE,
// CONTINENTE) and one row per record in insertion order. Saving rewrites
// the whole file after every mutation; there is no append mode and no
// backup of the previous version.

use crate::country::{Country, CountryCatalog};
use anyhow::{Context, Result};
use std::path::Path;

/// Default data file, next to the working directory.
pub const DEFAULT_DATA_FILE: &str = "datos_paises.csv";

/// Load the full catalog from `path`.
///
/// A missing file means a first run: the catalog starts empty and that is
/// not an error. A row whose POBLACION or SUPERFICIE does not parse as an
/// unsigned integer, or whose CONTINENTE is not one of the six canonical
/// labels, aborts the load with a contextual error.
pub fn load_catalog(path: &Path) -> Result<CountryCatalog> {
    if !path.exists() {
        return Ok(CountryCatalog::new());
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut countries = Vec::new();
    for row in reader.deserialize() {
        let country: Country =
            row.with_context(|| format!("malformed record in {}", path.display()))?;
        countries.push(country);
    }

    Ok(CountryCatalog::from_countries(countries))
}

/// Rewrite `path` from the in-memory sequence.
pub fn save_catalog(path: &Path, catalog: &CountryCatalog) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    for country in catalog.countries() {
        writer
            .serialize(country)
            .context("failed to serialize record")?;
    }

    writer.flush().context("failed to flush data file")?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
