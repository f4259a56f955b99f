// 🖥️ Console Surface - menu dispatch and table rendering
//
// The menu is a closed set of actions; input is parsed into a variant once
// and everything downstream matches on the enum, never on raw strings.
// Rendering takes an already-ordered sequence and only formats it.

use crate::continent::Continent;
use crate::country::Country;
use crate::query::{RangeField, SortKey};
use crate::stats;

// ============================================================================
// MENU ACTIONS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddCountry,
    UpdateCountry,
    SearchByName,
    Filter,
    Sort,
    Statistics,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::AddCountry,
        MenuAction::UpdateCountry,
        MenuAction::SearchByName,
        MenuAction::Filter,
        MenuAction::Sort,
        MenuAction::Statistics,
        MenuAction::Quit,
    ];

    /// Map a menu choice (1-7) to its action.
    pub fn from_input(input: &str) -> Option<MenuAction> {
        match input.trim() {
            "1" => Some(MenuAction::AddCountry),
            "2" => Some(MenuAction::UpdateCountry),
            "3" => Some(MenuAction::SearchByName),
            "4" => Some(MenuAction::Filter),
            "5" => Some(MenuAction::Sort),
            "6" => Some(MenuAction::Statistics),
            "7" => Some(MenuAction::Quit),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MenuAction::AddCountry => "Add a country",
            MenuAction::UpdateCountry => "Update a country's population and area",
            MenuAction::SearchByName => "Search countries by name",
            MenuAction::Filter => "Filter countries",
            MenuAction::Sort => "Sort countries",
            MenuAction::Statistics => "Show statistics",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Criterion sub-menu for the filter action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChoice {
    ByContinent,
    ByRange(RangeField),
}

impl FilterChoice {
    pub fn from_input(input: &str) -> Option<FilterChoice> {
        match input.trim() {
            "1" => Some(FilterChoice::ByContinent),
            "2" => Some(FilterChoice::ByRange(RangeField::Population)),
            "3" => Some(FilterChoice::ByRange(RangeField::Area)),
            _ => None,
        }
    }
}

/// Key sub-menu for the sort action. Name sorts ascending only; the
/// numeric keys ask for a direction afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortChoice {
    Name,
    Numeric(SortKey),
}

impl SortChoice {
    pub fn from_input(input: &str) -> Option<SortChoice> {
        match input.trim() {
            "1" => Some(SortChoice::Name),
            "2" => Some(SortChoice::Numeric(SortKey::Population)),
            "3" => Some(SortChoice::Numeric(SortKey::Area)),
            _ => None,
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

const SEPARATOR: &str = "========================================";

/// The main menu text, one numbered line per action.
pub fn render_menu() -> String {
    let mut out = String::new();
    out.push_str("COUNTRY CATALOG\n");
    out.push_str(SEPARATOR);
    out.push('\n');
    for (index, action) in MenuAction::ALL.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, action.title()));
    }
    out.push_str(SEPARATOR);
    out
}

/// Render an ordered sequence as an aligned table with the catalog's
/// column headers.
pub fn render_table(countries: &[Country]) -> String {
    let name_width = countries
        .iter()
        .map(|country| country.name.chars().count())
        .chain(std::iter::once("NOMBRE".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}  {}\n",
        "NOMBRE", "POBLACION", "SUPERFICIE", "CONTINENTE"
    ));

    for country in countries {
        // Pad on character count, not byte length, so accented names align
        let padding = name_width - country.name.chars().count();
        out.push_str(&format!(
            "{}{}  {:>12}  {:>12}  {}\n",
            country.name,
            " ".repeat(padding),
            country.population,
            country.area,
            country.continent
        ));
    }

    out
}

/// Render the aggregate statistics block for a non-empty sequence.
pub fn render_stats(countries: &[Country]) -> String {
    let mut out = String::new();

    if let Some((min, max)) = stats::min_max_by_population(countries) {
        out.push_str(&format!(
            "Smallest population: {} ({})\n",
            min.name, min.population
        ));
        out.push_str(&format!(
            "Largest population:  {} ({})\n",
            max.name, max.population
        ));
    }

    out.push_str(&format!(
        "Average population:  {}\n",
        stats::average_population(countries)
    ));
    out.push_str(&format!(
        "Average area:        {} km²\n",
        stats::average_area(countries)
    ));

    let counts = stats::count_by_continent(countries);
    out.push_str("Countries per continent:\n");
    for continent in Continent::ALL {
        if let Some(count) = counts.get(&continent) {
            out.push_str(&format!("  {:<10} {}\n", continent.as_str(), count));
        }
    }

    out
}

// ============================================================================
// TESTS
// ============================================================================
