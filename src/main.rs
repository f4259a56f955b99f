use anyhow::Result;
use std::env;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use country_catalog::ui::{self, FilterChoice, MenuAction, SortChoice};
use country_catalog::{query, storage, Country, CountryCatalog, Prompter, SortKey};

fn main() -> Result<()> {
    let data_path = data_path_from_args();

    println!("📂 Loading catalog from {}...", data_path.display());
    let mut catalog = storage::load_catalog(&data_path)?;
    println!("✓ Loaded {} countries\n", catalog.len());

    let mut prompter = Prompter::new(BufReader::new(io::stdin()), io::stdout());

    loop {
        println!("{}", ui::render_menu());
        let choice = prompter.read_line_trimmed("Choose an option (1-7): ")?;

        let Some(action) = MenuAction::from_input(&choice) else {
            println!("❌ Invalid option. Try again.\n");
            continue;
        };

        match action {
            MenuAction::AddCountry => add_country(&mut prompter, &mut catalog, &data_path)?,
            MenuAction::UpdateCountry => update_country(&mut prompter, &mut catalog, &data_path)?,
            MenuAction::SearchByName => search_by_name(&mut prompter, &catalog)?,
            MenuAction::Filter => filter_countries(&mut prompter, &catalog)?,
            MenuAction::Sort => sort_countries(&mut prompter, &catalog)?,
            MenuAction::Statistics => show_statistics(&catalog),
            MenuAction::Quit => {
                println!("Goodbye!");
                break;
            }
        }
        println!();
    }

    Ok(())
}

/// Data file path: first CLI argument, or the default next to the cwd.
fn data_path_from_args() -> PathBuf {
    env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(storage::DEFAULT_DATA_FILE))
}

/// Report and refuse when an operation needs at least one record.
fn require_records(catalog: &CountryCatalog) -> bool {
    if catalog.is_empty() {
        println!("❌ The catalog is empty. Add a country first.");
        return false;
    }
    true
}

fn save(catalog: &CountryCatalog, data_path: &Path) -> Result<()> {
    storage::save_catalog(data_path, catalog)?;
    println!("✓ Catalog saved to {}.", data_path.display());
    Ok(())
}

fn add_country<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    catalog: &mut CountryCatalog,
    data_path: &Path,
) -> Result<()> {
    let name = prompter.read_label("Country name: ")?;

    // Reject duplicates before asking for the remaining fields
    if catalog.find_by_name(&name).is_some() {
        println!("❌ A country named \"{}\" is already in the catalog.", name);
        return Ok(());
    }

    let population = prompter.read_non_negative_int("Population: ")?;
    let area = prompter.read_non_negative_int("Area (km²): ")?;
    let continent = prompter.read_continent("Continent: ")?;

    match catalog.add(Country::new(name, population, area, continent)) {
        Ok(()) => {
            println!("✓ Country added.");
            save(catalog, data_path)?;
        }
        Err(err) => println!("❌ {}", err),
    }

    Ok(())
}

fn update_country<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    catalog: &mut CountryCatalog,
    data_path: &Path,
) -> Result<()> {
    if !require_records(catalog) {
        return Ok(());
    }

    let name = prompter.read_label("Country to update: ")?;
    if catalog.find_by_name(&name).is_none() {
        println!("❌ No country named \"{}\" in the catalog.", name);
        return Ok(());
    }

    let population = prompter.read_non_negative_int("New population: ")?;
    let area = prompter.read_non_negative_int("New area (km²): ")?;

    match catalog.update(&name, population, area) {
        Ok(()) => {
            println!("✓ Country updated.");
            save(catalog, data_path)?;
        }
        Err(err) => println!("❌ {}", err),
    }

    Ok(())
}

fn search_by_name<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    catalog: &CountryCatalog,
) -> Result<()> {
    if !require_records(catalog) {
        return Ok(());
    }

    let term = prompter.read_label("Name or part of a name: ")?;
    let matches = query::search_by_name(catalog.countries(), &term);

    if matches.is_empty() {
        println!("No countries match \"{}\".", term);
    } else {
        print!("{}", ui::render_table(&matches));
    }

    Ok(())
}

fn filter_countries<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    catalog: &CountryCatalog,
) -> Result<()> {
    if !require_records(catalog) {
        return Ok(());
    }

    let choice = loop {
        println!("1. By continent");
        println!("2. By population range");
        println!("3. By area range");
        let line = prompter.read_line_trimmed("Filter by (1-3): ")?;
        match FilterChoice::from_input(&line) {
            Some(choice) => break choice,
            None => println!("❌ Invalid option. Try again."),
        }
    };

    let matches = match choice {
        FilterChoice::ByContinent => {
            let continent = prompter.read_continent("Continent: ")?;
            query::filter_by_continent(catalog.countries(), continent)
        }
        FilterChoice::ByRange(field) => {
            let min = prompter.read_non_negative_int("Minimum: ")?;
            let max = prompter.read_non_negative_int("Maximum: ")?;
            match query::filter_by_range(catalog.countries(), field, min, max) {
                Ok(matches) => matches,
                Err(err) => {
                    println!("❌ {}", err);
                    return Ok(());
                }
            }
        }
    };

    if matches.is_empty() {
        println!("No countries match that filter.");
    } else {
        print!("{}", ui::render_table(&matches));
    }

    Ok(())
}

fn sort_countries<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    catalog: &CountryCatalog,
) -> Result<()> {
    if !require_records(catalog) {
        return Ok(());
    }

    let choice = loop {
        println!("1. By name (A-Z)");
        println!("2. By population");
        println!("3. By area");
        let line = prompter.read_line_trimmed("Sort by (1-3): ")?;
        match SortChoice::from_input(&line) {
            Some(choice) => break choice,
            None => println!("❌ Invalid option. Try again."),
        }
    };

    let (key, descending) = match choice {
        SortChoice::Name => (SortKey::Name, false),
        SortChoice::Numeric(key) => {
            let descending = loop {
                println!("1. Ascending");
                println!("2. Descending");
                let line = prompter.read_line_trimmed("Direction (1-2): ")?;
                match line.trim() {
                    "1" => break false,
                    "2" => break true,
                    _ => println!("❌ Invalid option. Try again."),
                }
            };
            (key, descending)
        }
    };

    let sorted = query::sort_by(catalog.countries(), key, descending);
    print!("{}", ui::render_table(&sorted));

    Ok(())
}

fn show_statistics(catalog: &CountryCatalog) {
    if !require_records(catalog) {
        return;
    }

    print!("{}", ui::render_stats(catalog.countries()));
}
