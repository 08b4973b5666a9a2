use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::categories::{default_config_path, load_categories, write_default_config, Categories};
use crate::error::Result;
use crate::reports::{INFLUENCE_LABEL, PASSIVE_LABEL};

pub fn run(categories: Option<&str>, write: bool) -> Result<()> {
    if write {
        let path = write_default_config()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }
    let cats = load_categories(categories)?;
    let source = match categories {
        Some(path) => path.to_string(),
        None => {
            let default = default_config_path();
            if default.exists() {
                default.display().to_string()
            } else {
                "built-in defaults".to_string()
            }
        }
    };
    println!("{}", format_categories(&cats, &source));
    Ok(())
}

/// One row per series with the descriptor substrings that feed it.
pub fn format_categories(cats: &Categories, source: &str) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Series".bold()),
        Cell::new("Descriptor substrings".bold()),
    ]);
    table.add_row(vec![
        Cell::new(INFLUENCE_LABEL),
        Cell::new(cats.influence.join(", ")),
    ]);
    table.add_row(vec![
        Cell::new(PASSIVE_LABEL),
        Cell::new(cats.passive.join(", ")),
    ]);
    format!("Categories ({source})\n{table}")
}
