//! Markdown pages built from the merged records.
//!
//! Each page is a small struct implementing [`fmt::Display`]; rendering is
//! pure formatting and never derives new data.

use crate::names::page_name;
use schema::{Build, CreatureRecord, EvolutionMethod};
use std::fmt;

pub mod changes;
pub mod held_items;
pub mod learnset;

pub use changes::ChangesPage;
pub use held_items::HeldItemsPage;
pub use learnset::{IndexPage, LearnsetPage};

/// Link target of the page listing every learnset page.
pub const INDEX_PAGE: &str = "Pokemon-Learnsets";
pub const HELD_ITEMS_PAGE: &str = "Wild-Held-Items";
pub const CHANGES_PAGE: &str = "Pokemon-Type,-Evolution,-Ability,-and-Stat-Changes";

/// Placeholder for a value that doesn't exist.
pub(crate) const EMPTY_CELL: &str = "-";

/// `[Name](PageName)`
pub(crate) fn link(record: &CreatureRecord) -> String {
    format!("[{}]({})", record.name, page_name(&record.name))
}

pub(crate) fn write_row<T: fmt::Display>(f: &mut fmt::Formatter<'_>, cells: &[T]) -> fmt::Result {
    write!(f, "|")?;
    for cell in cells {
        write!(f, " {} |", cell)?;
    }
    writeln!(f)
}

pub(crate) fn write_header(f: &mut fmt::Formatter<'_>, titles: &[&str]) -> fmt::Result {
    write_row(f, titles)?;
    write!(f, "|")?;
    for _ in titles {
        write!(f, ":--|")?;
    }
    writeln!(f)
}

/// Version column labels: both "-" unless the polished build diverges.
pub(crate) fn version_labels(diverges: bool) -> (&'static str, &'static str) {
    if diverges {
        (Build::Faithful.into(), Build::Polished.into())
    } else {
        (EMPTY_CELL, EMPTY_CELL)
    }
}

/// Union of the attribute names of `methods`, in first-seen order.
pub(crate) fn evolution_columns<'a>(
    methods: impl IntoIterator<Item = &'a EvolutionMethod>,
) -> Vec<&'static str> {
    let mut columns = Vec::new();
    for method in methods {
        for (column, _) in method.attributes() {
            if !columns.contains(&column) {
                columns.push(column);
            }
        }
    }
    columns
}

/// One evolution table row: the version label followed by a cell per column,
/// "-" where the method has no such attribute.
pub(crate) fn evolution_row(
    version: &str,
    method: &EvolutionMethod,
    columns: &[&'static str],
) -> Vec<String> {
    let attributes = method.attributes();
    let mut row = vec![version.to_string()];
    row.extend(columns.iter().map(|column| {
        attributes
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.clone())
            .unwrap_or_else(|| EMPTY_CELL.to_string())
    }));
    row
}

/// Writes the header and rows of a creature's evolution table.
pub(crate) fn write_evolution_table(
    f: &mut fmt::Formatter<'_>,
    record: &CreatureRecord,
) -> fmt::Result {
    let columns = evolution_columns(record.all_evolutions());
    let (faithful, polished) = version_labels(record.evolutions.diverges());

    let mut titles = vec!["Version"];
    titles.extend(columns.iter().copied());
    write_header(f, &titles)?;

    for method in &record.evolutions.faithful {
        write_row(f, &evolution_row(faithful, method, &columns))?;
    }
    for method in record.evolutions.polished.iter().flatten() {
        write_row(f, &evolution_row(polished, method, &columns))?;
    }
    Ok(())
}

/// "Fire, Flying", or "-" for an empty list.
pub(crate) fn join_or_empty(items: &[String]) -> String {
    if items.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        items.join(", ")
    }
}
