use super::{write_header, write_row};
use schema::CreatureRecord;
use std::fmt;

const NO_ITEM: &str = "No Item";

/// Table of every creature that can be found holding an item in the wild.
pub struct HeldItemsPage<'a> {
    pub records: &'a [CreatureRecord],
}

fn slot(record: &CreatureRecord, index: usize) -> &str {
    record
        .held_items
        .get(index)
        .map(String::as_str)
        .unwrap_or(NO_ITEM)
}

impl fmt::Display for HeldItemsPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, &["Pokemon", "Item 1", "Item 2"])?;
        for record in self.records {
            let (first, second) = (slot(record, 0), slot(record, 1));
            if first != NO_ITEM || second != NO_ITEM {
                write_row(f, &[record.name.as_str(), first, second])?;
            }
        }
        writeln!(f)
    }
}
