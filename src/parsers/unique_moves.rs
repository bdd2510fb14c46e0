use super::{split_fields, strip_comment};
use crate::names::{family_key, format_move_name, humanize};
use indexmap::IndexMap;
use schema::UniqueWildMove;

/// Evolution/attack key -> moves only wild encounters in a location know.
pub type UniqueWildMovesTable = IndexMap<String, Vec<UniqueWildMove>>;

/// Parses `unique_moves LOCATION, CREATURE[, FORM], MOVE` lines.
pub fn parse_unique_wild_moves(source: &str) -> UniqueWildMovesTable {
    let mut table = UniqueWildMovesTable::new();

    for line in source.lines().map(str::trim) {
        if !line.starts_with("unique_moves") {
            continue;
        }

        let fields = split_fields(strip_comment(line));
        let (location_field, creature, form, move_token) = match fields.as_slice() {
            [location, creature, move_token] => (*location, *creature, None, *move_token),
            [location, creature, form, move_token] => {
                (*location, *creature, Some(*form), *move_token)
            }
            _ => {
                log::trace!("skipping unique move line: {}", line);
                continue;
            }
        };
        let Some(location) = location_field.split_whitespace().nth(1) else {
            continue;
        };

        table
            .entry(family_key(creature, form))
            .or_default()
            .push(UniqueWildMove {
                location: humanize(location),
                name: format_move_name(move_token),
            });
    }

    table
}
