use super::strip_comment;
use crate::names::format_move_name;
use indexmap::IndexMap;

const HEADER_SUFFIX: &str = "EggMoves:";
const END_HEADER: &str = "NoEggMoves:";
const TERMINATOR: &str = "$ff";

/// Header name (e.g. `MimeJr`) -> egg moves in file order.
pub type EggMovesTable = IndexMap<String, Vec<String>>;

pub fn parse_egg_moves(source: &str) -> EggMovesTable {
    let mut table = EggMovesTable::new();
    let mut current: Option<String> = None;

    for line in source.lines().map(str::trim) {
        if line.starts_with(END_HEADER) {
            break;
        }

        if let Some(name) = line.strip_suffix(HEADER_SUFFIX) {
            let name = name.trim().to_string();
            table.insert(name.clone(), Vec::new());
            current = Some(name);
        } else if line.starts_with("db") {
            let Some(name) = current.as_ref() else {
                continue;
            };
            if line.contains(TERMINATOR) {
                current = None;
                continue;
            }
            if let (Some(moves), Some(token)) = (
                table.get_mut(name),
                strip_comment(line).split_whitespace().nth(1),
            ) {
                moves.push(format_move_name(token));
            }
        }
    }

    table
}
