use crate::names::{format_move_name, parse_move_category};
use indexmap::IndexMap;
use regex::Regex;
use schema::TeachableCategory;
use std::sync::LazyLock;

/// Move display name -> how it is taught, in file order.
pub type TeachableMoves = IndexMap<String, TeachableCategory>;

// db DYNAMICPUNCH ; TM01 (Chuck)
static TEACHABLE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)db\s+([A-Z_]+)\s*;\s*(TM\d+|HM\d+|MT\d+)").expect("valid teachable regex")
});

const END_MARKER: &str = "db 0 ; end";

/// Parses the TM/HM/move tutor table.
///
/// A move listed twice keeps its last category.
pub fn parse_teachable_moves(source: &str) -> TeachableMoves {
    let mut teachable = TeachableMoves::new();

    for line in source.lines().map(str::trim) {
        if line.starts_with(END_MARKER) {
            break;
        }
        if !line.starts_with("db") {
            continue;
        }
        if let Some(captures) = TEACHABLE_LINE.captures(line) {
            teachable.insert(
                format_move_name(&captures[1]),
                parse_move_category(&captures[2]),
            );
        }
    }

    teachable
}
