use crate::names::{family_key, format_move_name};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

// db LEER ; RATTATA, ALOLAN_FORM
static EVOLUTION_MOVE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^db\s+(\w+).*;\s*(.+)").expect("valid evolution move regex"));

const NO_MOVE: &str = "NO_MOVE";

/// Evolution/attack key -> the move learned on evolving.
pub type EvolutionMovesTable = IndexMap<String, String>;

pub fn parse_evolution_moves(source: &str) -> EvolutionMovesTable {
    let mut table = EvolutionMovesTable::new();

    for line in source.lines().map(str::trim) {
        if !line.starts_with("db") || line.contains(NO_MOVE) {
            continue;
        }
        let Some(captures) = EVOLUTION_MOVE_LINE.captures(line) else {
            continue;
        };

        let creature = captures[2].trim();
        let mut parts = creature.split(',').map(str::trim);
        let key = match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(form), None) if form.contains("_FORM") => {
                family_key(name, Some(form))
            }
            (Some(name), _, _) => family_key(name, None),
            _ => continue,
        };

        table.insert(key, format_move_name(&captures[1]));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keys_follow_evo_attacks_names() {
        let source = "\
EvolutionMoves::
\tdb NO_MOVE ; BULBASAUR
\tdb DOUBLE_EDGE ; IVYSAUR
\tdb NO_MOVE ; RATTATA, PLAIN_FORM
\tdb SCARY_FACE ; RATICATE, ALOLAN_FORM
\tdb BRUTAL_SWING ; SIRFETCH_D
";
        let table = parse_evolution_moves(source);

        assert_eq!(table.len(), 3);
        assert_eq!(table["Ivysaur"], "Double-Edge");
        assert_eq!(table["RaticateAlolan"], "Scary Face");
        assert_eq!(table["SirfetchD"], "Brutal Swing");
    }
}
