use super::{split_fields, strip_comment, strip_keyword, ConditionalMode};
use crate::names::{format_move_name, humanize, stat_comparison, time_of_day};
use indexmap::IndexMap;
use schema::{Build, EvolutionKind, EvolutionMethod, LevelUpMove};

const HEADER_SUFFIX: &str = "EvosAttacks:";
const END_HEADER: &str = "EggEvosAttacks:";

/// Forms that mean "the usual one" and aren't shown for level evolutions.
const IMPLICIT_FORMS: [&str; 2] = ["NO_FORM", "PLAIN_FORM"];

/// Evolution methods and level-up moves of one `XxxEvosAttacks:` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvosAttacks {
    /// Unconditional and faithful-only evolutions.
    pub evolutions_faithful: Vec<EvolutionMethod>,
    /// Polished-only evolutions.
    pub evolutions_polished: Vec<EvolutionMethod>,
    pub moves: Vec<LevelUpMove>,
}

/// Header name (e.g. `RattataPlain`) -> block contents.
pub type EvosAttacksTable = IndexMap<String, EvosAttacks>;

/// Parses the evolution and level-up move table.
pub fn parse_evos_attacks(source: &str) -> EvosAttacksTable {
    let mut table = EvosAttacksTable::new();
    let mut mode = ConditionalMode::default();
    let mut current: Option<String> = None;

    for line in source.lines().map(str::trim) {
        if let Some(next) = ConditionalMode::transition(line) {
            mode = next;
            continue;
        }

        if line.starts_with(END_HEADER) {
            break;
        }

        if let Some(name) = line.strip_suffix(HEADER_SUFFIX) {
            let name = name.trim().to_string();
            table.insert(name.clone(), EvosAttacks::default());
            current = Some(name);
            continue;
        }

        let Some(entry) = current.as_ref().and_then(|name| table.get_mut(name)) else {
            continue;
        };

        if line.starts_with("evo_data") {
            let fields = split_fields(strip_keyword(strip_comment(line), "evo_data"));
            match parse_evolution(&fields) {
                Some(method) => match mode.bucket() {
                    Build::Faithful => entry.evolutions_faithful.push(method),
                    Build::Polished => entry.evolutions_polished.push(method),
                },
                None => log::trace!("skipping evolution line: {}", line),
            }
        } else if line.starts_with("db") {
            if let Some((level, name)) = parse_level_up(line) {
                entry.moves.push(LevelUpMove {
                    level,
                    name,
                    only_in: mode.tag(),
                });
            }
        }
    }

    table
}

/// Maps the 2-5 fields of an `evo_data` line onto the method its kind tag
/// describes. Returns `None` when the line has too few fields for its kind.
pub fn parse_evolution(fields: &[&str]) -> Option<EvolutionMethod> {
    if !(2..=5).contains(&fields.len()) || fields.iter().any(|f| f.is_empty()) {
        return None;
    }

    let form = |index: usize| fields.get(index).map(|f| humanize(f));

    let method = match fields[0].parse::<EvolutionKind>() {
        Ok(EvolutionKind::Item) => EvolutionMethod::Item {
            item: humanize(fields[1]),
            evolution: humanize(fields.get(2)?),
            form: form(3),
        },
        Ok(EvolutionKind::Holding) => EvolutionMethod::Holding {
            item: humanize(fields[1]),
            time_of_day: time_of_day(fields.get(2)?),
            evolution: humanize(fields.get(3)?),
            form: form(4),
        },
        Ok(EvolutionKind::Happiness) => EvolutionMethod::Happiness {
            time_of_day: time_of_day(fields[1]),
            evolution: humanize(fields.get(2)?),
            form: form(3),
        },
        Ok(EvolutionKind::Stat) => EvolutionMethod::Stat {
            level: humanize(fields[1]),
            comparison: stat_comparison(fields.get(2)?),
            evolution: humanize(fields.get(3)?),
        },
        Ok(EvolutionKind::Location) => EvolutionMethod::Location {
            location: humanize(fields[1]),
            evolution: humanize(fields.get(2)?),
            form: form(3),
        },
        Ok(EvolutionKind::Move) => EvolutionMethod::Move {
            move_name: humanize(fields[1]),
            evolution: humanize(fields.get(2)?),
            form: form(3),
        },
        Ok(EvolutionKind::Crit) => EvolutionMethod::Crit {
            time_of_day: time_of_day(fields[1]),
            evolution: humanize(fields.get(2)?),
        },
        Ok(EvolutionKind::Party) => EvolutionMethod::Party {
            partner: humanize(fields[1]),
            evolution: humanize(fields.get(2)?),
        },
        Err(_) => EvolutionMethod::Level {
            label: humanize(fields[0]),
            method: humanize(fields[1]),
            evolution: humanize(fields.get(2)?),
            form: fields
                .get(3)
                .filter(|f| !IMPLICIT_FORMS.iter().any(|implicit| f.contains(implicit)))
                .map(|f| humanize(f)),
        },
    };

    Some(method)
}

/// `db 12, BITE ; comment` -> `(12, "Bite")`.
fn parse_level_up(line: &str) -> Option<(u8, String)> {
    let fields = split_fields(strip_keyword(strip_comment(line), "db"));
    match fields.as_slice() {
        [level, move_token] if is_move_token(move_token) => {
            Some((level.parse().ok()?, format_move_name(move_token)))
        }
        _ => None,
    }
}

fn is_move_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_uppercase() || c == '_' || c.is_ascii_digit())
}
