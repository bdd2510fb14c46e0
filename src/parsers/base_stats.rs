use super::{ordered_set, split_fields, strip_comment, strip_keyword, ConditionalMode, VariantSlots};
use crate::names::{format_move_name, humanize};
use regex::Regex;
use schema::{BaseStats, Variants};
use std::sync::LazyLock;

static STAT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"; \d{1,3} BST").expect("valid stat line regex"));

static INCLUDED_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z0-9_]+\.asm)").expect("valid include regex"));

/// Cosmetic variants listed in the base stat index without a page of their own.
const COSMETIC_MARKERS: [&str; 2] = ["; three segment", "; red"];

/// Dummy base stat data used for eggs.
const EGG_FILE: &str = "egg.asm";

/// Everything read from one creature's base stat file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseStatData {
    pub stats: Variants<BaseStats>,
    pub types: Variants<Vec<String>>,
    pub abilities: Variants<Vec<String>>,
    pub held_items: Vec<String>,
    pub egg_groups: Vec<String>,
    pub tm_hm_moves: Vec<String>,
}

/// Lists the per-creature base stat files included by `base_stats.asm`, in
/// include order.
pub fn parse_base_stat_index(source: &str) -> Vec<String> {
    let mut files = Vec::new();

    for line in source.lines().map(str::trim) {
        if COSMETIC_MARKERS.iter().any(|marker| line.contains(marker)) {
            continue;
        }
        if let Some(captures) = INCLUDED_FILE.captures(line) {
            let file = &captures[1];
            if file != EGG_FILE {
                files.push(file.to_string());
            }
        }
    }

    files
}

/// Parses one creature's base stat file.
pub fn parse_base_stat_data(source: &str) -> BaseStatData {
    let mut mode = ConditionalMode::default();
    let mut stats = VariantSlots::default();
    let mut types = VariantSlots::default();
    let mut abilities = VariantSlots::default();
    let mut data = BaseStatData::default();

    for line in source.lines().map(str::trim) {
        if let Some(next) = ConditionalMode::transition(line) {
            mode = next;
            continue;
        }

        if STAT_LINE.is_match(line) {
            let values: Result<Vec<u16>, _> = split_fields(payload(line, "db"))
                .into_iter()
                .map(str::parse::<u16>)
                .collect();
            if let Some(parsed) = values.ok().as_deref().and_then(BaseStats::from_slice) {
                stats.set(mode.bucket(), parsed);
            }
        } else if line.contains("; type") {
            let parsed = split_fields(payload(line, "db"))
                .into_iter()
                .map(humanize);
            types.set(mode.bucket(), ordered_set(parsed));
        } else if line.contains("; held items") {
            data.held_items = split_fields(payload(line, "db"))
                .into_iter()
                .map(humanize)
                .collect();
        } else if line.starts_with("abilities_for") {
            let parsed: Vec<String> = split_fields(strip_comment(line))
                .into_iter()
                .skip(1)
                .map(humanize)
                .collect();
            abilities.set(mode.bucket(), parsed);
        } else if line.contains("; egg groups") {
            let parsed = split_fields(payload(line, "dn"))
                .into_iter()
                .map(|group| humanize(group).chars().skip(4).collect::<String>());
            data.egg_groups = ordered_set(parsed);
        } else if line.starts_with("tmhm") {
            data.tm_hm_moves = split_fields(payload(line, "tmhm"))
                .into_iter()
                .filter(|token| !token.is_empty())
                .map(format_move_name)
                .collect();
        } else {
            log::trace!("skipping base stat line: {}", line);
        }
    }

    data.stats = stats.finish();
    data.types = types.finish();
    data.abilities = abilities.finish();
    data
}

/// The line without its comment and leading keyword.
fn payload<'a>(line: &'a str, keyword: &str) -> &'a str {
    strip_keyword(strip_comment(line), keyword)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CHARMANDER: &str = "\
\tdb  39,  52,  43,  65,  60,  50 ; 309 BST
\t;   hp  atk  def  spd  sat  sdf

\tdb FIRE, FIRE ; type
\tdb 45 ; catch rate
\tdb 62 ; base exp
\tdb NO_ITEM, NO_ITEM ; held items
\tdb GENDER_F12_5 ; gender ratio

\tabilities_for CHARMANDER, BLAZE, BLAZE, SOLAR_POWER
\tdb GROWTH_MEDIUM_SLOW ; growth rate
\tdn EGG_MONSTER, EGG_DRAGON ; egg groups

\ttmhm CURSE, ROAR, DOUBLE_EDGE, X_SCISSOR
";

    const PIDGEOT: &str = "\
if DEF(FAITHFUL)
\tdb  83,  80,  75, 101,  70,  70 ; 479 BST
else
\tdb  83,  80,  75, 111,  70,  80 ; 499 BST
endc
\tdb NORMAL, FLYING ; type
if DEF(FAITHFUL)
\tabilities_for PIDGEOT, KEEN_EYE, TANGLED_FEET, BIG_PECKS
else
\tabilities_for PIDGEOT, KEEN_EYE, NO_GUARD, BIG_PECKS
endc
\tdb NO_ITEM, SHARP_BEAK ; held items
\tdn EGG_FLYING, EGG_FLYING ; egg groups
\ttmhm
";

    #[test]
    fn test_unconditional_file() {
        let data = parse_base_stat_data(CHARMANDER);

        assert_eq!(data.stats.faithful.hp, 39);
        assert_eq!(data.stats.faithful.speed, 65);
        assert_eq!(data.stats.faithful.total(), 309);
        assert_eq!(data.stats.polished, None);
        assert_eq!(data.types.faithful, vec!["Fire"]);
        assert_eq!(data.abilities.faithful, vec!["Blaze", "Blaze", "Solar Power"]);
        assert_eq!(data.held_items, vec!["No Item", "No Item"]);
        assert_eq!(data.egg_groups, vec!["Monster", "Dragon"]);
        assert_eq!(
            data.tm_hm_moves,
            vec!["Curse", "Roar", "Double-Edge", "X-Scissor"]
        );
    }

    #[test]
    fn test_conditional_blocks_fill_both_builds() {
        let data = parse_base_stat_data(PIDGEOT);

        assert_eq!(data.stats.faithful.speed, 101);
        assert_eq!(data.stats.polished.map(|s| s.speed), Some(111));
        assert_eq!(data.types.faithful, vec!["Normal", "Flying"]);
        assert_eq!(data.types.polished, None);
        assert_eq!(
            data.abilities.polished,
            Some(vec![
                "Keen Eye".to_string(),
                "No Guard".to_string(),
                "Big Pecks".to_string()
            ])
        );
        assert_eq!(data.held_items, vec!["No Item", "Sharp Beak"]);
        assert_eq!(data.egg_groups, vec!["Flying"]);
        assert!(data.tm_hm_moves.is_empty());
    }

    #[test]
    fn test_index_skips_cosmetic_and_egg_entries() {
        let source = "\
BaseData::
INCLUDE \"data/pokemon/base_stats/bulbasaur.asm\"
INCLUDE \"data/pokemon/base_stats/gyarados.asm\"
INCLUDE \"data/pokemon/base_stats/gyarados.asm\" ; red
INCLUDE \"data/pokemon/base_stats/dudunsparce.asm\" ; three segment
INCLUDE \"data/pokemon/base_stats/egg.asm\"
";
        assert_eq!(
            parse_base_stat_index(source),
            vec!["bulbasaur.asm", "gyarados.asm"]
        );
    }
}
