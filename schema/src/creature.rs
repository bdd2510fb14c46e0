use crate::{EvolutionMethod, LevelUpMove, UniqueWildMove, Variants};
use serde::{Deserialize, Serialize};

/// Base stats in the order the source files declare them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub speed: u16,
    pub sat: u16,
    pub sdf: u16,
}

impl BaseStats {
    /// Builds stats from the six values of a stat line. Returns `None` unless
    /// exactly six values are given.
    pub fn from_slice(values: &[u16]) -> Option<Self> {
        match *values {
            [hp, atk, def, speed, sat, sdf] => Some(BaseStats {
                hp,
                atk,
                def,
                speed,
                sat,
                sdf,
            }),
            _ => None,
        }
    }

    pub fn total(&self) -> u16 {
        self.hp + self.atk + self.def + self.speed + self.sat + self.sdf
    }

    /// `(label, value)` pairs in the column order used by the wiki tables.
    pub fn columns(&self) -> [(&'static str, u16); 6] {
        [
            ("HP", self.hp),
            ("Atk", self.atk),
            ("Def", self.def),
            ("SAt", self.sat),
            ("SDf", self.sdf),
            ("Speed", self.speed),
        ]
    }
}

/// Everything the wiki knows about one creature after all sources are joined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub name: String,
    /// Key into the egg move table, shared between cosmetic forms.
    pub egg_moves_key: String,
    /// Key into the evolution/level-up, evolution move and unique move tables.
    pub evo_attacks_key: String,
    pub stats: Variants<BaseStats>,
    pub types: Variants<Vec<String>>,
    pub abilities: Variants<Vec<String>>,
    pub held_items: Vec<String>,
    pub egg_groups: Vec<String>,
    pub evolutions: Variants<Vec<EvolutionMethod>>,
    pub level_up_moves: Vec<LevelUpMove>,
    pub egg_moves: Vec<String>,
    pub tm_hm_moves: Vec<String>,
    pub unique_wild_moves: Vec<UniqueWildMove>,
    pub evolution_move: Option<String>,
}

impl CreatureRecord {
    /// True when the polished build changes the stats or the types.
    pub fn has_polished_stat_row(&self) -> bool {
        self.stats.diverges() || self.types.diverges()
    }

    /// Both evolution lists, faithful first.
    pub fn all_evolutions(&self) -> impl Iterator<Item = &EvolutionMethod> {
        self.evolutions
            .faithful
            .iter()
            .chain(self.evolutions.polished.iter().flatten())
    }
}
