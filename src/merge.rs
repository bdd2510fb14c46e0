//! Joins the parsed tables into one [`CreatureRecord`] per base stat file.

use crate::names::creature_names;
use crate::parsers::{
    BaseStatData, EggMovesTable, EvolutionMovesTable, EvosAttacksTable, UniqueWildMovesTable,
};
use schema::{CreatureRecord, EvolutionMethod, Variants};

/// The shared tables every creature is looked up in.
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub evos_attacks: EvosAttacksTable,
    pub egg_moves: EggMovesTable,
    pub evolution_moves: EvolutionMovesTable,
    pub unique_wild_moves: UniqueWildMovesTable,
}

/// Egg moves handed down from a creature to what it evolves into.
///
/// Entries are `(target key, egg moves)` in the order they were recorded.
/// An evolved creature that matches several entries takes the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EggMoveLedger {
    entries: Vec<(String, Vec<String>)>,
}

impl EggMoveLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry unless the exact same pair is already present.
    pub fn record(&mut self, target: String, moves: &[String]) {
        let exists = self
            .entries
            .iter()
            .any(|(key, recorded)| *key == target && recorded.as_slice() == moves);
        if !exists {
            self.entries.push((target, moves.to_vec()));
        }
    }

    /// Records `moves` for every creature reachable through `evolutions`.
    pub fn record_evolutions(&mut self, evolutions: &[EvolutionMethod], moves: &[String]) {
        for evolution in evolutions {
            self.record(evolution.target_key(), moves);
        }
    }

    /// The egg moves inherited by the creature with this evolution/attack key.
    pub fn inherited_by(&self, evo_attacks_key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(target, _)| !target.is_empty() && evo_attacks_key.contains(target.as_str()))
            .map(|(_, moves)| moves.as_slice())
    }

    pub fn entries(&self) -> &[(String, Vec<String>)] {
        &self.entries
    }
}

/// Reorders base stat file names into dex order.
///
/// Each dex id claims every remaining file whose name starts with it (ignoring
/// case). Files no dex id claims are dropped.
pub fn order_by_dex(dex: &[String], files: &[String]) -> Vec<String> {
    let mut remaining: Vec<&String> = files.iter().collect();
    let mut ordered = Vec::with_capacity(files.len());

    for id in dex {
        let prefix = id.to_lowercase();
        let (claimed, rest): (Vec<&String>, Vec<&String>) = remaining
            .into_iter()
            .partition(|file| file.to_lowercase().starts_with(&prefix));
        ordered.extend(claimed.into_iter().cloned());
        remaining = rest;
    }

    for dropped in &remaining {
        log::debug!("{} has no dex entry, skipping", dropped);
    }

    ordered
}

/// Builds the record for one base stat file, updating the ledger.
pub fn merge_creature(
    file_key: &str,
    base: BaseStatData,
    tables: &SourceTables,
    ledger: &mut EggMoveLedger,
) -> CreatureRecord {
    let names = creature_names(file_key);
    let evos = tables
        .evos_attacks
        .get(&names.evo_attacks_key)
        .cloned()
        .unwrap_or_default();

    let mut record = CreatureRecord {
        name: names.display,
        stats: base.stats,
        types: base.types,
        abilities: base.abilities,
        held_items: base.held_items,
        egg_groups: base.egg_groups,
        tm_hm_moves: base.tm_hm_moves,
        evolutions: Variants {
            faithful: evos.evolutions_faithful,
            polished: Some(evos.evolutions_polished),
        }
        .normalized_list(),
        level_up_moves: evos.moves,
        evolution_move: tables.evolution_moves.get(&names.evo_attacks_key).cloned(),
        unique_wild_moves: tables
            .unique_wild_moves
            .get(&names.evo_attacks_key)
            .cloned()
            .unwrap_or_default(),
        egg_moves: Vec::new(),
        egg_moves_key: names.egg_moves_key,
        evo_attacks_key: names.evo_attacks_key,
    };

    if let Some(own) = tables.egg_moves.get(&record.egg_moves_key) {
        record.egg_moves = own.clone();
        ledger.record_evolutions(&record.evolutions.faithful, own);
    }

    if let Some(inherited) = ledger.inherited_by(&record.evo_attacks_key) {
        record.egg_moves = inherited.to_vec();
        ledger.record_evolutions(&record.evolutions.faithful, &record.egg_moves);
    }

    log::debug!(
        "{}: egg moves via {:?}, evolutions via {:?}, {} egg moves",
        record.name,
        record.egg_moves_key,
        record.evo_attacks_key,
        record.egg_moves.len()
    );

    record
}

/// Merges dex-ordered `(file key, base stat data)` pairs into records.
pub fn merge_records(
    creatures: Vec<(String, BaseStatData)>,
    tables: &SourceTables,
    ledger: &mut EggMoveLedger,
) -> Vec<CreatureRecord> {
    creatures
        .into_iter()
        .map(|(file_key, base)| merge_creature(&file_key, base, tables, ledger))
        .collect()
}
