//! Runs the whole generator: locate the sources, parse, merge, render, write.

use crate::config::Config;
use crate::errors::{WikiError, WikiResult};
use crate::locate::find_source_file;
use crate::merge::{merge_records, order_by_dex, EggMoveLedger, SourceTables};
use crate::names::page_name;
use crate::parsers::{
    parse_base_stat_data, parse_base_stat_index, parse_dex_order, parse_egg_moves,
    parse_evolution_moves, parse_evos_attacks, parse_teachable_moves, parse_unique_wild_moves,
    read_source, TeachableMoves,
};
use crate::render::{
    ChangesPage, HeldItemsPage, IndexPage, LearnsetPage, CHANGES_PAGE, HELD_ITEMS_PAGE,
    INDEX_PAGE,
};
use schema::CreatureRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything parsed and merged from the source tree, ready to render.
#[derive(Debug, Clone, Default)]
pub struct WikiData {
    pub teachables: TeachableMoves,
    pub records: Vec<CreatureRecord>,
}

fn locate_and_read(roots: &[PathBuf], name: &str) -> WikiResult<String> {
    let path = find_source_file(roots, name)?;
    read_source(&path)
}

/// Parses every source file under `config.source_root` and merges them into
/// records in dex order.
pub fn load(config: &Config) -> WikiResult<WikiData> {
    let files = &config.files;
    let moves_roots = [config.moves_dir()];
    let pokemon_roots = [config.pokemon_dir()];
    let base_stats_roots = [config.base_stats_dir()];

    let teachables =
        parse_teachable_moves(&locate_and_read(&moves_roots, &files.teachable_moves)?);
    log::info!("Read {} teachable moves", teachables.len());

    let dex = parse_dex_order(&locate_and_read(&pokemon_roots, &files.dex_order)?);
    let index = parse_base_stat_index(&locate_and_read(&pokemon_roots, &files.base_stats_index)?);
    let ordered = order_by_dex(&dex, &index);
    log::info!(
        "Ordered {} of {} base stat files by {} dex entries",
        ordered.len(),
        index.len(),
        dex.len()
    );

    let tables = SourceTables {
        evos_attacks: parse_evos_attacks(&locate_and_read(&pokemon_roots, &files.evos_attacks)?),
        egg_moves: parse_egg_moves(&locate_and_read(&pokemon_roots, &files.egg_moves)?),
        evolution_moves: parse_evolution_moves(&locate_and_read(
            &pokemon_roots,
            &files.evolution_moves,
        )?),
        unique_wild_moves: parse_unique_wild_moves(&locate_and_read(
            &pokemon_roots,
            &files.unique_wild_moves,
        )?),
    };
    log::info!(
        "Read {} evolution/level-up entries and {} egg move entries",
        tables.evos_attacks.len(),
        tables.egg_moves.len()
    );

    let mut creatures = Vec::with_capacity(ordered.len());
    for file in &ordered {
        let source = locate_and_read(&base_stats_roots, file)?;
        let file_key = file.strip_suffix(".asm").unwrap_or(file.as_str());
        creatures.push((file_key.to_string(), parse_base_stat_data(&source)));
    }

    let mut ledger = EggMoveLedger::new();
    let records = merge_records(creatures, &tables, &mut ledger);
    log::info!(
        "Merged {} creatures, {} egg move hand-downs",
        records.len(),
        ledger.entries().len()
    );

    Ok(WikiData {
        teachables,
        records,
    })
}

fn write_page(dir: &Path, page: &str, content: impl ToString) -> WikiResult<()> {
    let path = dir.join(format!("{}.md", page));
    fs::write(&path, content.to_string()).map_err(|err| WikiError::io(&path, err))
}

/// Writes every page into `output_dir`, overwriting existing files.
pub fn write_pages(data: &WikiData, output_dir: &Path) -> WikiResult<()> {
    fs::create_dir_all(output_dir).map_err(|err| WikiError::io(output_dir, err))?;

    let records = &data.records;
    for (i, record) in records.iter().enumerate() {
        let page = LearnsetPage {
            record,
            prev: i.checked_sub(1).and_then(|prev| records.get(prev)),
            next: records.get(i + 1),
            teachables: &data.teachables,
        };
        write_page(output_dir, &page_name(&record.name), page)?;
    }
    log::info!("Wrote {} learnset pages", records.len());

    write_page(output_dir, INDEX_PAGE, IndexPage { records })?;
    write_page(output_dir, HELD_ITEMS_PAGE, HeldItemsPage { records })?;
    write_page(output_dir, CHANGES_PAGE, ChangesPage { records })?;
    log::info!("Wrote index, held item and changes pages to {}", output_dir.display());

    Ok(())
}

/// Dumps the merged records as pretty-printed JSON.
pub fn write_json(records: &[CreatureRecord], path: &Path) -> WikiResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).map_err(|err| WikiError::io(path, err))?;
    log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Loads, renders and writes everything `config` asks for.
pub fn run(config: &Config) -> WikiResult<WikiData> {
    log::info!("Reading sources from {}", config.source_root.display());
    let data = load(config)?;

    write_pages(&data, &config.output_dir)?;
    if let Some(json) = &config.json {
        write_json(&data.records, json)?;
    }

    Ok(data)
}
