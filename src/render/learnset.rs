use super::{
    join_or_empty, link, version_labels, write_evolution_table, write_header, write_row,
    EMPTY_CELL, INDEX_PAGE,
};
use crate::parsers::TeachableMoves;
use schema::CreatureRecord;
use std::fmt;

const SEPARATOR: [&str; 2] = [EMPTY_CELL, EMPTY_CELL];

/// The learnset page of one creature, linked to its dex neighbours.
pub struct LearnsetPage<'a> {
    pub record: &'a CreatureRecord,
    pub prev: Option<&'a CreatureRecord>,
    pub next: Option<&'a CreatureRecord>,
    pub teachables: &'a TeachableMoves,
}

impl<'a> LearnsetPage<'a> {
    /// Rows of the learnset table: unique wild moves, the evolution move,
    /// level-up moves, TM/HM/tutor moves and egg moves, with a separator row
    /// between groups that have entries.
    pub fn learnset_rows(&self) -> Vec<[String; 2]> {
        let record = self.record;

        let unique: Vec<[String; 2]> = record
            .unique_wild_moves
            .iter()
            .map(|m| [m.location.clone(), m.name.clone()])
            .collect();

        let evolution: Vec<[String; 2]> = record
            .evolution_move
            .iter()
            .map(|m| ["Evolve".to_string(), m.clone()])
            .collect();

        let level_up: Vec<[String; 2]> = record
            .level_up_moves
            .iter()
            .map(|m| [m.level.to_string(), m.display_name()])
            .collect();

        let mut teachable = Vec::new();
        let mut seen_tutor = false;
        for name in &record.tm_hm_moves {
            let category = self.teachables.get(name);
            if !seen_tutor && category.is_some_and(|c| c.is_move_tutor()) {
                teachable.push(SEPARATOR.map(String::from));
                seen_tutor = true;
            }
            let label = category
                .map(|c| c.to_string())
                .unwrap_or_else(|| EMPTY_CELL.to_string());
            teachable.push([label, name.clone()]);
        }

        let egg: Vec<[String; 2]> = record
            .egg_moves
            .iter()
            .map(|m| ["Egg Move".to_string(), m.clone()])
            .collect();

        let mut rows = Vec::new();
        for group in [unique, evolution, level_up, teachable, egg] {
            if group.is_empty() {
                continue;
            }
            if !rows.is_empty() {
                rows.push(SEPARATOR.map(String::from));
            }
            rows.extend(group);
        }
        rows
    }

    fn write_navigation(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&#8593;&nbsp;[Back to Pokemon Learnsets]({})\n\n", INDEX_PAGE)?;
        if let Some(prev) = self.prev {
            write!(f, "&#8592;&nbsp;{}&nbsp;&nbsp;", link(prev))?;
        }
        if let Some(next) = self.next {
            write!(f, "{}&nbsp;&#8594;", link(next))?;
        }
        writeln!(f)
    }

    fn write_base_stats(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        let (faithful, polished) = version_labels(record.has_polished_stat_row());

        writeln!(f, "### Base Stats\n")?;
        let mut titles = vec!["Version", "Type"];
        titles.extend(record.stats.faithful.columns().iter().map(|(label, _)| *label));
        write_header(f, &titles)?;

        let mut row = vec![faithful.to_string(), join_or_empty(&record.types.faithful)];
        row.extend(record.stats.faithful.columns().iter().map(|(_, v)| v.to_string()));
        write_row(f, &row)?;

        if record.has_polished_stat_row() {
            let types = record
                .types
                .polished
                .as_deref()
                .map(join_or_empty)
                .unwrap_or_else(|| EMPTY_CELL.to_string());
            let mut row = vec![polished.to_string(), types];
            match &record.stats.polished {
                Some(stats) => row.extend(stats.columns().iter().map(|(_, v)| v.to_string())),
                None => row.extend(std::iter::repeat(EMPTY_CELL.to_string()).take(6)),
            }
            write_row(f, &row)?;
        }
        writeln!(f)
    }

    fn write_abilities(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abilities = &self.record.abilities;
        let (faithful, polished) = version_labels(abilities.diverges());

        writeln!(f, "### Abilities\n")?;
        write_header(f, &["Version", "Abilities"])?;
        write_row(f, &[faithful.to_string(), join_or_empty(&abilities.faithful)])?;
        if let Some(polished_abilities) = &abilities.polished {
            write_row(f, &[polished.to_string(), join_or_empty(polished_abilities)])?;
        }
        writeln!(f)
    }
}

impl fmt::Display for LearnsetPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;

        self.write_navigation(f)?;
        writeln!(f, "## {}\n", record.name)?;

        self.write_base_stats(f)?;
        self.write_abilities(f)?;

        if record.all_evolutions().next().is_some() {
            writeln!(f, "### Evolution Data\n")?;
            write_evolution_table(f, record)?;
            writeln!(f)?;
        }

        if !record.egg_groups.is_empty() {
            writeln!(f, "### Egg Groups\n")?;
            writeln!(f, "{}\n", record.egg_groups.join(", "))?;
        }

        writeln!(f, "### Learnset\n")?;
        write_header(f, &["Level", "Move"])?;
        for row in self.learnset_rows() {
            write_row(f, &row)?;
        }
        Ok(())
    }
}

/// Links to every learnset page in dex order.
pub struct IndexPage<'a> {
    pub records: &'a [CreatureRecord],
}

impl fmt::Display for IndexPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.records {
            write!(f, "{}\n\n", link(record))?;
        }
        Ok(())
    }
}
