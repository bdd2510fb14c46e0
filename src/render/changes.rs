use super::{join_or_empty, write_evolution_table, write_header, write_row, EMPTY_CELL};
use schema::{Build, CreatureRecord};
use std::fmt;

/// Every place the polished build differs from the faithful one.
pub struct ChangesPage<'a> {
    pub records: &'a [CreatureRecord],
}

const SECTIONS: [(&str, &str); 4] = [
    ("Polished Type Changes", "polished-type-changes"),
    ("Polished Evolution Changes", "polished-evolution-changes"),
    ("Polished Ability Changes", "polished-ability-changes"),
    ("Polished Base Stat Changes", "polished-base-stat-changes"),
];

impl ChangesPage<'_> {
    fn write_type_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}\n", SECTIONS[0].0)?;
        write_header(f, &["Pokemon", Build::Faithful.as_ref(), Build::Polished.as_ref()])?;
        for record in self.records {
            if let Some(polished) = &record.types.polished {
                write_row(
                    f,
                    &[
                        record.name.clone(),
                        join_or_empty(&record.types.faithful),
                        join_or_empty(polished),
                    ],
                )?;
            }
        }
        writeln!(f)
    }

    fn write_evolution_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}\n", SECTIONS[1].0)?;
        for record in self.records.iter().filter(|r| r.evolutions.diverges()) {
            writeln!(f, "#### {}\n", record.name)?;
            write_evolution_table(f, record)?;
            writeln!(f)?;
        }
        writeln!(f)
    }

    fn write_ability_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}\n", SECTIONS[2].0)?;
        for record in self.records {
            if let Some(polished) = &record.abilities.polished {
                writeln!(f, "#### {}\n", record.name)?;
                write_header(f, &["Version", "Abilities"])?;
                write_row(
                    f,
                    &[
                        Build::Faithful.to_string(),
                        join_or_empty(&record.abilities.faithful),
                    ],
                )?;
                write_row(f, &[Build::Polished.to_string(), join_or_empty(polished)])?;
                writeln!(f)?;
            }
        }
        writeln!(f)
    }

    fn write_stat_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}\n", SECTIONS[3].0)?;
        for record in self.records {
            let Some(polished) = &record.stats.polished else {
                continue;
            };
            let faithful = record.stats.faithful.columns();

            writeln!(f, "#### {}\n", record.name)?;
            let mut titles = vec!["Version"];
            titles.extend(faithful.iter().map(|(label, _)| *label));
            write_header(f, &titles)?;

            let mut row = vec![Build::Faithful.to_string()];
            row.extend(faithful.iter().map(|(_, value)| value.to_string()));
            write_row(f, &row)?;

            // Unchanged stats are shown as "-" on the polished row.
            let mut row = vec![Build::Polished.to_string()];
            row.extend(faithful.iter().zip(polished.columns()).map(
                |((_, before), (_, after))| {
                    if *before == after {
                        EMPTY_CELL.to_string()
                    } else {
                        after.to_string()
                    }
                },
            ));
            write_row(f, &row)?;
            writeln!(f)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ChangesPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Contents\n")?;
        for (title, anchor) in SECTIONS {
            writeln!(f, "- [{}](#{})", title, anchor)?;
        }
        writeln!(f)?;

        self.write_type_changes(f)?;
        self.write_evolution_changes(f)?;
        self.write_ability_changes(f)?;
        self.write_stat_changes(f)
    }
}
