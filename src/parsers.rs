//! Line scanners for the assembler-style source files.
//!
//! Every parser is a pure function of the file's text. They recognize a narrow
//! set of line shapes by prefix/suffix and skip anything else without
//! complaint, since the source corpus keeps changing underneath them.

use crate::errors::{WikiError, WikiResult};
use schema::{Build, Variants};
use std::fs;
use std::io;
use std::path::Path;

pub mod base_stats;
pub mod dex_order;
pub mod egg_moves;
pub mod evolution_moves;
pub mod evos_attacks;
pub mod teachable;
pub mod unique_moves;

pub use base_stats::{parse_base_stat_data, parse_base_stat_index, BaseStatData};
pub use dex_order::parse_dex_order;
pub use egg_moves::{parse_egg_moves, EggMovesTable};
pub use evolution_moves::{parse_evolution_moves, EvolutionMovesTable};
pub use evos_attacks::{parse_evos_attacks, EvosAttacks, EvosAttacksTable};
pub use teachable::{parse_teachable_moves, TeachableMoves};
pub use unique_moves::{parse_unique_wild_moves, UniqueWildMovesTable};

/// Reads a whole source file. A missing file is reported as
/// [`WikiError::MissingInput`], anything else as [`WikiError::Io`].
pub fn read_source(path: &Path) -> WikiResult<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => WikiError::MissingInput {
            name: path.display().to_string(),
            searched: Vec::new(),
        },
        _ => WikiError::io(path, err),
    })
}

/// Which side of a `if DEF(FAITHFUL)` block the scanner is currently in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConditionalMode {
    #[default]
    Unconditional,
    Faithful,
    Polished,
}

impl ConditionalMode {
    /// The mode entered by `line`, or `None` if it isn't a conditional
    /// directive.
    pub fn transition(line: &str) -> Option<Self> {
        if line.starts_with("if !DEF(FAITHFUL)") {
            Some(ConditionalMode::Polished)
        } else if line.starts_with("if DEF(FAITHFUL)") {
            Some(ConditionalMode::Faithful)
        } else if line.starts_with("else") {
            Some(ConditionalMode::Polished)
        } else if line.starts_with("endc") {
            Some(ConditionalMode::Unconditional)
        } else {
            None
        }
    }

    /// Where data read in this mode is stored. Unconditional data is the
    /// faithful baseline.
    pub fn bucket(self) -> Build {
        match self {
            ConditionalMode::Polished => Build::Polished,
            ConditionalMode::Unconditional | ConditionalMode::Faithful => Build::Faithful,
        }
    }

    /// The build a value is restricted to, if any.
    pub fn tag(self) -> Option<Build> {
        match self {
            ConditionalMode::Unconditional => None,
            ConditionalMode::Faithful => Some(Build::Faithful),
            ConditionalMode::Polished => Some(Build::Polished),
        }
    }
}

/// Collects the faithful and polished value of one attribute while scanning.
#[derive(Debug, Clone)]
pub(crate) struct VariantSlots<T> {
    faithful: Option<T>,
    polished: Option<T>,
}

impl<T> Default for VariantSlots<T> {
    fn default() -> Self {
        Self {
            faithful: None,
            polished: None,
        }
    }
}

impl<T: Default + PartialEq> VariantSlots<T> {
    pub(crate) fn set(&mut self, build: Build, value: T) {
        match build {
            Build::Faithful => self.faithful = Some(value),
            Build::Polished => self.polished = Some(value),
        }
    }

    pub(crate) fn finish(self) -> Variants<T> {
        Variants::new(self.faithful.unwrap_or_default(), self.polished)
    }
}

/// Drops everything from the first `;` on.
pub(crate) fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(index) => line[..index].trim_end(),
        None => line,
    }
}

/// Drops a leading directive keyword such as `db` and the whitespace after it.
pub(crate) fn strip_keyword<'a>(line: &'a str, keyword: &str) -> &'a str {
    match line.strip_prefix(keyword) {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    }
}

/// Splits a comma list, trimming each field.
pub(crate) fn split_fields(text: &str) -> Vec<&str> {
    text.split(',').map(str::trim).collect()
}

/// Removes repeats while keeping first-seen order.
pub(crate) fn ordered_set(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}
