// In: src/lib.rs

//! Polished Crystal Wiki Generator
//!
//! Reads the assembler data tables of the Polished Crystal ROM hack and turns
//! them into cross-linked markdown pages: one learnset page per creature, an
//! index, a wild held item table and a list of the polished build's changes.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod config;
pub mod errors;
pub mod locate;
pub mod merge;
pub mod names;
pub mod parsers;
pub mod pipeline;
pub mod render;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `polished-wiki` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the data model shared by every stage.
pub use schema::{
    BaseStats, Build, CreatureRecord, EvolutionKind, EvolutionMethod, LevelUpMove,
    TeachableCategory, UniqueWildMove, Variants,
};

// --- From this crate's modules (`src/`) ---

// Configuration and the end-to-end run.
pub use config::{CmdArgs, Config, InputFiles};
pub use pipeline::{load, run, write_json, write_pages, WikiData};

// Merging and rendering, for callers that drive the stages themselves.
pub use merge::{merge_records, order_by_dex, EggMoveLedger, SourceTables};
pub use render::{ChangesPage, HeldItemsPage, IndexPage, LearnsetPage};

// Crate-specific error and result types.
pub use errors::{WikiError, WikiResult};
