use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The `EVOLVE_*` tags with a dedicated field layout.
///
/// Any other tag (most commonly `EVOLVE_LEVEL`) is treated as level based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
pub enum EvolutionKind {
    #[strum(serialize = "EVOLVE_ITEM", to_string = "Evolve Item")]
    Item,
    #[strum(serialize = "EVOLVE_HOLDING", to_string = "Evolve Holding")]
    Holding,
    #[strum(serialize = "EVOLVE_HAPPINESS", to_string = "Evolve Happiness")]
    Happiness,
    #[strum(serialize = "EVOLVE_STAT", to_string = "Evolve Stat")]
    Stat,
    #[strum(serialize = "EVOLVE_LOCATION", to_string = "Evolve Location")]
    Location,
    #[strum(serialize = "EVOLVE_MOVE", to_string = "Evolve Move")]
    Move,
    #[strum(serialize = "EVOLVE_CRIT", to_string = "Evolve Crit")]
    Crit,
    #[strum(serialize = "EVOLVE_PARTY", to_string = "Evolve Party")]
    Party,
}

/// One way a creature evolves. All strings are already display-formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EvolutionMethod {
    Item {
        item: String,
        evolution: String,
        form: Option<String>,
    },
    Holding {
        item: String,
        time_of_day: String,
        evolution: String,
        form: Option<String>,
    },
    Happiness {
        time_of_day: String,
        evolution: String,
        form: Option<String>,
    },
    /// Tyrogue's attack/defense comparison.
    Stat {
        level: String,
        comparison: String,
        evolution: String,
    },
    Location {
        location: String,
        evolution: String,
        form: Option<String>,
    },
    Move {
        move_name: String,
        evolution: String,
        form: Option<String>,
    },
    /// Galarian Farfetch'd.
    Crit {
        time_of_day: String,
        evolution: String,
    },
    /// Mantyke.
    Party {
        partner: String,
        evolution: String,
    },
    Level {
        /// Display label of the original tag, e.g. "Evolve Level".
        label: String,
        method: String,
        evolution: String,
        form: Option<String>,
    },
}

impl EvolutionMethod {
    /// Label for the "Type" column.
    pub fn label(&self) -> String {
        let kind = match self {
            EvolutionMethod::Item { .. } => EvolutionKind::Item,
            EvolutionMethod::Holding { .. } => EvolutionKind::Holding,
            EvolutionMethod::Happiness { .. } => EvolutionKind::Happiness,
            EvolutionMethod::Stat { .. } => EvolutionKind::Stat,
            EvolutionMethod::Location { .. } => EvolutionKind::Location,
            EvolutionMethod::Move { .. } => EvolutionKind::Move,
            EvolutionMethod::Crit { .. } => EvolutionKind::Crit,
            EvolutionMethod::Party { .. } => EvolutionKind::Party,
            EvolutionMethod::Level { label, .. } => return label.clone(),
        };
        kind.to_string()
    }

    pub fn evolution(&self) -> &str {
        match self {
            EvolutionMethod::Item { evolution, .. }
            | EvolutionMethod::Holding { evolution, .. }
            | EvolutionMethod::Happiness { evolution, .. }
            | EvolutionMethod::Stat { evolution, .. }
            | EvolutionMethod::Location { evolution, .. }
            | EvolutionMethod::Move { evolution, .. }
            | EvolutionMethod::Crit { evolution, .. }
            | EvolutionMethod::Party { evolution, .. }
            | EvolutionMethod::Level { evolution, .. } => evolution,
        }
    }

    pub fn form(&self) -> Option<&str> {
        match self {
            EvolutionMethod::Item { form, .. }
            | EvolutionMethod::Holding { form, .. }
            | EvolutionMethod::Happiness { form, .. }
            | EvolutionMethod::Location { form, .. }
            | EvolutionMethod::Move { form, .. }
            | EvolutionMethod::Level { form, .. } => form.as_deref(),
            EvolutionMethod::Stat { .. }
            | EvolutionMethod::Crit { .. }
            | EvolutionMethod::Party { .. } => None,
        }
    }

    /// Ordered `(column, value)` pairs rendered in the evolution table.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attributes = vec![("Type", self.label())];

        let method = match self {
            EvolutionMethod::Item { item, .. } | EvolutionMethod::Holding { item, .. } => item,
            EvolutionMethod::Happiness { time_of_day, .. }
            | EvolutionMethod::Crit { time_of_day, .. } => time_of_day,
            EvolutionMethod::Stat { level, .. } => level,
            EvolutionMethod::Location { location, .. } => location,
            EvolutionMethod::Move { move_name, .. } => move_name,
            EvolutionMethod::Party { partner, .. } => partner,
            EvolutionMethod::Level { method, .. } => method,
        };
        attributes.push(("Method", method.clone()));
        attributes.push(("Evolution", self.evolution().to_string()));

        if let Some(form) = self.form() {
            attributes.push(("Form", form.to_string()));
        }

        match self {
            EvolutionMethod::Holding { time_of_day, .. } => {
                attributes.push(("Time Of Day", time_of_day.clone()));
            }
            EvolutionMethod::Stat { comparison, .. } => {
                attributes.push(("Evolve Stat", comparison.clone()));
            }
            _ => {}
        }

        attributes
    }

    /// Key under which egg moves are handed down to the evolved creature:
    /// the evolution's name without spaces plus the first word of its form.
    pub fn target_key(&self) -> String {
        let mut key: String = self
            .evolution()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if let Some(form) = self.form().and_then(|f| f.split_whitespace().next()) {
            key.push_str(form);
        }
        key
    }
}
