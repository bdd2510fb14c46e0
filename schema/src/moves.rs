use crate::Build;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a teachable move is taught.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeachableCategory {
    /// Technical machine, keeping the number as written (e.g. "01").
    Tm(String),
    /// Hidden machine, keeping the number as written.
    Hm(String),
    MoveTutor,
    Other(String),
}

impl TeachableCategory {
    pub fn is_move_tutor(&self) -> bool {
        matches!(self, TeachableCategory::MoveTutor)
    }
}

impl fmt::Display for TeachableCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeachableCategory::Tm(number) => write!(f, "TM {}", number),
            TeachableCategory::Hm(number) => write!(f, "HM {}", number),
            TeachableCategory::MoveTutor => write!(f, "Move Tutor"),
            TeachableCategory::Other(label) => write!(f, "{}", label),
        }
    }
}

/// A move learned by leveling up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpMove {
    pub level: u8,
    pub name: String,
    /// Set when the move sits inside a faithful-only or polished-only block.
    pub only_in: Option<Build>,
}

impl LevelUpMove {
    /// Move name with the build annotation, e.g. "Bite (Polished)".
    pub fn display_name(&self) -> String {
        match self.only_in {
            Some(build) => format!("{} ({})", self.name, build),
            None => self.name.clone(),
        }
    }
}

/// A move only known by wild encounters in one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueWildMove {
    pub location: String,
    pub name: String,
}
