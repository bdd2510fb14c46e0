use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, IntoStaticStr};

/// Which ROM configuration a piece of data belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, IntoStaticStr,
)]
pub enum Build {
    /// The original, unmodified game.
    Faithful,
    /// The enhancement patch.
    Polished,
}

/// A faithful value plus an optional polished override.
///
/// `polished` is only `Some` when it actually differs from `faithful`; a
/// missing override means the polished build shows the faithful value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variants<T> {
    pub faithful: T,
    pub polished: Option<T>,
}

impl<T: PartialEq> Variants<T> {
    pub fn new(faithful: T, polished: Option<T>) -> Self {
        Self { faithful, polished }.normalized()
    }

    /// Drops a polished override that is identical to the faithful value.
    pub fn normalized(self) -> Self {
        let Variants { faithful, polished } = self;
        let polished = polished.filter(|p| *p != faithful);
        Variants { faithful, polished }
    }

    pub fn diverges(&self) -> bool {
        self.polished.is_some()
    }

    /// The value shown for a given build, falling back to faithful.
    pub fn for_build(&self, build: Build) -> &T {
        match build {
            Build::Faithful => &self.faithful,
            Build::Polished => self.polished.as_ref().unwrap_or(&self.faithful),
        }
    }
}

impl<T: PartialEq> Variants<Vec<T>> {
    /// Like [`Variants::normalized`], but an empty polished list also counts as
    /// "no override".
    pub fn normalized_list(self) -> Self {
        let Variants { faithful, polished } = self;
        Variants::new(faithful, polished.filter(|p| !p.is_empty()))
    }
}
