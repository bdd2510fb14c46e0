use crate::config::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway polishedcrystal checkout plus an output directory.
///
/// # Example
/// ```
/// let corpus = TestCorpus::johto_starters()
///     .with_pokemon_file("egg_moves.asm", "NoEggMoves:\n")
///     .build();
/// let data = pipeline::run(&corpus.config()).unwrap();
/// ```
pub struct TestCorpus {
    files: Vec<(PathBuf, String)>,
}

pub struct BuiltCorpus {
    dir: TempDir,
}

impl TestCorpus {
    /// An empty source tree.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Adds (or replaces) a file relative to the source root.
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref().to_path_buf();
        self.files.retain(|(existing, _)| *existing != path);
        self.files.push((path, content.to_string()));
        self
    }

    /// Adds a file under `data/pokemon`.
    pub fn with_pokemon_file(self, name: &str, content: &str) -> Self {
        self.with_file(Path::new("data/pokemon").join(name), content)
    }

    /// Adds a per-creature file under `data/pokemon/base_stats`.
    pub fn with_base_stats(self, name: &str, content: &str) -> Self {
        self.with_file(Path::new("data/pokemon/base_stats").join(name), content)
    }

    /// The Chikorita line plus Pidgeot, with a stray base stat file that
    /// the dex never mentions.
    pub fn johto_starters() -> Self {
        Self::new()
            .with_file("data/moves/tmhm_moves.asm", TMHM_MOVES)
            .with_pokemon_file("dex_order_new.asm", DEX_ORDER)
            .with_pokemon_file("base_stats.asm", BASE_STATS_INDEX)
            .with_pokemon_file("evos_attacks.asm", EVOS_ATTACKS)
            .with_pokemon_file("egg_moves.asm", EGG_MOVES)
            .with_pokemon_file("evolution_moves.asm", EVOLUTION_MOVES)
            .with_pokemon_file("unique_wild_moves.asm", UNIQUE_WILD_MOVES)
            .with_base_stats("chikorita.asm", CHIKORITA)
            .with_base_stats("bayleef.asm", BAYLEEF)
            .with_base_stats("meganium.asm", MEGANIUM)
            .with_base_stats("pidgeot.asm", PIDGEOT)
            .with_base_stats("missingno.asm", CHIKORITA)
    }

    /// Writes every file into a fresh temporary directory.
    pub fn build(self) -> BuiltCorpus {
        let dir = TempDir::new().expect("create temp dir");
        let source_root = dir.path().join("polishedcrystal");
        for (path, content) in &self.files {
            let path = source_root.join(path);
            fs::create_dir_all(path.parent().expect("file has a parent"))
                .expect("create source dirs");
            fs::write(&path, content).expect("write source file");
        }
        BuiltCorpus { dir }
    }
}

impl BuiltCorpus {
    pub fn source_root(&self) -> PathBuf {
        self.dir.path().join("polishedcrystal")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("wiki")
    }

    pub fn config(&self) -> Config {
        Config {
            source_root: self.source_root(),
            output_dir: self.output_dir(),
            ..Config::default()
        }
    }

    /// Reads a generated page by name, without the `.md` extension.
    pub fn page(&self, name: &str) -> String {
        let path = self.output_dir().join(format!("{}.md", name));
        fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {}", path.display(), err))
    }

    pub fn has_page(&self, name: &str) -> bool {
        self.output_dir().join(format!("{}.md", name)).is_file()
    }
}

const TMHM_MOVES: &str = "\
TMHMMoves:
\tdb CURSE        ; TM03
\tdb ROAR         ; TM05
\tdb CUT          ; HM01
\tdb FLY          ; HM02
\tdb HEADBUTT     ; MT01
\tdb SEED_BOMB    ; MT02
\tdb 0 ; end
";

const DEX_ORDER: &str = "\
NewPokedexOrder:
\tdp CHIKORITA
\tdp BAYLEEF
\tdp MEGANIUM
\tdp PIDGEOT
";

const BASE_STATS_INDEX: &str = "\
BaseData::
INCLUDE \"data/pokemon/base_stats/pidgeot.asm\"
INCLUDE \"data/pokemon/base_stats/missingno.asm\"
INCLUDE \"data/pokemon/base_stats/chikorita.asm\"
INCLUDE \"data/pokemon/base_stats/bayleef.asm\"
INCLUDE \"data/pokemon/base_stats/meganium.asm\"
INCLUDE \"data/pokemon/base_stats/egg.asm\"
";

const EVOS_ATTACKS: &str = "\
EvosAttacks::
ChikoritaEvosAttacks:
\tevo_data EVOLVE_LEVEL, 16, BAYLEEF
\tdb 1, TACKLE
\tdb 1, GROWL
\tdb 0 ; no more level-up moves

BayleefEvosAttacks:
\tevo_data EVOLVE_LEVEL, 32, MEGANIUM
\tdb 1, TACKLE
\tdb 0 ; no more level-up moves

MeganiumEvosAttacks:
\tdb 0 ; no more evolutions
\tdb 1, PETAL_BLIZZARD
\tdb 1, TACKLE
\tdb 0 ; no more level-up moves

PidgeotEvosAttacks:
if DEF(FAITHFUL)
\tdb 1, GUST
else
\tdb 1, HURRICANE
endc
\tdb 0 ; no more level-up moves

EggEvosAttacks:
\tdb 1, SPLASH
";

const EGG_MOVES: &str = "\
ChikoritaEggMoves:
\tdb VINE_WHIP
\tdb LEECH_SEED
\tdb $ff
NoEggMoves:
";

const EVOLUTION_MOVES: &str = "\
EvolutionMoves::
\tdb NO_MOVE ; CHIKORITA
\tdb NO_MOVE ; BAYLEEF
\tdb PETAL_DANCE ; MEGANIUM
\tdb NO_MOVE ; PIDGEOT
";

const UNIQUE_WILD_MOVES: &str = "\
UniqueWildMoves:
\tunique_moves ROUTE_29, CHIKORITA, SOLAR_BEAM
\tdb -1 ; end
";

const CHIKORITA: &str = "\
\tdb  45,  49,  65,  45,  49,  65 ; 318 BST
\tdb GRASS, GRASS ; type
\tdb NO_ITEM, NO_ITEM ; held items
\tabilities_for CHIKORITA, OVERGROW, OVERGROW, LEAF_GUARD
\tdn EGG_MONSTER, EGG_PLANT ; egg groups
\ttmhm CURSE, CUT, HEADBUTT, SEED_BOMB
";

const BAYLEEF: &str = "\
\tdb  60,  62,  80,  60,  63,  80 ; 405 BST
\tdb GRASS, GRASS ; type
\tdb NO_ITEM, NO_ITEM ; held items
\tabilities_for BAYLEEF, OVERGROW, OVERGROW, LEAF_GUARD
\tdn EGG_MONSTER, EGG_PLANT ; egg groups
\ttmhm CURSE, CUT
";

const MEGANIUM: &str = "\
\tdb  80,  82, 100,  80,  83, 100 ; 525 BST
if DEF(FAITHFUL)
\tdb GRASS, GRASS ; type
else
\tdb GRASS, FAIRY ; type
endc
\tdb NO_ITEM, NO_ITEM ; held items
\tabilities_for MEGANIUM, OVERGROW, OVERGROW, LEAF_GUARD
\tdn EGG_MONSTER, EGG_PLANT ; egg groups
\ttmhm CURSE, CUT
";

const PIDGEOT: &str = "\
if DEF(FAITHFUL)
\tdb  83,  80,  75, 101,  70,  70 ; 479 BST
else
\tdb  83,  80,  75, 111,  70,  80 ; 499 BST
endc
\tdb NORMAL, FLYING ; type
\tdb NO_ITEM, SHARP_BEAK ; held items
\tabilities_for PIDGEOT, KEEN_EYE, TANGLED_FEET, BIG_PECKS
\tdn EGG_FLYING, EGG_FLYING ; egg groups
\ttmhm ROAR, FLY
";
