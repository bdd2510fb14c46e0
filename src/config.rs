//! Command line arguments and the optional RON configuration file.

use crate::errors::{WikiError, WikiResult};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone, Default)]
#[clap(about = "Generates the Polished Crystal wiki learnset pages")]
pub struct CmdArgs {
    /// Root of the polishedcrystal checkout [default: ../polishedcrystal]
    #[clap(long)]
    pub source_root: Option<PathBuf>,

    /// Directory the markdown pages are written to [default: .]
    #[clap(long)]
    pub output_dir: Option<PathBuf>,

    /// RON configuration file. Command line values take precedence over it
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Also dump the merged records as JSON to this path
    #[clap(long)]
    pub json: Option<PathBuf>,
}

/// Names of the source files looked up under the source root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputFiles {
    pub teachable_moves: String,
    pub dex_order: String,
    pub base_stats_index: String,
    pub evos_attacks: String,
    pub egg_moves: String,
    pub evolution_moves: String,
    pub unique_wild_moves: String,
}

impl Default for InputFiles {
    fn default() -> Self {
        Self {
            teachable_moves: "tmhm_moves.asm".to_string(),
            dex_order: "dex_order_new.asm".to_string(),
            base_stats_index: "base_stats.asm".to_string(),
            evos_attacks: "evos_attacks.asm".to_string(),
            egg_moves: "egg_moves.asm".to_string(),
            evolution_moves: "evolution_moves.asm".to_string(),
            unique_wild_moves: "unique_wild_moves.asm".to_string(),
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source_root: PathBuf,
    pub output_dir: PathBuf,
    pub json: Option<PathBuf>,
    pub files: InputFiles,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("../polishedcrystal"),
            output_dir: PathBuf::from("."),
            json: None,
            files: InputFiles::default(),
        }
    }
}

impl Config {
    /// Reads a RON configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> WikiResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| WikiError::Config(format!("{}: {}", path.display(), err)))?;
        let config: Config = ron::from_str(&content)?;
        Ok(config)
    }

    /// Builds the run configuration: defaults, then the file named by
    /// `--config`, then the remaining command line flags.
    pub fn from_args(args: &CmdArgs) -> WikiResult<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(source_root) = &args.source_root {
            config.source_root = source_root.clone();
        }
        if let Some(output_dir) = &args.output_dir {
            config.output_dir = output_dir.clone();
        }
        if args.json.is_some() {
            config.json = args.json.clone();
        }

        Ok(config)
    }

    pub fn moves_dir(&self) -> PathBuf {
        self.source_root.join("data").join("moves")
    }

    pub fn pokemon_dir(&self) -> PathBuf {
        self.source_root.join("data").join("pokemon")
    }

    /// Where the per-creature base stat files live.
    pub fn base_stats_dir(&self) -> PathBuf {
        self.pokemon_dir().join("base_stats")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults_without_arguments() {
        let args = CmdArgs::try_parse_from(["polished-wiki"]).unwrap();
        let config = Config::from_args(&args).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(
            config.base_stats_dir(),
            PathBuf::from("../polishedcrystal/data/pokemon/base_stats")
        );
    }

    #[test]
    fn test_command_line_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                source_root: "/srv/polishedcrystal",
                output_dir: "wiki",
                files: (egg_moves: "egg_moves_v2.asm"),
            )"#
        )
        .unwrap();

        let args = CmdArgs::try_parse_from([
            "polished-wiki",
            "--config",
            file.path().to_str().unwrap(),
            "--output-dir",
            "out",
        ])
        .unwrap();
        let config = Config::from_args(&args).unwrap();

        assert_eq!(config.source_root, PathBuf::from("/srv/polishedcrystal"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.files.egg_moves, "egg_moves_v2.asm");
        assert_eq!(config.files.evos_attacks, "evos_attacks.asm");
        assert_eq!(config.json, None);
    }

    #[test]
    fn test_malformed_config_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(source_root: ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, WikiError::Config(_)));
    }
}
