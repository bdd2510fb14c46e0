//! Finds source files inside the content repository.

use crate::errors::{WikiError, WikiResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Recursively searches `roots` (in order) for a file named `name`, ignoring
/// case. The first match wins; any further matches are logged.
pub fn find_source_file(roots: &[PathBuf], name: &str) -> WikiResult<PathBuf> {
    let mut matches = Vec::new();
    for root in roots {
        collect_matches(root, name, &mut matches)?;
    }

    let mut matches = matches.into_iter();
    let Some(found) = matches.next() else {
        return Err(WikiError::MissingInput {
            name: name.to_string(),
            searched: roots.to_vec(),
        });
    };

    for extra in matches {
        log::warn!(
            "{} matched more than once, using {} and ignoring {}",
            name,
            found.display(),
            extra.display()
        );
    }
    log::debug!("found {} at {}", name, found.display());

    Ok(found)
}

fn collect_matches(dir: &Path, name: &str, matches: &mut Vec<PathBuf>) -> WikiResult<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    let mut entries = fs::read_dir(dir)
        .map_err(|err| WikiError::io(dir, err))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| WikiError::io(dir, err))?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_matches(&path, name, matches)?;
        } else if path
            .file_name()
            .and_then(|s| s.to_str())
            .is_some_and(|file| file.eq_ignore_ascii_case(name))
        {
            matches.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_finds_nested_file_ignoring_case() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("pokemon");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("Egg_Moves.asm"), "").unwrap();

        let found = find_source_file(&[dir.path().to_path_buf()], "egg_moves.asm").unwrap();
        assert_eq!(found, nested.join("Egg_Moves.asm"));
    }

    #[test]
    fn test_first_root_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("a.asm"), "").unwrap();
        fs::write(second.path().join("a.asm"), "").unwrap();

        let roots = [first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(
            find_source_file(&roots, "a.asm").unwrap(),
            first.path().join("a.asm")
        );
    }

    #[test]
    fn test_missing_file_reports_roots() {
        let dir = TempDir::new().unwrap();
        let err = find_source_file(&[dir.path().to_path_buf()], "nothing.asm").unwrap_err();
        match err {
            WikiError::MissingInput { name, searched } => {
                assert_eq!(name, "nothing.asm");
                assert_eq!(searched, vec![dir.path().to_path_buf()]);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
