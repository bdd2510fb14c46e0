use regex::Regex;
use std::sync::LazyLock;

static DEX_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^dp\s+([A-Z][A-Z0-9_]*)").expect("valid dex entry regex"));

/// Collects the identifiers of `dp` lines. Their file order is the canonical
/// dex order.
pub fn parse_dex_order(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter_map(|line| DEX_ENTRY.captures(line))
        .map(|captures| captures[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collects_dp_entries_in_order() {
        let source = "\
NewPokedexOrder:
\tdp CHIKORITA
\tdp BAYLEEF ; comment
\t; dp COMMENTED_OUT
\tdp MR__MIME
\tdb 0
";
        assert_eq!(
            parse_dex_order(source),
            vec!["CHIKORITA", "BAYLEEF", "MR__MIME"]
        );
    }
}
