use phf::{Map, phf_map};

/// The built-in glycosylation motif registry: motif name to pattern string.
///
/// `N` is the canonical N-linked sequon, asparagine followed by any residue
/// but proline, followed by threonine or serine. Exposed for caller discovery
/// (e.g. populating a selection list); the generation entry point accepts any
/// pattern, named here or not.
pub static GLYCOSYLATION_MOTIFS: Map<&'static str, &'static str> = phf_map! {
    "N" => "N[^P][TS]",
};

/// Resolves a motif argument: a registry name if one matches, otherwise the
/// argument itself treated as a raw pattern.
pub fn resolve_motif(name_or_pattern: &str) -> &str {
    GLYCOSYLATION_MOTIFS
        .get(name_or_pattern)
        .copied()
        .unwrap_or(name_or_pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_names_resolve_to_their_pattern() {
        assert_eq!(resolve_motif("N"), "N[^P][TS]");
    }

    #[test]
    fn raw_patterns_pass_through_unchanged() {
        assert_eq!(resolve_motif("N[^P][T]"), "N[^P][T]");
        assert_eq!(resolve_motif("[ST]A"), "[ST]A");
    }
}
