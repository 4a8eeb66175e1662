// crates/swissmatch-core/src/text.rs

//! # Name canonicalization
//!
//! Official names carry their native accents (`Zürich`, `Genève`), callers
//! type whatever their keyboard gives them (`Zurich`, `Zuerich`, `geneve`).
//! Both sides go through the same deterministic transforms and two names
//! match iff their canonical forms are identical.
//!
//! - [`fold`] (tier 1): accented vowels become their base letter.
//! - [`expand`] (tier 2): like tier 1, but `ä`/`ö`/`ü` become `ae`/`oe`/`ue`.
//!
//! After translation every character that is not an ASCII letter or a space
//! is removed and the result is lowercased.

/// Tier 1 translation table.
const FOLD_TABLE: &[(char, &str)] = &[
    ('à', "a"),
    ('â', "a"),
    ('ä', "a"),
    ('è', "e"),
    ('é', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('ì', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ô', "o"),
    ('ö', "o"),
    ('ù', "u"),
    ('ü', "u"),
];

/// Tier 2 translation table: tier 1 with German digraphs for the umlauts.
const EXPAND_TABLE: &[(char, &str)] = &[
    ('à', "a"),
    ('â', "a"),
    ('ä', "ae"),
    ('è', "e"),
    ('é', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('ì', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ô', "o"),
    ('ö', "oe"),
    ('ù', "u"),
    ('ü', "ue"),
];

/// Which canonicalization tier to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Fold,
    Expand,
}

impl Tier {
    /// Query order: fold first, expand as the fallback.
    pub const ALL: [Tier; 2] = [Tier::Fold, Tier::Expand];

    fn table(self) -> &'static [(char, &'static str)] {
        match self {
            Tier::Fold => FOLD_TABLE,
            Tier::Expand => EXPAND_TABLE,
        }
    }

    /// Canonicalize `s` under this tier.
    pub fn apply(self, s: &str) -> String {
        translate(s, self.table())
    }
}

fn translate(s: &str, table: &[(char, &str)]) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match table.iter().find(|(k, _)| *k == ch) {
            Some((_, replacement)) => out.push_str(replacement),
            None if ch == ' ' || ch.is_ascii_alphabetic() => out.push(ch.to_ascii_lowercase()),
            None => {}
        }
    }
    out
}

/// Tier 1 canonical form.
///
/// # Examples
/// ```rust
/// use swissmatch_core::text::fold;
///
/// assert_eq!(fold("Zürich"), "zurich");
/// assert_eq!(fold("La Chaux-de-Fonds"), "la chauxdefonds");
/// ```
pub fn fold(s: &str) -> String {
    Tier::Fold.apply(s)
}

/// Tier 2 canonical form.
///
/// # Examples
/// ```rust
/// use swissmatch_core::text::expand;
///
/// assert_eq!(expand("Grächen"), "graechen");
/// assert_eq!(expand("Genève"), "geneve");
/// ```
pub fn expand(s: &str) -> String {
    Tier::Expand.apply(s)
}

/// Index keys for a name: the tier 1 form, then the tier 2 form when it differs.
pub fn canonical_keys(s: &str) -> impl Iterator<Item = String> {
    let folded = fold(s);
    let expanded = expand(s);
    let extra = (expanded != folded).then_some(expanded);
    std::iter::once(folded).chain(extra)
}

/// True if `a` and `b` share a canonical form under either tier.
pub fn equals_canonical(a: &str, b: &str) -> bool {
    Tier::ALL.iter().any(|t| t.apply(a) == t.apply(b))
        || fold(a) == expand(b)
        || expand(a) == fold(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_strips_accents_and_punctuation() {
        assert_eq!(fold("Zürich"), "zurich");
        assert_eq!(fold("Genève"), "geneve");
        assert_eq!(fold("Saint-Imier"), "saintimier");
        assert_eq!(fold("Zürich 1 Sihlpost"), "zurich  sihlpost");
        assert_eq!(fold("Biel/Bienne"), "bielbienne");
    }

    #[test]
    fn expand_uses_digraphs_only_for_umlauts() {
        assert_eq!(expand("Zürich"), "zuerich");
        assert_eq!(expand("Grächen"), "graechen");
        assert_eq!(expand("Mönchaltorf"), "moenchaltorf");
        assert_eq!(expand("Délémont"), "delemont");
        assert_eq!(expand("Château-d'Œx"), "chateaudx");
    }

    #[test]
    fn uppercase_accented_letters_are_dropped() {
        // the tables only carry lowercase keys
        assert_eq!(fold("Ändelhofen"), "ndelhofen");
    }

    #[test]
    fn empty_and_unmatched_input() {
        assert_eq!(fold(""), "");
        assert_eq!(expand("1234-!?"), "");
    }

    #[test]
    fn output_is_a_fixed_point() {
        for name in ["Zürich", "Genève", "Grächen", "Biel/Bienne", "Lü", "ÀÉÎ xyz"] {
            let once = fold(name);
            assert_eq!(fold(&once), once);
            let once = expand(name);
            assert_eq!(expand(&once), once);
        }
    }

    #[test]
    fn keys_are_deduplicated() {
        assert_eq!(canonical_keys("Basel").collect::<Vec<_>>(), vec!["basel"]);
        assert_eq!(
            canonical_keys("Zürich").collect::<Vec<_>>(),
            vec!["zurich", "zuerich"]
        );
    }

    #[test]
    fn canonical_equality() {
        assert!(equals_canonical("Zürich", "zurich"));
        assert!(equals_canonical("Zürich", "Zuerich"));
        assert!(!equals_canonical("Zürich", "Zug"));
    }
}
