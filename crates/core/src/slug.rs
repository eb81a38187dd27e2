//! URL-safe slug derivation.
//!
//! Pure and stable for identical input: the repository upserts are keyed on
//! `(vertical_id, slug)`, so re-normalizing the same raw record must land on
//! the same row.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Derive a slug: lowercase, strip accents, collapse every run of
/// non-alphanumeric characters into a single `-`.
///
/// `"Arroz, integral, cozido"` -> `"arroz-integral-cozido"`
/// `"Dipirona Sódica 500mg"` -> `"dipirona-sodica-500mg"`
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;
    for ch in input.nfd().filter(|c| !is_combining_mark(*c)) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Lowercase and strip combining marks, leaving punctuation in place.
/// For accent-insensitive matching (search), not for slugs.
pub fn fold_diacritics(input: &str) -> String {
    input.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::{fold_diacritics, slugify};

    #[test]
    fn folding_keeps_punctuation() {
        assert_eq!(fold_diacritics("Feijão, carioca"), "feijao, carioca");
        assert_eq!(fold_diacritics("ANALGÉSICO"), "analgesico");
    }

    #[test]
    fn lowercases_and_joins_with_dashes() {
        assert_eq!(slugify("Honda Civic Sedan EX 2025"), "honda-civic-sedan-ex-2025");
    }

    #[test]
    fn strips_accents() {
        assert_eq!(slugify("Feijão, carioca, cozido"), "feijao-carioca-cozido");
        assert_eq!(slugify("Dipirona Sódica"), "dipirona-sodica");
        assert_eq!(slugify("ACHÉ LABORATÓRIOS"), "ache-laboratorios");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("Onix Hatch LT 1.0 12V Flex 5p Mec."), "onix-hatch-lt-1-0-12v-flex-5p-mec");
        assert_eq!(slugify("--hello -- world--"), "hello-world");
    }

    #[test]
    fn stable_for_identical_input() {
        let input = "Polo Highline 1.0 TSI Total Flex Aut.";
        assert_eq!(slugify(input), slugify(input));
    }

    #[test]
    fn empty_input_yields_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
