//! Protein notation normalization.
//!
//! Converts 3-letter amino acid codes in free-text protein change
//! descriptions to their 1-letter equivalents, e.g. `Val600Glu` → `V600E`.
//!
//! A 3-letter code is only recognized as a standalone token:
//! - it starts the text or follows a non-letter character, and
//! - it ends the text or is followed by a non-letter character (digits count
//!   as non-letters).
//!
//! This keeps words that merely begin with a code untouched, e.g. `Promoter`
//! is not rewritten to `Pmoter`.
//!
//! # Example
//!
//! ```
//! use ferro_annotate::notation::{convert, replace_all};
//!
//! assert_eq!(convert("Tyr100"), "Y100");
//! assert_eq!(replace_all("p.Val600Glu"), "p.V600E");
//! assert_eq!(replace_all("TERT Promoter"), "TERT Promoter");
//! ```

use crate::amino_acid::AminoAcid;

/// Width of a 3-letter amino acid code in bytes.
const CODE_LEN: usize = 3;

/// Convert the first standalone 3-letter amino acid code in `text`.
///
/// Only the 3-letter span is replaced; surrounding characters (including
/// leading whitespace and trailing positions) are kept as-is. Returns the
/// input unchanged when no code is found.
pub fn convert(text: &str) -> String {
    match next_code(text, 0) {
        Some((start, aa)) => {
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..start]);
            out.push(aa.to_one_letter());
            out.push_str(&text[start + CODE_LEN..]);
            out
        }
        None => text.to_string(),
    }
}

/// Convert every standalone 3-letter amino acid code in `text`.
///
/// Matches are non-overlapping and found left to right. Unrecognized tokens,
/// partial words and whitespace are preserved exactly. The operation is
/// idempotent.
pub fn replace_all(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some((start, aa)) = next_code(text, cursor) {
        out.push_str(&text[cursor..start]);
        out.push(aa.to_one_letter());
        cursor = start + CODE_LEN;
    }
    out.push_str(&text[cursor..]);

    out
}

/// Find the next standalone 3-letter code at or after byte offset `from`.
///
/// `from` must be a char boundary.
fn next_code(text: &str, from: usize) -> Option<(usize, AminoAcid)> {
    let mut prev = text[..from].chars().next_back();

    for (offset, c) in text[from..].char_indices() {
        let start = from + offset;
        let at_boundary = prev.map_or(true, |p| !p.is_alphabetic());
        prev = Some(c);

        if !at_boundary || !c.is_ascii_alphabetic() {
            continue;
        }
        let Some(candidate) = text.get(start..start + CODE_LEN) else {
            continue;
        };
        let Some(aa) = AminoAcid::from_three_letter(candidate) else {
            continue;
        };
        let followed_by_letter = text[start + CODE_LEN..]
            .chars()
            .next()
            .is_some_and(char::is_alphabetic);
        if !followed_by_letter {
            return Some((start, aa));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_case_insensitive() {
        for input in [
            "tyr100", "tYr100", "Tyr100", "tyR100", "TyR100", "TYR100", "tYR100",
        ] {
            assert_eq!(convert(input), "Y100");
        }
        assert_eq!(convert("sEr100"), "S100");
    }

    #[test]
    fn test_convert_only_table_keys() {
        assert_eq!(convert("hot100"), "hot100");
    }

    #[test]
    fn test_convert_empty_and_whitespace() {
        assert_eq!(convert(""), "");
        assert_eq!(convert(" sEr100"), " S100");
    }

    #[test]
    fn test_convert_not_inside_word() {
        assert_eq!(convert("Promoter"), "Promoter");
        assert_eq!(convert("Tyrosine"), "Tyrosine");
        assert_eq!(convert("xTyr100"), "xTyr100");
    }

    #[test]
    fn test_convert_first_match_only() {
        assert_eq!(convert("Val600Glu"), "V600Glu");
        assert_eq!(convert("Promoter Gly12"), "Promoter G12");
    }

    #[test]
    fn test_convert_bare_code() {
        assert_eq!(convert("Lys"), "K");
    }

    #[test]
    fn test_replace_all_case_insensitive() {
        for input in ["tyr", "tYr", "Tyr", "tyR", "TyR", "TYR", "tYR"] {
            assert_eq!(replace_all(input), "Y");
        }
        assert_eq!(replace_all("sEr"), "S");
    }

    #[test]
    fn test_replace_all_only_table_keys() {
        assert_eq!(
            replace_all("bubblegum juice cup dairy hot pot Tyr melon"),
            "bubblegum juice cup dairy hot pot Y melon"
        );
        assert_eq!(
            replace_all("Ly Lys Pr Pro Gln Glad Ph PH Phe"),
            "Ly K Pr P Q Glad Ph PH F"
        );
    }

    #[test]
    fn test_replace_all_protein_change() {
        assert_eq!(replace_all("Val600Glu"), "V600E");
        assert_eq!(replace_all("p.Gly12Asp"), "p.G12D");
        assert_eq!(replace_all("Tyr600E Cys56734342342454562456"), "Y600E C56734342342454562456");
    }

    #[test]
    fn test_replace_all_whitespace() {
        assert_eq!(replace_all(""), "");
        assert_eq!(replace_all(" "), " ");
        assert_eq!(replace_all("Tyr Asn As n Ile Il e"), "Y N As n I Il e");
        assert_eq!(replace_all("  Tyr\tAsn\n"), "  Y\tN\n");
    }

    #[test]
    fn test_non_ascii_input() {
        assert_eq!(replace_all("émTyr1"), "émTyr1");
        assert_eq!(replace_all("é Tyr1"), "é Y1");
        assert_eq!(convert("→Ser2"), "→S2");
    }
}
