//! Fusion partner extraction.
//!
//! Fusion events arrive as free text such as `BCR-ABL1 fusion`,
//! `EML4-ALK Fusion - Archer` or `MLL2-intragenic`. The partner genes are
//! the first `GENE1-GENE2` token pair, where each gene is a run of ASCII
//! letters and digits. Anything around that pair (a leading or trailing
//! `fusion` word, assay qualifiers) is ignored. A name without a pair is a
//! single gene: everything from the first standalone `fusion` word onwards
//! is dropped, so `ALK Fusion - Archer` yields `ALK` for both partners.
//!
//! # Example
//!
//! ```
//! use ferro_annotate::fusion::genes_from_fusion;
//!
//! assert_eq!(genes_from_fusion("BCR-ABL1 fusion - archer"), ("BCR".into(), "ABL1".into()));
//! assert_eq!(genes_from_fusion("MLL2-intragenic"), ("MLL2".into(), "MLL2".into()));
//! assert_eq!(genes_from_fusion("ALK"), ("ALK".into(), "ALK".into()));
//! assert_eq!(genes_from_fusion("ALK fusion"), ("ALK".into(), "ALK".into()));
//! ```

use regex::Regex;
use serde::Serialize;

/// Literal used in place of a second partner for intragenic rearrangements.
pub const INTRAGENIC: &str = "intragenic";

/// Word marking the end of the gene part of a fusion name.
pub const FUSION_WORD: &str = "fusion";

/// The two partner genes of a fusion event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FusionPartners {
    /// 5' partner
    pub left: String,
    /// 3' partner
    pub right: String,
}

impl FusionPartners {
    fn new(left: &str, right: &str) -> Self {
        let left = left.trim();
        let right = right.trim();
        if right.eq_ignore_ascii_case(INTRAGENIC) {
            return Self::same(left);
        }
        Self {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    fn same(gene: &str) -> Self {
        Self {
            left: gene.to_string(),
            right: gene.to_string(),
        }
    }

    /// Convert into a `(left, right)` tuple.
    pub fn into_pair(self) -> (String, String) {
        (self.left, self.right)
    }
}

/// Fusion name parser.
///
/// By default the partners are the first hyphen-joined alphanumeric token
/// pair. A custom pattern may be supplied for naming schemes that do not
/// follow that shape; its first capture group (or the whole match when the
/// pattern has no groups) is split on the first hyphen.
#[derive(Debug, Clone, Default)]
pub struct FusionParser {
    pattern: Option<Regex>,
}

impl FusionParser {
    /// Create a parser using the default `GENE1-GENE2` token rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser using a custom gene-pair pattern.
    pub fn with_pattern(pattern: Regex) -> Self {
        Self {
            pattern: Some(pattern),
        }
    }

    /// Extract the fusion partners from `name`.
    ///
    /// Never fails: when no gene pair is found the name, cut at its first
    /// standalone `fusion` word, is treated as a single gene fused with
    /// itself.
    pub fn parse(&self, name: &str) -> FusionPartners {
        let pair = match &self.pattern {
            Some(pattern) => pair_from_pattern(pattern, name),
            None => first_gene_pair(name),
        };

        match pair {
            Some((left, right)) => FusionPartners::new(left, right),
            None => {
                tracing::trace!("no gene pair found in fusion name {:?}", name);
                FusionPartners::same(single_gene(name))
            }
        }
    }
}

/// Extract the two partner genes from a fusion description.
pub fn genes_from_fusion(name: &str) -> (String, String) {
    FusionParser::new().parse(name).into_pair()
}

/// Find the first `<alnum>+-<alnum>+` pair in `name`.
fn first_gene_pair(name: &str) -> Option<(&str, &str)> {
    let bytes = name.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_alphanumeric() {
            i += 1;
            continue;
        }

        let left_start = i;
        while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
            i += 1;
        }
        let left_end = i;

        if bytes.get(i) == Some(&b'-')
            && bytes.get(i + 1).is_some_and(|b| b.is_ascii_alphanumeric())
        {
            let right_start = i + 1;
            let mut right_end = right_start;
            while right_end < bytes.len() && bytes[right_end].is_ascii_alphanumeric() {
                right_end += 1;
            }
            return Some((&name[left_start..left_end], &name[right_start..right_end]));
        }
    }

    None
}

/// Gene part of a name without a gene pair.
///
/// Text from the first standalone `fusion` word onwards is dropped. When
/// nothing is left (e.g. `fusion` alone) the trimmed name is returned.
fn single_gene(name: &str) -> &str {
    let lower = name.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let standalone = |start: usize, end: usize| {
        let before = start.checked_sub(1).map(|i| bytes[i]);
        let after = bytes.get(end).copied();
        !before.is_some_and(|b| b.is_ascii_alphanumeric())
            && !after.is_some_and(|b| b.is_ascii_alphanumeric())
    };

    let cut = lower
        .match_indices(FUSION_WORD)
        .map(|(start, _)| start)
        .find(|&start| standalone(start, start + FUSION_WORD.len()));

    let gene = match cut {
        Some(start) => name[..start].trim_end_matches(|c: char| c.is_whitespace() || c == '-'),
        None => name,
    }
    .trim();

    if gene.is_empty() {
        name.trim()
    } else {
        gene
    }
}

/// Apply a custom pattern and split its match on the first hyphen.
fn pair_from_pattern<'a>(pattern: &Regex, name: &'a str) -> Option<(&'a str, &'a str)> {
    let captures = pattern.captures(name)?;
    let matched = captures.get(1).or_else(|| captures.get(0))?.as_str();
    match matched.split_once('-') {
        Some((left, right)) => Some((left, right)),
        None => Some((matched, matched)),
    }
}
