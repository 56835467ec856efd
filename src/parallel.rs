//! Parallel processing support for ferro-annotate
//!
//! All normalization functions are pure, so batches can be split across
//! threads without coordination. Enable with the `parallel` feature.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "parallel")]
//! # fn main() {
//! use ferro_annotate::parallel::replace_all_parallel;
//!
//! let changes = vec!["Val600Glu", "Gly12Asp", "Promoter"];
//! let converted = replace_all_parallel(&changes);
//! assert_eq!(converted, vec!["V600E", "G12D", "Promoter"]);
//! # }
//! # #[cfg(not(feature = "parallel"))]
//! # fn main() {}
//! ```

use rayon::prelude::*;

use crate::cna::{get_cna, CnaCall};
use crate::fusion::{FusionParser, FusionPartners};
use crate::notation::replace_all;

/// Convert 3-letter amino acid codes in many strings in parallel
///
/// Order is preserved.
pub fn replace_all_parallel<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<String> {
    texts.par_iter().map(|s| replace_all(s.as_ref())).collect()
}

/// Classify many raw CNA values in parallel
///
/// Order is preserved; `None` entries stay `None`.
pub fn get_cna_parallel<S: AsRef<str> + Sync>(
    values: &[Option<S>],
    support_gain_and_loss: bool,
) -> Vec<Option<CnaCall>> {
    values
        .par_iter()
        .map(|v| get_cna(v.as_ref().map(|s| s.as_ref()), support_gain_and_loss))
        .collect()
}

/// Extract fusion partners from many fusion names in parallel
///
/// Order is preserved.
pub fn genes_from_fusion_parallel<S: AsRef<str> + Sync>(
    parser: &FusionParser,
    names: &[S],
) -> Vec<FusionPartners> {
    names.par_iter().map(|s| parser.parse(s.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_all_parallel() {
        let changes = vec!["Val600Glu", "p.Gly12Asp", "Promoter", ""];
        let results = replace_all_parallel(&changes);
        assert_eq!(results, vec!["V600E", "p.G12D", "Promoter", ""]);
    }

    #[test]
    fn test_get_cna_parallel() {
        let values = vec![Some("2"), None, Some("-1"), Some("Deletion")];
        assert_eq!(
            get_cna_parallel(&values, true),
            vec![
                Some(CnaCall::Amplification),
                None,
                Some(CnaCall::Loss),
                Some(CnaCall::Deletion)
            ]
        );
        assert_eq!(get_cna_parallel(&values, false)[2], None);
    }

    #[test]
    fn test_genes_from_fusion_parallel() {
        let names = vec!["EML4-ALK fusion", "MLL2-intragenic", "ROS1"];
        let parser = FusionParser::new();
        let results: Vec<(String, String)> = genes_from_fusion_parallel(&parser, &names)
            .into_iter()
            .map(FusionPartners::into_pair)
            .collect();
        assert_eq!(
            results,
            vec![
                ("EML4".to_string(), "ALK".to_string()),
                ("MLL2".to_string(), "MLL2".to_string()),
                ("ROS1".to_string(), "ROS1".to_string()),
            ]
        );
    }
}
