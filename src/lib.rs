// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-annotate: variant notation normalization for knowledge base annotation
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Provides the text normalization and decision logic an annotation pipeline
//! needs before and after querying a cancer knowledge base:
//!
//! - 3-letter to 1-letter amino acid conversion ([`notation`])
//! - fusion partner extraction ([`fusion`])
//! - copy number alteration calls ([`cna`])
//! - query type resolution from a header row ([`query_type`])
//! - highest therapeutic evidence level ([`level`])
//!
//! All of these are pure functions over in-memory values.
//!
//! # Example
//!
//! ```
//! use ferro_annotate::{genes_from_fusion, get_cna, replace_all, resolve_query_type};
//! use ferro_annotate::{CnaCall, QueryType};
//!
//! assert_eq!(replace_all("p.Val600Glu"), "p.V600E");
//! assert_eq!(genes_from_fusion("EML4-ALK fusion"), ("EML4".into(), "ALK".into()));
//! assert_eq!(get_cna(Some("-2"), false), Some(CnaCall::Deletion));
//!
//! let headers = ["HUGO_SYMBOL", "HGVSP_SHORT"];
//! assert_eq!(resolve_query_type(None, &headers).unwrap(), QueryType::HgvspShort);
//! ```

pub mod amino_acid;
pub mod cli;
pub mod cna;
pub mod config;
pub mod error;
pub mod fusion;
pub mod level;
pub mod notation;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod query_type;

// Re-export commonly used types
pub use amino_acid::AminoAcid;
pub use cna::{get_cna, CnaCall};
pub use error::{AnnotateError, ErrorCode};
pub use fusion::{genes_from_fusion, FusionParser, FusionPartners};
pub use level::{
    highest_level, highest_level_entry, highest_tx_level, EvidenceLevelMap, TxDirection, TxLevel,
};
pub use notation::{convert, replace_all};
pub use query_type::{resolve_query_type, QueryType};

/// Result type alias for ferro-annotate operations
pub type Result<T> = std::result::Result<T, AnnotateError>;
