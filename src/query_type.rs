//! Query type resolution.
//!
//! An input table can identify variants in several ways: a protein change
//! (short or long HGVSp), a genomic HGVS description, or discrete
//! chromosome/position/allele columns. The query type decides which of these
//! is sent to the knowledge base, and is derived from the table's header row.
//!
//! When no query type is requested, candidates are tried in a fixed order
//! and the first one whose columns are all present wins:
//!
//! 1. `Genomic_Change`: all six genomic change columns
//! 2. `HGVSp_Short`: `HGVSP_SHORT`, or the generic `ALTERATION` column
//! 3. `HGVSp`: `HGVSP`
//! 4. `HGVSg`: `HGVSG`
//!
//! Header names are compared ignoring ASCII case and surrounding whitespace.

use crate::error::AnnotateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generic alteration column, interpreted as a short protein change.
pub const ALTERATION_HEADER: &str = "ALTERATION";
/// Short-form protein HGVS column (e.g. `p.V600E`).
pub const HGVSP_SHORT_HEADER: &str = "HGVSP_SHORT";
/// Long-form protein HGVS column (e.g. `p.Val600Glu`).
pub const HGVSP_HEADER: &str = "HGVSP";
/// Genomic HGVS column (e.g. `7:g.140453136A>T`).
pub const HGVSG_HEADER: &str = "HGVSG";
/// Genomic change: chromosome column.
pub const GC_CHROMOSOME_HEADER: &str = "CHROMOSOME";
/// Genomic change: start position column.
pub const GC_START_POSITION_HEADER: &str = "START_POSITION";
/// Genomic change: end position column.
pub const GC_END_POSITION_HEADER: &str = "END_POSITION";
/// Genomic change: reference allele column.
pub const GC_REF_ALLELE_HEADER: &str = "REFERENCE_ALLELE";
/// Genomic change: first tumor allele column.
pub const GC_VAR_ALLELE_1_HEADER: &str = "TUMOR_SEQ_ALLELE1";
/// Genomic change: second tumor allele column.
pub const GC_VAR_ALLELE_2_HEADER: &str = "TUMOR_SEQ_ALLELE2";

/// All columns required for a genomic change query.
pub const GENOMIC_CHANGE_HEADERS: [&str; 6] = [
    GC_CHROMOSOME_HEADER,
    GC_START_POSITION_HEADER,
    GC_END_POSITION_HEADER,
    GC_REF_ALLELE_HEADER,
    GC_VAR_ALLELE_1_HEADER,
    GC_VAR_ALLELE_2_HEADER,
];

/// Variant identification scheme used to query the knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QueryType {
    /// Genomic HGVS
    #[serde(rename = "HGVSg")]
    Hgvsg,
    /// Protein HGVS, long form
    #[serde(rename = "HGVSp")]
    Hgvsp,
    /// Protein HGVS, short form
    #[default]
    #[serde(rename = "HGVSp_Short")]
    HgvspShort,
    /// Discrete chromosome/position/allele columns
    #[serde(rename = "Genomic_Change")]
    GenomicChange,
}

/// How a query type's column requirement is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRequirement {
    /// At least one of the columns must be present
    AnyOf(&'static [&'static str]),
    /// Every column must be present
    AllOf(&'static [&'static str]),
}

impl HeaderRequirement {
    /// Check the requirement against the available headers.
    pub fn is_satisfied(&self, headers: &[impl AsRef<str>]) -> bool {
        match self {
            HeaderRequirement::AnyOf(required) => required.iter().any(|h| has_header(headers, h)),
            HeaderRequirement::AllOf(required) => required.iter().all(|h| has_header(headers, h)),
        }
    }

    /// Columns that would have to be added to satisfy the requirement.
    pub fn missing(&self, headers: &[impl AsRef<str>]) -> Vec<String> {
        if self.is_satisfied(headers) {
            return Vec::new();
        }
        match self {
            HeaderRequirement::AnyOf(required) => required.iter().map(|h| h.to_string()).collect(),
            HeaderRequirement::AllOf(required) => required
                .iter()
                .filter(|h| !has_header(headers, h))
                .map(|h| h.to_string())
                .collect(),
        }
    }
}

/// Candidate query types in resolution priority order.
static RESOLUTION_ORDER: [QueryType; 4] = [
    QueryType::GenomicChange,
    QueryType::HgvspShort,
    QueryType::Hgvsp,
    QueryType::Hgvsg,
];

impl QueryType {
    /// Every query type, in resolution priority order.
    pub fn all() -> &'static [QueryType] {
        &RESOLUTION_ORDER
    }

    /// Canonical name, as used by the knowledge base API.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Hgvsg => "HGVSg",
            QueryType::Hgvsp => "HGVSp",
            QueryType::HgvspShort => "HGVSp_Short",
            QueryType::GenomicChange => "Genomic_Change",
        }
    }

    /// Columns that must be present for this query type.
    pub fn required_headers(&self) -> HeaderRequirement {
        match self {
            QueryType::Hgvsg => HeaderRequirement::AnyOf(&[HGVSG_HEADER]),
            QueryType::Hgvsp => HeaderRequirement::AnyOf(&[HGVSP_HEADER]),
            QueryType::HgvspShort => {
                HeaderRequirement::AnyOf(&[HGVSP_SHORT_HEADER, ALTERATION_HEADER])
            }
            QueryType::GenomicChange => HeaderRequirement::AllOf(&GENOMIC_CHANGE_HEADERS),
        }
    }

    /// Check whether this query type can be used with the given headers.
    pub fn is_supported_by(&self, headers: &[impl AsRef<str>]) -> bool {
        self.required_headers().is_satisfied(headers)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = AnnotateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        RESOLUTION_ORDER
            .into_iter()
            .find(|qt| qt.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| AnnotateError::UnknownQueryType {
                value: value.to_string(),
            })
    }
}

/// Resolve the query type for an input with the given header row.
///
/// With `requested` set, verifies that its columns are present and returns
/// it unchanged. Otherwise returns the first candidate (in priority order)
/// whose columns are present.
///
/// # Errors
///
/// - [`AnnotateError::InvalidQueryType`] if the requested type's columns are
///   missing.
/// - [`AnnotateError::NoQueryTypeResolvable`] if nothing was requested and no
///   candidate is satisfied (including an empty header row).
///
/// # Examples
///
/// ```
/// use ferro_annotate::query_type::{resolve_query_type, QueryType, ALTERATION_HEADER};
///
/// let qt = resolve_query_type(None, &[ALTERATION_HEADER]).unwrap();
/// assert_eq!(qt, QueryType::HgvspShort);
///
/// let empty: [&str; 0] = [];
/// assert!(resolve_query_type(None, &empty).is_err());
/// ```
pub fn resolve_query_type(
    requested: Option<QueryType>,
    headers: &[impl AsRef<str>],
) -> Result<QueryType, AnnotateError> {
    if let Some(query_type) = requested {
        let requirement = query_type.required_headers();
        if requirement.is_satisfied(headers) {
            tracing::debug!("using requested query type {}", query_type);
            return Ok(query_type);
        }
        return Err(AnnotateError::InvalidQueryType {
            query_type: query_type.to_string(),
            missing: requirement.missing(headers),
        });
    }

    match RESOLUTION_ORDER
        .into_iter()
        .find(|qt| qt.is_supported_by(headers))
    {
        Some(query_type) => {
            tracing::debug!("resolved query type {} from header row", query_type);
            Ok(query_type)
        }
        None => Err(AnnotateError::NoQueryTypeResolvable {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
        }),
    }
}

fn has_header(headers: &[impl AsRef<str>], name: &str) -> bool {
    headers
        .iter()
        .any(|h| h.as_ref().trim().eq_ignore_ascii_case(name))
}
