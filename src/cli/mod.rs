//! CLI utilities for ferro-annotate
//!
//! This module provides testable functions used by the CLI binary.
//! Each `run_*` function writes its results to the given writer so the
//! commands can be exercised without spawning the binary.

pub mod format;

pub use format::{output_error, output_result, output_value, OutputFormat};

use crate::cna::get_cna;
use crate::config::Settings;
use crate::error::AnnotateError;
use crate::level::{highest_level_entry, EvidenceLevelMap};
use crate::notation::{convert, replace_all};
use crate::query_type::{resolve_query_type, QueryType};
use std::io::Write;

/// UTF-8 BOM (Byte Order Mark) constant
const UTF8_BOM: &str = "\u{feff}";

/// Strip UTF-8 BOM from the beginning of a string if present.
///
/// This is common when header rows are copied from files exported by Excel.
///
/// # Examples
///
/// ```
/// use ferro_annotate::cli::strip_bom;
///
/// assert_eq!(strip_bom("\u{feff}HGVSP_SHORT"), "HGVSP_SHORT");
/// assert_eq!(strip_bom("HGVSP_SHORT"), "HGVSP_SHORT");
/// ```
pub fn strip_bom(s: &str) -> &str {
    s.strip_prefix(UTF8_BOM).unwrap_or(s)
}

/// Split a header row into column names.
///
/// Tab-separated rows are split on tabs, anything else on commas. Empty
/// column names are dropped.
///
/// # Examples
///
/// ```
/// use ferro_annotate::cli::split_header_line;
///
/// assert_eq!(split_header_line("HUGO_SYMBOL\tHGVSP_SHORT\n"), vec!["HUGO_SYMBOL", "HGVSP_SHORT"]);
/// assert_eq!(split_header_line("HUGO_SYMBOL, ALTERATION"), vec!["HUGO_SYMBOL", "ALTERATION"]);
/// ```
pub fn split_header_line(line: &str) -> Vec<String> {
    let line = strip_bom(line).trim_end_matches(['\r', '\n']);
    let delimiter = if line.contains('\t') { '\t' } else { ',' };
    line.split(delimiter)
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .collect()
}

/// Convert 3-letter amino acid codes in each value.
///
/// With `first_only`, only the first code of each value is converted.
pub fn run_convert<W: Write>(
    writer: &mut W,
    values: &[String],
    first_only: bool,
    format: OutputFormat,
) -> Result<(), AnnotateError> {
    for value in values {
        let converted = if first_only {
            convert(value)
        } else {
            replace_all(value)
        };
        output_result(writer, value, &converted, format)?;
    }
    Ok(())
}

/// Extract fusion partners from each fusion name.
pub fn run_fusion<W: Write>(
    writer: &mut W,
    names: &[String],
    settings: &Settings,
    format: OutputFormat,
) -> Result<(), AnnotateError> {
    for name in names {
        let partners = settings.fusion_parser.parse(name);
        let text = format!("{}\t{}", partners.left, partners.right);
        output_value(writer, name, &partners, &text, format)?;
    }
    Ok(())
}

/// Classify each raw CNA value.
pub fn run_cna<W: Write>(
    writer: &mut W,
    values: &[String],
    settings: &Settings,
    format: OutputFormat,
) -> Result<(), AnnotateError> {
    for value in values {
        let call = get_cna(Some(value.as_str()), settings.annotate_gain_loss);
        let text = call.map(|c| c.as_str()).unwrap_or("");
        output_value(writer, value, &call, text, format)?;
    }
    Ok(())
}

/// Write `error` for `input` in the chosen format, then hand it back.
fn report<W: Write>(
    writer: &mut W,
    input: &str,
    error: AnnotateError,
    format: OutputFormat,
) -> AnnotateError {
    match output_error(writer, input, &error, format) {
        Ok(()) => error,
        Err(e) => e.into(),
    }
}

/// Resolve the query type for a header row.
///
/// A resolution failure is written to `writer` as an error record before it
/// is returned.
pub fn run_query_type<W: Write>(
    writer: &mut W,
    headers: &[String],
    settings: &Settings,
    format: OutputFormat,
) -> Result<QueryType, AnnotateError> {
    let input = headers.join(",");
    let query_type = resolve_query_type(settings.query_type, headers)
        .map_err(|e| report(writer, &input, e, format))?;
    output_value(writer, &input, &query_type, query_type.as_str(), format)?;
    Ok(query_type)
}

/// Resolve the highest therapeutic level of a JSON evidence map.
///
/// `evidence_json` is an object mapping level names to arrays of records.
/// Malformed JSON is written to `writer` as an error record before it is
/// returned.
pub fn run_level<W: Write>(
    writer: &mut W,
    evidence_json: &str,
    settings: &Settings,
    format: OutputFormat,
) -> Result<String, AnnotateError> {
    let evidence: EvidenceLevelMap<serde_json::Value> = serde_json::from_str(evidence_json)
        .map_err(|e| report(writer, evidence_json, e.into(), format))?;
    let level = highest_level_entry(&evidence, settings.direction)
        .map(|(key, _)| key.to_string())
        .unwrap_or_default();
    output_value(writer, evidence_json, &level, &level, format)?;
    Ok(level)
}
