//! Structured fuzz target for header rows and evidence maps
//!
//! Uses the arbitrary crate to generate header rows and level maps built
//! mostly from known column and level names, which reaches the resolution
//! paths far more often than random bytes.

#![no_main]

use arbitrary::Arbitrary;
use ferro_annotate::query_type::{self, QueryType};
use ferro_annotate::level::highest_level_entry;
use ferro_annotate::{resolve_query_type, EvidenceLevelMap, TxDirection};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Column {
    Known(u8),
    Other(String),
}

#[derive(Debug, Arbitrary)]
struct Input {
    columns: Vec<Column>,
    requested: Option<u8>,
    levels: Vec<(u8, u8, Option<u8>, bool)>,
    direction: Option<bool>,
}

const KNOWN_COLUMNS: [&str; 10] = [
    query_type::ALTERATION_HEADER,
    query_type::HGVSP_SHORT_HEADER,
    query_type::HGVSP_HEADER,
    query_type::HGVSG_HEADER,
    query_type::GC_CHROMOSOME_HEADER,
    query_type::GC_START_POSITION_HEADER,
    query_type::GC_END_POSITION_HEADER,
    query_type::GC_REF_ALLELE_HEADER,
    query_type::GC_VAR_ALLELE_1_HEADER,
    query_type::GC_VAR_ALLELE_2_HEADER,
];

fuzz_target!(|input: Input| {
    let headers: Vec<String> = input
        .columns
        .into_iter()
        .map(|c| match c {
            Column::Known(i) => KNOWN_COLUMNS[i as usize % KNOWN_COLUMNS.len()].to_string(),
            Column::Other(s) => s,
        })
        .collect();

    let requested = input
        .requested
        .map(|i| QueryType::all()[i as usize % QueryType::all().len()]);
    if let Ok(resolved) = resolve_query_type(requested, &headers) {
        assert!(resolved.is_supported_by(&headers));
        if let Some(requested) = requested {
            assert_eq!(resolved, requested);
        }
    }

    let evidence: EvidenceLevelMap<u8> = input
        .levels
        .into_iter()
        .map(|(tier, records, subtier, resistance)| {
            let subtier = subtier.map(|s| (b'A' + s % 3) as char);
            let key = format!(
                "LEVEL_{}{}{}",
                if resistance { "R" } else { "" },
                tier % 5,
                subtier.map(String::from).unwrap_or_default()
            );
            (key, vec![0u8; (records % 3) as usize])
        })
        .collect();

    let direction = input.direction.map(|r| {
        if r {
            TxDirection::Resistance
        } else {
            TxDirection::Sensitive
        }
    });
    if let Some((key, level)) = highest_level_entry(&evidence, direction) {
        assert!(direction.map_or(true, |d| level.matches(d)));
        assert!(evidence.get(key).is_some_and(|r| !r.is_empty()));
    }
});
