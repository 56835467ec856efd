//! Query type, CNA and evidence level resolution tests

use ferro_annotate::level::{TX_TYPE_RESISTANCE, TX_TYPE_SENSITIVE};
use ferro_annotate::query_type::*;
use ferro_annotate::{get_cna, highest_tx_level, AnnotateError, CnaCall, EvidenceLevelMap};
use rstest::rstest;

// =============================================================================
// Query type
// =============================================================================

#[rstest]
#[case(&[HGVSG_HEADER], QueryType::Hgvsg)]
#[case(&[HGVSP_HEADER], QueryType::Hgvsp)]
#[case(&[HGVSP_SHORT_HEADER], QueryType::HgvspShort)]
#[case(&[ALTERATION_HEADER], QueryType::HgvspShort)]
#[case(&[HGVSG_HEADER, HGVSP_HEADER, HGVSP_SHORT_HEADER], QueryType::HgvspShort)]
#[case(&GENOMIC_CHANGE_HEADERS, QueryType::GenomicChange)]
fn test_resolve_without_request(#[case] headers: &[&str], #[case] expected: QueryType) {
    assert_eq!(resolve_query_type(None, headers).unwrap(), expected);
}

#[test]
fn test_resolve_requested() {
    let headers = [HGVSG_HEADER, HGVSP_HEADER, HGVSP_SHORT_HEADER];
    assert_eq!(
        resolve_query_type(Some(QueryType::Hgvsg), &headers).unwrap(),
        QueryType::Hgvsg
    );
}

#[test]
fn test_resolve_failures() {
    let empty: Vec<String> = Vec::new();
    assert!(matches!(
        resolve_query_type(None, &empty),
        Err(AnnotateError::NoQueryTypeResolvable { .. })
    ));
    assert!(matches!(
        resolve_query_type(Some(QueryType::Hgvsg), &[HGVSP_SHORT_HEADER]),
        Err(AnnotateError::InvalidQueryType { .. })
    ));
    assert!(matches!(
        resolve_query_type(
            Some(QueryType::GenomicChange),
            &[GC_CHROMOSOME_HEADER, GC_START_POSITION_HEADER]
        ),
        Err(AnnotateError::InvalidQueryType { .. })
    ));
}

// =============================================================================
// CNA
// =============================================================================

#[rstest]
#[case(None, None)]
#[case(Some(""), None)]
#[case(Some("test"), None)]
#[case(Some("Amplification"), Some(CnaCall::Amplification))]
#[case(Some("Gain"), None)]
#[case(Some("Deletion"), Some(CnaCall::Deletion))]
#[case(Some("Loss"), None)]
#[case(Some("2"), Some(CnaCall::Amplification))]
#[case(Some("1"), None)]
#[case(Some("-2"), Some(CnaCall::Deletion))]
#[case(Some("-1.5"), Some(CnaCall::Deletion))]
#[case(Some("-1"), None)]
#[case(Some("0"), None)]
fn test_cna_default(#[case] raw: Option<&str>, #[case] expected: Option<CnaCall>) {
    assert_eq!(get_cna(raw, false), expected);
}

#[rstest]
#[case(None, None)]
#[case(Some(""), None)]
#[case(Some("test"), None)]
#[case(Some("Amplification"), Some(CnaCall::Amplification))]
#[case(Some("Gain"), Some(CnaCall::Gain))]
#[case(Some("Deletion"), Some(CnaCall::Deletion))]
#[case(Some("Loss"), Some(CnaCall::Loss))]
#[case(Some("2"), Some(CnaCall::Amplification))]
#[case(Some("1"), Some(CnaCall::Gain))]
#[case(Some("-2"), Some(CnaCall::Deletion))]
#[case(Some("-1.5"), Some(CnaCall::Deletion))]
#[case(Some("-1"), Some(CnaCall::Loss))]
#[case(Some("0"), None)]
fn test_cna_with_gain_loss(#[case] raw: Option<&str>, #[case] expected: Option<CnaCall>) {
    assert_eq!(get_cna(raw, true), expected);
}

// =============================================================================
// Evidence level
// =============================================================================

fn evidence(keys: &[&str]) -> EvidenceLevelMap<&'static str> {
    keys.iter().map(|k| (k.to_string(), vec!["test"])).collect()
}

#[rstest]
#[case(None)]
#[case(Some("random"))]
#[case(Some(TX_TYPE_SENSITIVE))]
#[case(Some(TX_TYPE_RESISTANCE))]
fn test_highest_level_empty(#[case] direction: Option<&str>) {
    assert_eq!(highest_tx_level(&evidence(&[]), direction), "");
}

#[rstest]
#[case(&["LEVEL_1", "LEVEL_R1", "LEVEL_R2"], None, "LEVEL_R1")]
#[case(&["LEVEL_1", "LEVEL_R1", "LEVEL_R2"], Some("random"), "LEVEL_R1")]
#[case(&["LEVEL_1", "LEVEL_R1", "LEVEL_R2"], Some(TX_TYPE_SENSITIVE), "LEVEL_1")]
#[case(&["LEVEL_1", "LEVEL_R1", "LEVEL_R2"], Some(TX_TYPE_RESISTANCE), "LEVEL_R1")]
#[case(&["LEVEL_1", "LEVEL_R2"], None, "LEVEL_1")]
#[case(&["LEVEL_1", "LEVEL_R2"], Some("random"), "LEVEL_1")]
#[case(&["LEVEL_1", "LEVEL_R2"], Some(TX_TYPE_SENSITIVE), "LEVEL_1")]
#[case(&["LEVEL_1", "LEVEL_R2"], Some(TX_TYPE_RESISTANCE), "LEVEL_R2")]
#[case(&["LEVEL_4", "LEVEL_3B", "LEVEL_3A"], None, "LEVEL_3A")]
#[case(&["LEVEL_4", "LEVEL_R3", "LEVEL_R2"], Some(TX_TYPE_RESISTANCE), "LEVEL_R2")]
#[case(&["LEVEL_01"], None, "LEVEL_01")]
#[case(&["LEVEL_02", "LEVEL_R01"], Some(TX_TYPE_SENSITIVE), "LEVEL_02")]
fn test_highest_level(
    #[case] keys: &[&str],
    #[case] direction: Option<&str>,
    #[case] expected: &str,
) {
    assert_eq!(highest_tx_level(&evidence(keys), direction), expected);
}
