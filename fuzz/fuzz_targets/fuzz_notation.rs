//! Fuzz target for the free-text normalizers
//!
//! This target feeds arbitrary byte strings to the notation, fusion and CNA
//! functions to find panics on unusual input (multi-byte characters next to
//! amino acid codes, stray hyphens, numeric edge cases).

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Don't fuzz extremely long inputs - diminishing returns
        if input.len() > 1000 {
            return;
        }

        let once = ferro_annotate::replace_all(input);
        assert_eq!(ferro_annotate::replace_all(&once), once);
        let _ = ferro_annotate::convert(input);
        let _ = ferro_annotate::genes_from_fusion(input);
        let _ = ferro_annotate::get_cna(Some(input), true);
        let _ = ferro_annotate::level::TxLevel::parse(input);
    }
});
