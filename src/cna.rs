//! Copy number alteration (CNA) classification.
//!
//! Raw CNA values come either as a category name (`Amplification`,
//! `Deletion`, `Gain`, `Loss`) or as a discrete copy number score such as
//! those produced by GISTIC (`2`, `1`, `0`, `-1`, `-2`, and `-1.5` for
//! hemizygous-or-deeper losses).
//!
//! | Value | Call | Requires gain/loss support |
//! |-------|------|----------------------------|
//! | `>= 2`, `Amplification` | Amplification | no |
//! | `1`, `Gain` | Gain | yes |
//! | `0` and anything else | no call | - |
//! | `-1`, `Loss` | Loss | yes |
//! | `<= -1.5`, `Deletion` | Deletion | no |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric score at or above which a value is called an amplification.
pub const AMPLIFICATION_THRESHOLD: f64 = 2.0;

/// Numeric score at or below which a value is called a deletion.
pub const DELETION_THRESHOLD: f64 = -1.5;

/// Numeric score for a single-copy gain.
pub const GAIN_SCORE: f64 = 1.0;

/// Numeric score for a single-copy loss.
pub const LOSS_SCORE: f64 = -1.0;

/// Categorical copy number call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CnaCall {
    Amplification,
    Gain,
    Loss,
    Deletion,
}

impl CnaCall {
    /// Canonical category name
    pub fn as_str(&self) -> &'static str {
        match self {
            CnaCall::Amplification => "Amplification",
            CnaCall::Gain => "Gain",
            CnaCall::Loss => "Loss",
            CnaCall::Deletion => "Deletion",
        }
    }

    /// Returns `true` for calls only reported when gain/loss support is enabled.
    pub fn is_low_level(&self) -> bool {
        matches!(self, CnaCall::Gain | CnaCall::Loss)
    }

    fn from_category(s: &str) -> Option<Self> {
        [
            CnaCall::Amplification,
            CnaCall::Gain,
            CnaCall::Loss,
            CnaCall::Deletion,
        ]
        .into_iter()
        .find(|call| call.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for CnaCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a raw CNA value.
///
/// `raw` may be a category name (case-insensitive) or a numeric score.
/// Missing, empty or unparseable values yield `None`. Gain and Loss are only
/// reported when `support_gain_and_loss` is set.
///
/// # Examples
///
/// ```
/// use ferro_annotate::cna::{get_cna, CnaCall};
///
/// assert_eq!(get_cna(Some("2"), false), Some(CnaCall::Amplification));
/// assert_eq!(get_cna(Some("-1.5"), false), Some(CnaCall::Deletion));
/// assert_eq!(get_cna(Some("Gain"), false), None);
/// assert_eq!(get_cna(Some("Gain"), true), Some(CnaCall::Gain));
/// assert_eq!(get_cna(None, true), None);
/// ```
pub fn get_cna(raw: Option<&str>, support_gain_and_loss: bool) -> Option<CnaCall> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }

    let call = match CnaCall::from_category(value) {
        Some(call) => Some(call),
        None => value
            .parse::<f64>()
            .ok()
            .and_then(|score| classify_copy_number(score, true)),
    }?;

    if call.is_low_level() && !support_gain_and_loss {
        return None;
    }
    Some(call)
}

/// Classify a numeric copy number score.
///
/// Non-finite scores yield `None`.
pub fn classify_copy_number(score: f64, support_gain_and_loss: bool) -> Option<CnaCall> {
    if !score.is_finite() {
        return None;
    }

    if score >= AMPLIFICATION_THRESHOLD {
        Some(CnaCall::Amplification)
    } else if score <= DELETION_THRESHOLD {
        Some(CnaCall::Deletion)
    } else if score == GAIN_SCORE && support_gain_and_loss {
        Some(CnaCall::Gain)
    } else if score == LOSS_SCORE && support_gain_and_loss {
        Some(CnaCall::Loss)
    } else {
        None
    }
}
