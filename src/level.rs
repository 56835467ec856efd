//! Therapeutic evidence level priority.
//!
//! Knowledge base responses group treatments by evidence level, keyed by
//! names such as `LEVEL_1`, `LEVEL_3A` or `LEVEL_R1`. Levels without an `R`
//! marker support sensitivity to a therapy, levels with it support
//! resistance.
//!
//! Levels are ranked, highest first:
//!
//! ```text
//! LEVEL_R1, LEVEL_1, LEVEL_2, LEVEL_3A, LEVEL_3B, LEVEL_4, LEVEL_R2, LEVEL_R3
//! ```
//!
//! Standard-care resistance (`R1`) outranks every sensitivity level; the
//! remaining resistance levels rank below all sensitivity levels. Within a
//! family, a lower tier outranks a higher one and a subtier letter is
//! compared alphabetically (`3A` > `3B`).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Prefix shared by all therapeutic level keys.
pub const LEVEL_PREFIX: &str = "LEVEL_";

/// Direction name selecting sensitivity levels.
pub const TX_TYPE_SENSITIVE: &str = "sensitive";

/// Direction name selecting resistance levels.
pub const TX_TYPE_RESISTANCE: &str = "resistance";

/// Evidence map as returned by the knowledge base client: level key to
/// supporting records. Record content is never inspected.
pub type EvidenceLevelMap<T> = HashMap<String, Vec<T>>;

/// Level family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelFamily {
    Sensitive,
    Resistance,
}

/// Therapy direction filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxDirection {
    Sensitive,
    Resistance,
}

impl TxDirection {
    /// Parse a direction name, ignoring ASCII case.
    ///
    /// Returns `None` for unrecognized names, which callers treat as
    /// "no filter".
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            TX_TYPE_SENSITIVE | "sensitivity" => Some(TxDirection::Sensitive),
            TX_TYPE_RESISTANCE | "resistant" => Some(TxDirection::Resistance),
            _ => None,
        }
    }

    /// Level family selected by this direction
    pub fn family(&self) -> LevelFamily {
        match self {
            TxDirection::Sensitive => LevelFamily::Sensitive,
            TxDirection::Resistance => LevelFamily::Resistance,
        }
    }
}

impl fmt::Display for TxDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxDirection::Sensitive => write!(f, "{}", TX_TYPE_SENSITIVE),
            TxDirection::Resistance => write!(f, "{}", TX_TYPE_RESISTANCE),
        }
    }
}

/// A parsed therapeutic evidence level
///
/// Ordering sorts from highest to lowest priority, so the highest-priority
/// level of a collection is its minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxLevel {
    pub family: LevelFamily,
    pub tier: u8,
    pub subtier: Option<char>,
}

impl TxLevel {
    /// Parse a level key of the form `LEVEL_R?<tier><subtier?>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_annotate::level::{LevelFamily, TxLevel};
    ///
    /// let level = TxLevel::parse("LEVEL_3A").unwrap();
    /// assert_eq!(level.family, LevelFamily::Sensitive);
    /// assert_eq!(level.tier, 3);
    /// assert_eq!(level.subtier, Some('A'));
    ///
    /// assert!(TxLevel::parse("LEVEL_Dx1").is_none());
    /// ```
    pub fn parse(key: &str) -> Option<Self> {
        let rest = key.strip_prefix(LEVEL_PREFIX)?;
        let (family, rest) = match rest.strip_prefix('R') {
            Some(rest) => (LevelFamily::Resistance, rest),
            None => (LevelFamily::Sensitive, rest),
        };

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let tier: u8 = rest[..digits_end].parse().ok()?;
        if tier == 0 {
            return None;
        }

        let mut suffix = rest[digits_end..].chars();
        let subtier = match (suffix.next(), suffix.next()) {
            (None, _) => None,
            (Some(c), None) if c.is_ascii_uppercase() => Some(c),
            _ => return None,
        };

        Some(Self {
            family,
            tier,
            subtier,
        })
    }

    /// Returns `true` if this level belongs to the given direction.
    pub fn matches(&self, direction: TxDirection) -> bool {
        self.family == direction.family()
    }

    /// Rank bucket: R1, then all sensitivity levels, then other resistance levels.
    fn bucket(&self) -> u8 {
        match (self.family, self.tier) {
            (LevelFamily::Resistance, 1) => 0,
            (LevelFamily::Sensitive, _) => 1,
            (LevelFamily::Resistance, _) => 2,
        }
    }
}

impl Ord for TxLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.bucket(), self.tier, self.subtier).cmp(&(other.bucket(), other.tier, other.subtier))
    }
}

impl PartialOrd for TxLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TxLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", LEVEL_PREFIX)?;
        if self.family == LevelFamily::Resistance {
            write!(f, "R")?;
        }
        write!(f, "{}", self.tier)?;
        if let Some(subtier) = self.subtier {
            write!(f, "{}", subtier)?;
        }
        Ok(())
    }
}

/// Find the highest-priority level with supporting records, with its key.
///
/// Levels with no records and keys that are not therapeutic levels are
/// skipped. With a direction, only levels of that family are considered.
/// The key is returned as it appears in the map; keys naming the same level
/// (`LEVEL_1`, `LEVEL_01`) are ordered by key.
pub fn highest_level_entry<T>(
    evidence: &EvidenceLevelMap<T>,
    direction: Option<TxDirection>,
) -> Option<(&str, TxLevel)> {
    evidence
        .iter()
        .filter(|(_, records)| !records.is_empty())
        .filter_map(|(key, _)| match TxLevel::parse(key) {
            Some(level) => Some((key.as_str(), level)),
            None => {
                tracing::trace!("skipping non-therapeutic level key {:?}", key);
                None
            }
        })
        .filter(|(_, level)| direction.map_or(true, |d| level.matches(d)))
        .min_by(|(a_key, a), (b_key, b)| a.cmp(b).then_with(|| a_key.cmp(b_key)))
}

/// Find the highest-priority level with supporting records.
pub fn highest_level<T>(
    evidence: &EvidenceLevelMap<T>,
    direction: Option<TxDirection>,
) -> Option<TxLevel> {
    highest_level_entry(evidence, direction).map(|(_, level)| level)
}

/// Highest-priority level name for a raw direction name.
///
/// Returns the map key of the winning level, or an empty string when no
/// level applies. Unrecognized or missing direction names consider both
/// families.
///
/// # Examples
///
/// ```
/// use ferro_annotate::level::{highest_tx_level, EvidenceLevelMap, TX_TYPE_SENSITIVE};
///
/// let mut evidence: EvidenceLevelMap<&str> = EvidenceLevelMap::new();
/// evidence.insert("LEVEL_1".to_string(), vec!["vemurafenib"]);
/// evidence.insert("LEVEL_R1".to_string(), vec!["cetuximab"]);
///
/// assert_eq!(highest_tx_level(&evidence, None), "LEVEL_R1");
/// assert_eq!(highest_tx_level(&evidence, Some(TX_TYPE_SENSITIVE)), "LEVEL_1");
/// ```
pub fn highest_tx_level<T>(evidence: &EvidenceLevelMap<T>, direction: Option<&str>) -> String {
    let direction = direction.and_then(TxDirection::from_name);
    highest_level_entry(evidence, direction)
        .map(|(key, _)| key.to_string())
        .unwrap_or_default()
}
