//! Amino acid code table
//!
//! The 20 standard amino acids with their IUPAC 3-letter and 1-letter codes.
//! Lookups by 3-letter code are ASCII case-insensitive, so `Tyr`, `tyr`,
//! and `TYR` all resolve to [`AminoAcid::Tyr`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard amino acid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AminoAcid {
    Ala, // A
    Arg, // R
    Asn, // N
    Asp, // D
    Cys, // C
    Gln, // Q
    Glu, // E
    Gly, // G
    His, // H
    Ile, // I
    Leu, // L
    Lys, // K
    Met, // M
    Phe, // F
    Pro, // P
    Ser, // S
    Thr, // T
    Trp, // W
    Tyr, // Y
    Val, // V
}

impl AminoAcid {
    /// All standard amino acids in alphabetical order of their 3-letter code
    pub const ALL: [AminoAcid; 20] = [
        Self::Ala,
        Self::Arg,
        Self::Asn,
        Self::Asp,
        Self::Cys,
        Self::Gln,
        Self::Glu,
        Self::Gly,
        Self::His,
        Self::Ile,
        Self::Leu,
        Self::Lys,
        Self::Met,
        Self::Phe,
        Self::Pro,
        Self::Ser,
        Self::Thr,
        Self::Trp,
        Self::Tyr,
        Self::Val,
    ];

    /// Parse from 3-letter code, ignoring ASCII case
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_annotate::amino_acid::AminoAcid;
    ///
    /// assert_eq!(AminoAcid::from_three_letter("Tyr"), Some(AminoAcid::Tyr));
    /// assert_eq!(AminoAcid::from_three_letter("tYR"), Some(AminoAcid::Tyr));
    /// assert_eq!(AminoAcid::from_three_letter("Hot"), None);
    /// ```
    pub fn from_three_letter(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 3 {
            return None;
        }
        let folded = [
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_lowercase(),
            bytes[2].to_ascii_lowercase(),
        ];
        match &folded {
            b"Ala" => Some(Self::Ala),
            b"Arg" => Some(Self::Arg),
            b"Asn" => Some(Self::Asn),
            b"Asp" => Some(Self::Asp),
            b"Cys" => Some(Self::Cys),
            b"Gln" => Some(Self::Gln),
            b"Glu" => Some(Self::Glu),
            b"Gly" => Some(Self::Gly),
            b"His" => Some(Self::His),
            b"Ile" => Some(Self::Ile),
            b"Leu" => Some(Self::Leu),
            b"Lys" => Some(Self::Lys),
            b"Met" => Some(Self::Met),
            b"Phe" => Some(Self::Phe),
            b"Pro" => Some(Self::Pro),
            b"Ser" => Some(Self::Ser),
            b"Thr" => Some(Self::Thr),
            b"Trp" => Some(Self::Trp),
            b"Tyr" => Some(Self::Tyr),
            b"Val" => Some(Self::Val),
            _ => None,
        }
    }

    /// Get 3-letter code
    pub fn to_three_letter(&self) -> &'static str {
        match self {
            Self::Ala => "Ala",
            Self::Arg => "Arg",
            Self::Asn => "Asn",
            Self::Asp => "Asp",
            Self::Cys => "Cys",
            Self::Gln => "Gln",
            Self::Glu => "Glu",
            Self::Gly => "Gly",
            Self::His => "His",
            Self::Ile => "Ile",
            Self::Leu => "Leu",
            Self::Lys => "Lys",
            Self::Met => "Met",
            Self::Phe => "Phe",
            Self::Pro => "Pro",
            Self::Ser => "Ser",
            Self::Thr => "Thr",
            Self::Trp => "Trp",
            Self::Tyr => "Tyr",
            Self::Val => "Val",
        }
    }

    /// Get 1-letter code
    pub fn to_one_letter(&self) -> char {
        match self {
            Self::Ala => 'A',
            Self::Arg => 'R',
            Self::Asn => 'N',
            Self::Asp => 'D',
            Self::Cys => 'C',
            Self::Gln => 'Q',
            Self::Glu => 'E',
            Self::Gly => 'G',
            Self::His => 'H',
            Self::Ile => 'I',
            Self::Leu => 'L',
            Self::Lys => 'K',
            Self::Met => 'M',
            Self::Phe => 'F',
            Self::Pro => 'P',
            Self::Ser => 'S',
            Self::Thr => 'T',
            Self::Trp => 'W',
            Self::Tyr => 'Y',
            Self::Val => 'V',
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_three_letter())
    }
}
