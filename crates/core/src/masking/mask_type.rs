use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How the backend obscures the matched face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaskType {
    #[default]
    Black,
    Bear,
    Tiger,
    Koala,
    Blur,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mask type '{0}' (expected one of: black, bear, tiger, koala, blur)")]
pub struct UnknownMaskType(pub String);

impl MaskType {
    pub const ALL: &[MaskType] = &[
        MaskType::Black,
        MaskType::Bear,
        MaskType::Tiger,
        MaskType::Koala,
        MaskType::Blur,
    ];

    /// Value sent in the `mask_type` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            MaskType::Black => "black",
            MaskType::Bear => "bear",
            MaskType::Tiger => "tiger",
            MaskType::Koala => "koala",
            MaskType::Blur => "blur",
        }
    }
}

impl fmt::Display for MaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskType::Black => write!(f, "Black box"),
            MaskType::Bear => write!(f, "Bear emoji"),
            MaskType::Tiger => write!(f, "Tiger emoji"),
            MaskType::Koala => write!(f, "Koala emoji"),
            MaskType::Blur => write!(f, "Blur"),
        }
    }
}

impl FromStr for MaskType {
    type Err = UnknownMaskType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        MaskType::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| UnknownMaskType(s.to_string()))
    }
}
