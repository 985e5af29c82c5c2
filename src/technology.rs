//! Radio access technologies
use crate::ParsingError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Radio access technology selector, as offered to the user
/// when narrowing a survey view.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Technology {
    /// Any technology: no filtering
    #[default]
    All,
    /// 4G Long Term Evolution
    LTE,
    /// 5G, as reported by some survey tools
    FiveG,
    /// 5G New Radio
    NR,
    /// 3G Wideband CDMA
    WCDMA,
    /// 2G Global System for Mobile communications
    GSM,
    /// 3G Universal Mobile Telecommunications System
    UMTS,
}

impl Technology {
    /// All selectable values, "ALL" first
    pub const ALL_CHOICES: [Technology; 7] = [
        Self::All,
        Self::LTE,
        Self::FiveG,
        Self::NR,
        Self::WCDMA,
        Self::GSM,
        Self::UMTS,
    ];
    /// Label, as found in the survey "Type" column
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::LTE => "LTE",
            Self::FiveG => "5G",
            Self::NR => "NR",
            Self::WCDMA => "WCDMA",
            Self::GSM => "GSM",
            Self::UMTS => "UMTS",
        }
    }
    /// Returns true if given "Type" field passes this selector.
    /// Comparison is ASCII case insensitive.
    pub fn matches(&self, kind: &str) -> bool {
        match self {
            Self::All => true,
            tech => kind.eq_ignore_ascii_case(tech.label()),
        }
    }
}

impl std::fmt::Display for Technology {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Technology {
    type Err = ParsingError;
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let s = string.trim();
        Self::ALL_CHOICES
            .into_iter()
            .find(|tech| tech.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParsingError::UnknownTechnology(string.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    #[test]
    fn from_str() {
        for (desc, expected) in [
            ("ALL", Technology::All),
            ("all", Technology::All),
            ("LTE", Technology::LTE),
            ("lte", Technology::LTE),
            (" Lte ", Technology::LTE),
            ("5G", Technology::FiveG),
            ("5g", Technology::FiveG),
            ("NR", Technology::NR),
            ("nr", Technology::NR),
            ("WCDMA", Technology::WCDMA),
            ("GSM", Technology::GSM),
            ("UMTS", Technology::UMTS),
        ] {
            assert_eq!(
                Technology::from_str(desc),
                Ok(expected),
                "failed to parse technology from \"{}\"",
                desc
            );
        }
        for desc in ["", "4G", "CDMA", "LTE-A", "unknown"] {
            assert_eq!(
                Technology::from_str(desc),
                Err(ParsingError::UnknownTechnology(desc.to_string()))
            );
        }
    }
    #[test]
    fn display() {
        for tech in Technology::ALL_CHOICES {
            assert_eq!(Technology::from_str(&tech.to_string()), Ok(tech));
        }
        assert_eq!(Technology::FiveG.to_string(), "5G");
        assert_eq!(Technology::default(), Technology::All);
    }
    #[test]
    fn matches() {
        assert!(Technology::All.matches(""));
        assert!(Technology::All.matches("whatever"));
        assert!(Technology::LTE.matches("LTE"));
        assert!(Technology::LTE.matches("lte"));
        assert!(Technology::LTE.matches("Lte"));
        assert!(!Technology::LTE.matches("LTE "));
        assert!(!Technology::LTE.matches("5G"));
        assert!(Technology::FiveG.matches("5g"));
        assert!(!Technology::NR.matches("5G"));
        assert!(!Technology::GSM.matches(""));
    }
}
