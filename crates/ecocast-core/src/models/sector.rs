use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::ConfigurationError;

/// Facility type within a campus.
///
/// Variants are declared in label-encoding order (alphabetical), so
/// [`Sector::code`] matches the encoding the models were trained with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sector {
    Auditorios,
    Comedores,
    Laboratorios,
    Oficinas,
    Salones,
}

impl Sector {
    pub const ALL: [Sector; 5] = [
        Sector::Auditorios,
        Sector::Comedores,
        Sector::Laboratorios,
        Sector::Oficinas,
        Sector::Salones,
    ];

    /// Canonical label, as it appears in requests and results.
    pub fn label(self) -> &'static str {
        match self {
            Self::Auditorios => "Auditorios",
            Self::Comedores => "Comedores",
            Self::Laboratorios => "Laboratorios",
            Self::Oficinas => "Oficinas",
            Self::Salones => "Salones",
        }
    }

    /// Label-encoded integer code (0-4).
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_cafeteria(self) -> bool {
        self == Self::Comedores
    }

    pub fn is_lab(self) -> bool {
        self == Self::Laboratorios
    }
}

impl FromStr for Sector {
    type Err = ConfigurationError;

    /// Exact label match. Anything else is a configuration error, never a fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sector| sector.label() == s)
            .ok_or_else(|| ConfigurationError::UnknownSector {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_alphabetical_order() {
        let codes: Vec<u8> = Sector::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4]);
        assert_eq!(Sector::Laboratorios.code(), 2);
    }

    #[test]
    fn parse_known_labels() {
        for sector in Sector::ALL {
            assert_eq!(sector.label().parse::<Sector>().unwrap(), sector);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("laboratorios".parse::<Sector>().is_err());
        assert!("Gimnasios".parse::<Sector>().is_err());
    }
}
