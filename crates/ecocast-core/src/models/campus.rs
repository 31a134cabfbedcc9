use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::errors::ConfigurationError;

/// One of the four university campuses (sedes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Campus {
    Chiquinquira,
    Tunja,
    Duitama,
    Sogamoso,
}

impl Campus {
    pub const ALL: [Campus; 4] = [
        Campus::Chiquinquira,
        Campus::Tunja,
        Campus::Duitama,
        Campus::Sogamoso,
    ];

    /// Resolve a numeric campus id (1-4).
    pub fn from_id(id: u8) -> Result<Self, ConfigurationError> {
        match id {
            1 => Ok(Self::Chiquinquira),
            2 => Ok(Self::Tunja),
            3 => Ok(Self::Duitama),
            4 => Ok(Self::Sogamoso),
            _ => Err(ConfigurationError::UnknownCampus { id }),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Self::Chiquinquira => 1,
            Self::Tunja => 2,
            Self::Duitama => 3,
            Self::Sogamoso => 4,
        }
    }

    /// Display name, as shown on the dashboard.
    pub fn name(self) -> &'static str {
        match self {
            Self::Chiquinquira => "Chiquinquirá",
            Self::Tunja => "Tunja",
            Self::Duitama => "Duitama",
            Self::Sogamoso => "Sogamoso",
        }
    }
}

impl fmt::Display for Campus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
