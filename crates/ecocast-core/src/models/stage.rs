use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// One step of the cascade, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Stage {
    Energy,
    Water,
    Co2,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Energy, Stage::Water, Stage::Co2];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Energy => "kWh",
            Self::Water => "liters",
            Self::Co2 => "kg",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::Water => "water",
            Self::Co2 => "co2",
        }
    }

    /// Stages whose predictions this stage consumes as features.
    pub fn upstream(self) -> &'static [Stage] {
        match self {
            Self::Energy => &[],
            Self::Water => &[Stage::Energy],
            Self::Co2 => &[Stage::Energy, Stage::Water],
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
