use std::fmt;

use ecocast_core::models::Stage;
use serde::{Deserialize, Serialize};

/// Progress of one cascade run. Strictly linear: no branches, no retries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CascadeState {
    #[default]
    Stage1Pending,
    Stage2Pending,
    Stage3Pending,
    Complete,
}

impl CascadeState {
    /// The stage this state is waiting on, or `None` once complete.
    pub fn stage(self) -> Option<Stage> {
        match self {
            Self::Stage1Pending => Some(Stage::Energy),
            Self::Stage2Pending => Some(Stage::Water),
            Self::Stage3Pending => Some(Stage::Co2),
            Self::Complete => None,
        }
    }

    /// `Complete` is terminal and maps to itself.
    pub fn next(self) -> Self {
        match self {
            Self::Stage1Pending => Self::Stage2Pending,
            Self::Stage2Pending => Self::Stage3Pending,
            Self::Stage3Pending | Self::Complete => Self::Complete,
        }
    }

    pub fn is_complete(self) -> bool {
        self == Self::Complete
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stage1Pending => "stage1_pending",
            Self::Stage2Pending => "stage2_pending",
            Self::Stage3Pending => "stage3_pending",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for CascadeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_stages_in_order() {
        let mut state = CascadeState::default();
        let mut seen = Vec::new();
        while let Some(stage) = state.stage() {
            seen.push(stage);
            state = state.next();
        }
        assert_eq!(seen, Stage::ALL);
        assert!(state.is_complete());
    }

    #[test]
    fn complete_is_terminal() {
        assert_eq!(CascadeState::Complete.next(), CascadeState::Complete);
    }
}
