/// Per-step progress marker
use crate::error::LearnTubeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Progress of a single roadmap step
///
/// Any state may move to any other state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Progress {
    /// Not started yet
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    /// Being watched
    #[serde(rename = "In Progress")]
    InProgress,
    /// Watched to the end
    #[serde(rename = "Completed")]
    Completed,
}

impl Progress {
    /// All accepted states, in display order
    pub const ALL: [Progress; 3] = [Progress::ToDo, Progress::InProgress, Progress::Completed];

    /// Wire/display literal
    pub fn as_str(&self) -> &'static str {
        match self {
            Progress::ToDo => "To Do",
            Progress::InProgress => "In Progress",
            Progress::Completed => "Completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Progress::Completed)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Progress {
    type Err = LearnTubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Progress::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                LearnTubeError::InvalidState(format!(
                    "'{}' (expected one of: To Do, In Progress, Completed)",
                    s
                ))
            })
    }
}
