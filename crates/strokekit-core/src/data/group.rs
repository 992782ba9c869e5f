//! Classification groups used to route a drawing to a provider

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Routing bucket produced by the drawing classifier
///
/// Each group is bound at startup to exactly one provider and an ordered
/// model list, and that binding never changes for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DrawingGroup {
    /// Tuned for acceptances
    #[serde(rename = "A", alias = "a")]
    A,
    /// Tuned for rejections
    #[serde(rename = "B", alias = "b")]
    B,
    /// Stable on both acceptances and rejections
    #[serde(rename = "BOTH", alias = "both")]
    Both,
}

impl DrawingGroup {
    /// All groups in routing-table order
    pub const ALL: [DrawingGroup; 3] = [DrawingGroup::A, DrawingGroup::B, DrawingGroup::Both];

    /// Short label used in logs and configuration
    pub fn label(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::Both => "BOTH",
        }
    }
}

impl fmt::Display for DrawingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DrawingGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" | "GROUP_A" => Ok(Self::A),
            "B" | "GROUP_B" => Ok(Self::B),
            "BOTH" | "GROUP_BOTH" => Ok(Self::Both),
            other => Err(format!("Unknown drawing group: {}", other)),
        }
    }
}
