use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The saved object types kibtools moves around
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Search,
    Visualization,
    Dashboard,
}

impl ObjectKind {
    /// Every kind, in dependency order: searches feed visualizations, which
    /// feed dashboards
    pub const ALL: [ObjectKind; 3] = [Self::Search, Self::Visualization, Self::Dashboard];

    /// Name used as the document type in URLs and as the directory name on disk
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Visualization => "visualization",
            Self::Dashboard => "dashboard",
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "search" => Ok(Self::Search),
            "visualization" => Ok(Self::Visualization),
            "dashboard" => Ok(Self::Dashboard),
            other => Err(format!("unknown saved object kind '{}'", other)),
        }
    }
}
