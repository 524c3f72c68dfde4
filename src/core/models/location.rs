//! Match locations
//!
//! Where in a pull request a term may be searched.

use serde::{Deserialize, Serialize};

/// A place in a pull request that can carry a work-in-progress marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// The pull request title
    Title,
    /// Any label name attached to the pull request
    Label,
    /// The subject (first line) of any commit in the pull request
    Commit,
}

impl Location {
    /// All locations, in probe order
    pub const ALL: [Self; 3] = [Self::Title, Self::Label, Self::Commit];

    /// Configuration keyword for this location
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Label => "label",
            Self::Commit => "commit",
        }
    }

    /// Human label used in rendered check output ("commit subject" for commits)
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Label => "label",
            Self::Commit => "commit subject",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "label" => Ok(Self::Label),
            "commit" => Ok(Self::Commit),
            _ => Err(format!("Invalid location: {s}. Use: title, label, commit")),
        }
    }
}
