//! Section model
//!
//! A section bundles a list of terms with the locations they apply to:
//! "look for these words in these places".

use serde::{Deserialize, Serialize};

use super::Location;

/// Terms used when a configuration omits them
pub const DEFAULT_TERMS: [&str; 7] = [
    "wip",
    "work in progress",
    "work-in-progress",
    "do not merge",
    "do-not-merge",
    "rfc",
    "🚧",
];

/// Locations used when a configuration omits them
pub const DEFAULT_LOCATIONS: [Location; 2] = [Location::Title, Location::Label];

/// One resolved matching rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Terms to look for, in declaration order
    pub terms: Vec<String>,
    /// Locations to search, without duplicates
    pub locations: Vec<Location>,
}

impl Section {
    /// Create a section, dropping duplicate locations while keeping their order
    #[must_use]
    pub fn new(terms: Vec<String>, locations: Vec<Location>) -> Self {
        let mut unique = Vec::with_capacity(locations.len());
        for location in locations {
            if !unique.contains(&location) {
                unique.push(location);
            }
        }
        Self {
            terms,
            locations: unique,
        }
    }

    /// Default terms as owned strings
    #[must_use]
    pub fn default_terms() -> Vec<String> {
        DEFAULT_TERMS.iter().map(ToString::to_string).collect()
    }

    /// Default locations
    #[must_use]
    pub fn default_locations() -> Vec<Location> {
        DEFAULT_LOCATIONS.to_vec()
    }

    /// Whether this section searches the given location
    #[must_use]
    pub fn covers(&self, location: Location) -> bool {
        self.locations.contains(&location)
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new(Self::default_terms(), Self::default_locations())
    }
}

/// The outcome of configuration resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    /// Sections in priority order (never empty)
    pub sections: Vec<Section>,
    /// Whether the sections came from a user-supplied configuration
    pub used_custom_config: bool,
}

impl ResolvedConfig {
    /// The built-in configuration: a single default section
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            sections: vec![Section::default()],
            used_custom_config: false,
        }
    }

    /// Whether any section searches commit subjects
    #[must_use]
    pub fn needs_commits(&self) -> bool {
        self.sections.iter().any(|s| s.covers(Location::Commit))
    }
}
