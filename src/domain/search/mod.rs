// SPDX-License-Identifier: MPL-2.0
//! Search criteria for the person-identifier search bar.
//!
//! Only the criteria themselves are modeled. No matching is performed:
//! how an identifier relates to dataset file names is not defined, so the
//! viewer reports the criteria back instead of guessing.

use std::fmt;

/// Viewing direction of the pedestrian in a crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    All,
    Front,
    Back,
    Left,
    Right,
}

impl Orientation {
    /// All orientations in pick-list order.
    pub const ALL: [Orientation; 5] = [
        Orientation::All,
        Orientation::Front,
        Orientation::Back,
        Orientation::Left,
        Orientation::Right,
    ];

    /// Returns the i18n message key for this orientation.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Orientation::All => "search-orientation-all",
            Orientation::Front => "search-orientation-front",
            Orientation::Back => "search-orientation-back",
            Orientation::Left => "search-orientation-left",
            Orientation::Right => "search-orientation-right",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::All => "all",
            Orientation::Front => "front",
            Orientation::Back => "back",
            Orientation::Left => "left",
            Orientation::Right => "right",
        };
        f.write_str(name)
    }
}

/// Criteria entered in the search bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    /// Person identifier as typed, surrounding whitespace removed.
    pub person_id: String,
    pub orientation: Orientation,
}

impl SearchQuery {
    #[must_use]
    pub fn new(person_id: &str, orientation: Orientation) -> Self {
        Self {
            person_id: person_id.trim().to_string(),
            orientation,
        }
    }
}
