//! The five record collections of the catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A named collection (one table in the record store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Turtles,
    Villains,
    Episodes,
    Quotes,
    Weapons,
}

impl Collection {
    /// Every collection, in the order the store is cleared and seeded.
    pub const ALL: [Collection; 5] = [
        Collection::Turtles,
        Collection::Villains,
        Collection::Episodes,
        Collection::Quotes,
        Collection::Weapons,
    ];

    /// Table name in the record store. Also the URL segment.
    pub fn table(self) -> &'static str {
        match self {
            Collection::Turtles => "turtles",
            Collection::Villains => "villains",
            Collection::Episodes => "episodes",
            Collection::Quotes => "quotes",
            Collection::Weapons => "weapons",
        }
    }

    /// Singular entity name used in error messages.
    pub fn entity(self) -> &'static str {
        match self {
            Collection::Turtles => "Turtle",
            Collection::Villains => "Villain",
            Collection::Episodes => "Episode",
            Collection::Quotes => "Quote",
            Collection::Weapons => "Weapon",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.table())
    }
}

impl FromStr for Collection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.table() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown collection '{s}'. Must be one of: {}",
                    Collection::ALL.map(Collection::table).join(", ")
                ))
            })
    }
}
