//! Cross-collection result types (search, reset).

use serde::Serialize;
use tmnt_core::collection::Collection;
use tmnt_core::pagination::Page;

use crate::models::episode::Episode;
use crate::models::quote::Quote;
use crate::models::turtle::Turtle;
use crate::models::villain::Villain;

/// Search matches grouped by collection. Weapons are not searched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    pub turtles: Vec<Turtle>,
    pub villains: Vec<Villain>,
    pub episodes: Vec<Episode>,
    pub quotes: Vec<Quote>,
}

impl SearchResults {
    /// Window every group by the same `page`.
    pub fn paged(self, page: Page) -> Self {
        Self {
            turtles: page.apply(self.turtles),
            villains: page.apply(self.villains),
            episodes: page.apply(self.episodes),
            quotes: page.apply(self.quotes),
        }
    }
}

/// Number of rows affected in one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionCount {
    pub collection: Collection,
    pub count: u64,
}

/// Outcome of clearing every collection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClearReport {
    pub deleted: Vec<CollectionCount>,
}

impl ClearReport {
    pub fn total(&self) -> u64 {
        self.deleted.iter().map(|c| c.count).sum()
    }
}
