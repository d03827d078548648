//! Seed catalog fixture and loader.
//!
//! The catalog ships as one versioned JSON document embedded at compile
//! time. Loading is idempotent: keyed records (turtles, villains, episodes)
//! go through insert-if-absent, and unkeyed records (quotes, weapons) are
//! only loaded into an empty collection.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;
use tmnt_core::collection::Collection;
use tmnt_core::error::CoreError;

use crate::models::episode::CreateEpisode;
use crate::models::quote::CreateQuote;
use crate::models::turtle::CreateTurtle;
use crate::models::villain::CreateVillain;
use crate::models::weapon::CreateWeapon;
use crate::repositories::{
    CatalogRepo, EpisodeRepo, QuoteRepo, TurtleRepo, VillainRepo, WeaponRepo,
};

/// Fixture format version understood by [`load`].
pub const FIXTURE_VERSION: u32 = 1;

/// The bundled seed catalog.
pub const FIXTURE_V1: &str = include_str!("../fixtures/catalog.v1.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Unsupported fixture version: expected {expected}, found {found}")]
    UnsupportedVersion { expected: u32, found: u32 },
    #[error("Invalid fixture JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid {collection} record at index {index}: {source}")]
    Validation {
        collection: Collection,
        index: usize,
        source: CoreError,
    },
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Every record of the seed catalog, in load order.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFixture {
    pub version: u32,
    #[serde(default)]
    pub turtles: Vec<CreateTurtle>,
    #[serde(default)]
    pub villains: Vec<CreateVillain>,
    #[serde(default)]
    pub episodes: Vec<CreateEpisode>,
    #[serde(default)]
    pub quotes: Vec<CreateQuote>,
    #[serde(default)]
    pub weapons: Vec<CreateWeapon>,
}

impl CatalogFixture {
    /// Parse a fixture document and check its version.
    pub fn parse(json: &str) -> Result<Self, SeedError> {
        let fixture: Self = serde_json::from_str(json)?;
        if fixture.version != FIXTURE_VERSION {
            return Err(SeedError::UnsupportedVersion {
                expected: FIXTURE_VERSION,
                found: fixture.version,
            });
        }
        Ok(fixture)
    }

    /// The fixture compiled into this crate.
    pub fn bundled() -> Result<Self, SeedError> {
        Self::parse(FIXTURE_V1)
    }
}

/// Inserted and skipped record counts for one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedCount {
    pub collection: Collection,
    pub inserted: usize,
    pub skipped: usize,
}

/// Outcome of one [`load`] call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeedReport {
    pub collections: Vec<SeedCount>,
}

impl SeedReport {
    pub fn inserted(&self) -> usize {
        self.collections.iter().map(|c| c.inserted).sum()
    }

    pub fn skipped(&self) -> usize {
        self.collections.iter().map(|c| c.skipped).sum()
    }

    /// Counts for one collection, if it was part of the load.
    pub fn get(&self, collection: Collection) -> Option<SeedCount> {
        self.collections
            .iter()
            .copied()
            .find(|c| c.collection == collection)
    }

    fn record(&mut self, collection: Collection, inserted: usize, total: usize) {
        self.collections.push(SeedCount {
            collection,
            inserted,
            skipped: total - inserted,
        });
    }
}

fn validate_all<T: Clone>(
    collection: Collection,
    records: &[T],
    validate: impl Fn(T) -> Result<T, CoreError>,
) -> Result<Vec<T>, SeedError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            validate(record.clone()).map_err(|source| SeedError::Validation {
                collection,
                index,
                source,
            })
        })
        .collect()
}

impl CatalogFixture {
    /// Validate and normalize every record, stopping at the first invalid one.
    pub fn validated(&self) -> Result<Self, SeedError> {
        Ok(Self {
            version: self.version,
            turtles: validate_all(Collection::Turtles, &self.turtles, CreateTurtle::validated)?,
            villains: validate_all(Collection::Villains, &self.villains, CreateVillain::validated)?,
            episodes: validate_all(Collection::Episodes, &self.episodes, CreateEpisode::validated)?,
            quotes: validate_all(Collection::Quotes, &self.quotes, CreateQuote::validated)?,
            weapons: validate_all(Collection::Weapons, &self.weapons, CreateWeapon::validated)?,
        })
    }
}

/// Load `fixture` into the store.
///
/// The whole fixture is validated before anything is written, so an invalid
/// record leaves the store untouched. Records that already exist are counted
/// as skipped and left as they are.
pub async fn load(pool: &SqlitePool, fixture: &CatalogFixture) -> Result<SeedReport, SeedError> {
    let fixture = fixture.validated()?;
    let mut report = SeedReport::default();

    let mut inserted = 0;
    for turtle in &fixture.turtles {
        if TurtleRepo::create(pool, turtle).await?.is_some() {
            inserted += 1;
        }
    }
    report.record(Collection::Turtles, inserted, fixture.turtles.len());

    let mut inserted = 0;
    for villain in &fixture.villains {
        if VillainRepo::create(pool, villain).await?.is_some() {
            inserted += 1;
        }
    }
    report.record(Collection::Villains, inserted, fixture.villains.len());

    let mut inserted = 0;
    for episode in &fixture.episodes {
        if EpisodeRepo::create(pool, episode).await?.is_some() {
            inserted += 1;
        }
    }
    report.record(Collection::Episodes, inserted, fixture.episodes.len());

    let mut inserted = 0;
    if CatalogRepo::count(pool, Collection::Quotes).await? == 0 {
        for quote in &fixture.quotes {
            QuoteRepo::create(pool, quote).await?;
            inserted += 1;
        }
    }
    report.record(Collection::Quotes, inserted, fixture.quotes.len());

    let mut inserted = 0;
    if CatalogRepo::count(pool, Collection::Weapons).await? == 0 {
        for weapon in &fixture.weapons {
            WeaponRepo::create(pool, weapon).await?;
            inserted += 1;
        }
    }
    report.record(Collection::Weapons, inserted, fixture.weapons.len());

    tracing::info!(
        inserted = report.inserted(),
        skipped = report.skipped(),
        "Seed fixture loaded"
    );
    Ok(report)
}
