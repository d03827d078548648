//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. Rows are always returned in
//! insertion order (`ORDER BY id`).

pub mod catalog_repo;
pub mod episode_repo;
pub mod quote_repo;
pub mod turtle_repo;
pub mod villain_repo;
pub mod weapon_repo;

pub use catalog_repo::CatalogRepo;
pub use episode_repo::EpisodeRepo;
pub use quote_repo::QuoteRepo;
pub use turtle_repo::TurtleRepo;
pub use villain_repo::VillainRepo;
pub use weapon_repo::WeaponRepo;

/// SQL expression producing the current UTC time as RFC 3339 text.
pub(crate) const NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";
