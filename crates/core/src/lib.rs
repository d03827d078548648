//! Domain building blocks for the TMNT catalog.
//!
//! Zero internal dependencies: shared by the repository layer, the HTTP API
//! and the seed tool.

pub mod collection;
pub mod error;
pub mod pagination;
pub mod random;
pub mod search;
pub mod types;
pub mod validation;
