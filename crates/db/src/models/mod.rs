//! Row models and request DTOs, one module per collection.

pub mod catalog;
pub mod episode;
pub mod quote;
pub mod turtle;
pub mod villain;
pub mod weapon;
