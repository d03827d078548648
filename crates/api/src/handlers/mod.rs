pub mod episode;
pub mod quote;
pub mod records;
pub mod search;
pub mod turtle;
pub mod villain;
pub mod weapon;
