//! Random or seeded selection of a single record.

use rand::Rng;

use crate::error::CoreError;

/// Pick an index into a collection of `len` records.
///
/// With a seed the index is `seed mod len`, so equal seeds (and seeds that
/// differ by a multiple of `len`) always select the same record. Without a
/// seed the index is drawn uniformly at random.
pub fn pick_index(entity: &'static str, len: usize, seed: Option<i64>) -> Result<usize, CoreError> {
    if len == 0 {
        return Err(CoreError::EmptyCollection { entity });
    }

    match seed {
        Some(s) if s < 0 => Err(CoreError::Validation(format!(
            "seed must not be negative, got {s}"
        ))),
        Some(s) => Ok((s as u64 % len as u64) as usize),
        None => Ok(rand::rng().random_range(0..len)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_an_error() {
        let err = pick_index("Quote", 0, Some(1)).unwrap_err();
        assert!(matches!(err, CoreError::EmptyCollection { entity: "Quote" }));
    }

    #[test]
    fn seed_zero_selects_first() {
        assert_eq!(pick_index("Quote", 8, Some(0)).unwrap(), 0);
    }

    #[test]
    fn seed_wraps_around() {
        for len in 1..10usize {
            let first = pick_index("Quote", len, Some(0)).unwrap();
            let wrapped = pick_index("Quote", len, Some(len as i64)).unwrap();
            assert_eq!(first, wrapped);
        }
        assert_eq!(pick_index("Quote", 8, Some(11)).unwrap(), 3);
    }

    #[test]
    fn negative_seed_rejected() {
        assert!(matches!(
            pick_index("Quote", 3, Some(-1)),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn unseeded_pick_stays_in_bounds() {
        for _ in 0..100 {
            assert!(pick_index("Quote", 5, None).unwrap() < 5);
        }
    }
}
