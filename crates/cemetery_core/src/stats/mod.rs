//! Catalog statistics.
//!
//! Pure single-pass reductions; `total == active + inactive` always holds.

use crate::model::person::Person;
use crate::model::space::BurialSpace;
use serde::Serialize;

/// Burial-space counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SpaceStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

/// Burial-space counters plus registered people.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SystemStats {
    pub spaces: SpaceStats,
    pub users: usize,
}

pub fn compute_stats(records: &[BurialSpace]) -> SpaceStats {
    records.iter().fold(SpaceStats::default(), |mut acc, record| {
        acc.total += 1;
        if record.active {
            acc.active += 1;
        } else {
            acc.inactive += 1;
        }
        acc
    })
}

pub fn compute_system_stats(records: &[BurialSpace], people: &[Person]) -> SystemStats {
    SystemStats {
        spaces: compute_stats(records),
        users: people.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::compute_stats;

    #[test]
    fn empty_collection_has_zero_counts() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.active + stats.inactive, stats.total);
    }
}
