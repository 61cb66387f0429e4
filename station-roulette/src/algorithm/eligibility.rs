use crate::model::network::{DistanceTable, StationId};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// rule applied to the stations currently occupied by teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionPolicy {
    /// keep a station when at least one occupied station differs from it.
    /// with two or more distinct occupied stations this keeps everything;
    /// with none it keeps nothing.
    #[default]
    AnyDiffers,
    /// keep a station only when no team occupies it.
    NotOccupied,
}

impl std::fmt::Display for ExclusionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExclusionPolicy::AnyDiffers => write!(f, "any differs"),
            ExclusionPolicy::NotOccupied => write!(f, "not occupied"),
        }
    }
}

impl ExclusionPolicy {
    pub fn keep(&self, station: &StationId, occupied: &[StationId]) -> bool {
        match self {
            ExclusionPolicy::AnyDiffers => occupied.iter().any(|o| o != station),
            ExclusionPolicy::NotOccupied => !occupied.contains(station),
        }
    }
}

/// restricts a distance table to the stations a team may be sent to: at
/// least `min_minutes` away and passing the exclusion rule. table order is
/// preserved.
pub fn eligible_distances(
    distances: &DistanceTable,
    min_minutes: f64,
    occupied: &[StationId],
    policy: ExclusionPolicy,
) -> DistanceTable {
    let eligible: DistanceTable = distances
        .iter()
        .filter(|(_, entry)| entry.time_minutes >= min_minutes)
        .filter(|(station, _)| policy.keep(station, occupied))
        .map(|(station, entry)| (station.clone(), *entry))
        .collect();
    log::debug!(
        "{} of {} stations eligible with min_minutes={} and '{}' exclusion over {} occupied stations",
        eligible.len(),
        distances.len(),
        min_minutes,
        policy,
        occupied.len()
    );
    eligible
}

#[cfg(test)]
mod tests {
    use super::{eligible_distances, ExclusionPolicy};
    use crate::model::network::{DistanceEntry, DistanceTable, StationId};

    fn sid(s: &str) -> StationId {
        StationId::from(s)
    }

    fn abc_table() -> DistanceTable {
        DistanceTable::from_iter([
            (sid("A"), DistanceEntry::origin()),
            (sid("B"), DistanceEntry::new(5.0, 1)),
            (sid("C"), DistanceEntry::new(15.0, 2)),
        ])
    }

    fn names(table: &DistanceTable) -> Vec<&str> {
        table.stations().map(|s| s.as_str()).collect()
    }

    #[test]
    fn test_threshold() {
        let out = eligible_distances(
            &abc_table(),
            10.0,
            &[sid("A"), sid("Z")],
            ExclusionPolicy::AnyDiffers,
        );
        assert_eq!(names(&out), vec!["C"]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let out = eligible_distances(
            &abc_table(),
            5.0,
            &[sid("A"), sid("Z")],
            ExclusionPolicy::AnyDiffers,
        );
        assert_eq!(names(&out), vec!["B", "C"]);
    }

    #[test]
    fn test_unreachable_passes_threshold() {
        let mut table = abc_table();
        table.insert(sid("X"), DistanceEntry::unreached());
        let out = eligible_distances(
            &table,
            10.0,
            &[sid("A"), sid("Z")],
            ExclusionPolicy::AnyDiffers,
        );
        assert_eq!(names(&out), vec!["C", "X"]);
    }

    #[test]
    fn test_any_differs_single_occupied() {
        let out = eligible_distances(&abc_table(), 0.0, &[sid("B")], ExclusionPolicy::AnyDiffers);
        assert_eq!(names(&out), vec!["A", "C"]);
    }

    #[test]
    fn test_any_differs_many_occupied_keeps_all() {
        let out = eligible_distances(
            &abc_table(),
            0.0,
            &[sid("B"), sid("C")],
            ExclusionPolicy::AnyDiffers,
        );
        assert_eq!(names(&out), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_any_differs_no_occupied_keeps_nothing() {
        let out = eligible_distances(&abc_table(), 0.0, &[], ExclusionPolicy::AnyDiffers);
        assert!(out.is_empty());
    }

    #[test]
    fn test_not_occupied() {
        let out = eligible_distances(
            &abc_table(),
            0.0,
            &[sid("B"), sid("C")],
            ExclusionPolicy::NotOccupied,
        );
        assert_eq!(names(&out), vec!["A"]);
        let out = eligible_distances(&abc_table(), 0.0, &[], ExclusionPolicy::NotOccupied);
        assert_eq!(names(&out), vec!["A", "B", "C"]);
    }
}
