use super::{DistanceEntry, StationId};
use crate::model::RouletteError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// per-station shortest distances from a single source. iteration order is
/// insertion order, which downstream sampling relies on.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceTable(IndexMap<StationId, DistanceEntry>);

impl DistanceTable {
    /// helper with error handling for looking up a station. a station that
    /// was never computed is an error, never a default value.
    pub fn get(&self, station: &StationId) -> Result<&DistanceEntry, RouletteError> {
        self.0
            .get(station)
            .ok_or_else(|| RouletteError::StationNotFound(station.clone()))
    }

    /// inserts or overwrites an entry. new stations are appended.
    pub fn insert(&mut self, station: StationId, entry: DistanceEntry) {
        let _ = self.0.insert(station, entry);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StationId, &DistanceEntry)> {
        self.0.iter()
    }

    /// entries with a finite travel time, in table order
    pub fn reachable(&self) -> impl Iterator<Item = (&StationId, &DistanceEntry)> {
        self.0.iter().filter(|(_, entry)| entry.is_reachable())
    }

    pub fn stations(&self) -> impl Iterator<Item = &StationId> {
        self.0.keys()
    }
}

impl FromIterator<(StationId, DistanceEntry)> for DistanceTable {
    fn from_iter<T: IntoIterator<Item = (StationId, DistanceEntry)>>(iter: T) -> Self {
        DistanceTable(iter.into_iter().collect())
    }
}
