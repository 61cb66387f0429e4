use super::{Edge, StationId};
use crate::model::RouletteError;
use itertools::Itertools;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct StationRow {
    station: StationId,
}

/// reads a CSV edge list with header `from,to,minutes`.
pub fn read_edges_csv<P: AsRef<Path>>(filepath: P) -> Result<Vec<Edge>, RouletteError> {
    let path = filepath.as_ref();
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let edges = reader
        .into_deserialize::<Edge>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| csv_error(path, e))?;
    log::info!("read {} edges from {}", edges.len(), path.display());
    Ok(edges)
}

/// reads a CSV station list with header `station`.
pub fn read_stations_csv<P: AsRef<Path>>(filepath: P) -> Result<Vec<StationId>, RouletteError> {
    let path = filepath.as_ref();
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let stations = reader
        .into_deserialize::<StationRow>()
        .map(|row| row.map(|r| r.station))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| csv_error(path, e))?;
    log::info!("read {} stations from {}", stations.len(), path.display());
    Ok(stations)
}

/// distinct stations mentioned by any edge, as source or destination,
/// in order of first appearance.
pub fn stations_from_edges(edges: &[Edge]) -> Vec<StationId> {
    edges
        .iter()
        .flat_map(|edge| [&edge.from, &edge.to])
        .unique()
        .cloned()
        .collect()
}

fn csv_error(path: &Path, source: csv::Error) -> RouletteError {
    RouletteError::CsvReadError {
        filepath: path.display().to_string(),
        source,
    }
}
